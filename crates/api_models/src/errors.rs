//! Errors raised while decoding API objects.

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures decoding a card or file object out of an API response.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// The response is not a JSON object.
    #[error("API response is not an object")]
    InvalidResponseShape,
    /// A field the object cannot exist without is absent or null.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    /// A field is present but holds a value of the wrong type or range.
    #[error("Invalid value provided for field: {field_name}")]
    InvalidFieldValue { field_name: &'static str },
}
