//!
//! Extension traits reading typed values out of a raw API response object.
//!

use std::collections::HashMap;

use error_stack::{report, ResultExt};
use serde_json::{Map, Value};

use crate::errors::{CustomResult, ParsingError};

/// Typed accessors over the fields of a response object.
///
/// Explicit `null` values are treated exactly like absent keys.
pub trait ResponseFieldsExt {
    /// String value of `key`. Absent, null and non string values yield `None`.
    fn get_optional_string(&self, key: &str) -> Option<&str>;

    /// String value of `key`, failing when it is absent, null or not a string.
    fn get_required_string(&self, key: &'static str) -> CustomResult<&str, ParsingError>;

    /// Integer value of `key`. Numeric strings such as `"12"` are accepted too.
    fn get_required_integer<T>(&self, key: &'static str) -> CustomResult<T, ParsingError>
    where
        T: TryFrom<i64>;

    /// The string entries of the nested object under `key`; other entries are skipped.
    fn get_string_map(&self, key: &str) -> HashMap<String, String>;
}

impl ResponseFieldsExt for Map<String, Value> {
    fn get_optional_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn get_required_string(&self, key: &'static str) -> CustomResult<&str, ParsingError> {
        match self.get(key) {
            None | Some(Value::Null) => Err(report!(ParsingError::MissingRequiredField {
                field_name: key
            })),
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(_) => Err(
                report!(ParsingError::InvalidFieldValue { field_name: key })
                    .attach_printable("expected a string"),
            ),
        }
    }

    fn get_required_integer<T>(&self, key: &'static str) -> CustomResult<T, ParsingError>
    where
        T: TryFrom<i64>,
    {
        let value = match self.get(key) {
            None | Some(Value::Null) => {
                return Err(report!(ParsingError::MissingRequiredField {
                    field_name: key
                }))
            }
            Some(Value::Number(number)) => number.as_i64(),
            Some(Value::String(number)) => number.trim().parse::<i64>().ok(),
            Some(_) => None,
        };

        value
            .and_then(|value| T::try_from(value).ok())
            .ok_or_else(|| report!(ParsingError::InvalidFieldValue { field_name: key }))
            .attach_printable_lazy(|| format!("expected an integer in range for `{key}`"))
    }

    fn get_string_map(&self, key: &str) -> HashMap<String, String> {
        self.get(key)
            .and_then(Value::as_object)
            .map(|nested| {
                nested
                    .iter()
                    .filter_map(|(key, value)| {
                        value.as_str().map(|value| (key.clone(), value.to_owned()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn optional_string_ignores_null_and_non_strings() {
        let fields = fields(json!({ "name": "Jane", "nothing": null, "number": 4 }));

        assert_eq!(fields.get_optional_string("name"), Some("Jane"));
        assert_eq!(fields.get_optional_string("nothing"), None);
        assert_eq!(fields.get_optional_string("number"), None);
        assert_eq!(fields.get_optional_string("absent"), None);
    }

    #[test]
    fn required_string_distinguishes_missing_from_invalid() {
        let fields = fields(json!({ "id": "card_123", "nothing": null, "number": 4 }));

        assert_eq!(fields.get_required_string("id").unwrap(), "card_123");
        assert!(matches!(
            fields.get_required_string("nothing").unwrap_err().current_context(),
            ParsingError::MissingRequiredField { field_name: "nothing" }
        ));
        assert!(matches!(
            fields.get_required_string("number").unwrap_err().current_context(),
            ParsingError::InvalidFieldValue { field_name: "number" }
        ));
    }

    #[test]
    fn required_integer_accepts_numbers_and_numeric_strings() {
        let fields = fields(json!({
            "exp_month": 12,
            "exp_year": "2030",
            "negative": -1,
            "fraction": 1.5,
            "word": "soon",
        }));

        assert_eq!(fields.get_required_integer::<u8>("exp_month").unwrap(), 12);
        assert_eq!(fields.get_required_integer::<u16>("exp_year").unwrap(), 2030);
        assert!(fields.get_required_integer::<u8>("negative").is_err());
        assert!(fields.get_required_integer::<u8>("fraction").is_err());
        assert!(fields.get_required_integer::<u8>("word").is_err());
        assert!(matches!(
            fields.get_required_integer::<u8>("absent").unwrap_err().current_context(),
            ParsingError::MissingRequiredField { field_name: "absent" }
        ));
    }

    #[test]
    fn string_map_keeps_string_entries_only() {
        let fields = fields(json!({ "metadata": { "order_id": "6735", "count": 3 } }));

        let metadata = fields.get_string_map("metadata");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("order_id").map(String::as_str), Some("6735"));
        assert!(fields.get_string_map("absent").is_empty());
    }
}
