//! Structured postal address derived from the flat address fields of an object.
use masking::Secret;

/// A postal address. Built fresh on every projection, it holds no reference
/// back to the object it was derived from.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AddressDetails {
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub city: Option<String>,
    pub state: Option<Secret<String>>,
    pub postal_code: Option<Secret<String>>,
    pub country: Option<String>,
}

impl AddressDetails {
    /// Whether none of the six fields is present.
    pub fn is_empty(&self) -> bool {
        self.line1.is_none()
            && self.line2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

/// Objects carrying flat, optional address fields.
pub trait AddressSource {
    fn address_line1(&self) -> Option<&str>;
    fn address_line2(&self) -> Option<&str>;
    fn address_city(&self) -> Option<&str>;
    fn address_state(&self) -> Option<&str>;
    fn address_zip(&self) -> Option<&str>;
    fn address_country(&self) -> Option<&str>;
}

/// Derives an [`AddressDetails`] from an [`AddressSource`].
#[derive(Clone, Copy, Debug)]
pub struct AddressProjector;

impl AddressProjector {
    /// Copies whichever address fields are present on `source`.
    ///
    /// Returns `None` when all of them are absent. An empty string still counts
    /// as present.
    pub fn project<S>(source: &S) -> Option<AddressDetails>
    where
        S: AddressSource + ?Sized,
    {
        let address = AddressDetails {
            line1: source.address_line1().map(masked),
            line2: source.address_line2().map(masked),
            city: source.address_city().map(str::to_owned),
            state: source.address_state().map(masked),
            postal_code: source.address_zip().map(masked),
            country: source.address_country().map(str::to_owned),
        };

        (!address.is_empty()).then_some(address)
    }
}

pub(crate) fn masked(value: &str) -> Secret<String> {
    Secret::new(value.to_owned())
}
