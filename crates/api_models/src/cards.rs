//! Card objects returned by the payments API.
use std::collections::HashMap;

use common_enums::{CardBrand, CardBrandCodec, CardFundingType, ForeignInto};
use error_stack::report;
use masking::{PeekInterface, Secret};
use sdk_env::{instrument, logger};
use serde_json::{Map, Value};

use crate::{
    address::{masked, AddressDetails, AddressProjector, AddressSource},
    errors::{CustomResult, ParsingError},
    ext_traits::ResponseFieldsExt,
};

/// Value of `tokenization_method` for cards tokenized through Apple Pay.
const APPLE_PAY_TOKENIZATION_METHOD: &str = "apple_pay";

/// A payment card as returned by the payments API.
///
/// Cardholder data is kept behind [`Secret`] so that `{:?}` never prints it.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    id: String,
    name: Option<Secret<String>>,
    last4: Secret<String>,
    dynamic_last4: Option<Secret<String>>,
    brand: CardBrand,
    funding: CardFundingType,
    country: Option<String>,
    currency: Option<String>,
    exp_month: u8,
    exp_year: u16,
    address_line1: Option<Secret<String>>,
    address_line2: Option<Secret<String>>,
    address_city: Option<String>,
    address_state: Option<Secret<String>>,
    address_zip: Option<Secret<String>>,
    address_country: Option<String>,
    metadata: HashMap<String, String>,
    all_response_fields: Secret<Map<String, Value>>,
}

impl Card {
    /// Decodes a card out of an API response object.
    ///
    /// `id`, `last4`, `brand`, `exp_month` and `exp_year` are required; every
    /// other field may be absent or null. Unknown `brand` and `funding` tokens
    /// decode to [`CardBrand::Unknown`] and [`CardFundingType::Other`].
    #[instrument(skip_all)]
    pub fn decode_from_api_response(response: &Value) -> CustomResult<Self, ParsingError> {
        Self::try_decode(response).inspect_err(|error| {
            logger::warn!(?error, "failed to decode card object");
        })
    }

    fn try_decode(response: &Value) -> CustomResult<Self, ParsingError> {
        let fields = response
            .as_object()
            .ok_or_else(|| report!(ParsingError::InvalidResponseShape))?;

        Ok(Self {
            id: fields.get_required_string("id")?.to_owned(),
            name: fields.get_optional_string("name").map(masked),
            last4: masked(fields.get_required_string("last4")?),
            dynamic_last4: fields.get_optional_string("dynamic_last4").map(masked),
            brand: CardBrandCodec::decode(Some(fields.get_required_string("brand")?)),
            funding: fields.get_optional_string("funding").foreign_into(),
            country: fields.get_optional_string("country").map(str::to_owned),
            currency: fields.get_optional_string("currency").map(str::to_owned),
            exp_month: fields.get_required_integer("exp_month")?,
            exp_year: fields.get_required_integer("exp_year")?,
            address_line1: fields.get_optional_string("address_line1").map(masked),
            address_line2: fields.get_optional_string("address_line2").map(masked),
            address_city: fields.get_optional_string("address_city").map(str::to_owned),
            address_state: fields.get_optional_string("address_state").map(masked),
            address_zip: fields.get_optional_string("address_zip").map(masked),
            address_country: fields.get_optional_string("address_country").map(str::to_owned),
            metadata: fields.get_string_map("metadata"),
            all_response_fields: Secret::new(fields.clone()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cardholder name.
    pub fn name(&self) -> Option<&str> {
        peek_str(&self.name)
    }

    pub fn last4(&self) -> &str {
        self.last4.peek()
    }

    pub fn set_last4(&mut self, last4: impl Into<String>) {
        self.last4 = Secret::new(last4.into());
    }

    /// Last four digits of the device account number, for cards stored on a device.
    pub fn dynamic_last4(&self) -> Option<&str> {
        peek_str(&self.dynamic_last4)
    }

    pub fn brand(&self) -> CardBrand {
        self.brand
    }

    pub fn funding(&self) -> CardFundingType {
        self.funding
    }

    /// Two-letter ISO code of the issuing country.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn exp_month(&self) -> u8 {
        self.exp_month
    }

    pub fn exp_year(&self) -> u16 {
        self.exp_year
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The response object this card was decoded from, unmodified.
    pub fn all_response_fields(&self) -> &Map<String, Value> {
        self.all_response_fields.peek()
    }

    pub fn is_apple_pay_card(&self) -> bool {
        self.all_response_fields()
            .get("tokenization_method")
            .and_then(Value::as_str)
            == Some(APPLE_PAY_TOKENIZATION_METHOD)
    }

    /// Billing address of the card, see [`AddressProjector::project`].
    pub fn address(&self) -> Option<AddressDetails> {
        AddressProjector::project(self)
    }
}

impl AddressSource for Card {
    fn address_line1(&self) -> Option<&str> {
        peek_str(&self.address_line1)
    }

    fn address_line2(&self) -> Option<&str> {
        peek_str(&self.address_line2)
    }

    fn address_city(&self) -> Option<&str> {
        self.address_city.as_deref()
    }

    fn address_state(&self) -> Option<&str> {
        peek_str(&self.address_state)
    }

    fn address_zip(&self) -> Option<&str> {
        peek_str(&self.address_zip)
    }

    fn address_country(&self) -> Option<&str> {
        self.address_country.as_deref()
    }
}

fn peek_str(value: &Option<Secret<String>>) -> Option<&str> {
    value.as_ref().map(|secret| secret.peek().as_str())
}
