//! Codecs translating between payments API wire tokens and the enums of this crate.
use std::str::FromStr;

use sdk_env::logger;

use crate::enums::{CardBrand, CardFundingType, FilePurpose};

/// ForeignInto trait
pub trait ForeignInto<T> {
    /// Convert from a foreign type to a native type.
    fn foreign_into(self) -> T;
}

/// ForeignFrom trait
pub trait ForeignFrom<F> {
    /// Convert from a foreign type to a native type.
    fn foreign_from(from: F) -> Self;
}

impl<F, T> ForeignInto<T> for F
where
    T: ForeignFrom<F>,
{
    fn foreign_into(self) -> T {
        T::foreign_from(self)
    }
}

/// Classify a raw token, falling back to the catch-all variant of `T` for
/// anything outside the known vocabulary.
fn decode_with_fallback<T>(token: Option<&str>, field_name: &'static str) -> T
where
    T: FromStr + Default,
{
    match token.map(|raw| (raw, raw.parse::<T>())) {
        Some((_, Ok(value))) => value,
        Some((raw, Err(_))) => {
            if !raw.is_empty() {
                logger::debug!(field_name, token = raw, "unrecognized wire token");
            }
            T::default()
        }
        None => T::default(),
    }
}

/// Maps the `funding` field of a card object.
#[derive(Clone, Copy, Debug)]
pub struct FundingTypeCodec;

impl FundingTypeCodec {
    /// Case-insensitive match against `credit`, `debit` and `prepaid`.
    /// Anything else, including a missing or empty token, is [`CardFundingType::Other`].
    pub fn decode(token: Option<&str>) -> CardFundingType {
        decode_with_fallback(token, "funding")
    }

    /// Canonical lowercase token, or `None` for [`CardFundingType::Other`]
    /// which has nothing to send.
    pub fn encode(value: CardFundingType) -> Option<&'static str> {
        match value {
            CardFundingType::Credit => Some("credit"),
            CardFundingType::Debit => Some("debit"),
            CardFundingType::Prepaid => Some("prepaid"),
            CardFundingType::Other => None,
        }
    }
}

/// Maps the `purpose` field of a file object. Decode only.
#[derive(Clone, Copy, Debug)]
pub struct FilePurposeCodec;

impl FilePurposeCodec {
    /// Case-insensitive match against `identity_document` and `dispute_evidence`.
    /// Anything else, including a missing or empty token, is [`FilePurpose::Other`].
    pub fn decode(token: Option<&str>) -> FilePurpose {
        decode_with_fallback(token, "purpose")
    }
}

/// Maps the `brand` field of a card object.
#[derive(Clone, Copy, Debug)]
pub struct CardBrandCodec;

impl CardBrandCodec {
    /// Case-insensitive match against `visa`, `american express`, `mastercard`, `discover`,
    /// `jcb`, `diners club` and `unionpay`. Anything else is [`CardBrand::Unknown`].
    pub fn decode(token: Option<&str>) -> CardBrand {
        decode_with_fallback(token, "brand")
    }

    /// Human readable label of the brand, suitable for display.
    pub fn display_name(brand: CardBrand) -> &'static str {
        match brand {
            CardBrand::Visa => "Visa",
            CardBrand::Amex => "American Express",
            CardBrand::MasterCard => "MasterCard",
            CardBrand::Discover => "Discover",
            CardBrand::Jcb => "JCB",
            CardBrand::DinersClub => "Diners Club",
            CardBrand::UnionPay => "UnionPay",
            CardBrand::Unknown => "Unknown",
        }
    }
}

impl ForeignFrom<Option<&str>> for CardFundingType {
    fn foreign_from(from: Option<&str>) -> Self {
        FundingTypeCodec::decode(from)
    }
}

impl ForeignFrom<CardFundingType> for Option<&'static str> {
    fn foreign_from(from: CardFundingType) -> Self {
        FundingTypeCodec::encode(from)
    }
}

impl ForeignFrom<Option<&str>> for FilePurpose {
    fn foreign_from(from: Option<&str>) -> Self {
        FilePurposeCodec::decode(from)
    }
}

impl ForeignFrom<Option<&str>> for CardBrand {
    fn foreign_from(from: Option<&str>) -> Self {
        CardBrandCodec::decode(from)
    }
}
