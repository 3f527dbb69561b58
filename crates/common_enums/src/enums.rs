//! Closed enumerations describing cards and uploaded files.
//!
//! Every enum here carries a catch-all variant which absorbs tokens the SDK
//! does not (yet) know about. The catch-all is excluded from string parsing,
//! use the codecs in [`crate::transformers`] to classify raw tokens.

/// Funding source of a payment card.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardFundingType {
    Credit,
    Debit,
    Prepaid,
    /// Any funding type without a canonical wire token.
    #[default]
    #[strum(disabled)]
    Other,
}

/// Reason a file was uploaded to the payments API.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FilePurpose {
    /// Identity verification document, e.g. a scanned passport.
    IdentityDocument,
    /// Evidence submitted while contesting a dispute.
    DisputeEvidence,
    #[default]
    #[strum(disabled)]
    Other,
}

/// Card network as reported in the `brand` field of a card object.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum CardBrand {
    #[serde(rename = "visa")]
    #[strum(serialize = "visa")]
    Visa,
    #[serde(rename = "american express")]
    #[strum(serialize = "american express")]
    Amex,
    #[serde(rename = "mastercard")]
    #[strum(serialize = "mastercard")]
    MasterCard,
    #[serde(rename = "discover")]
    #[strum(serialize = "discover")]
    Discover,
    #[serde(rename = "jcb")]
    #[strum(serialize = "jcb")]
    Jcb,
    #[serde(rename = "diners club")]
    #[strum(serialize = "diners club")]
    DinersClub,
    #[serde(rename = "unionpay")]
    #[strum(serialize = "unionpay")]
    UnionPay,
    #[default]
    #[serde(rename = "unknown")]
    #[strum(disabled)]
    Unknown,
}
