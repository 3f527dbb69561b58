#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod enums;
pub mod transformers;

pub use enums::*;
pub use transformers::{
    CardBrandCodec, FilePurposeCodec, ForeignFrom, ForeignInto, FundingTypeCodec,
};
