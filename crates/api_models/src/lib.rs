#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod address;
pub mod cards;
pub mod errors;
pub mod ext_traits;
pub mod files;

pub use address::{AddressDetails, AddressProjector, AddressSource};
pub use cards::Card;
pub use files::File;
