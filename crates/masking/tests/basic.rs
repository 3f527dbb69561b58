#![allow(clippy::unwrap_used)]

use masking::{ExposeInterface, ExposeOptionInterface, PeekInterface, Secret, WithoutType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
struct Holder {
    name: Secret<String>,
    nickname: Option<Secret<String, WithoutType>>,
    not_secret: String,
}

fn holder() -> Holder {
    Holder {
        name: Secret::new("Jane Austen".to_string()),
        nickname: Some("Jenny".to_string().into()),
        not_secret: "visible".to_string(),
    }
}

#[test]
fn debug_hides_the_value() {
    let printed = format!("{:?}", holder());

    assert!(!printed.contains("Jane Austen"));
    assert!(!printed.contains("Jenny"));
    assert!(printed.contains("*** alloc::string::String ***"));
    assert!(printed.contains("*** ***"));
    assert!(printed.contains("visible"));
}

#[test]
fn peek_and_expose_return_the_value() {
    let holder = holder();

    assert_eq!(holder.name.peek(), "Jane Austen");
    assert_eq!(holder.clone().name.expose(), "Jane Austen");
    assert_eq!(holder.nickname.expose_option().as_deref(), Some("Jenny"));
}

#[test]
fn equality_compares_inner_values() {
    let mut other = holder();
    assert_eq!(holder(), other);

    other.name = Secret::new("J. Austen".to_string());
    assert_ne!(holder(), other);
}

#[test]
fn serde_round_trip_exposes_the_value() {
    let serialized = serde_json::to_string(&holder()).unwrap();
    assert_eq!(
        serialized,
        r#"{"name":"Jane Austen","nickname":"Jenny","not_secret":"visible"}"#
    );

    let deserialized: Holder = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, holder());
}
