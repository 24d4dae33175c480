/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Closed string-value sets.
//!
//! Every enum declared with [`wire_enum!`](crate::wire_enum) has two decoding paths:
//!
//! - `from_value` / `FromStr` is strict. Only declared values are accepted and anything else,
//!   including the empty string, is rejected with an [`UnknownVariantError`] naming the value.
//! - Deserialization is lenient. A value the service returns that this crate does not know
//!   about yet lands in the `Unknown` variant and is written back unchanged on serialization.

use thiserror::Error;

/// A string-backed enum with a fixed set of declared wire values.
pub trait WireEnum: Sized {
    /// Name of the enum, used in error messages.
    const NAME: &'static str;

    /// Every declared wire value, in declaration order.
    fn values() -> &'static [&'static str];

    /// Strictly decodes a wire value.
    fn from_value(raw: &str) -> Result<Self, UnknownVariantError>;

    /// The wire value of this constant.
    fn as_str(&self) -> &str;

    /// `false` if this value was decoded leniently from an undeclared wire value.
    fn is_known(&self) -> bool;
}

/// A string was not one of an enum's declared values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {enum_name} value (expected one of: {expected})")]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
    expected: String,
}

impl UnknownVariantError {
    pub fn new(enum_name: &'static str, value: &str, expected: &[&str]) -> Self {
        UnknownVariantError {
            enum_name,
            value: value.to_owned(),
            expected: expected.join(", "),
        }
    }

    /// The enum the value was decoded for.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod test {
    use crate::enums::WireEnum;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::BTreeMap;
    use std::hash::{Hash, Hasher};
    use std::str::FromStr;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    wire_enum! {
        /// Test-only enum.
        pub enum Color {
            Red => "RED",
            DarkBlue => "DARK_BLUE",
        }
    }

    #[test]
    fn strict_decoding() {
        assert_eq!(Color::from_value("RED"), Ok(Color::Red));
        assert_eq!(Color::from_str("DARK_BLUE"), Ok(Color::DarkBlue));
        let err = Color::from_value("GREEN").expect_err("undeclared value");
        assert_eq!(err.value(), "GREEN");
        assert_eq!(err.enum_name(), "Color");
        assert_eq!(
            err.to_string(),
            "`GREEN` is not a valid Color value (expected one of: RED, DARK_BLUE)"
        );
        Color::from_value("").expect_err("empty value");
        Color::from_value("red").expect_err("values are case sensitive");
    }

    #[test]
    fn lenient_deserialization_keeps_unknown_values() {
        let color: Color = serde_json::from_str("\"GREEN\"").unwrap();
        assert_eq!(color, Color::Unknown("GREEN".to_owned()));
        assert!(!color.is_known());
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"GREEN\"");

        let known: Color = serde_json::from_str("\"RED\"").unwrap();
        assert!(known.is_known());
    }

    #[test]
    fn enum_map_keys_serialize_as_strings() {
        let mut map = BTreeMap::new();
        map.insert(Color::DarkBlue, 2);
        map.insert(Color::Red, 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"RED":1,"DARK_BLUE":2}"#);
        let parsed: BTreeMap<Color, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn unknown_holding_a_declared_value_is_that_value() {
        let raw = Color::Unknown("RED".to_owned());
        assert_eq!(raw, Color::Red);
        assert_eq!(hash_of(&raw), hash_of(&Color::Red));

        let mut map = BTreeMap::new();
        map.insert(Color::Red, 1);
        map.insert(raw, 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&Color::Red], 2);

        let mut sorted = vec![
            Color::Unknown("AMBER".to_owned()),
            Color::DarkBlue,
            Color::Unknown("BLACK".to_owned()),
            Color::Red,
        ];
        sorted.sort();
        assert_eq!(
            sorted.iter().map(Color::as_str).collect::<Vec<_>>(),
            vec!["RED", "DARK_BLUE", "AMBER", "BLACK"]
        );
        assert_ne!(Color::Unknown("red".to_owned()), Color::Red);
    }

    #[test]
    fn values_and_display() {
        assert_eq!(Color::values(), &["RED", "DARK_BLUE"]);
        assert_eq!(<Color as WireEnum>::NAME, "Color");
        assert_eq!(Color::DarkBlue.to_string(), "DARK_BLUE");
        assert_eq!(Color::Red.as_ref(), "RED");
    }

    proptest! {
        #[test]
        fn declared_values_round_trip(idx in 0..2usize) {
            let raw = Color::values()[idx];
            let parsed = Color::from_value(raw).unwrap();
            prop_assert_eq!(parsed.as_str(), raw);
            prop_assert_eq!(Color::from_value(parsed.as_str()).unwrap(), parsed);
        }

        #[test]
        fn undeclared_values_are_rejected(raw in "\\PC*") {
            prop_assume!(!Color::values().contains(&raw.as_str()));
            prop_assert!(Color::from_value(&raw).is_err());
        }
    }
}
