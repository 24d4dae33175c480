/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Checks for the constraints declared on input members.
//!
//! Every check takes the member's `Option` and passes when the member is unset;
//! use [`required`] for members that must be present.

use crate::error::BuildError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$").expect("pattern is a valid regex");
}

pub fn required<T>(field: &'static str, value: &Option<T>) -> Result<(), BuildError> {
    match value {
        Some(_) => Ok(()),
        None => Err(BuildError::missing_field(field, "a required field was not set")),
    }
}

/// Inclusive integer bounds.
pub fn range(field: &'static str, value: Option<i32>, min: i32, max: i32) -> Result<(), BuildError> {
    match value {
        Some(v) if v < min || v > max => Err(BuildError::invalid_field(
            field,
            format!("must be between {} and {}, got {}", min, max, v),
        )),
        _ => Ok(()),
    }
}

/// Inclusive bounds on the number of characters.
pub fn length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), BuildError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len < min || len > max {
            return Err(BuildError::invalid_field(
                field,
                format!("length must be between {} and {}, got {}", min, max, len),
            ));
        }
    }
    Ok(())
}

/// Inclusive bounds on the number of list members.
pub fn list_length<T>(
    field: &'static str,
    value: Option<&[T]>,
    min: usize,
    max: usize,
) -> Result<(), BuildError> {
    if let Some(v) = value {
        if v.len() < min || v.len() > max {
            return Err(BuildError::invalid_field(
                field,
                format!("must contain between {} and {} members, got {}", min, max, v.len()),
            ));
        }
    }
    Ok(())
}

/// The `^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$` pattern used for names and tokens.
pub fn name_pattern(field: &'static str, value: Option<&str>) -> Result<(), BuildError> {
    pattern(field, value, &NAME_PATTERN)
}

/// The whole value must match `regex`, which should be anchored.
pub fn pattern(field: &'static str, value: Option<&str>, regex: &Regex) -> Result<(), BuildError> {
    match value {
        Some(v) if !regex.is_match(v) => Err(BuildError::invalid_field(
            field,
            format!("`{}` does not match the pattern {}", v, regex.as_str()),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_members_pass() {
        range("max_results", None, 1, 100).unwrap();
        length("next_token", None, 1, 4096).unwrap();
        name_pattern("next_token", None).unwrap();
        list_length::<u8>("findings", None, 1, 100).unwrap();
        required("policy_id", &None::<String>).unwrap_err();
    }

    #[test]
    fn range_is_inclusive() {
        range("max_results", Some(1), 1, 100).unwrap();
        range("max_results", Some(100), 1, 100).unwrap();
        range("max_results", Some(0), 1, 100).unwrap_err();
        range("max_results", Some(101), 1, 100).unwrap_err();
    }

    #[test]
    fn length_counts_characters() {
        length("name", Some("é"), 1, 1).unwrap();
        length("name", Some(""), 1, 128).unwrap_err();
        length("name", Some("a".repeat(4097).as_str()), 1, 4096).unwrap_err();
    }

    #[test]
    fn name_pattern_charset() {
        name_pattern("next_token", Some("AbC-123_=+/.:@ x")).unwrap();
        name_pattern("next_token", Some("ünïcode")).unwrap();
        name_pattern("next_token", Some("semi;colon")).unwrap_err();
        name_pattern("next_token", Some("quote\"")).unwrap_err();
    }

    #[test]
    fn custom_pattern() {
        let hex = Regex::new("^[0-9a-f]+$").unwrap();
        pattern("id", Some("00ff"), &hex).unwrap();
        let err = pattern("id", Some("00FF"), &hex).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`id` was invalid: `00FF` does not match the pattern ^[0-9a-f]+$"
        );
    }
}
