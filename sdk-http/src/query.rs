/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting for query string keys and values

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

pub fn fmt_default<T: ToString>(t: T) -> String {
    fmt_string(t.to_string())
}

/// Appends `key=value` to `out`, inserting `?` or `&` as needed.
pub fn write_pair(out: &mut String, key: &str, value: &str) {
    out.push(if out.contains('?') { '&' } else { '?' });
    out.push_str(&fmt_string(key));
    out.push('=');
    out.push_str(&fmt_string(value));
}
