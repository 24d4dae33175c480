/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting for values bound to URI path labels

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters percent-encoded in a greedy label. `/` is kept so the label may span segments.
const GREEDY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    // RFC-3986 §3.3 allows sub-delims in the path component, but AWS services expect
    // them encoded and signing fails otherwise.
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

/// Base set of characters that must be URL encoded in a single path segment
pub(crate) const BASE_SET: &AsciiSet = &GREEDY_SET.add(b'/');

pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let set = if greedy { GREEDY_SET } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), set).to_string()
}
