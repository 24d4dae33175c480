/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::{Request, Uri};
use pretty_assertions::Comparison;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam { expected: String },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader { forbidden: String },

    #[error("expected `{expected}`, found `{found}`")]
    InvalidRequestLine { expected: String, found: String },

    #[error("body did not match. {comparison}\n== hint:\n{hint}")]
    BodyDidNotMatch {
        comparison: String,
        hint: String,
    },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.splitn(2, '=');
        QueryParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

fn query_keys(uri: &Uri) -> HashSet<&str> {
    extract_params(uri)
        .into_iter()
        .map(|param| QueryParam::parse(param).key)
        .collect()
}

/// Checks the method and the path (without the query string).
pub fn validate_request_line<B>(
    request: &Request<B>,
    method: &str,
    path: &str,
) -> Result<(), ProtocolTestFailure> {
    let expected = format!("{} {}", method, path);
    let found = format!("{} {}", request.method(), request.uri().path());
    if expected != found {
        return Err(ProtocolTestFailure::InvalidRequestLine { expected, found });
    }
    Ok(())
}

/// Every `expected_params` entry (`key=value` in encoded form) must be present.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            let mut found: Vec<String> = actual_params.iter().map(|s| s.to_string()).collect();
            found.sort();
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found,
            });
        }
    }
    Ok(())
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request.uri());
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request.uri());
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        // Header lists are compared comma-delimited
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Compares a JSON body structurally: member order and whitespace do not matter.
pub fn validate_json_body<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected_body: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = String::from_utf8_lossy(request.body().as_ref());
    let expected: Value = match serde_json::from_str(expected_body) {
        Ok(v) => v,
        Err(e) => {
            return Err(ProtocolTestFailure::BodyDidNotMatch {
                comparison: format!("expected body is not JSON: {}", expected_body),
                hint: e.to_string(),
            })
        }
    };
    let actual: Value = match serde_json::from_str(&actual_body) {
        Ok(v) => v,
        Err(e) => {
            return Err(ProtocolTestFailure::BodyDidNotMatch {
                comparison: format!("expected {}, found {}", expected, actual_body),
                hint: format!("actual body is not JSON: {}", e),
            })
        }
    };
    match assert_json_eq_no_panic(&actual, &expected) {
        Ok(()) => Ok(()),
        Err(hint) => Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: format!("{}", Comparison::new(&expected, &actual)),
            hint,
        }),
    }
}

/// An empty body, as sent by GET and DELETE operations.
pub fn validate_empty_body<B: AsRef<[u8]>>(request: &Request<B>) -> Result<(), ProtocolTestFailure> {
    let body = request.body().as_ref();
    if body.is_empty() {
        return Ok(());
    }
    Err(ProtocolTestFailure::BodyDidNotMatch {
        comparison: String::from_utf8_lossy(body).into_owned(),
        hint: "expected an empty body".to_owned(),
    })
}
