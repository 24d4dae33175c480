/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error responses shared by the awsJson1.1 and restJson1 protocols

use bytes::Bytes;
use serde_json::Value;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// GenericError represents an error from a service that is not modeled
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenericError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl GenericError {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl ::std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}", code)?,
            None => write!(f, "GenericError")?,
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {})", request_id)?;
        }
        Ok(())
    }
}

impl ::std::error::Error for GenericError {}

/// Strips the `:http://...` suffix and the `namespace#` prefix some services attach to error codes.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header_str<'a>(response: &'a http::Response<Bytes>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

fn body_str(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_owned)
}

/// Extracts the error code, message and request id from an error response.
///
/// The `x-amzn-errortype` header wins over the body's `__type` or `code` member. A body that
/// is not a JSON object contributes nothing.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> GenericError {
    let body: Value = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    let code = header_str(response, ERROR_TYPE_HEADER)
        .map(str::to_owned)
        .or_else(|| body_str(&body, &["__type", "code", "Code"]))
        .map(|code| sanitize_error_code(&code).to_owned());
    GenericError {
        code,
        message: body_str(&body, &["message", "Message", "errorMessage"]),
        request_id: header_str(response, REQUEST_ID_HEADER).map(str::to_owned),
    }
}
