/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::json_errors::{parse_generic_error, GenericError};
use crate::result::{copy_response, SdkError};
use bytes::Bytes;
use http::Response;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Parses a fully loaded HTTP response into an operation's output or error.
///
/// Every operation in this SDK reads the whole body before parsing, so unlike a streaming
/// parser this never needs ownership of the response.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// Response handler shared by the JSON protocols.
///
/// Success responses deserialize into `O`; an empty body is read as `{}`. Error responses are
/// parsed into a [`GenericError`] and converted into the operation's error type `E`, which maps
/// modeled error codes to their variants.
pub struct ParseJsonResponse<O, E> {
    _phantom: PhantomData<fn() -> (O, E)>,
}

impl<O, E> ParseJsonResponse<O, E> {
    pub fn new() -> Self {
        ParseJsonResponse {
            _phantom: PhantomData,
        }
    }
}

impl<O, E> Default for ParseJsonResponse<O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E> Clone for ParseJsonResponse<O, E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O, E> std::fmt::Debug for ParseJsonResponse<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseJsonResponse").finish()
    }
}

impl<O, E> ParseStrictResponse for ParseJsonResponse<O, E>
where
    O: DeserializeOwned,
    E: From<GenericError>,
{
    type Output = Result<O, SdkError<E>>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            let generic = parse_generic_error(response);
            tracing::debug!(
                status = response.status().as_u16(),
                code = ?generic.code(),
                request_id = ?generic.request_id(),
                "service returned an error"
            );
            return Err(SdkError::ServiceError {
                raw: copy_response(response),
                err: E::from(generic),
            });
        }
        let body: &[u8] = if response.body().is_empty() {
            b"{}"
        } else {
            response.body()
        };
        tracing::trace!(body = %String::from_utf8_lossy(body), "deserializing response body");
        serde_json::from_slice(body).map_err(|err| SdkError::ResponseError {
            raw: copy_response(response),
            err: err.into(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{ParseJsonResponse, ParseStrictResponse};
    use crate::json_errors::GenericError;
    use crate::result::SdkError;
    use bytes::Bytes;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Output {
        #[serde(default)]
        next_token: Option<String>,
    }

    fn handler() -> ParseJsonResponse<Output, GenericError> {
        ParseJsonResponse::new()
    }

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn success() {
        let out = handler()
            .parse(&response(200, r#"{"NextToken": "abc", "Unrelated": 5}"#))
            .unwrap();
        assert_eq!(out.next_token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(handler().parse(&response(200, "")).unwrap(), Output::default());
    }

    #[test]
    fn malformed_success_body() {
        match handler().parse(&response(200, "{not json")) {
            Err(SdkError::ResponseError { raw, .. }) => assert_eq!(raw.body().as_ref(), b"{not json"),
            other => panic!("expected a response error, got {:?}", other),
        }
    }

    #[test]
    fn error_status() {
        let err = handler()
            .parse(&response(404, r#"{"__type": "ResourceNotFoundException", "Message": "gone"}"#))
            .unwrap_err();
        let service_err = err.into_service_error().unwrap();
        assert_eq!(service_err.code(), Some("ResourceNotFoundException"));
        assert_eq!(service_err.message(), Some("gone"));
    }
}
