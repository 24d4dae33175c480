/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! awsJson1.1: every operation is a `POST /` naming its target in `x-amz-target`

use crate::endpoint::Endpoint;
use bytes::Bytes;
use sdk_types::BuildError;
use serde::Serialize;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub fn build_request<T: Serialize>(
    endpoint: &Endpoint,
    target: &str,
    input: &T,
) -> Result<http::Request<Bytes>, BuildError> {
    let body = serde_json::to_vec(input).map_err(BuildError::serialization)?;
    tracing::trace!(target_op = target, body = %String::from_utf8_lossy(&body), "serialized input");
    http::Request::builder()
        .method(http::Method::POST)
        .uri(endpoint.apply("/")?)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header("x-amz-target", target)
        .header(http::header::CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))
        .map_err(|err| BuildError::InvalidRequest(err.into()))
}
