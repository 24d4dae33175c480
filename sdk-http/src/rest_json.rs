/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! restJson1: operations bind members to the method, path labels, query string and body

use crate::endpoint::Endpoint;
use crate::{label, query};
use bytes::Bytes;
use sdk_types::BuildError;
use serde::Serialize;

pub const CONTENT_TYPE: &str = "application/json";

/// Incrementally assembles a restJson1 request.
#[derive(Debug)]
pub struct RestRequest {
    method: http::Method,
    uri: String,
    body: Option<Vec<u8>>,
}

impl RestRequest {
    pub fn new(method: http::Method) -> Self {
        RestRequest {
            method,
            uri: String::new(),
            body: None,
        }
    }

    /// Appends a literal path segment such as `/findings/import`.
    pub fn path(mut self, literal: &str) -> Self {
        self.uri.push_str(literal);
        self
    }

    /// Appends `/{label}`. A greedy label keeps its `/` separators.
    pub fn label(
        mut self,
        field: &'static str,
        value: Option<&str>,
        greedy: bool,
    ) -> Result<Self, BuildError> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return Err(BuildError::missing_field(field, "cannot be empty or unset")),
        };
        self.uri.push('/');
        self.uri.push_str(&label::fmt_string(value, greedy));
        Ok(self)
    }

    pub fn query(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            query::write_pair(&mut self.uri, key, &value.to_string());
        }
        self
    }

    /// Repeats `key` once per member, e.g. `?tagKeys=a&tagKeys=b`.
    pub fn query_list<T: AsRef<str>>(mut self, key: &str, values: Option<&[T]>) -> Self {
        for value in values.unwrap_or_default() {
            query::write_pair(&mut self.uri, key, value.as_ref());
        }
        self
    }

    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, BuildError> {
        let body = serde_json::to_vec(body).map_err(BuildError::serialization)?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn build(self, endpoint: &Endpoint) -> Result<http::Request<Bytes>, BuildError> {
        let path = if self.uri.is_empty() { "/" } else { &self.uri };
        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(endpoint.apply(path)?);
        let body = match self.body {
            Some(body) => {
                tracing::trace!(body = %String::from_utf8_lossy(&body), "serialized input");
                builder = builder
                    .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
                    .header(http::header::CONTENT_LENGTH, body.len());
                Bytes::from(body)
            }
            None => Bytes::new(),
        };
        builder
            .body(body)
            .map_err(|err| BuildError::InvalidRequest(err.into()))
    }
}
