/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::response::ParseStrictResponse;
use bytes::Bytes;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// A marshalled, unsigned request paired with the parser for its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<Bytes>,
    response_handler: H,
    metadata: Metadata,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<Bytes>, response_handler: H, metadata: Metadata) -> Self {
        Operation {
            request,
            response_handler,
            metadata,
        }
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    /// Mutable access for the caller's signing and transport layers.
    pub fn request_mut(&mut self) -> &mut http::Request<Bytes> {
        &mut self.request
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn into_request_response(self) -> (http::Request<Bytes>, H) {
        (self.request, self.response_handler)
    }
}

impl<H> Operation<H>
where
    H: ParseStrictResponse,
{
    pub fn parse_response(&self, response: &http::Response<Bytes>) -> H::Output {
        tracing::debug!(
            service = self.metadata.service(),
            operation = self.metadata.name(),
            status = response.status().as_u16(),
            "parsing response"
        );
        self.response_handler.parse(response)
    }
}
