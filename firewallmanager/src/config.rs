/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sdk_http::{BuildError, Endpoint, Region};

pub(crate) const ENDPOINT_PREFIX: &str = "fms";

/// Where Firewall Manager requests are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    region: Option<Region>,
    endpoint: Option<Endpoint>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A config whose region comes from `AWS_REGION` or `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        Builder::default().set_region(Region::from_env()).build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The endpoint override if one was set, otherwise the regional endpoint.
    pub fn endpoint(&self) -> Result<Endpoint, BuildError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        match &self.region {
            Some(region) => Endpoint::resolve(ENDPOINT_PREFIX, region),
            None => Err(BuildError::missing_field(
                "region",
                "a region or an endpoint override must be configured",
            )),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Endpoint>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Sends every request to `endpoint` instead of the regional endpoint.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
        }
    }
}
