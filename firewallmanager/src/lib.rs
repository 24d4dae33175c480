/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Firewall Manager
//!
//! Firewall Manager simplifies administering AWS WAF, Shield Advanced and VPC security group
//! rules across the accounts of an organization. This crate models its API: typed inputs with
//! validating builders, outputs, and the service's errors. Inputs are marshalled into unsigned
//! awsJson1.1 requests; signing and sending them is up to the caller.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use crate::config::Config;
pub use crate::error::Error;
pub use sdk_http::{BuildError, Endpoint, Region, SdkError};
pub use sdk_types::{Instant, PaginatedInput, PaginatedOutput};
