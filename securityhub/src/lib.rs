/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Security Hub
//!
//! Security Hub aggregates security findings from AWS services and partner products and
//! checks accounts against security standards. This crate models its API: findings and their
//! filters, standards and controls, insights, products, members and invitations. Inputs are
//! marshalled into unsigned restJson1 requests; signing and sending them is up to the caller.

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
