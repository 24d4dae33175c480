/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Turns inputs into unsigned HTTP requests and HTTP responses into outputs or errors.
//!
//! Nothing in this crate performs I/O: signing and sending the request are left to the caller.

pub mod aws_json;
pub mod endpoint;
pub mod json_errors;
pub mod label;
pub mod operation;
pub mod query;
pub mod response;
pub mod rest_json;
pub mod result;

pub use crate::endpoint::{Endpoint, Region};
pub use crate::json_errors::GenericError;
pub use crate::operation::{Metadata, Operation};
pub use crate::response::{ParseJsonResponse, ParseStrictResponse};
pub use crate::result::SdkError;
pub use sdk_types::BuildError;
