/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error as StdError;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// An error that occurred while building an input or marshalling it into a request.
///
/// The request was never dispatched.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required field was not set
    #[error("`{field}` was missing: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// A field was set to a value outside its declared constraints
    #[error("`{field}` was invalid: {details}")]
    InvalidField { field: &'static str, details: String },

    /// The input could not be serialized into a request body
    #[error("failed to serialize input: {0}")]
    SerializationFailed(#[source] BoxError),

    /// The resolved endpoint and request path did not form a valid URI
    #[error("invalid uri: {0}")]
    InvalidUri(String),

    /// The marshalled parts could not be assembled into an HTTP request
    #[error("failed to construct request: {0}")]
    InvalidRequest(#[source] BoxError),
}

impl BuildError {
    pub fn missing_field(field: &'static str, details: &'static str) -> Self {
        BuildError::MissingField { field, details }
    }

    pub fn invalid_field(field: &'static str, details: impl Into<String>) -> Self {
        BuildError::InvalidField {
            field,
            details: details.into(),
        }
    }

    pub fn serialization(err: impl Into<BoxError>) -> Self {
        BuildError::SerializationFailed(err.into())
    }
}

/// Raised by the `add_*_entry` builder methods when a key is inserted twice.
///
/// Map inserts are add-only: the first value for a key wins and the second insert fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicated keys ({key}) are provided")]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    pub fn new(key: impl Into<String>) -> Self {
        DuplicateKeyError { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Checks an input against its required fields and declared bounds.
///
/// Inputs declared with [`input!`](crate::input) call this from their builder's `build`.
pub trait ValidateInput {
    fn validate(&self) -> Result<(), BuildError>;
}
