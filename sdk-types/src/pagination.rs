/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Pagination-token continuation for list operations.
//!
//! A list operation returns a `next_token` while more pages remain; its absence marks the
//! final page. The follow-up request must echo the token verbatim and keep every other
//! field of the original request, which is exactly what [`PaginatedInput::next_page`] builds.
//! Sending the requests is left to the caller.

use crate::constraints;
use crate::error::BuildError;

/// Smallest `max_results` accepted by list operations.
pub const MIN_PAGE_SIZE: i32 = 1;
/// Largest `max_results` accepted by list operations.
pub const MAX_PAGE_SIZE: i32 = 100;
/// Longest accepted pagination token.
pub const MAX_TOKEN_LEN: usize = 4096;

pub trait PaginatedInput: Clone {
    type Output: PaginatedOutput;

    fn next_token(&self) -> Option<&str>;

    fn max_results(&self) -> Option<i32>;

    fn set_next_token(&mut self, token: Option<String>);

    fn with_next_token(mut self, token: Option<String>) -> Self {
        self.set_next_token(token);
        self
    }

    /// The request for the page after `output`, or `None` if `output` was the last page.
    fn next_page(&self, output: &Self::Output) -> Option<Self> {
        let token = output.next_token()?;
        Some(self.clone().with_next_token(Some(token.to_owned())))
    }
}

pub trait PaginatedOutput {
    fn next_token(&self) -> Option<&str>;

    fn is_last_page(&self) -> bool {
        self.next_token().is_none()
    }
}

/// `max_results` within [`MIN_PAGE_SIZE`]..=[`MAX_PAGE_SIZE`].
pub fn validate_page_size(max_results: Option<i32>) -> Result<(), BuildError> {
    constraints::range("max_results", max_results, MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// A token of 1 to [`MAX_TOKEN_LEN`] characters from the name character set.
pub fn validate_token(next_token: Option<&str>) -> Result<(), BuildError> {
    constraints::length("next_token", next_token, 1, MAX_TOKEN_LEN)?;
    constraints::name_pattern("next_token", next_token)
}
