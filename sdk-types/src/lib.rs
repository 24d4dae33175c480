/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by every service model crate: closed-set enums, timestamps, builder
//! macros, pagination primitives and the errors raised while building inputs.

// Lets the macros name this crate as `sdk_types` from inside it too.
extern crate self as sdk_types;

#[macro_use]
mod macros;

pub mod constraints;
pub mod enums;
pub mod error;
pub mod instant;
pub mod map;
pub mod pagination;

pub use crate::enums::{UnknownVariantError, WireEnum};
pub use crate::error::{BuildError, DuplicateKeyError, ValidateInput};
pub use crate::instant::Instant;
pub use crate::pagination::{PaginatedInput, PaginatedOutput};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
