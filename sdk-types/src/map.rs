/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::DuplicateKeyError;
use std::collections::BTreeMap;

/// Inserts `key` into a builder's map field, creating the map on first use.
///
/// Fails without modifying the map if `key` is already present.
pub fn insert_unique<K, V>(
    map: &mut Option<BTreeMap<K, V>>,
    key: K,
    value: V,
) -> Result<(), DuplicateKeyError>
where
    K: Ord + AsRef<str>,
{
    let map = map.get_or_insert_with(BTreeMap::new);
    if map.contains_key(&key) {
        return Err(DuplicateKeyError::new(key.as_ref()));
    }
    map.insert(key, value);
    Ok(())
}
