// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable records shared by hosts and groups.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered variable mapping.
///
/// Values read from the INI source are always [`Value::String`]; variable
/// files may contribute structured values.
pub type Vars = IndexMap<String, Value>;

/// Merge `from` into `into`; keys already present are overwritten in place.
pub fn merge_vars(into: &mut Vars, from: &Vars) {
    for (key, value) in from {
        into.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
#[path = "vars_tests.rs"]
mod tests;
