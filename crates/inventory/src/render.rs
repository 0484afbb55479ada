// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON rendering of query results

use crate::query::{host_vars, list};
use dyninv_core::Inventory;
use serde::Serialize;

/// Render any query result as two-space indented JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Render the `--list` document.
pub fn render_list(inventory: &Inventory) -> Result<String, serde_json::Error> {
    to_json(&list(inventory))
}

/// Render the `--host <name>` document.
pub fn render_host(inventory: &Inventory, host: &str) -> Result<String, serde_json::Error> {
    to_json(&host_vars(inventory, host))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
