// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use dyninv_inventory::DEFAULT_INVENTORY;
use std::ffi::OsString;
use std::path::PathBuf;

/// Filter used when `DYNINV_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// --- Inventory ---

/// Resolve the inventory file: `--inventory` > DYNINV_INVENTORY > hosts.ini
pub fn inventory_path(flag: Option<PathBuf>) -> PathBuf {
    resolve_inventory(flag, std::env::var_os("DYNINV_INVENTORY"))
}

fn resolve_inventory(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY))
}

// --- Logging ---

/// `EnvFilter` directive for diagnostics on stderr.
pub fn log_filter() -> String {
    resolve_log_filter(std::env::var("DYNINV_LOG").ok())
}

fn resolve_log_filter(env: Option<String>) -> String {
    env.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
