// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading an inventory file from disk

use crate::builder::{InventoryBuilder, Parsed};
use crate::range::{HostExpander, LiteralExpander, RangeExpander};
use crate::vars_dir::apply_vars_dirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default inventory file name, looked up in the current directory.
pub const DEFAULT_INVENTORY: &str = "hosts.ini";

/// Errors that stop an inventory from loading at all
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read inventory '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How much of the surrounding layout to honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Expand `[start:end]` host ranges.
    pub expand_ranges: bool,
    /// Merge `group_vars/` and `host_vars/` next to the file.
    pub vars_dirs: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            expand_ranges: true,
            vars_dirs: true,
        }
    }
}

impl LoadOptions {
    fn expander(&self) -> Box<dyn HostExpander> {
        if self.expand_ranges {
            Box::new(RangeExpander)
        } else {
            Box::new(LiteralExpander)
        }
    }
}

/// Read and parse the inventory at `path`.
///
/// Only failing to read the file is an error. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
pub fn load_inventory(path: &Path, options: &LoadOptions) -> Result<Parsed, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let mut builder = InventoryBuilder::with_expander(options.expander());
    builder.feed_str(&content);
    let mut parsed = builder.finish();

    if options.vars_dirs {
        apply_vars_dirs(&mut parsed, &vars_base(path));
    }

    tracing::debug!(
        path = %path.display(),
        warnings = parsed.warnings.len(),
        "inventory loaded"
    );
    Ok(parsed)
}

/// Directory holding `group_vars/` and `host_vars/` for an inventory file.
pub fn vars_base(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
