// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reuse of a loaded inventory across queries in a long-lived process.
//!
//! The cached value is only handed out while the inventory file and every
//! variable file still match the fingerprint taken when it was loaded.

use crate::builder::Parsed;
use crate::load::{load_inventory, vars_base, LoadError, LoadOptions};
use crate::vars_dir::{collect_vars_files, GROUP_VARS_DIR, HOST_VARS_DIR};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Modification time and size of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileStamp {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    fn take(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        Some(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Everything whose change invalidates a loaded inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    inventory: Option<FileStamp>,
    vars_files: Vec<FileStamp>,
}

impl Fingerprint {
    fn take(path: &Path, options: &LoadOptions) -> Self {
        let mut vars_files = Vec::new();
        if options.vars_dirs {
            let base = vars_base(path);
            for dir in [GROUP_VARS_DIR, HOST_VARS_DIR] {
                vars_files.extend(
                    collect_vars_files(&base.join(dir))
                        .iter()
                        .filter_map(|file| FileStamp::take(&file.path)),
                );
            }
        }
        Self {
            inventory: FileStamp::take(path),
            vars_files,
        }
    }
}

/// An inventory that is re-parsed whenever its sources change.
#[derive(Debug)]
pub struct InventoryCache {
    path: PathBuf,
    options: LoadOptions,
    loaded: Option<(Fingerprint, Parsed)>,
    loads: usize,
}

impl InventoryCache {
    pub fn new(path: impl Into<PathBuf>, options: LoadOptions) -> Self {
        Self {
            path: path.into(),
            options,
            loaded: None,
            loads: 0,
        }
    }

    /// Current inventory, re-reading the sources if they changed.
    pub fn get(&mut self) -> Result<&Parsed, LoadError> {
        let fingerprint = Fingerprint::take(&self.path, &self.options);
        let entry = match self.loaded.take() {
            Some((seen, parsed)) if seen == fingerprint => (seen, parsed),
            _ => {
                tracing::debug!(path = %self.path.display(), "inventory changed; reloading");
                let parsed = load_inventory(&self.path, &self.options)?;
                self.loads += 1;
                (fingerprint, parsed)
            }
        };
        let (_, parsed) = self.loaded.insert(entry);
        Ok(parsed)
    }

    /// Drop the cached value so the next [`get`](Self::get) re-reads.
    pub fn invalidate(&mut self) {
        self.loaded = None;
    }

    /// How many times the sources have been parsed.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
