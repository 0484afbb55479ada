// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `group_vars/` and `host_vars/` directories next to the inventory file.
//!
//! Each entry is named after a group or host: a file with that name,
//! optionally followed by `.yml`, `.yaml` or `.json`, or a directory of such
//! files read in file-name order. Values override those from the INI file.

use crate::builder::Parsed;
use crate::warning::Warning;
use dyninv_core::Vars;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const GROUP_VARS_DIR: &str = "group_vars";
pub const HOST_VARS_DIR: &str = "host_vars";

/// Errors from reading one variable file
#[derive(Debug, Error)]
pub enum VarsFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a mapping at the top level")]
    NotMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VarsFormat {
    Yaml,
    Json,
}

/// One variable file and the group or host it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarsFile {
    pub owner: String,
    pub path: PathBuf,
}

/// Merge `group_vars/` and `host_vars/` under `base` into the inventory.
///
/// Entries for unknown groups or hosts are ignored. Unreadable or invalid
/// files become warnings.
pub fn apply_vars_dirs(parsed: &mut Parsed, base: &Path) {
    for file in collect_vars_files(&base.join(GROUP_VARS_DIR)) {
        if !parsed.inventory.contains_group(&file.owner) {
            tracing::debug!(path = %file.path.display(), "no such group; skipping vars file");
            continue;
        }
        match read_vars_file(&file.path) {
            Ok(vars) => {
                if let Some(group) = parsed.inventory.group_mut(&file.owner) {
                    group.merge_vars(&vars);
                }
            }
            Err(e) => skip_file(parsed, file.path, e),
        }
    }

    for file in collect_vars_files(&base.join(HOST_VARS_DIR)) {
        if parsed.inventory.host(&file.owner).is_none() {
            tracing::debug!(path = %file.path.display(), "no such host; skipping vars file");
            continue;
        }
        match read_vars_file(&file.path) {
            Ok(vars) => {
                if let Some(host) = parsed.inventory.host_mut(&file.owner) {
                    host.merge_vars(&vars);
                }
            }
            Err(e) => skip_file(parsed, file.path, e),
        }
    }
}

fn skip_file(parsed: &mut Parsed, path: PathBuf, err: VarsFileError) {
    tracing::warn!(path = %path.display(), error = %err, "skipping invalid vars file");
    parsed.warnings.push(Warning::VarsFile {
        path,
        reason: err.to_string(),
    });
}

/// List the variable files in one vars directory, sorted by path.
///
/// A missing directory yields nothing.
pub fn collect_vars_files(dir: &Path) -> Vec<VarsFile> {
    let mut files = Vec::new();
    for entry in sorted_entries(dir) {
        if entry.is_dir() {
            let Some(owner) = file_name(&entry) else {
                continue;
            };
            for inner in sorted_entries(&entry) {
                if inner.is_file() && readable_in_dir(&inner) {
                    files.push(VarsFile {
                        owner: owner.clone(),
                        path: inner,
                    });
                }
            }
        } else if let Some(owner) = owner_name(&entry) {
            files.push(VarsFile {
                owner,
                path: entry,
            });
        }
    }
    files
}

/// Read one variable file into a mapping. An empty file is an empty mapping.
pub fn read_vars_file(path: &Path) -> Result<Vars, VarsFileError> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vars::new());
    }
    let value: Value = match format_for_path(path) {
        Some(VarsFormat::Json) => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    match value {
        Value::Null => Ok(Vars::new()),
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(VarsFileError::NotMapping),
    }
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let Ok(read) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = read
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| !file_name(path).is_some_and(|name| name.starts_with('.')))
        .collect();
    paths.sort();
    paths
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

/// Group or host name a top-level file stands for.
///
/// Accepted extensions are stripped; anything else is part of the name, so
/// `host_vars/web1.example.com` belongs to host `web1.example.com`.
fn owner_name(path: &Path) -> Option<String> {
    if format_for_path(path).is_some() {
        path.file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
    } else {
        file_name(path)
    }
}

/// Files inside an owner directory need no extension or an accepted one.
fn readable_in_dir(path: &Path) -> bool {
    path.extension().is_none() || format_for_path(path).is_some()
}

fn format_for_path(path: &Path) -> Option<VarsFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => Some(VarsFormat::Yaml),
        Some("json") => Some(VarsFormat::Json),
        _ => None,
    }
}

#[cfg(test)]
#[path = "vars_dir_tests.rs"]
mod tests;
