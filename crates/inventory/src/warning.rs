// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal problems found while building an inventory

use crate::range::RangeError;
use std::path::PathBuf;
use thiserror::Error;

/// A structural problem that was tolerated.
///
/// The inventory is still complete and usable when these are present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("line {line}: group cycle {}; edge ignored", path.join(" -> "))]
    ParentCycle { line: usize, path: Vec<String> },

    #[error("line {line}: '{parent}' lists child group '{child}' which is never declared")]
    UnknownChildGroup {
        line: usize,
        parent: String,
        child: String,
    },

    #[error("line {line}: host pattern '{pattern}' kept literally: {reason}")]
    InvalidRange {
        line: usize,
        pattern: String,
        reason: RangeError,
    },

    #[error("line {line}: unknown section kind '{kind}' for group '{group}'; reading as hosts")]
    UnknownSectionKind {
        line: usize,
        group: String,
        kind: String,
    },

    #[error("line {line}: section header is missing ']'")]
    UnterminatedSection { line: usize },

    #[error("line {line}: section header has no group name; section and its body ignored")]
    EmptySectionName { line: usize },

    #[error("line {line}: group name '{name}' is reserved; ignored")]
    ReservedGroupName { line: usize, name: String },

    #[error("{}: {reason}; skipped", path.display())]
    VarsFile { path: PathBuf, reason: String },
}
