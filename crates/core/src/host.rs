// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::vars::{merge_vars, Vars};

/// A managed host and its own variable record.
///
/// One record exists per host name; groups refer to it by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Host {
    pub name: String,
    pub vars: Vars,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vars::new(),
        }
    }

    /// Merge `vars` into this host's record (last write wins).
    pub fn merge_vars(&mut self, vars: &Vars) {
        merge_vars(&mut self.vars, vars);
    }
}
