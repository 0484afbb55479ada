// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Groups and the two groups every inventory carries.

use crate::vars::{merge_vars, Vars};
use indexmap::IndexSet;

/// Root group; every other group is a descendant of it.
pub const ALL_GROUP: &str = "all";

/// Holds hosts declared outside any named group.
pub const UNGROUPED_GROUP: &str = "ungrouped";

/// Key of the listing's metadata block; never usable as a group name.
pub const META_KEY: &str = "_meta";

/// A named group of hosts and child groups.
///
/// Members and children are names into the owning [`crate::Inventory`],
/// kept in first-seen order. `parents` mirrors `children` from the other
/// side; the implicit `all` parent is never recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub name: String,
    pub hosts: IndexSet<String>,
    pub children: IndexSet<String>,
    pub parents: IndexSet<String>,
    pub vars: Vars,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True for `all` and `ungrouped`.
    pub fn is_builtin(&self) -> bool {
        self.name == ALL_GROUP || self.name == UNGROUPED_GROUP
    }

    pub fn merge_vars(&mut self, vars: &Vars) {
        merge_vars(&mut self.vars, vars);
    }
}
