// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The inventory aggregate: every group and host, keyed by name.

use crate::group::{Group, ALL_GROUP, UNGROUPED_GROUP};
use crate::host::Host;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use thiserror::Error;

/// Adding a parent/child edge would close a loop in the group graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("group cycle: {}", path.join(" -> "))]
pub struct CycleError {
    /// The loop, starting and ending at the would-be parent.
    pub path: Vec<String>,
}

/// Owns all groups and hosts.
///
/// Relationships between them are plain names, so no view of the graph can
/// alias another. `all` and `ungrouped` exist from construction on. Every
/// group is implicitly a child of `all`; that edge is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    groups: IndexMap<String, Group>,
    hosts: IndexMap<String, Host>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        let mut groups = IndexMap::new();
        groups.insert(ALL_GROUP.to_string(), Group::new(ALL_GROUP));
        groups.insert(UNGROUPED_GROUP.to_string(), Group::new(UNGROUPED_GROUP));
        Self {
            groups,
            hosts: IndexMap::new(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.get_mut(name)
    }

    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.get(name)
    }

    pub fn host_mut(&mut self, name: &str) -> Option<&mut Host> {
        self.hosts.get_mut(name)
    }

    /// All groups in first-seen order, `all` and `ungrouped` first.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// All hosts in first-seen order.
    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.values()
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Index of a group in declaration order.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.get_index_of(name)
    }

    /// Get or create a group.
    pub fn ensure_group(&mut self, name: &str) -> &mut Group {
        self.groups
            .entry(name.to_string())
            .or_insert_with(|| Group::new(name))
    }

    /// Get or create a host record.
    pub fn ensure_host(&mut self, name: &str) -> &mut Host {
        self.hosts
            .entry(name.to_string())
            .or_insert_with(|| Host::new(name))
    }

    /// Make `host` a direct member of `group`, creating either as needed.
    ///
    /// Adding to `all` only creates the host record; membership in `all` is
    /// implied for every host.
    pub fn add_host(&mut self, group: &str, host: &str) -> &mut Host {
        if group != ALL_GROUP {
            self.ensure_group(group).hosts.insert(host.to_string());
        }
        self.ensure_host(host)
    }

    /// Record `child` as a child group of `parent`, creating either as needed.
    ///
    /// Returns `Ok(false)` when the edge already existed or is implied (parent
    /// `all`). An edge that would close a loop is refused and left out.
    pub fn add_child(&mut self, parent: &str, child: &str) -> Result<bool, CycleError> {
        self.ensure_group(parent);
        if child == ALL_GROUP {
            return Err(CycleError {
                path: vec![parent.to_string(), ALL_GROUP.to_string(), parent.to_string()],
            });
        }
        self.ensure_group(child);
        if parent == ALL_GROUP {
            return Ok(false);
        }
        if parent == child {
            return Err(CycleError {
                path: vec![parent.to_string(), child.to_string()],
            });
        }
        if let Some(mut path) = self.descent_path(child, parent) {
            path.insert(0, parent.to_string());
            return Err(CycleError { path });
        }

        let added = self
            .ensure_group(parent)
            .children
            .insert(child.to_string());
        self.ensure_group(child).parents.insert(parent.to_string());
        Ok(added)
    }

    /// Children of `all`: every group except `all` itself, in first-seen order.
    pub fn all_children(&self) -> impl Iterator<Item = &str> {
        self.groups
            .keys()
            .map(String::as_str)
            .filter(|name| *name != ALL_GROUP)
    }

    /// Groups listing `host` as a direct member, in declaration order.
    pub fn groups_of(&self, host: &str) -> impl Iterator<Item = &Group> + '_ {
        let host = host.to_string();
        self.groups
            .values()
            .filter(move |group| group.hosts.contains(&host))
    }

    /// Every ancestor of `group` reachable through recorded parents.
    ///
    /// The implicit `all` is not included.
    pub fn ancestors(&self, group: &str) -> IndexSet<String> {
        let mut seen = IndexSet::new();
        let mut stack: Vec<&str> = vec![group];
        while let Some(current) = stack.pop() {
            let Some(g) = self.groups.get(current) else {
                continue;
            };
            for parent in &g.parents {
                if seen.insert(parent.clone()) {
                    stack.push(parent);
                }
            }
        }
        seen
    }

    /// Distance from `all`: 0 for `all`, 1 for groups without a recorded
    /// parent, otherwise one more than the deepest parent.
    pub fn depth(&self, group: &str) -> usize {
        self.depth_in(group, &mut HashMap::new())
    }

    /// [`depth`](Self::depth) of every group, each computed once.
    pub fn depths(&self) -> HashMap<String, usize> {
        let mut memo = HashMap::with_capacity(self.groups.len());
        for name in self.groups.keys() {
            let depth = self.depth_in(name, &mut memo);
            memo.insert(name.clone(), depth);
        }
        memo
    }

    fn depth_in(&self, group: &str, memo: &mut HashMap<String, usize>) -> usize {
        if group == ALL_GROUP {
            return 0;
        }
        if let Some(&depth) = memo.get(group) {
            return depth;
        }
        let depth = match self.groups.get(group) {
            Some(g) => {
                1 + g
                    .parents
                    .iter()
                    .map(|parent| self.depth_in(parent, memo))
                    .max()
                    .unwrap_or(0)
            }
            None => 1,
        };
        memo.insert(group.to_string(), depth);
        depth
    }

    /// Put every host without a group into `ungrouped`.
    pub fn place_orphans(&mut self) {
        let orphans: Vec<String> = self
            .hosts
            .keys()
            .filter(|host| self.groups_of(host).next().is_none())
            .cloned()
            .collect();
        if orphans.is_empty() {
            return;
        }
        let ungrouped = self.ensure_group(UNGROUPED_GROUP);
        for host in orphans {
            ungrouped.hosts.insert(host);
        }
    }

    /// Named groups, excluding `all` and `ungrouped`.
    pub fn named_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values().filter(|group| !group.is_builtin())
    }

    /// Path `from -> ... -> to` along child edges, if one exists.
    fn descent_path(&self, from: &str, to: &str) -> Option<Vec<String>> {
        let mut visited = IndexSet::new();
        self.descend(from, to, &mut visited)
    }

    fn descend<'a>(
        &'a self,
        from: &'a str,
        to: &str,
        visited: &mut IndexSet<&'a str>,
    ) -> Option<Vec<String>> {
        if from == to {
            return Some(vec![to.to_string()]);
        }
        if !visited.insert(from) {
            return None;
        }
        let group = self.groups.get(from)?;
        for child in &group.children {
            if let Some(mut rest) = self.descend(child, to, visited) {
                rest.insert(0, from.to_string());
                return Some(rest);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
