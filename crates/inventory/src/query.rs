// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The two read operations an orchestration tool asks of an inventory
//! source: the full listing and the variables of one host.

use dyninv_core::{merge_vars, Inventory, Vars, ALL_GROUP, UNGROUPED_GROUP};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// `_meta` block of a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    pub hostvars: IndexMap<String, Vars>,
}

/// One group as it appears in a listing. Empty parts are omitted, except
/// `ungrouped.hosts` and `all.children` which are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vars::is_empty")]
    pub vars: Vars,
}

/// The `--list` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    #[serde(flatten)]
    pub groups: IndexMap<String, GroupListing>,
}

/// Map the whole inventory into the listing shape.
///
/// `_meta.hostvars` carries every host's own variables; group variables
/// stay on their groups.
pub fn list(inventory: &Inventory) -> Listing {
    let hostvars = inventory
        .hosts()
        .map(|host| (host.name.clone(), host.vars.clone()))
        .collect();

    let mut groups = IndexMap::new();
    for group in inventory.groups() {
        let (hosts, children) = match group.name.as_str() {
            ALL_GROUP => (
                None,
                Some(inventory.all_children().map(str::to_string).collect()),
            ),
            UNGROUPED_GROUP => (Some(group.hosts.iter().cloned().collect()), None),
            _ => (non_empty(&group.hosts), non_empty(&group.children)),
        };
        groups.insert(
            group.name.clone(),
            GroupListing {
                hosts,
                children,
                vars: group.vars.clone(),
            },
        );
    }

    Listing {
        meta: Meta { hostvars },
        groups,
    }
}

/// Variables for one host, merged from every group it belongs to.
///
/// Groups apply from `all` down, parents before children and ties in
/// declaration order; the host's own variables apply last. An unknown host
/// yields an empty mapping.
pub fn host_vars(inventory: &Inventory, host: &str) -> Vars {
    let Some(record) = inventory.host(host) else {
        return Vars::new();
    };

    let mut member_of: IndexSet<String> = IndexSet::new();
    member_of.insert(ALL_GROUP.to_string());
    for group in inventory.groups_of(host) {
        member_of.insert(group.name.clone());
        member_of.extend(inventory.ancestors(&group.name));
    }

    let depths = inventory.depths();
    let mut ordered: Vec<(usize, usize, &str)> = member_of
        .iter()
        .map(|name| {
            (
                depths.get(name).copied().unwrap_or(0),
                inventory.group_index(name).unwrap_or(usize::MAX),
                name.as_str(),
            )
        })
        .collect();
    ordered.sort();

    let mut vars = Vars::new();
    for (_, _, name) in ordered {
        if let Some(group) = inventory.group(name) {
            merge_vars(&mut vars, &group.vars);
        }
    }
    merge_vars(&mut vars, &record.vars);
    vars
}

fn non_empty(names: &IndexSet<String>) -> Option<Vec<String>> {
    if names.is_empty() {
        None
    } else {
        Some(names.iter().cloned().collect())
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
