// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Group table construction from classified lines.
//!
//! Lines are fed in file order. Hosts before the first header land in
//! `ungrouped`; afterwards each body line is read according to the kind of
//! the most recent header. Nothing in here aborts: odd lines are absorbed
//! by the active section and structural problems become [`Warning`]s.

use crate::entry::{parse_assignment_line, parse_entry};
use crate::line::{classify_line, Line, SectionKind};
use crate::range::{HostExpander, RangeExpander};
use crate::warning::Warning;
use dyninv_core::{Inventory, META_KEY, UNGROUPED_GROUP};
use indexmap::IndexSet;

/// A fully built inventory and what was tolerated along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub inventory: Inventory,
    pub warnings: Vec<Warning>,
}

/// Which body the parser is currently reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseContext {
    /// Before any section header.
    Ungrouped,
    Hosts(String),
    Children(String),
    Vars(String),
    /// Body of an ignored header; its lines are dropped.
    Skipped,
}

/// A `:children` line, checked once the whole file has been seen.
#[derive(Debug)]
struct ChildRef {
    line: usize,
    parent: String,
    child: String,
}

/// Accumulates groups, hosts, and variables line by line.
pub struct InventoryBuilder {
    inventory: Inventory,
    context: ParseContext,
    expander: Box<dyn HostExpander>,
    declared: IndexSet<String>,
    child_refs: Vec<ChildRef>,
    warnings: Vec<Warning>,
    line: usize,
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryBuilder {
    /// Builder that expands host ranges.
    pub fn new() -> Self {
        Self::with_expander(Box::new(RangeExpander))
    }

    pub fn with_expander(expander: Box<dyn HostExpander>) -> Self {
        Self {
            inventory: Inventory::new(),
            context: ParseContext::Ungrouped,
            expander,
            declared: IndexSet::new(),
            child_refs: Vec::new(),
            warnings: Vec::new(),
            line: 0,
        }
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    /// Feed the next line of the file.
    pub fn feed_line(&mut self, raw: &str) {
        self.line += 1;
        match classify_line(raw) {
            Line::Blank => {}
            Line::Section {
                name,
                kind,
                terminated,
            } => self.open_section(name, kind, terminated),
            Line::Entry(text) => self.absorb_entry(text),
        }
    }

    /// Feed every line of `content`.
    pub fn feed_str(&mut self, content: &str) {
        for raw in content.lines() {
            self.feed_line(raw);
        }
    }

    /// Resolve deferred checks and hand back the inventory.
    pub fn finish(mut self) -> Parsed {
        let mut reported = IndexSet::new();
        for child_ref in std::mem::take(&mut self.child_refs) {
            if self.declared.contains(&child_ref.child)
                || !reported.insert((child_ref.parent.clone(), child_ref.child.clone()))
            {
                continue;
            }
            self.warn(Warning::UnknownChildGroup {
                line: child_ref.line,
                parent: child_ref.parent,
                child: child_ref.child,
            });
        }

        self.inventory.place_orphans();
        tracing::debug!(
            groups = self.inventory.named_groups().count(),
            hosts = self.inventory.hosts().count(),
            warnings = self.warnings.len(),
            "inventory built"
        );
        Parsed {
            inventory: self.inventory,
            warnings: self.warnings,
        }
    }

    fn open_section(&mut self, name: &str, kind: SectionKind, terminated: bool) {
        let line = self.line;
        if !terminated {
            self.warn(Warning::UnterminatedSection { line });
        }
        if name.is_empty() {
            self.warn(Warning::EmptySectionName { line });
            self.context = ParseContext::Skipped;
            return;
        }
        if name == META_KEY {
            self.warn(Warning::ReservedGroupName {
                line,
                name: name.to_string(),
            });
            self.context = ParseContext::Skipped;
            return;
        }

        self.inventory.ensure_group(name);
        self.declared.insert(name.to_string());
        tracing::debug!(line, group = name, kind = ?kind, "section");

        self.context = match kind {
            SectionKind::Hosts => ParseContext::Hosts(name.to_string()),
            SectionKind::Children => ParseContext::Children(name.to_string()),
            SectionKind::Vars => ParseContext::Vars(name.to_string()),
            SectionKind::Unknown(kind) => {
                self.warn(Warning::UnknownSectionKind {
                    line,
                    group: name.to_string(),
                    kind,
                });
                ParseContext::Hosts(name.to_string())
            }
        };
    }

    fn absorb_entry(&mut self, text: &str) {
        match self.context.clone() {
            ParseContext::Ungrouped => self.add_hosts(UNGROUPED_GROUP, text),
            ParseContext::Hosts(group) => self.add_hosts(&group, text),
            ParseContext::Vars(group) => {
                let vars = parse_assignment_line(text);
                self.inventory.ensure_group(&group).merge_vars(&vars);
            }
            ParseContext::Children(group) => self.add_child(&group, text),
            ParseContext::Skipped => {
                tracing::debug!(line = self.line, "dropping line under ignored header");
            }
        }
    }

    fn add_hosts(&mut self, group: &str, text: &str) {
        let entry = parse_entry(text);
        match self.expander.expand(&entry.name) {
            Ok(pattern) => {
                for host in &pattern {
                    self.inventory.add_host(group, &host).merge_vars(&entry.vars);
                }
            }
            Err(reason) => {
                self.warn(Warning::InvalidRange {
                    line: self.line,
                    pattern: entry.name.clone(),
                    reason,
                });
                self.inventory
                    .add_host(group, &entry.name)
                    .merge_vars(&entry.vars);
            }
        }
    }

    fn add_child(&mut self, parent: &str, text: &str) {
        let entry = parse_entry(text);
        if !entry.vars.is_empty() {
            tracing::debug!(
                line = self.line,
                group = parent,
                child = %entry.name,
                "ignoring trailing tokens on child group line"
            );
        }
        let child = entry.name;
        if child == META_KEY {
            self.warn(Warning::ReservedGroupName {
                line: self.line,
                name: child,
            });
            return;
        }
        if let Err(cycle) = self.inventory.add_child(parent, &child) {
            self.warn(Warning::ParentCycle {
                line: self.line,
                path: cycle.path,
            });
            return;
        }
        self.child_refs.push(ChildRef {
            line: self.line,
            parent: parent.to_string(),
            child,
        });
    }

    fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Parse inventory text with range expansion.
pub fn parse_inventory(content: &str) -> Parsed {
    let mut builder = InventoryBuilder::new();
    builder.feed_str(content);
    builder.finish()
}

/// Parse inventory text with a specific host expander.
pub fn parse_inventory_with(content: &str, expander: Box<dyn HostExpander>) -> Parsed {
    let mut builder = InventoryBuilder::with_expander(expander);
    builder.feed_str(content);
    builder.finish()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
