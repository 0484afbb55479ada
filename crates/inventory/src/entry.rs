// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry parsing: `name key=value key2=value2`

use dyninv_core::Vars;
use serde_json::Value;

/// A parsed entry line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub name: String,
    pub vars: Vars,
}

/// Parse an entry line into its leading name and `key=value` tokens.
///
/// The first whitespace-delimited token is always the name, even if it
/// contains `=`. A token without `=` is stored with an empty value.
/// Duplicate keys keep the last value.
pub fn parse_entry(raw: &str) -> Entry {
    let mut tokens = raw.split_whitespace();
    let name = tokens.next().unwrap_or_default().to_string();
    Entry {
        name,
        vars: parse_assignments(tokens),
    }
}

/// Parse a `key=value` line from a `:vars` body.
///
/// Unlike host lines there is no leading name: every token is an
/// assignment.
pub fn parse_assignment_line(raw: &str) -> Vars {
    parse_assignments(raw.split_whitespace())
}

fn parse_assignments<'a>(tokens: impl Iterator<Item = &'a str>) -> Vars {
    let mut vars = Vars::new();
    for token in tokens {
        let (key, value) = token.split_once('=').unwrap_or((token, ""));
        vars.insert(key.to_string(), Value::String(value.to_string()));
    }
    vars
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
