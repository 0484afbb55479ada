// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification for the INI inventory dialect

/// What a `[name:kind]` header opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// `[name]`: host entries
    Hosts,
    /// `[name:children]`: child group names
    Children,
    /// `[name:vars]`: group variable assignments
    Vars,
    /// `[name:<other>]`: read as a host section
    Unknown(String),
}

impl SectionKind {
    fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "children" => SectionKind::Children,
            "vars" => SectionKind::Vars,
            other => SectionKind::Unknown(other.to_string()),
        }
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Section {
        name: &'a str,
        kind: SectionKind,
        /// False when the closing `]` was missing.
        terminated: bool,
    },
    /// Empty or comment line.
    Blank,
    Entry(&'a str),
}

/// Classify a single line (trailing newline already removed).
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Line::Blank;
    }

    let Some(header) = line.strip_prefix('[') else {
        return Line::Entry(line);
    };

    let (inner, terminated) = match header.find(']') {
        Some(end) => (&header[..end], true),
        None => (header, false),
    };
    let (name, kind) = match inner.split_once(':') {
        Some((name, suffix)) => (name.trim(), SectionKind::from_suffix(suffix.trim())),
        None => (inner.trim(), SectionKind::Hosts),
    };

    Line::Section {
        name,
        kind,
        terminated,
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
