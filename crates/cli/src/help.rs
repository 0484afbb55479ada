// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage text.
//!
//! Help is rendered by clap from a fixed template with `Styles::plain()`, so
//! the same text can be printed for `--help`, for a bare invocation and
//! after a usage error without escape codes reaching a JSON consumer.

use clap::builder::styling::Styles;
use clap::Command;

pub fn styles() -> Styles {
    Styles::plain()
}

/// Main help template.
pub fn template() -> String {
    "{about-with-newline}\n{usage-heading} {usage}\n\nOptions:\n{options}{after-help}".to_string()
}

/// Environment section shown after the options.
pub fn after_help() -> String {
    "\
Environment:
  DYNINV_INVENTORY  Inventory file when --inventory is not given
  DYNINV_LOG        Diagnostic filter for stderr (default: warn)"
        .to_string()
}

/// Render help for `cmd`, always ending in a newline.
pub fn format_help(cmd: Command) -> String {
    let mut cmd = cmd.styles(styles());
    let help = cmd.render_help().to_string();
    if help.ends_with('\n') {
        help
    } else {
        format!("{}\n", help)
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
