//! CLI help output specs
//!
//! Verify usage text for bare and help invocations.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli()
        .passes()
        .stdout_has("Usage: dyninv")
        .stdout_has("-l, --list")
        .stdout_has("-H, --host <NAME>");
}

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage: dyninv");
}

#[test]
fn short_help_shows_usage() {
    cli().args(&["-h"]).passes().stdout_has("Usage: dyninv");
}

#[test]
fn help_lists_environment() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("DYNINV_INVENTORY")
        .stdout_has("DYNINV_LOG");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
