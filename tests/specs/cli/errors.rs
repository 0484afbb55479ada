//! CLI error handling specs
//!
//! Verify messages and exit codes for bad arguments and unreadable files.

use crate::prelude::*;

#[test]
fn unknown_option_reports_on_stdout() {
    let project = Project::with_inventory("h1\n");
    project
        .dyninv()
        .args(&["--bogus"])
        .fails()
        .stdout_has("Error: unknown option '--bogus'")
        .stdout_has("Usage: dyninv")
        .stdout_lacks("{");
}

#[test]
fn unknown_short_option_reports_on_stdout() {
    cli()
        .args(&["-z"])
        .fails()
        .stdout_has("Error: unknown option '-z'");
}

#[test]
fn host_without_name_is_usage_error() {
    cli()
        .args(&["--host"])
        .fails()
        .stdout_has("--host")
        .stdout_has("Usage: dyninv");
}

#[test]
fn list_and_host_together_is_usage_error() {
    let project = Project::with_inventory("h1\n");
    project
        .dyninv()
        .args(&["--list", "--host", "h1"])
        .fails()
        .stdout_has("Usage: dyninv");
}

#[test]
fn missing_inventory_fails_without_output() {
    let project = Project::empty();
    project
        .dyninv()
        .args(&["--list"])
        .fails()
        .stdout_eq("")
        .stderr_has("Error: failed to read inventory 'hosts.ini': ");
}

#[test]
fn missing_inventory_fails_for_host_lookup() {
    let project = Project::empty();
    project
        .dyninv()
        .args(&["--host", "web1"])
        .fails()
        .stdout_eq("")
        .stderr_has("failed to read inventory");
}
