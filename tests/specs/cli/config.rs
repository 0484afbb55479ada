//! Inventory selection specs
//!
//! Verify the --inventory flag, DYNINV_INVENTORY and the hosts.ini default.

use crate::prelude::*;

#[test]
fn default_inventory_is_hosts_ini() {
    let project = Project::with_inventory("from_default\n");
    project
        .dyninv()
        .args(&["--list"])
        .passes()
        .stdout_has("\"from_default\"");
}

#[test]
fn env_selects_inventory() {
    let project = Project::with_inventory("from_default\n");
    project.file("inv/prod.ini", "from_env\n");
    project
        .dyninv()
        .env("DYNINV_INVENTORY", "inv/prod.ini")
        .args(&["--list"])
        .passes()
        .stdout_has("\"from_env\"")
        .stdout_lacks("from_default");
}

#[test]
fn flag_beats_env() {
    let project = Project::with_inventory("from_default\n");
    project.file("inv/prod.ini", "from_env\n");
    project.file("site.ini", "from_flag\n");
    project
        .dyninv()
        .env("DYNINV_INVENTORY", "inv/prod.ini")
        .args(&["-i", "site.ini", "--list"])
        .passes()
        .stdout_has("\"from_flag\"")
        .stdout_lacks("from_env");
}

#[test]
fn vars_dirs_sit_next_to_selected_inventory() {
    let project = Project::empty();
    project.file("inv/prod.ini", "[web]\nweb1\n");
    project.file("inv/group_vars/web.yml", "env: prod\n");
    let out = project
        .dyninv()
        .args(&["-i", "inv/prod.ini", "--host", "web1"])
        .passes();
    assert_eq!(out.stdout_json(), serde_json::json!({"env": "prod"}));
}
