//! `--host` lookup specs
//!
//! Verify merged host variables and the unknown host contract.

use crate::prelude::*;

#[test]
fn unknown_host_is_empty_object() {
    let project = Project::with_inventory("[web]\nweb1\n");
    project
        .dyninv()
        .args(&["--host", "doesnotexist"])
        .passes()
        .stdout_eq("{}\n");
}

#[test]
fn host_value_wins_over_group_value() {
    let project = Project::with_inventory("[g]\nsw1 role=override\n[g:vars]\nrole=switch\n");
    let json = project.dyninv().args(&["-H", "sw1"]).passes().stdout_json();
    assert_eq!(json, serde_json::json!({"role": "override"}));
}

#[test]
fn group_and_parent_vars_are_merged() {
    let project = Project::with_inventory(
        "[web]\nweb1 port=80\n[web:vars]\ntier=web\n[prod:children]\nweb\n[prod:vars]\ntier=prod\nregion=eu\n[all:vars]\nntp=pool\n",
    );
    let json = project.dyninv().args(&["--host", "web1"]).passes().stdout_json();
    assert_eq!(
        json,
        serde_json::json!({"ntp": "pool", "tier": "web", "region": "eu", "port": "80"})
    );
}

#[test]
fn value_less_token_is_empty_string() {
    let project = Project::with_inventory("host1 flag\n");
    project
        .dyninv()
        .args(&["--host", "host1"])
        .passes()
        .stdout_eq("{\n  \"flag\": \"\"\n}\n");
}

#[test]
fn values_stay_strings() {
    let project = Project::with_inventory("h1 port=22 enabled=true\n");
    let json = project.dyninv().args(&["--host", "h1"]).passes().stdout_json();
    assert_eq!(json, serde_json::json!({"port": "22", "enabled": "true"}));
}
