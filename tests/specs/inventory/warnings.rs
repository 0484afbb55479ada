//! Structural warning specs
//!
//! Warnings reach stderr while stdout stays a valid document.

use crate::prelude::*;

#[test]
fn parent_cycle_is_refused_with_warning() {
    let project = Project::with_inventory("[a:children]\nb\n[b:children]\na\n");
    let out = project.dyninv().args(&["--list"]).passes();
    let json = out.stdout_json();
    assert_eq!(json["a"]["children"], serde_json::json!(["b"]));
    assert!(json["b"].get("children").is_none());
    out.stderr_has("line 4: group cycle b -> a -> b; edge ignored");
}

#[test]
fn undeclared_child_group_is_created_with_warning() {
    let project = Project::with_inventory("[prod:children]\nweb\n");
    let out = project.dyninv().args(&["--list"]).passes();
    let json = out.stdout_json();
    assert_eq!(json["prod"]["children"], serde_json::json!(["web"]));
    assert_eq!(
        json["all"]["children"],
        serde_json::json!(["ungrouped", "prod", "web"])
    );
    out.stderr_has("'prod' lists child group 'web' which is never declared");
}

#[test]
fn log_filter_silences_warnings() {
    let project = Project::with_inventory("[a:children]\nb\n[b:children]\na\n");
    project
        .dyninv()
        .env("DYNINV_LOG", "error")
        .args(&["--list"])
        .passes()
        .stderr_eq("");
}

#[test]
fn clean_inventory_writes_nothing_to_stderr() {
    let project = Project::with_inventory("[web]\nweb1\n");
    project.dyninv().args(&["--list"]).passes().stderr_eq("");
}

#[test]
fn meta_section_is_ignored_with_warning() {
    let project = Project::with_inventory("h0 a=1\n[_meta]\nh1\n");
    let out = project.dyninv().args(&["--list"]).passes();
    let json = out.stdout_json();
    assert_eq!(json["_meta"]["hostvars"]["h0"]["a"], "1");
    assert!(json["_meta"]["hostvars"].get("h1").is_none());
    out.stderr_has("line 2: group name '_meta' is reserved; ignored");
}

#[test]
fn empty_section_name_drops_its_body() {
    let project = Project::with_inventory("[web]\nweb1\n[]\nstray\n");
    let out = project.dyninv().args(&["--list"]).passes();
    let json = out.stdout_json();
    assert_eq!(json["web"]["hosts"], serde_json::json!(["web1"]));
    assert!(json["_meta"]["hostvars"].get("stray").is_none());
    out.stderr_has("line 3: section header has no group name; section and its body ignored");
}
