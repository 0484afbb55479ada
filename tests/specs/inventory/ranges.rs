//! Host range expansion specs

use crate::prelude::*;

#[test]
fn numeric_range_keeps_padding() {
    let project = Project::with_inventory("[web]\nwww[01:03].example.com\n");
    let json = project.dyninv().args(&["--list"]).passes().stdout_json();
    assert_eq!(
        json["web"]["hosts"],
        serde_json::json!(["www01.example.com", "www02.example.com", "www03.example.com"])
    );
}

#[test]
fn letter_range_with_vars_applies_to_each_host() {
    let project = Project::with_inventory("db-[a:c] role=db\n");
    let json = project.dyninv().args(&["--list"]).passes().stdout_json();
    assert_eq!(
        json["ungrouped"]["hosts"],
        serde_json::json!(["db-a", "db-b", "db-c"])
    );
    assert_eq!(
        json["_meta"]["hostvars"]["db-b"],
        serde_json::json!({"role": "db"})
    );
}

#[test]
fn stepped_range() {
    let project = Project::with_inventory("www[01:06:2]\n");
    let json = project.dyninv().args(&["--list"]).passes().stdout_json();
    assert_eq!(
        json["ungrouped"]["hosts"],
        serde_json::json!(["www01", "www03", "www05"])
    );
}

#[test]
fn no_ranges_flag_keeps_names_literal() {
    let project = Project::with_inventory("www[01:03]\n");
    let json = project
        .dyninv()
        .args(&["--list", "--no-ranges"])
        .passes()
        .stdout_json();
    assert_eq!(json["ungrouped"]["hosts"], serde_json::json!(["www[01:03]"]));
}

#[test]
fn invalid_range_is_kept_with_warning() {
    let project = Project::with_inventory("web[5:1]\n");
    let out = project.dyninv().args(&["--list"]).passes();
    assert_eq!(
        out.stdout_json()["ungrouped"]["hosts"],
        serde_json::json!(["web[5:1]"])
    );
    out.stderr_has("line 1: host pattern 'web[5:1]' kept literally");
}
