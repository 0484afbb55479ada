//! group_vars/ and host_vars/ specs

use crate::prelude::*;

#[test]
fn group_vars_file_sets_group_vars() {
    let project = Project::with_inventory("[web]\nweb1\n");
    project.file("group_vars/web.yml", "env: prod\nport: 8080\n");
    let json = project.dyninv().args(&["--list"]).passes().stdout_json();
    assert_eq!(
        json["web"]["vars"],
        serde_json::json!({"env": "prod", "port": 8080})
    );
}

#[test]
fn host_vars_file_sets_host_vars() {
    let project = Project::with_inventory("[web]\nweb1 port=80\n");
    project.file("host_vars/web1.json", r#"{"port": 8080, "tags": ["a", "b"]}"#);
    let json = project.dyninv().args(&["--host", "web1"]).passes().stdout_json();
    assert_eq!(json, serde_json::json!({"port": 8080, "tags": ["a", "b"]}));
}

#[test]
fn vars_files_can_be_disabled() {
    let project = Project::with_inventory("[web]\nweb1\n");
    project.file("group_vars/web.yml", "env: prod\n");
    project
        .dyninv()
        .args(&["--host", "web1", "--no-vars-dirs"])
        .passes()
        .stdout_eq("{}\n");
}

#[test]
fn invalid_vars_file_is_skipped_with_warning() {
    let project = Project::with_inventory("[web]\nweb1\n");
    project.file("group_vars/web.yml", "- not\n- a mapping\n");
    project
        .dyninv()
        .args(&["--host", "web1"])
        .passes()
        .stdout_eq("{}\n")
        .stderr_has("web.yml");
}
