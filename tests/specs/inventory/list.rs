//! `--list` output specs
//!
//! Verify the exact JSON document shape and its stability.

use crate::prelude::*;

#[test]
fn empty_file_lists_skeleton() {
    let project = Project::with_inventory("");
    project.dyninv().args(&["--list"]).passes().stdout_eq(
        r#"{
  "_meta": {
    "hostvars": {}
  },
  "all": {
    "children": [
      "ungrouped"
    ]
  },
  "ungrouped": {
    "hosts": []
  }
}
"#,
    );
}

#[test]
fn children_and_vars_sections() {
    let project =
        Project::with_inventory("[web]\nweb1\nweb2\n[web:vars]\nenv=prod\n[prod:children]\nweb\n");
    project.dyninv().args(&["-l"]).passes().stdout_eq(
        r#"{
  "_meta": {
    "hostvars": {
      "web1": {},
      "web2": {}
    }
  },
  "all": {
    "children": [
      "ungrouped",
      "web",
      "prod"
    ]
  },
  "ungrouped": {
    "hosts": []
  },
  "web": {
    "hosts": [
      "web1",
      "web2"
    ],
    "vars": {
      "env": "prod"
    }
  },
  "prod": {
    "children": [
      "web"
    ]
  }
}
"#,
    );
}

#[test]
fn hosts_before_first_section_are_ungrouped() {
    let project = Project::with_inventory("bastion ansible_port=2222 jump\n[web]\nweb1\n");
    let out = project.dyninv().args(&["--list"]).passes();
    let json = out.stdout_json();
    assert_eq!(json["ungrouped"]["hosts"], serde_json::json!(["bastion"]));
    assert_eq!(
        json["_meta"]["hostvars"]["bastion"],
        serde_json::json!({"ansible_port": "2222", "jump": ""})
    );
}

#[test]
fn every_group_is_under_all() {
    let project = Project::with_inventory(
        "[web]\nweb1\n[db]\ndb1\n[eu:children]\nweb\ndb\n[eu:vars]\nregion=eu\n",
    );
    let json = project.dyninv().args(&["--list"]).passes().stdout_json();
    assert_eq!(
        json["all"]["children"],
        serde_json::json!(["ungrouped", "web", "db", "eu"])
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let project = Project::with_inventory("# fleet\n\n; legacy\n[web]\n\nweb1\n# end\n");
    let json = project.dyninv().args(&["--list"]).passes().stdout_json();
    assert_eq!(json["web"]["hosts"], serde_json::json!(["web1"]));
}

#[test]
fn listing_is_byte_identical_across_runs() {
    let project = Project::with_inventory(
        "z1 b=2 a=1\n[zeta]\nz2\n[alpha]\na1\n[alpha:vars]\nk=v\n[all:vars]\nntp=pool\n",
    );
    let first = project.dyninv().args(&["--list"]).passes().stdout();
    let second = project.dyninv().args(&["--list"]).passes().stdout();
    similar_asserts::assert_eq!(first, second);
}
