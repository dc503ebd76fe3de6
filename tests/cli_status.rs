//! `fanout status` end to end.

mod common;

use common::{git_available, init_git_repo, make_dirty, Fixture};
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let fixture = Fixture::new();
    fixture
        .fanout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("broadcast"));
}

#[test]
fn test_version_flag() {
    let fixture = Fixture::new();
    fixture
        .fanout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("target: "));
}

#[test]
fn test_missing_config_is_fatal() {
    let fixture = Fixture::new();
    fixture
        .fanout()
        .args(["status", "p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_profile_is_fatal() {
    let fixture = Fixture::new();
    fixture.write_config("");
    fixture
        .fanout()
        .args(["status", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile with name nope"));
}

#[test]
fn test_missing_root_is_fatal() {
    let fixture = Fixture::new();
    fixture.write_config("");
    std::fs::remove_dir(fixture.root()).unwrap();

    fixture
        .fanout()
        .args(["status", "p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository discovery failed"));
}

#[test]
fn test_empty_root_reports_nothing() {
    let fixture = Fixture::new();
    fixture.write_config("");
    fixture
        .fanout()
        .args(["status", "p"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    fixture
        .fanout()
        .args(["status", "p", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_status_of_clean_and_dirty_repositories() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let fixture = Fixture::new();
    fixture.write_config("");
    let clean = fixture.root().join("alpha");
    let dirty = fixture.root().join("beta");
    init_git_repo(&clean);
    init_git_repo(&dirty);
    make_dirty(&dirty);

    fixture
        .fanout()
        .args(["status", "p"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Project {} Overview (Branch main):\n - Project state is clean: true",
            clean.display()
        )))
        .stdout(predicate::str::contains(format!(
            "Project {} Overview (Branch main):\n - Project state is clean: false",
            dirty.display()
        )))
        .stdout(predicate::str::contains("modified:   README.md"));
}

#[test]
fn test_status_json_respects_filter() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let fixture = Fixture::new();
    fixture.write_config("beta");
    init_git_repo(&fixture.root().join("alpha"));
    init_git_repo(&fixture.root().join("beta"));

    let output = fixture
        .fanout()
        .args(["status", "p", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0]["path"].as_str().unwrap().ends_with("beta"));
    assert_eq!(reports[0]["branch"], "main");
    assert_eq!(reports[0]["clean"], true);
    assert!(reports[0].get("status").is_none());
}
