//! Integration tests for the plan command

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn artifetch_cmd() -> Command {
    Command::cargo_bin("artifetch").unwrap()
}

fn scratch() -> TempDir {
    TempDir::new().unwrap()
}

#[test]
fn test_plan_shows_coordinate_and_candidates() {
    let temp = scratch();
    artifetch_cmd()
        .current_dir(temp.path())
        .args([
            "plan",
            "org.slf4j:slf4j-api:2.0.13",
            "-r",
            "central::default::https://repo.maven.apache.org/maven2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("org.slf4j"))
        .stdout(predicate::str::contains("slf4j-api"))
        .stdout(predicate::str::contains(
            "https://repo.maven.apache.org/maven2/org/slf4j/slf4j-api/2.0.13/slf4j-api-2.0.13.jar",
        ));
}

#[test]
fn test_plan_classifier_in_candidate_path() {
    let temp = scratch();
    artifetch_cmd()
        .current_dir(temp.path())
        .args([
            "plan",
            "org.slf4j:slf4j-api:2.0.13:jar:sources",
            "-r",
            "https://repo.maven.apache.org/maven2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("slf4j-api-2.0.13-sources.jar"));
}

#[test]
fn test_plan_packaging_drives_extension() {
    let temp = scratch();
    let output = artifetch_cmd()
        .current_dir(temp.path())
        .args([
            "plan",
            "org.example:thing:1.2:maven-plugin",
            "-r",
            "https://repo.example.com",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["coordinate"]["packaging"], "maven-plugin");
    assert_eq!(value["coordinate"]["extension"], "jar");
    assert_eq!(
        value["candidates"][0]["url"],
        "https://repo.example.com/org/example/thing/1.2/thing-1.2.jar"
    );
}

#[test]
fn test_plan_json_lists_repositories_in_order() {
    let temp = scratch();
    let output = artifetch_cmd()
        .current_dir(temp.path())
        .args([
            "plan",
            "org.example:thing:1.2",
            "-r",
            "http://x, id2::default::http://y",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let repositories = value["repositories"].as_array().unwrap();
    assert_eq!(repositories.len(), 2);
    assert_eq!(repositories[0]["url"], "http://x");
    assert_eq!(repositories[1]["url"], "http://y");
    assert_eq!(value["candidates"].as_array().unwrap().len(), 2);
}

#[test]
fn test_plan_invalid_coordinate_fails() {
    let temp = scratch();
    artifetch_cmd()
        .current_dir(temp.path())
        .args(["plan", "org.example:thing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinate"))
        .stderr(predicate::str::contains("org.example:thing"));
}

#[test]
fn test_plan_invalid_repository_fails_before_output() {
    let temp = scratch();
    artifetch_cmd()
        .current_dir(temp.path())
        .args(["plan", "org.example:thing:1.2", "-r", "bad::spec"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad::spec"));
}

#[test]
fn test_plan_with_no_repositories() {
    let temp = scratch();
    artifetch_cmd()
        .current_dir(temp.path())
        .args(["plan", "org.example:thing:1.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories configured"));
}
