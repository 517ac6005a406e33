//! End-to-end CLI tests
//!
//! Only the offline surface is exercised: id, rm, and add with
//! fully-specified coordinates (which never touch the network).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pomup(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomup").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn read_pom(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("pom.xml")).unwrap()
}

#[test]
fn id_creates_manifest_and_prints_id() {
    let dir = TempDir::new().unwrap();

    pomup(&dir)
        .args(["id", "com.acme:app:1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jar com.acme:app:1.0.0"));

    let pom = read_pom(&dir);
    assert!(pom.contains("<groupId>com.acme</groupId>"));
    assert!(pom.contains("<artifactId>app</artifactId>"));
    assert!(pom.contains("<version>1.0.0</version>"));
}

#[test]
fn id_without_manifest_fails() {
    let dir = TempDir::new().unwrap();

    pomup(&dir)
        .arg("id")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such file"));
}

#[test]
fn id_sets_packaging() {
    let dir = TempDir::new().unwrap();

    pomup(&dir)
        .args(["id", "--as", "pom", "com.acme:parent:1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pom com.acme:parent:1.0.0"));

    assert!(read_pom(&dir).contains("<packaging>pom</packaging>"));
}

#[test]
fn id_standalone_sets_default_properties() {
    let dir = TempDir::new().unwrap();

    pomup(&dir)
        .args(["id", "-s", "app"])
        .env("POMUP_DEFAULT_GROUP_ID", "org.testing")
        .assert()
        .success()
        .stdout(predicate::str::contains("jar org.testing:app:0.0.1-SNAPSHOT"));

    let pom = read_pom(&dir);
    assert!(pom.contains("<project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>"));
}

#[test]
fn id_inherits_aggregator_ancestor() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pom.xml"),
        r#"<project>
             <groupId>org.example</groupId>
             <artifactId>demo-parent</artifactId>
             <version>1.0.0</version>
             <packaging>pom</packaging>
           </project>"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("app")).unwrap();

    pomup(&dir)
        .args(["-f", "app/pom.xml", "id", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jar org.example:app:1.0.0"));

    let pom = fs::read_to_string(dir.path().join("app").join("pom.xml")).unwrap();
    assert!(pom.contains("<parent>"));
    assert!(pom.contains("<artifactId>demo-parent</artifactId>"));
    // version is inherited from the parent
    assert!(!pom.contains("<version>0.0.1-SNAPSHOT</version>"));
}

#[test]
fn add_fully_specified_writes_dependency() {
    let dir = TempDir::new().unwrap();

    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();

    pomup(&dir)
        .args(["add", "org.slf4j:slf4j-api:2.0.17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("org.slf4j:slf4j-api:2.0.17 added"));

    let pom = read_pom(&dir);
    assert!(pom.contains("<dependencies>"));
    assert!(pom.contains("<artifactId>slf4j-api</artifactId>"));
    assert!(pom.contains("<version>2.0.17</version>"));
}

#[test]
fn add_creates_manifest_when_missing() {
    let dir = TempDir::new().unwrap();

    pomup(&dir)
        .args(["add", "org.slf4j:slf4j-api:2.0.17"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist. Creating a new one"));

    assert!(dir.path().join("pom.xml").exists());
}

#[test]
fn add_test_scope_is_written() {
    let dir = TempDir::new().unwrap();
    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();

    pomup(&dir)
        .args(["add", "-t", "org.junit.jupiter:junit-jupiter:5.11.0"])
        .assert()
        .success();

    assert!(read_pom(&dir).contains("<scope>test</scope>"));
}

#[test]
fn add_import_scope_goes_to_managed_set() {
    let dir = TempDir::new().unwrap();
    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();

    pomup(&dir)
        .args(["add", "-i", "org.junit:junit-bom:5.11.0"])
        .assert()
        .success();

    let pom = read_pom(&dir);
    assert!(pom.contains("<dependencyManagement>"));
    assert!(pom.contains("<type>pom</type>"));
    assert!(pom.contains("<scope>import</scope>"));
}

#[test]
fn add_duplicate_is_rejected() {
    let dir = TempDir::new().unwrap();
    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();

    pomup(&dir)
        .args(["add", "org.slf4j:slf4j-api:2.0.17"])
        .assert()
        .success();

    pomup(&dir)
        .args(["add", "org.slf4j:slf4j-api:2.0.17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate artifact(s)"));
}

#[test]
fn add_optional_rejected_for_pom_packaging() {
    let dir = TempDir::new().unwrap();
    pomup(&dir)
        .args(["id", "-s", "--as", "pom", "com.acme:parent:1.0.0"])
        .assert()
        .success();

    pomup(&dir)
        .args(["add", "-o", "org.slf4j:slf4j-api:2.0.17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn add_exclusions_are_written() {
    let dir = TempDir::new().unwrap();
    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();

    pomup(&dir)
        .args([
            "add",
            "-e",
            "commons-logging",
            "org.springframework:spring-core:6.2.0",
        ])
        .assert()
        .success();

    let pom = read_pom(&dir);
    assert!(pom.contains("<exclusions>"));
    assert!(pom.contains("<groupId>*</groupId>"));
    assert!(pom.contains("<artifactId>commons-logging</artifactId>"));
}

#[test]
fn rm_removes_dependency() {
    let dir = TempDir::new().unwrap();
    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();
    pomup(&dir)
        .args(["add", "org.slf4j:slf4j-api:2.0.17"])
        .assert()
        .success();

    pomup(&dir)
        .args(["rm", "org.slf4j:slf4j-api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    assert!(!read_pom(&dir).contains("slf4j-api"));
}

#[test]
fn rm_unknown_dependency_warns() {
    let dir = TempDir::new().unwrap();
    pomup(&dir).args(["id", "-s", "com.acme:app:1.0.0"]).assert().success();

    pomup(&dir)
        .args(["rm", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not a dependency"));
}

#[test]
fn invalid_coordinate_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    pomup(&dir)
        .args(["add", "a:b:c:d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid coordinate"));
}
