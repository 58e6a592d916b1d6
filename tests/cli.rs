use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn hicache(cache_file: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hicache"));
    cmd.arg("--cache-file").arg(cache_file);
    cmd
}

#[test]
fn build_writes_the_cache_file() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("data").join("cache.json");

    hicache(&cache_file)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("keys"));

    assert!(cache_file.is_file());
}

#[test]
fn path_prints_the_resolved_location() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("cache.json"));
}

#[test]
fn first_lookup_announces_the_cold_start() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file)
        .args(["lookup", "lexers", "my.py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("building lookup cache"))
        .stdout(predicate::str::contains("PythonLexer"));

    // Warm runs stay silent.
    hicache(&cache_file)
        .args(["lookup", "lexers", "my.py"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn lookup_emits_json_with_identity() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file).arg("build").assert().success();

    let assert = hicache(&cache_file)
        .args(["--format", "json", "lookup", "lexers", ".yaml"])
        .assert()
        .success();
    let line: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(line["namespace"], "lexers.data");
    assert_eq!(line["ident"], "YamlLexer");
    assert_eq!(line["cached"], true);
}

#[test]
fn lookup_resolves_formatter_names_and_filenames() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file)
        .args(["--no-color", "lookup", "formatters", "latex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LatexFormatter"));

    hicache(&cache_file)
        .args(["--no-color", "lookup", "formatters", "readme.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NullFormatter"));
}

#[test]
fn lookup_records_a_slow_path_repair() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file)
        .args(["--format", "json", "lookup", "lexers", "Makefile.am"])
        .assert()
        .success();

    let text = fs::read_to_string(&cache_file).unwrap();
    assert!(text.contains("Makefile.am"));

    let assert = hicache(&cache_file)
        .args(["--format", "json", "lookup", "lexers", "Makefile.am"])
        .assert()
        .success();
    let line: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(line["cached"], true);
    assert_eq!(line["ident"], "MakefileLexer");
}

#[test]
fn lookup_unknown_key_fails() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file)
        .args(["lookup", "filters", "no-such-filter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no filters component matches"));
}

#[test]
fn corrupt_cache_file_is_a_loud_failure() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");
    fs::write(&cache_file, "not a cache").unwrap();

    hicache(&cache_file)
        .args(["lookup", "lexers", "my.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read lookup cache"));
}

#[test]
fn clear_removes_the_cache_file() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    hicache(&cache_file).arg("build").assert().success();
    assert!(cache_file.exists());

    hicache(&cache_file)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));
    assert!(!cache_file.exists());

    hicache(&cache_file)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("no cache file"));
}

#[test]
fn styles_lists_registered_names() {
    let temp = tempdir().unwrap();
    let cache_file = temp.path().join("cache.json");

    let assert = hicache(&cache_file)
        .args(["--format", "json", "styles"])
        .assert()
        .success();
    let names: Vec<String> = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert!(names.iter().any(|name| name == "murphy"));
    assert!(names.iter().any(|name| name == "monokai"));
}
