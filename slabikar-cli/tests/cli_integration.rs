//! Integration tests for the slabikar CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_process_syllables() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("czech-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ma-min-ka me-le ma-so."))
        .stdout(predicate::str::contains("Jde pes?!"))
        .stdout(predicate::str::contains("Ne-se kost."));
}

#[test]
fn test_process_words_mode() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("czech-sample.txt"))
        .arg("-m")
        .arg("words");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Maminka mele maso."))
        .stdout(predicate::str::contains("Nese kost."));
}

#[test]
fn test_process_sentences_mode() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("rikanka.txt"))
        .arg("-m")
        .arg("sentences");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Domeček stojí."))
        .stdout(predicate::str::contains("Krtka vidím."));
}

#[test]
fn test_special_case_in_output() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("rikanka.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Krt-ka vi-dím."));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("czech-sample.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("]"))
        .stdout(predicate::str::contains("\"text\""))
        .stdout(predicate::str::contains("\"syllables\""));
}

#[test]
fn test_markdown_output() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("czech-sample.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 3"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("czech-sample.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Ma-min-ka me-le ma-so."));
}

#[test]
fn test_stdin_input() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg("-")
        .write_stdin("Jde pes. Nese kost.");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jde pes."))
        .stdout(predicate::str::contains("Ne-se kost."));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process").arg("-i").arg(fixture_path("*.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ma-min-ka"))
        .stdout(predicate::str::contains("Do-me-ček"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Czech syllable segmentation"));
}

#[test]
fn test_list_modes() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("list").arg("modes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("syllables"))
        .stdout(predicate::str::contains("words"))
        .stdout(predicate::str::contains("sentences"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_speak_without_audio() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("speak")
        .arg("--text")
        .arg("Maminka mele maso.")
        .arg("--no-audio");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ma"))
        .stdout(predicate::str::contains("min"))
        .stdout(predicate::str::contains("so."));
}

#[test]
fn test_speak_rejects_nonpositive_rate() {
    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("speak")
        .arg("--text")
        .arg("Jde pes.")
        .arg("--no-audio")
        .arg("--rate")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("rate must be positive"));
}

#[test]
fn test_generate_config_and_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let profile = temp_dir.path().join("profile.toml");

    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("generate-config").arg("-o").arg(&profile);
    cmd.assert().success();

    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("validate").arg("-r").arg(&profile);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("czech-sample.txt"))
        .arg("--rules")
        .arg(&profile);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ma-min-ka"));
}

#[test]
fn test_validate_rejects_broken_profile() {
    let temp_dir = TempDir::new().unwrap();
    let profile = temp_dir.path().join("broken.toml");
    fs::write(&profile, "[metadata]\ncode = \"cs\"").unwrap();

    let mut cmd = Command::cargo_bin("slabikar").unwrap();
    cmd.arg("validate").arg("-r").arg(&profile);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}
