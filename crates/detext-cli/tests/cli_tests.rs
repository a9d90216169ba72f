//! Integration tests for the `detext` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn detext() -> Command {
    Command::cargo_bin("detext").expect("binary should build")
}

#[test]
fn test_version_flag() {
    detext()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("detext"));
}

#[test]
fn test_converts_file_to_sibling_txt() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("letter.rtf");
    fs::write(&input, r"{\rtf1\ansi Dear reader,\par\par Regards.}").unwrap();

    detext().arg(&input).assert().success();

    let output = dir.path().join("letter.txt");
    let text = fs::read_to_string(output).unwrap();
    assert_eq!(text, "Dear reader,\n\nRegards.");
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.rtf");
    let output = dir.path().join("custom.txt");
    fs::write(&input, r"{\rtf1 Hi}").unwrap();

    detext()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(output).unwrap(), "Hi");
}

#[test]
fn test_json_output_contains_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.rtf");
    fs::write(&input, r"{\rtf1 Hello}").unwrap();

    detext()
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success();

    let json = fs::read_to_string(dir.path().join("doc.json")).unwrap();
    assert!(json.contains("\"num_characters\": 5"));
    assert!(json.contains("\"RTF\""));
}

#[test]
fn test_stdin_to_stdout() {
    detext()
        .arg("-")
        .write_stdin(r"{\rtf1\ansi Piped \b in\b0.}")
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped in."));
}

#[test]
fn test_non_rtf_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.rtf");
    fs::write(&input, "this is not rtf").unwrap();

    detext()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("notes.rtf"));
}

#[test]
fn test_lenient_accepts_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("frag.rtf");
    fs::write(&input, r"fragment \b only\b0.").unwrap();

    detext().arg(&input).arg("--lenient").assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("frag.txt")).unwrap(),
        "fragment only."
    );
}

#[test]
fn test_batch_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.rtf");
    let b = dir.path().join("b.rtf");
    fs::write(&a, r"{\rtf1 A}").unwrap();
    fs::write(&b, r"{\rtf1 B}").unwrap();

    detext()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 of 2 files"));
}

#[test]
fn test_output_flag_rejected_for_batch() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.rtf");
    let b = dir.path().join("b.rtf");
    fs::write(&a, r"{\rtf1 A}").unwrap();
    fs::write(&b, r"{\rtf1 B}").unwrap();

    detext()
        .arg(&a)
        .arg(&b)
        .args(["-o", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single input"));
}

#[test]
fn test_max_chars_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("long.rtf");
    fs::write(&input, r"{\rtf1 Hello, World!}").unwrap();

    detext()
        .arg(&input)
        .args(["--max-chars", "5"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("long.txt")).unwrap(),
        "Hello"
    );
}
