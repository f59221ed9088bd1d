//! End-to-end checks against the built binary: envelope shape on stdout,
//! exit codes, and optional persistence.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn novel2json() -> Command {
    Command::cargo_bin("novel2json").expect("binary builds")
}

#[test]
fn parses_txt_and_prints_success_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.txt");
    fs::write(&input, "第一章\n山中无岁月。\n第二章\n山下有人家。").unwrap();

    novel2json()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success":true"#))
        .stdout(predicate::str::contains(r#""title":"第一章""#))
        .stdout(predicate::str::contains(r#""position":2"#))
        .stderr(predicate::str::contains("Parsed 2 chapters"));
}

#[test]
fn txt_without_headings_falls_back_to_single_chapter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.txt");
    fs::write(&input, "没有任何标题的一段文字。").unwrap();

    novel2json()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"正文""#))
        .stdout(predicate::str::contains(r#""position":1"#));
}

#[test]
fn missing_file_fails_with_failure_envelope() {
    novel2json()
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""success":false"#))
        .stdout(predicate::str::contains("file not found"))
        .stdout(predicate::str::contains(r#""data":null"#));
}

#[test]
fn unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.pdf");
    fs::write(&input, "%PDF-1.4").unwrap();

    novel2json()
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsupported file format: .pdf"));
}

#[test]
fn corrupt_epub_fails_as_malformed_container() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.epub");
    fs::write(&input, "this is not a zip archive").unwrap();

    novel2json()
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""success":false"#))
        .stdout(predicate::str::contains("malformed container"));
}

#[test]
fn output_flag_writes_pretty_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.txt");
    let output = dir.path().join("book.json");
    fs::write(&input, "第一章\n甲\n第二章\n乙").unwrap();

    novel2json()
        .arg(&input)
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"success\": true"));

    let envelope: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(envelope["data"]["chapters"][0]["title"], "第一章");
    assert_eq!(envelope["data"]["chapters"][1]["position"], 2);
}

#[test]
fn unwritable_output_path_fails_but_names_the_parse_result() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.txt");
    fs::write(&input, "第一章\n甲\n第二章\n乙").unwrap();

    novel2json()
        .arg(&input)
        .args(["--output", dir.path().join("nope/out.json").to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("parsed 2 chapters"))
        .stdout(predicate::str::contains("writing output failed"));
}

#[test]
fn parsing_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("book.txt");
    fs::write(&input, "第一章\n甲\n第二章\n乙").unwrap();

    let first = novel2json().arg(&input).output().unwrap();
    let second = novel2json().arg(&input).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
