//! End-to-end tests for the asnt binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn asnt(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("asnt").unwrap();
    cmd.current_dir(dir)
        .env_remove("ASNT_VERBOSE")
        .env_remove("ASNT_CONFIG")
        .env_remove("ASNT_NO_COLOR")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"));
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

const MODULE: &str = "\
Example DEFINITIONS AUTOMATIC TAGS ::= BEGIN
  -- a comment
  Version ::= INTEGER { v1(0), v2(1) } (0..MAX)
  ratio REAL ::= 2.5e-1
END
";

#[test]
fn test_tokens_text_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "m.asn", MODULE);

    asnt(dir.path())
        .args(["tokens", "m.asn"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1:1\tTYPEORMODULEREFERENCE\tExample\n1:9\tDEFINITIONS\tDEFINITIONS\n",
        ))
        .stdout(predicate::str::contains("3:42\tRANGE_SEPARATOR\t..\n"))
        .stdout(predicate::str::contains("4:18\tREALNUMBER\t2.5e-1\n"))
        .stdout(predicate::str::contains("comment").not());
}

#[test]
fn test_tokens_json_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "m.asn", "v INTEGER ::= -42");

    let output = asnt(dir.path())
        .args(["tokens", "m.asn", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["kind"], "VALUEIDENTIFIER");
    assert_eq!(items[3]["kind"], "NUMBER");
    assert_eq!(items[3]["code"], 102);
    assert_eq!(items[3]["value"], -42);
}

#[test]
fn test_tokens_reports_lexical_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "bad.asn", "A ::= {\n  b # }");

    asnt(dir.path())
        .args(["tokens", "bad.asn"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("2:3\tVALUEIDENTIFIER\tb"))
        .stderr(predicate::str::contains(
            "bad.asn: error[E1001]: unexpected character '#'",
        ))
        .stderr(predicate::str::contains("  --> 2:5"))
        .stderr(predicate::str::contains("error: Lexical error"));
}

#[test]
fn test_tokens_missing_file() {
    let dir = TempDir::new().unwrap();

    asnt(dir.path())
        .args(["tokens", "missing.asn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File operation failed"))
        .stderr(predicate::str::contains("missing.asn"));
}

#[test]
fn test_check_all_good() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.asn", MODULE);
    write(&dir, "b.asn", "B DEFINITIONS ::= BEGIN END");

    asnt(dir.path())
        .args(["check", "a.asn", "b.asn", "--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked 2 file(s)"))
        .stdout(predicate::str::contains("2 ok, 0 failed"));
}

#[test]
fn test_check_reports_failures() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.asn", "B DEFINITIONS ::= BEGIN END");
    write(&dir, "bad.asn", "x ::= 99999999999999999999");

    asnt(dir.path())
        .args(["check", "good.asn", "bad.asn"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 ok, 1 failed"))
        .stderr(predicate::str::contains("bad.asn: error[E1003]"))
        .stderr(predicate::str::contains("error: 1 of 2 file(s) failed to lex"));
}

#[test]
fn test_strict_comments_from_config_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "open.asn", "A ::= B /* never closed");
    write(&dir, "strict.toml", "[lexer]\nstrict_comments = true\n");

    asnt(dir.path())
        .args(["check", "open.asn"])
        .assert()
        .success();

    asnt(dir.path())
        .args(["--config", "strict.toml", "check", "open.asn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1005]"))
        .stderr(predicate::str::contains("comment starts here"));
}

#[test]
fn test_strict_comments_flag() {
    let dir = TempDir::new().unwrap();
    write(&dir, "open.asn", "/* never closed");

    asnt(dir.path())
        .args(["--strict-comments", "tokens", "open.asn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated block comment"));
}

#[test]
fn test_config_from_current_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "asnt.toml", "format = \"json\"\n");
    write(&dir, "m.asn", "x");

    asnt(dir.path())
        .args(["tokens", "m.asn"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_config_command_prints_and_writes() {
    let dir = TempDir::new().unwrap();

    asnt(dir.path())
        .args(["--strict-comments", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict_comments = true"));

    asnt(dir.path())
        .args(["config", "--write", "out/asnt.toml"])
        .assert()
        .success();
    let written = std::fs::read_to_string(dir.path().join("out/asnt.toml")).unwrap();
    assert!(written.contains("[lexer]"));
    assert!(written.contains("[check]"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.toml", "format = 3\n");
    write(&dir, "m.asn", "x");

    asnt(dir.path())
        .args(["--config", "broken.toml", "tokens", "m.asn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();

    asnt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"));
}
