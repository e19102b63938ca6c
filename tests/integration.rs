use assert_cmd::Command;
use predicates::prelude::*;

const AUTHOR_RE: &str = "^Jane Doe <jane@example\\.com>$";

fn ownership_lint() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("ownership-lint")
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn check_valid_file_passes() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "ok.py", "\n:author: Jane Doe <jane@example.com>\n");

    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn check_unrecognized_author_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "bad.py", ":author: John Smith <john@example.com>\n");

    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("O100 unrecognized author"));
}

#[test]
fn check_missing_author_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "empty.py", "");

    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("O100 missing author"));
}

#[test]
fn check_with_no_patterns_passes_anything() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "anything.py", "no tags at all\n");

    ownership_lint().arg("check").arg(&file).assert().success();
}

#[test]
fn check_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "bad.py", ":author: Nobody\n");

    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE, "--format", "json"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("O100 unrecognized author"));
}

#[test]
fn check_sarif_format() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "bad.py", ":author: Nobody\n");

    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE, "--format", "sarif"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""));
}

#[test]
fn check_unreadable_file_exits_2() {
    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE, "does-not-exist.py"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("ERROR"));
}

#[test]
fn malformed_pattern_aborts_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "ok.py", ":author: Jane\n");

    ownership_lint()
        .args(["check", "--author-re", "(unclosed"])
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid author pattern"));
}

#[test]
fn comma_separated_flag_yields_multiple_patterns() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "ok.py", ":license: MIT\n");

    ownership_lint()
        .args(["check", "--license-re", "^BSD$,^MIT$"])
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn config_file_supplies_patterns() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        &dir,
        "ownership-lint.toml",
        "[patterns]\nlicense = [\"^BSD$\"]\n",
    );
    let file = write_file(&dir, "bad.py", ":license: GPL\n");

    ownership_lint()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("O102 unrecognized license"));
}

#[test]
fn missing_config_file_exits_2() {
    ownership_lint()
        .args(["check", "--config", "no-such.toml", "whatever.py"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "empty.py", "");
    let out = dir.path().join("report.json");

    ownership_lint()
        .args(["check", "--author-re", AUTHOR_RE, "--format", "json"])
        .arg("--output")
        .arg(&out)
        .arg(&file)
        .assert()
        .code(1);

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("O100 missing author"));
}

#[test]
fn list_tags_shows_codes_and_state() {
    ownership_lint()
        .env("NO_COLOR", "1")
        .args(["list-tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O100"))
        .stdout(predicate::str::contains("O101"))
        .stdout(predicate::str::contains("O102"))
        .stdout(predicate::str::contains("disabled"));
}

#[test]
fn list_tags_with_config_shows_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        &dir,
        "ownership-lint.toml",
        "[patterns]\nauthor = [\"^Jane$\"]\n",
    );

    ownership_lint()
        .env("NO_COLOR", "1")
        .arg("list-tags")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 pattern(s)"));
}
