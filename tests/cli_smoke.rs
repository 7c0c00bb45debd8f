use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SAMPLE: &str = include_str!("fixtures/gfs_0p25_sample.ascii");

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

#[test]
fn summarizes_file() {
    let file = sample_file();
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("├── hgtprs [5][4][2][4] valid 160/160"))
        .stdout(predicate::str::contains("└── hgtmwl [1][1][1] valid 1/1"))
        .stdout(predicate::str::contains("lev [4] 925..1000"));
}

#[test]
fn reads_stdin_and_prints_values() {
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .args(["--variable", "hgtmwl", "--values"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document: <stdin>"))
        .stdout(predicate::str::contains("hgtprs").not())
        .stdout(predicate::str::contains("hgtmwl:\n9504.85"));
}

#[test]
fn unknown_variable_fails() {
    let file = sample_file();
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .arg(file.path())
        .args(["--variable", "vgrdprs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variable not found: vgrdprs"));
}

#[test]
fn decode_error_names_line() {
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .write_stdin("x, [2][2][2][2][2]\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported rank 5 at line 1"));
}

#[test]
fn writes_log_file() {
    let file = sample_file();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("decode.log");
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .arg(file.path())
        .arg("--log")
        .arg(&log)
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .assert()
        .success();
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("decoded variable block"));
}

#[test]
fn log_file_defaults_to_info() {
    let file = sample_file();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("decode.log");
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .arg(file.path())
        .arg("--log")
        .arg(&log)
        .env_remove("RUST_LOG")
        .assert()
        .success();
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("decoded document"));
    assert!(!contents.contains("decoded variable block"));
}

#[test]
fn rust_log_overrides_verbose() {
    let file = sample_file();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("decode.log");
    Command::cargo_bin("opendap-ascii")
        .unwrap()
        .arg(file.path())
        .arg("--log")
        .arg(&log)
        .arg("--verbose")
        .env("RUST_LOG", "warn")
        .assert()
        .success();
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(!contents.contains("decoded variable block"));
    assert!(!contents.contains("decoded document"));
}
