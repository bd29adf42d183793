//! Integration tests for the `ansitext` command-line interface.
//!
//! This module validates:
//! - Reading from standard input and from files
//! - Each subcommand's output format
//! - Width mode selection with `--display`
//! - Error reporting for invalid options and missing files

use std::{fs, path::PathBuf};

use assert_cmd::{Command, prelude::*};
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

#[macro_use]
mod prelude;
use prelude::*;

fn ansitext() -> Command {
    Command::cargo_bin("ansitext").expect("failed to create cargo command for ansitext")
}

#[fixture]
fn workdir() -> TempDir {
    tempdir().expect("failed to create temporary directory")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write temporary file");
    path
}

#[test]
fn version_flag_prints_crate_version() {
    ansitext()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("ansitext {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn strip_reads_stdin() {
    ansitext()
        .arg("strip")
        .write_stdin("\x1b[31mred\x1b[0m text\n")
        .assert()
        .success()
        .stdout("red text\n");
}

#[test]
fn measure_reports_dimensions() {
    ansitext()
        .arg("measure")
        .write_stdin("\x1b[1mab\x1b[0m\n红色")
        .assert()
        .success()
        .stdout("4x2\n");
}

#[test]
fn wrap_honours_width_and_indent() {
    ansitext()
        .args(["wrap", "--width", "8", "--indent", "* ", "--subsequent-indent", "  "])
        .write_stdin("aaa bbb ccc ddd")
        .assert()
        .success()
        .stdout("* aaa bbb\n  ccc ddd\n");
}

#[test]
fn wrap_stats_go_to_stderr() {
    ansitext()
        .args(["wrap", "--stats"])
        .write_stdin("a bbb cc")
        .assert()
        .success()
        .stdout("a bbb cc\n")
        .stderr(predicate::str::contains("min word width: 1, max word width: 3"));
}

#[test]
fn wrap_rejects_zero_width() {
    ansitext()
        .args(["wrap", "--width", "0"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[rstest]
#[case::chars(&["pad", "--width", "5", "--side", "left"], "   红色\n")]
#[case::display(&["--display", "pad", "--width", "5", "--side", "left"], " 红色\n")]
fn pad_uses_selected_width_mode(#[case] args: &[&str], #[case] expected: &str) {
    ansitext()
        .args(args)
        .write_stdin("红色")
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn pad_rejects_unknown_side() {
    ansitext()
        .args(["pad", "--width", "5", "--side", "middle"])
        .write_stdin("x")
        .assert()
        .failure();
}

#[test]
fn truncate_works_line_by_line() {
    ansitext()
        .args(["truncate", "--width", "3"])
        .write_stdin("\x1b[32mgreen\x1b[0m\nab\n")
        .assert()
        .success()
        .stdout("\x1b[32mgre\x1b[0m\nab\n");
}

#[test]
fn highlight_with_custom_sgr() {
    ansitext()
        .args(["highlight", "--all", "--sgr", "1;33", "o"])
        .write_stdin("foo")
        .assert()
        .success()
        .stdout("f\x1b[0m\x1b[1;33mo\x1b[0m\x1b[0m\x1b[1;33mo\x1b[0m\n");
}

#[test]
fn highlight_rejects_bad_sgr_and_pattern() {
    ansitext()
        .args(["highlight", "--sgr", "red", "x"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid SGR parameters"));
    ansitext()
        .args(["highlight", "--regex", "("])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[rstest]
fn files_are_printed_in_order(workdir: TempDir) {
    let mut paths = Vec::new();
    let mut expected = String::new();
    for i in 0..4 {
        paths.push(write_file(
            &workdir,
            &format!("file{i}.txt"),
            &format!("\x1b[3{i}mline {i}\x1b[0m\n"),
        ));
        expected.push_str(&format!("line {i}\n"));
    }
    ansitext()
        .arg("strip")
        .args(&paths)
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
fn missing_file_is_reported(workdir: TempDir) {
    let good = write_file(&workdir, "good.txt", "ok\n");
    let missing = workdir.path().join("missing.txt");
    ansitext()
        .arg("strip")
        .arg(&good)
        .arg(&missing)
        .assert()
        .failure()
        .stdout("ok\n")
        .stderr(predicate::str::contains("missing.txt"));
}
