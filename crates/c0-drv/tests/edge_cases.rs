//! CLI edge cases: flag validation, AST printing, and missing-input
//! handling that sit outside the six core end-to-end scenarios.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cc0() -> Command {
    Command::cargo_bin("cc0").unwrap()
}

#[test]
fn neither_s_nor_c_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.c0");
    fs::write(&input, "int main() { return 0; }").unwrap();
    cc0()
        .arg("-o")
        .arg(dir.path().join("out"))
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("-s").or(predicate::str::contains("-c")));
}

#[test]
fn both_s_and_c_is_rejected_by_argument_parsing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.c0");
    fs::write(&input, "int main() { return 0; }").unwrap();
    cc0()
        .arg("-s")
        .arg("-c")
        .arg("-o")
        .arg(dir.path().join("out"))
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn missing_input_file_is_an_error() {
    cc0().arg("-s").arg("-o").arg("out").arg("does-not-exist.c0").assert().failure();
}

#[test]
fn unknown_option_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.c0");
    fs::write(&input, "int main() { return 0; }").unwrap();
    cc0().arg("--not-a-real-flag").arg(&input).assert().failure();
}

#[test]
fn help_exits_zero() {
    cc0().arg("-h").assert().success();
}

#[test]
fn print_collapsed_ast_does_not_require_an_emit_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.c0");
    fs::write(&input, "int main() { return 0; }").unwrap();
    cc0()
        .arg("-a")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("FunctionDefinition"));
}

#[test]
fn print_full_ast_shows_every_node_including_tokens() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.c0");
    fs::write(&input, "int main() { return 0; }").unwrap();
    cc0()
        .arg("-A")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("C0Root"));
}

#[test]
fn default_output_path_is_out_in_the_current_directory() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("main.c0");
    fs::write(&input, "int main() { return 0; }").unwrap();
    cc0().arg("-s").arg(&input).current_dir(dir.path()).assert().success();
    assert!(dir.path().join("out").exists());
}
