mod common;

use assert_cmd::Command;
use common::create_fixture;
use predicates::prelude::*;

fn dirtree() -> Command {
    let mut cmd = Command::cargo_bin("dirtree").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    dirtree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan a directory into a filtered tree"))
        .stdout(predicate::str::contains("--ignore-dir"))
        .stdout(predicate::str::contains("--ignore-file"))
        .stdout(predicate::str::contains("--ignore-ext"))
        .stdout(predicate::str::contains("--ext"))
        .stdout(predicate::str::contains("--summary"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    dirtree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirtree"));
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    dirtree()
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .stderr("dirtree: /this/path/does/not/exist: Not a directory\n");
}

#[test]
fn test_file_path_exits_with_error() {
    let tmp = create_fixture(&["afile.txt"]);
    dirtree()
        .arg(tmp.path().join("afile.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_prints_sorted_tree_and_summary() {
    let tmp = create_fixture(&["b.txt", "a.txt", "sub/", "sub/c.txt"]);
    let expected = format!(
        "{}\n\
         \u{251c}\u{2500}\u{2500} sub\n\
         \u{2502}   \u{2514}\u{2500}\u{2500} c.txt\n\
         \u{251c}\u{2500}\u{2500} a.txt\n\
         \u{2514}\u{2500}\u{2500} b.txt\n\
         \n\
         1 directory, 3 files\n",
        tmp.path().display()
    );
    dirtree()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_filters_from_flags() {
    let tmp = create_fixture(&["a.txt", "b.skip", "sub/", "sub/c.txt", "target/", "target/out.bin"]);
    dirtree()
        .arg(tmp.path())
        .args(["--ignore-ext", "skip", "--ignore-dir", "target", "--summary"])
        .assert()
        .success()
        .stdout("1 directory, 2 files\n");
}

#[test]
fn test_allow_list_flag() {
    let tmp = create_fixture(&["main.rs", "README.md", "src/", "src/lib.rs"]);
    dirtree()
        .arg(tmp.path())
        .args(["-e", "rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.rs"))
        .stdout(predicate::str::contains("lib.rs"))
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn test_no_color_output_is_plain() {
    let tmp = create_fixture(&["dir/"]);
    dirtree()
        .arg(tmp.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}
