//! Error handling integration tests for the fk CLI.
//!
//! These tests verify proper error handling behaviors:
//! - Copies never overwrite an existing destination
//! - Directory sources require -r
//! - Error codes and exit statuses are stable

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use predicates::prelude::*;
use std::fs;

/// An existing destination file is never replaced, whatever its content.
#[test]
fn test_copy_refuses_existing_file() {
    let fx = TestFixture::new();
    let src = fx.write_src("test.txt", "new content");
    let dst = fx.dst.path().join("test.txt");
    fs::write(&dst, "old content").unwrap();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg(&src)
        .arg(&dst)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error[already_exists]"));

    fx.assert_file_content(&dst, "old content");
}

/// A tree copy requires the destination directory to not exist yet.
#[test]
fn test_copy_dir_refuses_existing_directory() {
    let fx = TestFixture::new();
    fx.create_nested_structure(1, 1);

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    assert!(!fx.dst.path().join("level0").exists());
}

#[test]
fn test_directory_without_recursive_flag() {
    let fx = TestFixture::new();
    fx.write_src("file.txt", "content");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg(fx.src.path())
        .arg(fx.dst.path().join("copied"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Use -r/--recursive"));

    assert!(!fx.dst.path().join("copied").exists());
}

#[test]
fn test_source_not_found() {
    let fx = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg(fx.src.path().join("nonexistent.txt"))
        .arg(fx.dst.path().join("file.txt"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("error[io]"));
}

#[test]
fn test_digest_of_directory_fails() {
    let fx = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("digest")
        .arg(fx.src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to digest"));
}

#[test]
fn test_tree_compare_on_file_is_not_a_directory() {
    let fx = TestFixture::new();
    let file = fx.write_src("file.txt", "content");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg("-r")
        .arg(&file)
        .arg(fx.dst.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[not_a_directory]"));
}

#[test]
fn test_compare_directory_without_recursive_flag() {
    let fx = TestFixture::new();
    fx.create_nested_structure(1, 1);

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[invalid_input]"))
        .stderr(predicate::str::contains("Use -r/--recursive"));
}

#[test]
fn test_tree_compare_takes_one_destination() {
    let fx = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .arg(fx.dst.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exactly one destination"));
}

#[test]
fn test_mkrand_missing_parent() {
    let fx = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("mkrand")
        .arg(fx.dst.path().join("missing").join("random.bin"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to write"));
}
