//! Comparison integration tests for the fk CLI.
//!
//! `fk cmp` exits 0 when everything matches and 1 at the first difference.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cmp_files_same_and_different() {
    let fx = TestFixture::new();
    let a = fx.write_src("a.txt", "content");
    let b = fx.write_src("b.txt", "content");
    let c = fx.write_src("c.txt", "changed");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::diff("same\n"));

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg("-a")
        .arg("sha256")
        .arg(&a)
        .arg(&c)
        .assert()
        .code(1)
        .stdout(predicate::str::diff("different\n"));
}

#[test]
fn test_cmp_many_stops_at_first_mismatch() {
    let fx = TestFixture::new();
    let src = fx.write_src("src.txt", "content");
    let same = fx.write_src("same.txt", "content");
    let different = fx.write_src("different.txt", "other");

    // Destinations after the mismatch do not exist and are never read
    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg(&src)
        .arg(&same)
        .arg(&different)
        .arg(fx.src.path().join("missing1.txt"))
        .arg(fx.src.path().join("missing2.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::diff("different\n"));
}

#[test]
fn test_cmp_tree_after_copy() {
    let fx = TestFixture::new();
    fx.create_nested_structure(2, 2);
    let dst = fx.dst.path().join("copied");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(&dst)
        .assert()
        .success();

    fx.assert_file_content(
        &dst.join("level0/level1/file1.txt"),
        "content at level 1 file 1",
    );

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::diff("same\n"));

    fs::write(dst.join("level0/level1/file0.txt"), "mutated").unwrap();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(&dst)
        .assert()
        .code(1)
        .stdout(predicate::str::diff("different\n"));
}

/// Extra entries in the destination tree do not make it different.
#[test]
fn test_cmp_tree_ignores_extra_destination_files() {
    let fx = TestFixture::new();
    fx.create_nested_structure(2, 1);
    let dst = fx.dst.path().join("copied");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(&dst)
        .assert()
        .success();

    fs::write(dst.join("extra.txt"), "only in destination").unwrap();
    fs::write(dst.join("level0/extra.txt"), "only in destination").unwrap();

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cmp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::diff("same\n"));
}
