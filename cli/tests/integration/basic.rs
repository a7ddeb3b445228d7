//! Basic functionality integration tests for the fk CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use filekit::{Algorithm, digest};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn count_files_recursive(dir: &Path) -> usize {
    let mut count = 0;
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            count += count_files_recursive(&path);
        } else {
            count += 1;
        }
    }
    count
}

#[test]
fn test_basic_file_copy() {
    let fx = TestFixture::new();
    let src = fx.write_src("test.txt", "hello world");
    let dst = fx.dst.path().join("test.txt");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp").arg(&src).arg(&dst).assert().success();

    fx.assert_file_content(&dst, "hello world");
}

#[test]
fn test_recursive_directory_copy() {
    let fx = TestFixture::new();
    fx.create_nested_structure(3, 2);
    let dst = fx.dst.path().join("copied");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(&dst)
        .assert()
        .success();

    assert_eq!(count_files_recursive(&dst), 6);
    fx.assert_file_content(
        &dst.join("level0/level1/file1.txt"),
        "content at level 1 file 1",
    );
}

#[test]
fn test_verbose_copy_prints_stats() {
    let fx = TestFixture::new();
    fx.create_nested_structure(2, 1);

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("-v")
        .arg("cp")
        .arg("-r")
        .arg(fx.src.path())
        .arg(fx.dst.path().join("copied"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied 2 files"));
}

#[test]
fn test_digest_known_value() {
    let fx = TestFixture::new();
    let file = fx.write_src("abc.txt", "abc");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("digest")
        .arg("-a")
        .arg("sha1")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "a9993e364706816aba3e25717850c26c9cd0d89d  ",
        ));
}

#[test]
fn test_digest_json() {
    let fx = TestFixture::new();
    let a = fx.write_src("a.txt", "abc");
    let b = fx.write_src("b.txt", "");

    let mut cmd = cargo_bin_cmd!("fk");
    let output = cmd
        .arg("digest")
        .arg("--json")
        .arg("-a")
        .arg("md5")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["algorithm"], "md5");
    assert_eq!(records[0]["digest"], "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(records[1]["digest"], "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_digest_unknown_algorithm() {
    let fx = TestFixture::new();
    let file = fx.write_src("a.txt", "abc");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("digest")
        .arg("-a")
        .arg("crc32")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown digest algorithm"));
}

#[test]
fn test_mkrand_then_copy_matches() {
    let fx = TestFixture::new();
    let src = fx.src.path().join("random.bin");
    let dst = fx.dst.path().join("random.bin");

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("mkrand")
        .arg("-b")
        .arg("16")
        .arg(&src)
        .assert()
        .success();
    assert_eq!(fs::metadata(&src).unwrap().len(), 16 * 1024);

    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("cp").arg(&src).arg(&dst).assert().success();

    for algorithm in Algorithm::ALL {
        assert_eq!(
            digest(&src, algorithm).unwrap(),
            digest(&dst, algorithm).unwrap()
        );
    }
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fk"))
        .stdout(predicate::str::contains("fanout"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("fk");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fk"));
}
