#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `rworklog --db <db> <args…>` and require success.
pub fn ok(db_path: &str, args: &[&str]) {
    rwl().arg("--db").arg(db_path).args(args).assert().success();
}

/// Initialize DB and add a small dataset useful for many tests:
///
/// - project `PJ1` (id 1) with issue `I1` (id 1)
/// - tasks `T1 Design` (id 1, estimate 8h) and `T2 Build` (id 2)
/// - user `u1` (Alice) assigned to both tasks, user `u2` (Bob) to none
pub fn init_db_with_data(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ok(db_path, &["project", "add", "PJ1", "Project One"]);
    ok(db_path, &["user", "add", "u1", "Alice"]);
    ok(db_path, &["user", "add", "u2", "Bob"]);
    ok(db_path, &["issue", "add", "PJ1", "I1", "Login"]);
    ok(db_path, &["task", "add", "1", "T1", "Design", "--estimate", "8"]);
    ok(db_path, &["task", "add", "1", "T2", "Build"]);
    ok(db_path, &["assign", "add", "1", "u1"]);
    ok(db_path, &["assign", "add", "2", "u1"]);
}

/// Write a template file and return its path.
pub fn write_template(name: &str, content: &str) -> String {
    let p = temp_out(name, "tmpl");
    fs::write(&p, content).expect("write template");
    p
}
