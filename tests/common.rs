#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use visitorlog::models::columns::CANONICAL_COLUMNS;
use visitorlog::store::MemorySheet;

/// The binary, with HOME pointed at a scratch dir so that no real
/// configuration file is read.
pub fn vlog() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("visitorlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("visitorlog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_visitorlog.sqlite", name));
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

/// Check a visitor in through the CLI.
pub fn checkin(db_path: &str, name: &str, ktp: &str, badge: &str, time_in: &str, date: &str) {
    vlog()
        .args([
            "--db", db_path, "checkin", "--name", name, "--ktp", ktp, "--badge", badge, "--in",
            time_in, "--date", date,
        ])
        .assert()
        .success();
}

/// Initialize the DB and check in a small crowd useful for many tests
pub fn init_db_with_visitors(db_path: &str) {
    vlog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    checkin(db_path, "Budi Santoso", "3174000000000001", "V-01", "0800", "2025-09-01");
    checkin(db_path, "Siti Aminah", "3174000000000002", "V-02", "0915", "2025-09-15");
    checkin(db_path, "Budi Santoso", "3174000000000001", "V-03", "1300", "2025-10-02");
}

/// A data row in canonical column order.
pub fn row<'a>(
    no: &'a str,
    date: &'a str,
    name: &'a str,
    ktp: &'a str,
    time_in: &'a str,
    time_out: &'a str,
    status: &'a str,
) -> Vec<&'a str> {
    vec![
        no, date, name, ktp, "Kunjungan", "1", "V-01", time_in, time_out, status,
    ]
}

/// In-memory sheet with the canonical header and the given rows.
pub fn sheet_with(rows: Vec<Vec<&str>>) -> MemorySheet {
    MemorySheet::with_rows(&CANONICAL_COLUMNS, rows)
}
