mod common;
use common::{init_db_with_visitors, setup_test_db, temp_out, vlog};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_has_canonical_header() {
    let db_path = setup_test_db("export_csv_header");
    init_db_with_visitors(&db_path);
    let out = temp_out("export_csv_header", "csv");

    vlog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("No,Tanggal,Nama,No KTP,Keperluan,Jumlah Tamu,Visitor Id,Jam Masuk,Jam Keluar,Status")
    );
    assert_eq!(
        lines.next(),
        Some("1,01-09-2025,Budi Santoso,3174000000000001,Kunjungan,1,V-01,08:00,-,IN")
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_visitors(&db_path);
    let out = temp_out("export_json_range", "json");

    vlog()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["Nama"], "Siti Aminah");
    assert_eq!(rows[1]["No"], 2);
    assert_eq!(rows[1]["Jam Masuk"], "09:15");
    assert_eq!(rows[1]["Jumlah Tamu"], 1);
}

#[test]
fn test_export_json_by_ktp_keeps_sheet_numbering() {
    let db_path = setup_test_db("export_json_ktp");
    init_db_with_visitors(&db_path);
    let out = temp_out("export_json_ktp", "json");

    vlog()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--ktp",
            "3174000000000001", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let numbers: Vec<u64> = rows
        .as_array()
        .expect("array of rows")
        .iter()
        .filter_map(|r| r["No"].as_u64())
        .collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn test_export_xlsx_creates_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_visitors(&db_path);
    let out = temp_out("export_xlsx", "xlsx");

    vlog()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let db_path = setup_test_db("export_empty_selection");
    init_db_with_visitors(&db_path);
    let out = temp_out("export_empty_selection", "csv");

    vlog()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2024",
        ])
        .assert()
        .success()
        .stderr(contains("No visitors found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_visitors(&db_path);

    vlog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", "visitors.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_visitors(&db_path);
    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "keep me").expect("write");

    vlog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_rejects_unknown_format() {
    let db_path = setup_test_db("export_unknown_format");
    let out = temp_out("export_unknown_format", "pdf");

    vlog()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("invalid value 'pdf'"));
}
