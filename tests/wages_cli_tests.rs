use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, rwl, seed_employee, seed_full_year, setup_test_db, temp_out};

/// Two employees working 8 hours every day of 2024, plus one with no entries
fn init_db_with_year(db_path: &str) {
    init_db(db_path);
    let anna = seed_employee(db_path, "MUSTER", "Anna", "anna@example.com");
    let marc = seed_employee(db_path, "ROSSI", "Marc", "marc@example.com");
    seed_employee(db_path, "IDLE", "Ivo", "ivo@example.com");
    seed_full_year(db_path, anna, 2024, 8);
    seed_full_year(db_path, marc, 2024, 8);
}

#[test]
fn test_wages_for_full_year() {
    let db_path = setup_test_db("wages_full_year");
    init_db_with_year(&db_path);

    rwl()
        .env("NO_COLOR", "1")
        .args(["--db", &db_path, "wages", "2024", "--workers", "2"])
        .assert()
        .success()
        .stdout(contains("2 - Anna MUSTER: 109440 CHF"))
        .stdout(contains("3 - Marc ROSSI: 109440 CHF"))
        .stdout(contains("4 - Ivo IDLE: 0 CHF"))
        .stdout(contains("218'880 CHF"))
        .stdout(contains("Admin").not());
}

#[test]
fn test_wages_same_result_with_one_worker() {
    let db_path = setup_test_db("wages_one_worker");
    init_db_with_year(&db_path);

    rwl()
        .args(["--db", &db_path, "wages", "2024", "--workers", "1"])
        .assert()
        .success()
        .stdout(contains("2 - Anna MUSTER: 109440 CHF"))
        .stdout(contains("3 - Marc ROSSI: 109440 CHF"));
}

#[test]
fn test_wages_for_year_without_entries() {
    let db_path = setup_test_db("wages_empty_year");
    init_db_with_year(&db_path);

    rwl()
        .args(["--db", &db_path, "wages", "2019"])
        .assert()
        .success()
        .stdout(contains("2 - Anna MUSTER: 0 CHF"));
}

#[test]
fn test_wages_invalid_year() {
    let db_path = setup_test_db("wages_invalid_year");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "wages", "24"])
        .assert()
        .failure()
        .stderr(contains("Invalid year: 24"));
}

#[test]
fn test_wages_without_employees() {
    let db_path = setup_test_db("wages_no_employees");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "wages", "2024"])
        .assert()
        .success()
        .stdout(contains("No employees registered."));
}

#[test]
fn test_wages_export_csv() {
    let db_path = setup_test_db("wages_export_csv");
    let out = temp_out("wages_export_csv", "csv");
    init_db_with_year(&db_path);

    rwl()
        .args([
            "--db",
            &db_path,
            "wages",
            "2024",
            "--export",
            &out,
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("employee_id,first_name,last_name,year,wages,currency")
    );
    assert!(content.contains("2,Anna,MUSTER,2024,109440,CHF"));
    assert!(content.contains("3,Marc,ROSSI,2024,109440,CHF"));
    assert!(content.contains("4,Ivo,IDLE,2024,0,CHF"));
    assert!(!content.contains("Admin"));
}

#[test]
fn test_wages_export_json() {
    let db_path = setup_test_db("wages_export_json");
    let out = temp_out("wages_export_json", "json");
    init_db_with_year(&db_path);

    rwl()
        .args([
            "--db",
            &db_path,
            "wages",
            "2024",
            "--export",
            &out,
            "--format",
            "json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["employee_id"], 2);
    assert_eq!(rows[0]["wages"], 109440);
    assert_eq!(rows[0]["currency"], "CHF");
    assert_eq!(rows[2]["wages"], 0);
}

#[test]
fn test_wages_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("wages_export_force");
    let out = temp_out("wages_export_force", "csv");
    init_db_with_year(&db_path);
    fs::write(&out, "keep me").unwrap();

    rwl()
        .args(["--db", &db_path, "wages", "2024", "--export", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rwl()
        .args([
            "--db",
            &db_path,
            "wages",
            "2024",
            "--export",
            &out,
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("109440"));
}
