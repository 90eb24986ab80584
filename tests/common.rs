#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Days, NaiveDate, NaiveTime};
use rwagelog::core::payroll::PayrollSource;
use rwagelog::errors::{AppError, AppResult};
use rwagelog::models::employee::Employee;
use rwagelog::models::entry::Entry;
use rwagelog::models::period::Period;
use rwagelog::models::salary::Salary;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rwagelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rwagelog.sqlite", name));
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

/// Initialize the DB through the CLI (schema + admin seed)
pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an employee through the library DB API and return its id
pub fn seed_employee(db_path: &str, last: &str, first: &str, email: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    rwagelog::db::initialize::init_db(&conn).expect("init db");
    let emp = Employee::new(0, last, first, email, "secret");
    rwagelog::db::queries::insert_employee(&conn, &emp).expect("insert employee")
}

/// Log `hours` worked hours (from 08:00) for every day of `year`
pub fn seed_full_year(db_path: &str, employee_id: i64, year: i32, hours: u32) {
    let mut conn = rusqlite::Connection::open(db_path).expect("open db");
    let tx = conn.transaction().expect("begin");

    let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(8 + hours, 0, 0).unwrap();
    let mut day = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();

    while day <= last {
        let entry = Entry::new(0, employee_id, day, start, end);
        rwagelog::db::queries::upsert_entry(&tx, &entry).expect("upsert entry");
        day = day.succ_opt().unwrap();
    }
    tx.commit().expect("commit");
}

/// In-memory payroll source: every employee works `hours_per_day` every day.
///
/// `failing` makes one employee's salary lookups fail, `panicking` makes them
/// panic.
pub struct MemorySource {
    pub employees: Vec<Employee>,
    pub hours_per_day: u32,
    pub failing: Option<i64>,
    pub panicking: Option<i64>,
}

impl MemorySource {
    pub fn new(employees: Vec<Employee>, hours_per_day: u32) -> Self {
        Self {
            employees,
            hours_per_day,
            failing: None,
            panicking: None,
        }
    }

    pub fn failing_on(mut self, id: i64) -> Self {
        self.failing = Some(id);
        self
    }

    pub fn panicking_on(mut self, id: i64) -> Self {
        self.panicking = Some(id);
        self
    }
}

impl PayrollSource for MemorySource {
    fn employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn salaries_of_employee(
        &self,
        employee_id: i64,
        start: NaiveDate,
        period: Period,
        salary_per_hour: i64,
    ) -> AppResult<Vec<Salary>> {
        if self.failing == Some(employee_id) {
            return Err(AppError::Storage(format!(
                "cannot read entries of employee {employee_id}"
            )));
        }
        if self.panicking == Some(employee_id) {
            panic!("storage exploded for employee {employee_id}");
        }

        let employee = self
            .employees
            .iter()
            .find(|e| e.id == employee_id)
            .cloned()
            .ok_or(AppError::EmployeeNotFound(employee_id))?;

        let from = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let to = NaiveTime::from_hms_opt(8 + self.hours_per_day, 0, 0).unwrap();

        Ok((0..period.days())
            .map(|offset| {
                let day = start.checked_add_days(Days::new(offset)).unwrap();
                let entry = Entry::new(offset as i64 + 1, employee_id, day, from, to);
                Salary::new(entry, employee.clone(), salary_per_hour)
            })
            .collect())
    }
}

/// The admin (id 1) followed by `n` regular employees with ids 2..=n+1
pub fn roster(n: i64) -> Vec<Employee> {
    let mut out = vec![Employee::new(1, "Admin", "Admin", "adm", "admin")];
    for i in 0..n {
        let id = i + 2;
        out.push(Employee::new(
            id,
            &format!("LAST{}", id),
            "Worker",
            &format!("worker{}@example.com", id),
            "secret",
        ));
    }
    out
}
