use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::entry::Entry;
use crate::utils::time::parse_db_time;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// employees
// ---------------------------

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        last_name: row.get("last_name")?,
        first_name: row.get("first_name")?,
        email: row.get("email")?,
        password: row.get("password")?,
    })
}

/// Insert a new employee and return the id assigned by SQLite.
pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (last_name, first_name, email, password)
         VALUES (?1, ?2, ?3, ?4)",
        params![emp.last_name, emp.first_name, emp.email, emp.password],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let emp = conn
        .query_row("SELECT * FROM employees WHERE id = ?1", [id], map_employee)
        .optional()?;
    Ok(emp)
}

pub fn load_employee_by_email(conn: &Connection, email: &str) -> AppResult<Option<Employee>> {
    let emp = conn
        .query_row(
            "SELECT * FROM employees WHERE email = ?1",
            [email],
            map_employee,
        )
        .optional()?;
    Ok(emp)
}

/// Delete an employee and all of their entries. Returns the deleted rows.
pub fn delete_employee(conn: &mut Connection, id: i64) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM entries WHERE employee_id = ?1", [id])?;
    let n = tx.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(n)
}

// ---------------------------
// entries
// ---------------------------

pub fn map_entry(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("entry_date")?;
    let start_str: String = row.get("entry_start")?;
    let end_str: String = row.get("entry_end")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start = parse_db_time(&start_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(start_str.clone())),
        )
    })?;

    let end = parse_db_time(&end_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(end_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        date,
        start,
        end,
        employee_id: row.get("employee_id")?,
    })
}

/// Insert the entry, or replace the times of the existing one for the same
/// employee and day.
pub fn upsert_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (entry_date, entry_start, entry_end, employee_id)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(employee_id, entry_date)
         DO UPDATE SET entry_start = excluded.entry_start,
                       entry_end   = excluded.entry_end",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.employee_id,
        ],
    )?;
    Ok(())
}

/// Entries of one employee between `from` and `to`, both inclusive.
pub fn load_entries_between(
    conn: &Connection,
    employee_id: i64,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM entries
         WHERE employee_id = ?1 AND entry_date BETWEEN ?2 AND ?3
         ORDER BY entry_date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ],
        map_entry,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_entry(conn: &Connection, employee_id: i64, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM entries WHERE employee_id = ?1 AND entry_date = ?2",
        params![employee_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}
