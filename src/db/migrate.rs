use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Reserved administrator record, always stored with id 1.
pub const ADMIN_ID: i64 = 1;
pub const ADMIN_NAME: &str = "Admin";
const ADMIN_EMAIL: &str = "adm";
const ADMIN_PASSWORD: &str = "admin";

/// Ensure that the `log` table exists. Migrations are recorded in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            last_name   TEXT NOT NULL,
            first_name  TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL
        );
        "#,
    )
}

fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            entry_date   TEXT NOT NULL,
            entry_start  TEXT NOT NULL DEFAULT '00:00',
            entry_end    TEXT NOT NULL DEFAULT '00:00',
            employee_id  INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            UNIQUE(employee_id, entry_date)
        );

        CREATE INDEX IF NOT EXISTS idx_entries_employee_date ON entries(employee_id, entry_date);
        "#,
    )
}

fn seed_admin(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO employees (id, last_name, first_name, email, password)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![ADMIN_ID, ADMIN_NAME, ADMIN_NAME, ADMIN_EMAIL, ADMIN_PASSWORD],
    )?;
    Ok(())
}

type Step = fn(&Connection) -> Result<()>;

const MIGRATIONS: &[(&str, &str, Step)] = &[
    (
        "20240601_0001_create_employees",
        "Created employees table",
        create_employees_table,
    ),
    (
        "20240601_0002_create_entries",
        "Created entries table",
        create_entries_table,
    ),
    (
        "20240610_0003_seed_admin",
        "Inserted the administrator record",
        seed_admin,
    ),
];

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
