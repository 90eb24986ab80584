use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_employee, insert_employee, load_employee, load_employee_by_email, load_employees,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use crate::utils::validate::{validate_email, validate_name, validate_password};

/// `jean-luc` → `Jean-Luc`, `MARIE` → `Marie`.
pub fn format_first_name(first_name: &str) -> String {
    first_name
        .trim()
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// `de la tour` → `DE LA TOUR`.
pub fn format_last_name(last_name: &str) -> String {
    last_name.trim().to_uppercase()
}

pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Validate, normalise and store a new employee. Returns the new id.
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        last_name: &str,
        first_name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<i64> {
        validate_name("last name", last_name)?;
        validate_name("first name", first_name)?;
        validate_email(email)?;
        validate_password(password)?;

        let last_name = format_last_name(last_name);
        let first_name = format_first_name(first_name);

        // The marker identifies the administrator in every listing.
        for name in [&last_name, &first_name] {
            if name.eq_ignore_ascii_case(&cfg.admin_marker) {
                return Err(AppError::Validation(format!(
                    "'{}' is reserved for the administrator",
                    cfg.admin_marker
                )));
            }
        }

        if load_employee_by_email(&pool.conn, email)?.is_some() {
            return Err(AppError::Validation(format!(
                "an employee with email '{}' already exists",
                email
            )));
        }

        let emp = Employee::new(0, &last_name, &first_name, email, password);
        let id = insert_employee(&pool.conn, &emp)?;

        ttlog_quiet(
            &pool.conn,
            "employee_add",
            &id.to_string(),
            &format!("Created employee {}", emp.full_name()),
        );
        success(format!("Employee {} created with id {}.", emp.full_name(), id));
        Ok(id)
    }

    /// Print every employee except the administrator.
    pub fn list(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let employees: Vec<Employee> = load_employees(&pool.conn)?
            .into_iter()
            .filter(|e| !e.is_admin(cfg.admin_id, &cfg.admin_marker))
            .collect();

        if employees.is_empty() {
            info("No employees registered.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("First name", 10),
            Column::new("Last name", 10),
            Column::new("Email", 10),
        ]);
        for e in &employees {
            table.add_row(vec![
                e.id.to_string(),
                e.first_name.clone(),
                e.last_name.clone(),
                e.email.clone(),
            ]);
        }
        print!("{}", table.render());
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, cfg: &Config, id: i64) -> AppResult<()> {
        let emp = load_employee(&pool.conn, id)?.ok_or(AppError::EmployeeNotFound(id))?;
        if emp.is_admin(cfg.admin_id, &cfg.admin_marker) {
            return Err(AppError::Validation(
                "the administrator cannot be deleted".into(),
            ));
        }

        delete_employee(&mut pool.conn, id)?;
        ttlog_quiet(
            &pool.conn,
            "employee_del",
            &id.to_string(),
            &format!("Deleted employee {} and their entries", emp.full_name()),
        );
        info(format!("Deleted employee {} ({}).", emp.full_name(), id));
        Ok(())
    }
}
