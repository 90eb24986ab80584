use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_employee_by_email;
use crate::errors::AppResult;
use crate::models::employee::Employee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee(Employee),
}

pub struct LoginLogic;

impl LoginLogic {
    /// Match credentials against the stored employees.
    ///
    /// Returns `None` for an unknown email or a wrong password. The admin is
    /// recognised by the configured reserved id.
    pub fn check(
        pool: &DbPool,
        cfg: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<Option<Role>> {
        let Some(emp) = load_employee_by_email(&pool.conn, email)? else {
            return Ok(None);
        };
        if emp.password != password {
            return Ok(None);
        }

        if emp.id == cfg.admin_id {
            Ok(Some(Role::Admin))
        } else {
            Ok(Some(Role::Employee(emp)))
        }
    }
}
