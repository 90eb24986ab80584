use crate::config::Config;
use crate::core::payroll::PayrollSource;
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::models::salary::{Salary, total_wages};
use crate::utils::formatting::{bold, colorize_wage};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct SalaryLogic;

impl SalaryLogic {
    /// Daily salaries of one employee over `period`, printed with their total.
    pub fn show<S: PayrollSource + ?Sized>(
        source: &S,
        cfg: &Config,
        employee_id: i64,
        start: NaiveDate,
        period: Period,
        salary_per_hour: i64,
    ) -> AppResult<Vec<Salary>> {
        let salaries = source.salaries_of_employee(employee_id, start, period, salary_per_hour)?;
        let total = total_wages(&salaries)?;

        if let Some(first) = salaries.first() {
            println!(
                "Employee: {} - {} | Period: {} | Date: {}\n",
                first.employee_id(),
                first.employee.full_name(),
                period.as_str(),
                start
            );
        }

        let mut table = Table::new(vec![
            Column::new("Entry", 5),
            Column::new("Date", 10),
            Column::new("From", 5),
            Column::new("To", 5),
            Column::new("Hours", 5),
            Column::new("Wages", 8),
        ]);
        for s in &salaries {
            let entry_id = if s.entry.id == 0 {
                "--".to_string()
            } else {
                s.entry.id.to_string()
            };
            table.add_row(vec![
                entry_id,
                s.entry.date_str(),
                s.entry.start_str(),
                s.entry.end_str(),
                s.working_hours().to_string(),
                format!("{} {}", s.wages()?, cfg.currency),
            ]);
        }
        print!("{}", table.render());

        println!(
            "\n{} {} ({} {}/Hour)",
            bold("Total:"),
            colorize_wage(total, &cfg.currency),
            salary_per_hour,
            cfg.currency
        );
        Ok(salaries)
    }
}
