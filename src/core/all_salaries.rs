use crate::config::Config;
use crate::core::payroll::PayrollSource;
use crate::core::wages::{AggregationOptions, AggregationOutcome, WageMap, YearlyWageAggregator};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, WageExport};
use crate::models::employee::Employee;
use crate::ui::messages::{error, header, warning};
use crate::utils::formatting::{bold, colorize_wage};

/// Overrides coming from the command line.
#[derive(Debug, Default, Clone)]
pub struct WagesRequest {
    pub workers: Option<usize>,
    pub fail_fast: bool,
    pub export: Option<(ExportFormat, String)>,
    pub force: bool,
}

pub struct AllSalariesLogic;

impl AllSalariesLogic {
    /// Compute, print and optionally export the yearly wages of every
    /// non-admin employee.
    ///
    /// A worker failure still prints and exports the partial result before
    /// the error is returned.
    pub fn run<S: PayrollSource + ?Sized>(
        source: &S,
        cfg: &Config,
        year: &str,
        req: &WagesRequest,
    ) -> AppResult<WageMap> {
        let mut options = AggregationOptions::from(cfg);
        if let Some(n) = req.workers {
            options.workers = n.max(1);
        }
        options.fail_fast |= req.fail_fast;

        let admin_id = options.admin_id;
        let admin_marker = options.admin_marker.clone();

        let AggregationOutcome {
            roster,
            wages,
            error: failure,
        } = YearlyWageAggregator::new(source, options).aggregate_partial(year)?;

        let roster: Vec<Employee> = roster
            .into_iter()
            .filter(|e| !e.is_admin(admin_id, &admin_marker))
            .collect();

        Self::print(cfg, year, &roster, &wages);

        if let Some((format, path)) = &req.export {
            let rows = WageExport::rows(year, &cfg.currency, &roster, &wages);
            crate::export::write(*format, path, &rows, req.force)?;
        }

        match failure {
            None => Ok(wages),
            Some(e) => {
                warning(format!(
                    "Only {} of {} employees could be computed.",
                    wages.len(),
                    roster.len()
                ));
                error(format!("{}", e));
                Err(AppError::Aggregation(Box::new(e)))
            }
        }
    }

    fn print(cfg: &Config, year: &str, roster: &[Employee], wages: &WageMap) {
        header(format!("Yearly wages {}", year));

        if roster.is_empty() {
            println!("No employees registered.");
            return;
        }

        let mut grand_total: i64 = 0;
        for emp in roster {
            let amount = wages.get(&emp.id).copied().unwrap_or(0);
            grand_total = grand_total.saturating_add(amount);
            println!(
                "{} - {} {}: {} {}",
                emp.id, emp.first_name, emp.last_name, amount, cfg.currency
            );
        }

        println!(
            "\n{} {}",
            bold("Total:"),
            colorize_wage(grand_total, &cfg.currency)
        );
    }
}
