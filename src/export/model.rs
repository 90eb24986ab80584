use crate::core::wages::WageMap;
use crate::models::employee::Employee;
use serde::Serialize;

/// Flat row for CSV / JSON wage exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WageExport {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub year: String,
    pub wages: i64,
    pub currency: String,
}

impl WageExport {
    /// One row per roster employee; employees missing from `wages` get 0.
    pub fn rows(year: &str, currency: &str, roster: &[Employee], wages: &WageMap) -> Vec<Self> {
        roster
            .iter()
            .map(|e| WageExport {
                employee_id: e.id,
                first_name: e.first_name.clone(),
                last_name: e.last_name.clone(),
                year: year.to_string(),
                wages: wages.get(&e.id).copied().unwrap_or(0),
                currency: currency.to_string(),
            })
            .collect()
    }
}
