use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,          // ⇔ entries.id (0 = not stored)
    pub date: NaiveDate,  // ⇔ entries.entry_date (TEXT "YYYY-MM-DD")
    pub start: NaiveTime, // ⇔ entries.entry_start (TEXT "HH:MM")
    pub end: NaiveTime,   // ⇔ entries.entry_end (TEXT "HH:MM")
    pub employee_id: i64, // ⇔ entries.employee_id
}

impl Entry {
    pub fn new(
        id: i64,
        employee_id: i64,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            id,
            date,
            start,
            end,
            employee_id,
        }
    }

    /// A day without a stored entry: both times at the `00:00` sentinel.
    pub fn empty(employee_id: i64, date: NaiveDate) -> Self {
        Self::new(0, employee_id, date, NaiveTime::MIN, NaiveTime::MIN)
    }

    pub fn is_empty(&self) -> bool {
        self.start == NaiveTime::MIN && self.end == NaiveTime::MIN
    }

    /// Whole worked hours, truncated toward zero.
    ///
    /// Always derived from `start`/`end`. Storage does not forbid
    /// `end < start`, in which case the result is negative.
    pub fn working_hours(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.end - self.start).num_minutes() / 60
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}
