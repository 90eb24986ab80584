pub mod employee;
pub mod entry;
pub mod period;
pub mod salary;
