pub mod all_salaries;
pub mod auth;
pub mod config;
pub mod employee;
pub mod entry;
pub mod log;
pub mod payroll;
pub mod salary;
pub mod wages;
