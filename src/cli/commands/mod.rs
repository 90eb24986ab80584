pub mod config;
pub mod db;
pub mod employee;
pub mod entry;
pub mod init;
pub mod log;
pub mod login;
pub mod salary;
pub mod wages;
