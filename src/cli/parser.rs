use crate::export::ExportFormat;
use crate::models::period::Period;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWagelog
/// CLI application to log employee hours and compute wages with SQLite
#[derive(Parser)]
#[command(
    name = "rwagelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log employee working hours and compute daily, monthly and yearly wages using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage daily entries (start/end times)
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Show the daily salaries of one employee over a period
    Salary {
        /// Employee id
        employee_id: i64,

        /// First day of the period (YYYY-MM-DD)
        date: String,

        #[arg(long, value_enum, default_value = "daily")]
        period: Period,

        #[arg(long = "rate", help = "Salary per hour (default: from configuration)")]
        rate: Option<i64>,
    },

    /// Compute the yearly wages of all employees
    Wages {
        /// Year (YYYY)
        year: String,

        #[arg(long = "workers", help = "Number of producer threads (default: CPU count)")]
        workers: Option<usize>,

        #[arg(
            long = "fail-fast",
            help = "Stop all workers as soon as one employee fails"
        )]
        fail_fast: bool,

        #[arg(long = "export", value_name = "FILE", help = "Export the result to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the export file if it exists")]
        force: bool,
    },

    /// Check login credentials
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Create a new employee
    Add {
        #[arg(long = "last")]
        last_name: String,

        #[arg(long = "first")]
        first_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// List employees (the administrator is hidden)
    List,

    /// Delete an employee and all of their entries
    Del {
        /// Employee id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Add or replace the entry of one day
    Add {
        /// Employee id
        employee_id: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: String,
    },

    /// List the entries of one employee
    List {
        /// Employee id
        employee_id: i64,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day (YYYY, YYYY-MM, YYYY-MM-DD); default: current month"
        )]
        period: Option<String>,
    },

    /// Delete the entry of one day
    Del {
        /// Employee id
        employee_id: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,
    },
}
