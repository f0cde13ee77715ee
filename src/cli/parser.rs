use clap::{Parser, Subcommand};

/// Command-line interface definition for HRCore
#[derive(Parser)]
#[command(
    name = "hrcore",
    version = env!("CARGO_PKG_VERSION"),
    about = "A role-aware HR console: employees, departments and positions in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting role; overrides `default_role` from the configuration
    #[arg(
        global = true,
        long = "role",
        help = "Acting role: admin, hr-manager or employee"
    )]
    pub role: Option<String>,

    /// Output format for tables; overrides `default_format`
    #[arg(global = true, long = "format", help = "Output format: table, json or csv")]
    pub format: Option<String>,

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

    /// Show the Employees, Departments and Positions panels for the current role
    View,

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage departments
    Department {
        #[command(subcommand)]
        action: DepartmentAction,
    },

    /// Manage positions
    Position {
        #[command(subcommand)]
        action: PositionAction,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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
}

// Numeric values stay strings here: the form controller validates them.

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List employees visible to the current role
    List,

    /// Add an employee (admin, hr-manager)
    Add {
        #[arg(long = "first-name")]
        first_name: String,

        #[arg(long = "last-name")]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long = "hire-date", help = "Hire date (YYYY-MM-DD), defaults to today")]
        hire_date: Option<String>,

        #[arg(long, help = "Department name; unknown names leave the employee unassigned")]
        department: Option<String>,

        #[arg(long, help = "Position title; unknown titles leave the employee unassigned")]
        position: Option<String>,
    },

    /// Update an employee's email (all roles)
    Update {
        #[arg(long, allow_hyphen_values = true, help = "Employee ID to update")]
        id: String,

        #[arg(long, help = "New email (leave blank to keep unchanged)")]
        email: Option<String>,
    },

    /// Delete an employee (admin, hr-manager)
    Delete {
        #[arg(long, allow_hyphen_values = true, help = "Employee ID to delete")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum DepartmentAction {
    /// List departments visible to the current role
    List,

    /// Add a department (admin, hr-manager)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        location: String,
    },
}

#[derive(Subcommand)]
pub enum PositionAction {
    /// List positions visible to the current role
    List,

    /// Add a position (admin, hr-manager)
    Add {
        #[arg(long)]
        title: String,

        #[arg(long = "salary-min", allow_hyphen_values = true)]
        salary_min: String,

        #[arg(long = "salary-max", allow_hyphen_values = true)]
        salary_max: String,

        #[arg(long, help = "Department name; unknown names leave the position unassigned")]
        department: Option<String>,
    },
}
