use crate::export::ExportFormat;
use crate::models::project::ProjectSort;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
/// CLI application to track project work hours with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work hours per task, plan monthly assignments and write daily reports using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCmd),

    /// Manage the statuses issues of a project can take
    #[command(subcommand)]
    Status(StatusCmd),

    /// Manage users
    #[command(subcommand)]
    User(UserCmd),

    /// Manage user attribute types and their options
    #[command(subcommand)]
    Attr(AttrCmd),

    /// Manage issues
    #[command(subcommand)]
    Issue(IssueCmd),

    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCmd),

    /// Assign users to tasks
    #[command(subcommand)]
    Assign(AssignCmd),

    /// Log, list and total worked hours
    #[command(subcommand)]
    Hours(HoursCmd),

    /// Show the hours grid (assignments × days) with subtotals
    Grid {
        /// Show Monday–Sunday of the week containing this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", conflicts_with = "month")]
        week: Option<String>,

        /// Show every day of this month (YYYY-MM)
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,

        #[arg(long, value_name = "USER", help = "Only this user (code or id)")]
        user: Option<String>,

        #[arg(long, value_name = "PROJECT", help = "Only this project (code)")]
        project: Option<String>,

        #[arg(long, value_name = "ISSUE_ID", help = "Only this issue")]
        issue: Option<i64>,
    },

    /// Render a user's daily report from a template
    Report {
        #[arg(long, value_name = "USER", help = "User code or id")]
        user: String,

        #[arg(long, value_name = "DATE", help = "Report date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, value_name = "FILE", help = "Template file to use")]
        template: Option<String>,

        #[arg(long = "hide-zero", help = "Omit progress placeholders when progress is 0")]
        hide_zero: bool,

        #[arg(
            long = "save-template",
            requires = "template",
            help = "Save --template as the user's own template"
        )]
        save_template: bool,

        #[arg(
            long = "reset-template",
            conflicts_with = "save_template",
            help = "Forget the user's own template"
        )]
        reset_template: bool,
    },

    /// Monthly planned hours per user and project
    #[command(subcommand)]
    Plan(PlanCmd),

    /// Manage issue estimate items
    #[command(subcommand)]
    Estimate(EstimateCmd),

    /// Summary of the day and its month
    Dashboard {
        #[arg(long, value_name = "DATE", help = "Reference date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export work logs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectCmd {
    /// Add a project (default statuses are created with it)
    Add {
        cd: String,
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List projects
    List {
        #[arg(long, help = "Search code, name and description")]
        q: Option<String>,
        #[arg(long, value_enum, default_value = "cd")]
        sort: ProjectSort,
        #[arg(long)]
        desc: bool,
    },
    /// Change name or description
    Edit {
        cd: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project and everything under it
    Del {
        cd: String,
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
    /// Show a project with its estimate and actual hours
    Show { cd: String },
}

#[derive(Subcommand)]
pub enum StatusCmd {
    /// List the statuses of a project
    List { project: String },
    /// Add a status to a project
    Add {
        project: String,
        code: String,
        name: String,
        #[arg(long = "sort-order", default_value_t = 0)]
        sort_order: i64,
    },
    /// Change a status' name or order
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "sort-order")]
        sort_order: Option<i64>,
    },
    /// Delete a status no issue uses
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum UserCmd {
    Add {
        cd: String,
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    List {
        #[arg(long, help = "Only active users")]
        active: bool,
    },
    Edit {
        user: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Del {
        user: String,
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
    Activate { user: String },
    Deactivate { user: String },
    /// Show or set the attributes a user holds
    #[command(subcommand)]
    Attr(UserAttrCmd),
}

#[derive(Subcommand)]
pub enum UserAttrCmd {
    List {
        user: String,
    },
    /// Set a user's option for an attribute type (no option clears it)
    Set {
        user: String,
        #[arg(value_name = "TYPE")]
        type_code: String,
        option: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AttrCmd {
    /// Attribute types (e.g. department, role)
    #[command(subcommand)]
    Type(AttrTypeCmd),
    /// Options an attribute type allows
    #[command(subcommand)]
    Option(AttrOptionCmd),
}

#[derive(Subcommand)]
pub enum AttrTypeCmd {
    List,
    Add {
        code: String,
        name: String,
        #[arg(long = "sort-order", default_value_t = 0)]
        sort_order: i64,
    },
    Edit {
        code: String,
        #[arg(long = "code", value_name = "NEW_CODE")]
        new_code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "sort-order")]
        sort_order: Option<i64>,
    },
    /// Delete a type no user holds, with its options
    Del { code: String },
}

#[derive(Subcommand)]
pub enum AttrOptionCmd {
    List {
        #[arg(value_name = "TYPE")]
        type_code: String,
    },
    Add {
        #[arg(value_name = "TYPE")]
        type_code: String,
        code: String,
        name: String,
        #[arg(long = "sort-order", default_value_t = 0)]
        sort_order: i64,
    },
    Edit {
        #[arg(value_name = "TYPE")]
        type_code: String,
        code: String,
        #[arg(long = "code", value_name = "NEW_CODE")]
        new_code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "sort-order")]
        sort_order: Option<i64>,
    },
    /// Delete an option no user holds
    Del {
        #[arg(value_name = "TYPE")]
        type_code: String,
        code: String,
    },
}

#[derive(Subcommand)]
pub enum IssueCmd {
    Add {
        project: String,
        cd: String,
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, help = "Status code (default: open)")]
        status: Option<String>,
    },
    /// List issues with estimate, actual and remaining hours
    List {
        #[arg(long)]
        project: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Del {
        id: i64,
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskCmd {
    Add {
        issue: i64,
        cd: String,
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_name = "HOURS")]
        estimate: Option<f64>,
    },
    List { issue: i64 },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "HOURS")]
        estimate: Option<f64>,
    },
    /// Set progress (0–100)
    Progress {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        rate: i64,
    },
    Del {
        id: i64,
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AssignCmd {
    /// List the assignments of a project (active users only)
    List { project: String },
    /// Assign if unassigned, unassign otherwise
    Toggle { task: i64, user: String },
    Add { task: i64, user: String },
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum HoursCmd {
    /// Set the hours of a user on a task for a day (0 deletes)
    Set {
        task: i64,
        user: String,
        date: String,
        #[arg(allow_negative_numbers = true)]
        hours: f64,
    },
    Del { id: i64 },
    List {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        issue: Option<i64>,
        #[arg(long, value_name = "DATE")]
        from: Option<String>,
        #[arg(long, value_name = "DATE")]
        to: Option<String>,
    },
    /// Total hours of a user on a day or over a month
    Total {
        #[arg(long)]
        user: String,
        #[arg(long, value_name = "DATE", conflicts_with = "month")]
        date: Option<String>,
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PlanCmd {
    /// Set planned hours of a user on a project for a month (0 deletes)
    Set {
        user: String,
        project: String,
        month: String,
        #[arg(allow_negative_numbers = true)]
        hours: f64,
    },
    Del { id: i64 },
    /// Planned hours of a month; --detail adds actual, remaining and rate
    Show {
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,
        #[arg(long)]
        detail: bool,
    },
}

#[derive(Subcommand)]
pub enum EstimateCmd {
    List {
        issue: i64,
    },
    Add {
        issue: i64,
        name: String,
        #[arg(allow_negative_numbers = true)]
        hours: f64,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        hours: Option<f64>,
    },
    Del {
        id: i64,
    },
}
