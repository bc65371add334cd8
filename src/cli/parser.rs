use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchstat
/// CLI tool for attendance statistics over a punch-event log
#[derive(Parser)]
#[command(
    name = "punchstat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstruct work sessions from punch events and compute attendance statistics",
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

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Import a JSON snapshot of users, teams and punch events
    Import {
        #[arg(long, value_name = "FILE", help = "Snapshot file to import")]
        file: String,

        #[arg(long, help = "Wipe existing contents before importing")]
        replace: bool,
    },

    /// Show statistics for a single user
    User {
        /// User id
        id: i64,

        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Restrict to a year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "sessions", help = "List the reconstructed work sessions")]
        sessions: bool,

        #[arg(long = "anomalies", help = "List punch-stream anomalies")]
        anomalies: bool,
    },

    /// Show statistics for a team and its members
    Team {
        /// Team id
        id: i64,

        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Restrict to a year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "members", help = "Show the per-member breakdown")]
        members: bool,
    },

    /// Show organization-wide statistics
    Admin,

    /// Export reconstructed work sessions
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

        #[arg(long, value_name = "ID", help = "Export a single user's sessions")]
        user: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
