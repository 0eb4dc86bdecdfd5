use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for visitorlog
/// CLI visitor book: check-in, check-out and export over a whole-table store
#[derive(Parser)]
#[command(
    name = "visitorlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple visitor log CLI: check visitors in and out and export the sheet",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (SQLite database or CSV sheet, depending on the backend)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage backend from the configuration
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the visitor sheet
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List visitors
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long = "today", help = "Show only today's visitors")]
        today: bool,

        #[arg(long, help = "Filter by status (IN or OUT)")]
        status: Option<String>,

        #[arg(long, help = "Filter by (part of) the visitor name")]
        name: Option<String>,

        #[arg(long = "inside", help = "Show only visitors still checked in")]
        inside: bool,
    },

    /// Register a visitor arriving
    Checkin {
        #[arg(long, help = "Visitor full name")]
        name: String,

        #[arg(long, help = "National ID number (No KTP)")]
        ktp: String,

        #[arg(long, help = "Visitor badge id")]
        badge: String,

        /// Check-in time, digits only is fine (e.g. 0800)
        #[arg(long = "in", help = "Check-in time (e.g. 0800 or 08:00)")]
        time_in: String,

        #[arg(long, help = "Purpose of the visit")]
        purpose: Option<String>,

        #[arg(long, help = "Number of guests (default 1)")]
        guests: Option<u32>,

        #[arg(long, help = "Visit date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Register a visitor leaving
    Checkout {
        #[arg(long, help = "Visitor full name")]
        name: String,

        #[arg(long, help = "National ID number, to pick the right person among namesakes")]
        ktp: Option<String>,

        #[arg(long = "out", help = "Check-out time (e.g. 1700), default now")]
        time_out: Option<String>,
    },

    /// Edit a row (by the number shown in `list`)
    Edit {
        /// Row number
        no: usize,

        #[arg(long, help = "Visit date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        ktp: Option<String>,

        #[arg(long)]
        purpose: Option<String>,

        #[arg(long)]
        guests: Option<u32>,

        #[arg(long)]
        badge: Option<String>,

        #[arg(long = "in")]
        time_in: Option<String>,

        #[arg(long = "out")]
        time_out: Option<String>,

        #[arg(long, help = "IN or OUT")]
        status: Option<String>,
    },

    /// Delete a row (by the number shown in `list`)
    Del {
        /// Row number
        no: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Visit history of a person by national ID number
    Search {
        #[arg(long)]
        ktp: String,

        #[arg(long)]
        name: Option<String>,
    },

    /// Export the visitor sheet
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Filter by status (IN or OUT)")]
        status: Option<String>,

        #[arg(long, help = "Only rows with this national ID number")]
        ktp: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
