use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for mate
#[derive(Parser)]
#[command(
    name = "mate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time spent on tickets in an append-only CSV log",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start working on a ticket, or resume the last stopped one
    #[command(visible_alias = "s")]
    Start {
        /// Ticket title (use quotes for long titles)
        title: Option<String>,
    },

    /// Stop the running ticket
    #[command(visible_alias = "x")]
    Stop,

    /// Show the time spent per ticket
    #[command(visible_alias = "l")]
    Log,

    /// List every work segment in order
    #[command(visible_alias = "ll")]
    List,

    /// Show the current ticket and the time left against the daily target
    #[command(visible_alias = "i")]
    Info,

    /// Empty the log
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Inspect or initialize the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
