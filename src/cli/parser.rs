use clap::{Parser, Subcommand};

/// Command-line interface definition for doing
/// CLI application to track what you are doing, locally or via a server
#[derive(Parser)]
#[command(
    name = "doing",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time tracker: start, stop and list activities",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Talk to a remote doing-server instead of the local database
    #[arg(global = true, long = "server", value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file and create the database
    Init,

    /// Start a new activity (asks to finish the current one first)
    Start {
        #[arg(short = 'm', long = "message", help = "Message for the activity")]
        message: Option<String>,
    },

    /// Finish the current activity
    Stop {
        #[arg(
            short = 'm',
            long = "message",
            help = "Message for the activity (prompted for if never set)"
        )]
        message: Option<String>,
    },

    /// Add a completed activity spanning a duration from now
    Add {
        #[arg(short = 'm', long = "message", help = "Message for the activity")]
        message: Option<String>,

        #[arg(
            short = 't',
            long = "time",
            value_name = "DURATION",
            help = "Duration expression, e.g. 1h30m"
        )]
        duration: String,
    },

    /// Change an entry's message or duration
    Edit {
        #[arg(short = 'i', long = "id", help = "Entry id (defaults to the latest entry)")]
        id: Option<i64>,

        #[arg(short = 'm', long = "message", help = "New message")]
        message: Option<String>,

        #[arg(
            short = 't',
            long = "time",
            value_name = "DURATION",
            help = "New duration expression, counted from now"
        )]
        duration: Option<String>,
    },

    /// Delete one entry
    Delete {
        #[arg(short = 'i', long = "id", help = "Entry id")]
        id: i64,
    },

    /// List all entries with a running total
    List,

    /// Delete all entries
    Clear {
        #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
