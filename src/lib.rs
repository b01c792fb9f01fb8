//! doing library root.
//! Exposes the CLI parser, the high-level run() function, the REST server
//! router, and the internal modules shared by both binaries.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Start { message } => cli::commands::start::handle(cfg, message.as_deref()),
        Commands::Stop { message } => cli::commands::stop::handle(cfg, message.as_deref()),
        Commands::Add { message, duration } => {
            cli::commands::add::handle(cfg, message.as_deref(), duration)
        }
        Commands::Edit {
            id,
            message,
            duration,
        } => cli::commands::edit::handle(cfg, *id, message.as_deref(), duration.as_deref()),
        Commands::Delete { id } => cli::commands::delete::handle(cfg, *id),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Clear { yes } => cli::commands::clear::handle(cfg, *yes),
    }
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }
    if let Some(url) = &cli.server {
        cfg.server_url = Some(url.clone());
    }

    dispatch(&cli, &cfg)
}
