//! doing-server entrypoint: REST endpoints over the local database.

use clap::Parser;
use doing::config::Config;
use doing::errors::AppResult;
use doing::server;
use doing::store::SqliteStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doing-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "REST server for the doing time tracker"
)]
struct ServerCli {
    /// Override database path
    #[arg(long = "db")]
    db: Option<String>,

    /// Override listen address (host:port)
    #[arg(long = "listen", value_name = "ADDR")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = serve().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn serve() -> AppResult<()> {
    let cli = ServerCli::parse();

    let mut cfg = Config::load()?;
    if let Some(db) = cli.db {
        cfg.database = db;
    }
    if let Some(listen) = cli.listen {
        cfg.listen = listen;
    }

    let store = Arc::new(SqliteStore::open(&cfg.database)?);
    let app = server::router(store, cfg.auth.clone());

    let listener = tokio::net::TcpListener::bind(&cfg.listen).await?;
    info!(
        address = %cfg.listen,
        auth = cfg.auth.is_some(),
        "doing-server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
