//! swipe-server binary.
//!
//! Loads configuration (TOML file, `.env`, environment), opens the SQLite
//! store named by `DATABASE_URL`, bootstraps the schema, and serves HTTP
//! until interrupted. Any startup failure exits with status 1.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use swipe_server::{AppState, ServerConfig, auth::SharedSecret};
use swipe_store_sqlite::{DatabaseLocation, SqliteStore};
use tokio::{net::TcpListener, signal};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Card swipe recording server")]
struct Cli {
  /// Path to an optional TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Path to an optional `.env` file of KEY=VALUE lines.
  #[arg(long, default_value = ".env")]
  env_file: PathBuf,

  /// Override the listen address, e.g. `127.0.0.1:3000`.
  #[arg(short, long)]
  listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if !cli.env_file.exists() {
    tracing::info!("No .env file found at {}", cli.env_file.display());
  }

  let mut server_cfg = ServerConfig::load(&cli.config, &cli.env_file, None)
    .context("failed to load configuration")?;
  if let Some(listen) = cli.listen {
    server_cfg.listen_address = listen;
  }

  let location = DatabaseLocation::parse(&server_cfg.database_url)
    .context("invalid DATABASE_URL")?;
  let store = match &location {
    DatabaseLocation::Memory => SqliteStore::open_in_memory().await,
    DatabaseLocation::File(path) => SqliteStore::open(path).await,
  }
  .with_context(|| format!("unable to open database at {location}"))?;
  tracing::info!("Using database {location}");

  let state = AppState::new(store, SharedSecret::new(&server_cfg.card_password));
  let app   = swipe_server::router(state);

  let address = &server_cfg.listen_address;
  let listener = TcpListener::bind(address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("Server shut down");
  Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::warn!("failed to listen for Ctrl-C: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::warn!("failed to listen for SIGTERM: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
}
