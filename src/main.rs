//! pgscript - An interactive PostgreSQL script runner with CSV export.

mod app;
mod cli;
mod config;
mod csv;
mod db;
mod error;
mod script;

use app::App;
use cli::Cli;
use config::{Config, ConnectionConfig};
use error::{Result, ScriptError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Pick up PG* variables from a local .env if present
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load configuration file
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    // Build connection config with precedence:
    // 1. CLI arguments (highest)
    // 2. Named connection from config
    // 3. Default connection from config
    // 4. Environment variables
    let connection = resolve_connection(&cli, &config)?.ok_or_else(|| {
        ScriptError::config(
            "No database connection configured. Pass a connection string or use --help.",
        )
    })?;

    info!("Connection: {}", connection.display_string());

    // Failure to establish the initial connection is the only process-fatal
    // condition; everything after this point is reported and survived.
    let client = db::connect(&connection).await?;

    let app = App::new(client);
    match cli.script.as_deref() {
        Some(path) => app.run_script_once(path).await,
        None => app.run().await,
    }
}

/// Resolves the final connection configuration from CLI args, config file, and environment.
fn resolve_connection(cli: &Cli, config: &Config) -> Result<Option<ConnectionConfig>> {
    // Start with CLI connection config if provided
    let mut connection = cli.to_connection_config()?;

    // If no CLI connection, try named connection from config
    if connection.is_none() {
        if let Some(name) = cli.connection_name() {
            connection = config.get_connection(Some(name)).cloned();
            if connection.is_none() {
                return Err(ScriptError::config(format!(
                    "Connection '{}' not found in config file",
                    name
                )));
            }
        }
    }

    // If still no connection, try default from config
    if connection.is_none() {
        connection = config.get_connection(None).cloned();
    }

    // Apply environment variable defaults
    if let Some(ref mut conn) = connection {
        conn.apply_env_defaults();
    }

    Ok(connection)
}
