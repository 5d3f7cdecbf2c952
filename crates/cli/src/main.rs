mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(about = "JSON HTTP service for storing and serving quotes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listening port [env: PORT]
        #[arg(short, long)]
        port: Option<u16>,
        /// Listening host [env: HOST, default: 0.0.0.0]
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// PostgreSQL connection string [env: DB_URL]
        #[arg(long)]
        database_url: Option<String>,
        /// Keep quotes in process memory instead of PostgreSQL
        #[arg(long, conflicts_with = "database_url")]
        in_memory: bool,
    },
    /// Create the quotes table if it does not exist
    Migrate {
        /// PostgreSQL connection string [env: DB_URL]
        #[arg(long)]
        database_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env file: {e}"),
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, database_url, in_memory } => {
            let config = config::ServeConfig::resolve(port, host, database_url, in_memory)?;
            commands::serve::run(config).await?;
        },
        Commands::Migrate { database_url } => {
            let url = config::resolve_database_url(database_url)?;
            commands::migrate::run(&url).await?;
        },
    }

    Ok(())
}
