//! tably CLI - restaurant reservation backend
//!
//! `tably serve` runs migrations and binds the HTTP server;
//! `tably migrate` creates the schema and exits.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tably_server::db::{create_pool, migrations};
use tably_server::{run_server, Config};

#[derive(Parser, Debug)]
#[command(
    name = "tably",
    author,
    version,
    about = "Restaurant reservation backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Create or update the database schema, then exit
    Migrate,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1:3030 (overrides TABLY_BIND_ADDR)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Allow any CORS origin (development only)
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    match cli.command {
        Commands::Serve(args) => {
            if let Some(bind) = args.bind {
                config.bind_addr = bind;
            }
            config.cors_permissive = args.cors_permissive;

            let pool = create_pool(&config.database_url, config.max_connections)
                .await
                .context("failed to connect to database")?;
            migrations::run(&pool)
                .await
                .context("failed to run migrations")?;

            run_server(pool, &config).await.context("server error")?;
        }
        Commands::Migrate => {
            let pool = create_pool(&config.database_url, config.max_connections)
                .await
                .context("failed to connect to database")?;
            migrations::run(&pool)
                .await
                .context("failed to run migrations")?;

            info!("schema is up to date");
        }
    }

    Ok(())
}
