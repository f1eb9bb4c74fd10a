//! Telegram Scanner CLI - main entry point
//!
//! This is the unified CLI interface for the scan and upload operations.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use telegram_scanner::{commands, config::ScanConfig, metrics};

#[derive(Parser)]
#[command(name = "telegram_scanner")]
#[command(about = "Telegram Active Chat Scanner", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to expose Prometheus metrics (e.g., 0.0.0.0:9898)
    #[arg(long, env = "METRICS_ADDR")]
    metrics_addr: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan dialogs for recent activity and export them to CSV
    Scan,

    /// Initialize a new session (use only once!)
    InitSession,

    /// Upload the exported file to Google Drive
    Upload {
        /// Path to file to upload
        #[arg(long, default_value = "results.csv")]
        file: PathBuf,

        /// Env var with the service account JSON
        #[arg(long, default_value = commands::upload::DEFAULT_CREDENTIAL_ENV)]
        env: String,

        /// Drive folder ID (fallback: GDRIVE_FOLDER_ID)
        #[arg(long)]
        folder: Option<String>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Scan => "scan",
            Commands::InitSession => "init_session",
            Commands::Upload { .. } => "upload",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("telegram_scanner=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if let Some(addr) = cli.metrics_addr.as_deref() {
        match addr.parse::<SocketAddr>() {
            Ok(socket) => metrics::spawn_metrics_server(socket),
            Err(err) => warn!(%addr, "Invalid metrics address: {}", err),
        }
    }

    let command_name = cli.command.name();
    metrics::record_command_start(command_name);
    let start = Instant::now();

    let result = execute_command(cli.command).await;

    metrics::record_command_result(command_name, start.elapsed(), result.is_ok());

    if let Err(err) = result {
        eprintln!("Ошибка: {}", err);
        std::process::exit(err.exit_code());
    }

    Ok(())
}

async fn execute_command(command: Commands) -> telegram_scanner::Result<()> {
    match command {
        Commands::Scan => {
            let config = ScanConfig::from_env()?;
            commands::scan::run(&config).await
        }
        Commands::InitSession => {
            let config = ScanConfig::from_env()?;
            commands::init_session::run(&config).await
        }
        Commands::Upload { file, env, folder } => {
            commands::upload::run(&file, &env, folder).await.map(|_| ())
        }
    }
}
