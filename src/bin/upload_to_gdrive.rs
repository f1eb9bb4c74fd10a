//! Standalone Google Drive uploader.
//!
//! Usage:
//!   cargo run --bin upload_to_gdrive -- --file results.csv
//!
//! Exit codes: 0 success, 2 missing file or malformed credential JSON,
//! 1 any other failure.

use clap::Parser;
use std::path::PathBuf;
use telegram_scanner::commands::upload;

#[derive(Parser, Debug)]
#[command(name = "upload_to_gdrive")]
#[command(about = "Upload a file to Google Drive using a service account")]
struct Args {
    /// Path to file to upload
    #[arg(long, default_value = "results.csv")]
    file: PathBuf,

    /// Env var with the service account JSON
    #[arg(long, default_value = upload::DEFAULT_CREDENTIAL_ENV)]
    env: String,

    /// Drive folder ID (fallback: GDRIVE_FOLDER_ID)
    #[arg(long)]
    folder: Option<String>,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Err(err) = upload::run(&args.file, &args.env, args.folder).await {
        eprintln!("Upload failed: {}", err);
        std::process::exit(err.exit_code());
    }
}
