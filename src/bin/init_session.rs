//! Session initialization binary.

use telegram_scanner::commands::init_session;
use telegram_scanner::config::ScanConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ScanConfig::from_env()?;
    init_session::run(&config).await?;
    Ok(())
}
