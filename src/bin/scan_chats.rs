//! Active chat scanner binary.

use telegram_scanner::commands::scan;
use telegram_scanner::config::ScanConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ScanConfig::from_env()?;
    scan::run(&config).await?;
    Ok(())
}
