//! Active chat scan command
//!
//! Authenticates against the stored session, walks the dialog list and
//! saves qualifying chats to CSV.

use crate::config::{mask_phone, ScanConfig};
use crate::error::{Error, Result};
use crate::export;
use crate::scanner;
use crate::session::{get_client, SessionLock};

pub async fn run(config: &ScanConfig) -> Result<()> {
    println!("Запуск сканирования активных чатов Telegram...");
    println!("API ID: {}", "*".repeat(8));
    match &config.phone {
        Some(phone) => println!("Телефон: {}", mask_phone(phone)),
        None => println!("Телефон: Не указан"),
    }

    let _lock = SessionLock::acquire(config.lock_file())?;
    let client = get_client(config).await?;

    let me = client
        .get_me()
        .await
        .map_err(|e| Error::TelegramError(format!("Не удалось авторизоваться: {}", e)))?;
    println!(
        "Авторизован как: {} (@{})",
        me.full_name(),
        me.username().unwrap_or("не указан")
    );

    let records = scanner::scan_dialogs(&client, config.days_back).await?;
    export::write_csv(&records, &config.output_file)?;

    println!("\n✅ Сканирование завершено успешно!");
    Ok(())
}
