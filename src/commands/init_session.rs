//! Session initialization command
//!
//! Interactive one-time login: requests a confirmation code from Telegram
//! and persists the session file used by later scans.

use std::io::{self, Write};

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::session::get_client_for_init;

pub async fn run(config: &ScanConfig) -> Result<()> {
    let phone = match &config.phone {
        Some(phone) => phone.clone(),
        None => prompt("Введите номер телефона (в международном формате): ")?,
    };

    println!(
        r#"
⚠️  ВНИМАНИЕ: будет создана НОВАЯ сессия для номера {}

Это приведёт к выходу из Telegram на других устройствах,
использующих тот же session файл.

Введите 'YES' (заглавными) для подтверждения: "#,
        phone
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    if input.trim() != "YES" {
        println!("\n❌ Отменено. Session файл не создан.");
        return Ok(());
    }

    println!("\n🔄 Создаю новую сессию для {}...", phone);
    println!("📱 Ожидайте код подтверждения в Telegram...\n");

    // Connect without existing session
    let client = get_client_for_init(config).await?;

    // Request login code
    let token = client
        .request_login_code(&phone, &config.api_hash)
        .await
        .map_err(|e| Error::TelegramError(format!("Failed to request code: {}", e)))?;

    let code = prompt("Введите код из Telegram: ")?;

    // Sign in; the session storage persists the result itself
    let user = client
        .sign_in(&token, &code)
        .await
        .map_err(|e| Error::TelegramError(format!("Failed to sign in: {}", e)))?;

    println!(
        r#"
✅ Сессия успешно создана

Профиль:
  Имя: {}
  Username: @{}

Файл сессии: {}

Сканер будет использовать эту сессию автоматически.
"#,
        user.full_name(),
        user.username().unwrap_or("не указан"),
        config.session_file(),
    );

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
