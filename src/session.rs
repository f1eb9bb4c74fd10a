//! Session management for the Telegram client
//!
//! Provides:
//! - File-based session locking to prevent parallel execution
//! - Session file validation
//! - Client creation with proper configuration

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use grammers_client::Client;
use grammers_mtsender::{SenderPool, SenderPoolHandle};
use grammers_session::storages::SqliteSession;

use crate::config::ScanConfig;
use crate::error::{Error, Result};

/// Session lock guard that ensures exclusive access to the Telegram session.
pub struct SessionLock {
    lock_file: Option<File>,
    lock_path: PathBuf,
}

impl SessionLock {
    /// Acquire an exclusive lock at the given path.
    pub fn acquire(lock_path: impl Into<PathBuf>) -> Result<Self> {
        let lock_path = lock_path.into();
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| Error::LockError(format!("Failed to open lock file: {}", e)))?;

        match lock_file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                lock_file: Some(lock_file),
                lock_path,
            }),
            Err(_) => {
                eprintln!(
                    r#"
⚠️  ОШИБКА: Telegram сессия уже используется другим процессом!

Telegram требует последовательного выполнения операций.
Параллельное использование одной сессии может привести к конфликтам и блокировкам.

Подождите, пока завершится другой процесс, и попробуйте снова.
"#
                );
                Err(Error::SessionLocked)
            }
        }
    }

    /// Release the lock manually
    pub fn release(&mut self) {
        if let Some(ref file) = self.lock_file {
            let _ = file.unlock();
        }
        self.lock_file = None;
        let _ = std::fs::remove_file(&self.lock_path);
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        self.release();
    }
}

/// Check that the persisted session file exists.
pub fn check_session_exists(session_file: &str) -> Result<()> {
    if !Path::new(session_file).exists() {
        eprintln!(
            r#"
⚠️  ОШИБКА: Session файл '{}' не найден!

Для создания session файла:
1. Запустите: telegram_scanner init-session
2. Введите код из Telegram
"#,
            session_file
        );
        return Err(Error::SessionNotFound(session_file.to_string()));
    }

    Ok(())
}

/// Open the session storage, creating the file when it does not exist yet.
pub fn open_session(session_file: &str) -> Result<Arc<SqliteSession>> {
    let session = SqliteSession::open(session_file)
        .map_err(|e| Error::SessionNotFound(format!("Failed to open session: {}", e)))?;
    Ok(Arc::new(session))
}

/// Holder for SenderPool components and Client
pub struct TelegramClient {
    pub client: Client,
    pub handle: SenderPoolHandle,
    _runner_handle: tokio::task::JoinHandle<()>,
}

impl TelegramClient {
    /// Create a new TelegramClient from session
    pub async fn connect(session: Arc<SqliteSession>, api_id: i32) -> Result<Self> {
        let pool = SenderPool::new(session, api_id);

        // Create client from pool (need reference to whole pool)
        let client = Client::new(&pool);

        // Get handle and runner after client is created
        let SenderPool {
            runner,
            updates: _,
            handle,
        } = pool;

        // Spawn the runner in background
        let runner_handle = tokio::spawn(async move {
            runner.run().await;
        });

        Ok(Self {
            client,
            handle,
            _runner_handle: runner_handle,
        })
    }
}

// Implement Deref to allow using TelegramClient as &Client
impl std::ops::Deref for TelegramClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

/// Create and connect a Telegram client with an existing session.
pub async fn get_client(config: &ScanConfig) -> Result<TelegramClient> {
    let session_file = config.session_file();
    check_session_exists(&session_file)?;
    let session = open_session(&session_file)?;
    TelegramClient::connect(session, config.api_id).await
}

/// Create a Telegram client for initialization (no session check).
pub async fn get_client_for_init(config: &ScanConfig) -> Result<TelegramClient> {
    let session = open_session(&config.session_file())?;
    TelegramClient::connect(session, config.api_id).await
}
