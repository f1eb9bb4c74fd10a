//! Scanner configuration loaded from environment variables
//!
//! All values are read once at process start into an immutable [`ScanConfig`]
//! and passed explicitly to each component.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_SESSION_NAME: &str = "telegram_scanner";
pub const DEFAULT_OUTPUT_FILE: &str = "results.csv";
pub const DEFAULT_DAYS_BACK: i64 = 7;

/// Placeholder shown when a dialog carries no display name.
pub const NAME_PLACEHOLDER: &str = "Без имени";

/// Immutable per-run configuration for the scan process.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub api_id: i32,
    pub api_hash: String,
    pub phone: Option<String>,
    pub session_name: String,
    pub output_file: PathBuf,
    pub days_back: i64,
}

impl ScanConfig {
    /// Load configuration from environment variables.
    ///
    /// `TELEGRAM_API_ID` and `TELEGRAM_API_HASH` are required; everything
    /// else falls back to a default.
    pub fn from_env() -> Result<Self> {
        let api_id = required_var("TELEGRAM_API_ID")?
            .parse::<i32>()
            .map_err(|e| {
                Error::InvalidArgument(format!("TELEGRAM_API_ID must be an integer: {}", e))
            })?;
        let api_hash = required_var("TELEGRAM_API_HASH")?;

        let days_back = match env::var("DAYS_BACK") {
            Ok(raw) => raw.parse::<i64>().map_err(|e| {
                Error::InvalidArgument(format!("DAYS_BACK must be an integer: {}", e))
            })?,
            Err(_) => DEFAULT_DAYS_BACK,
        };

        Ok(Self {
            api_id,
            api_hash,
            phone: env::var("TELEGRAM_PHONE").ok().filter(|p| !p.is_empty()),
            session_name: env::var("SESSION_NAME")
                .ok()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
            output_file: env::var("OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            days_back,
        })
    }

    /// Path of the persisted session artifact.
    pub fn session_file(&self) -> String {
        format!("{}.session", self.session_name)
    }

    /// Path of the advisory lock guarding the session.
    pub fn lock_file(&self) -> String {
        format!("{}.lock", self.session_name)
    }
}

fn required_var(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::MissingConfig(key.to_string()))
}

/// Mask a phone number for startup logging, keeping only the edges.
pub fn mask_phone(phone: &str) -> String {
    if phone.chars().count() > 8 {
        let head: String = phone.chars().take(4).collect();
        let tail: String = phone
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{}***{}", head, tail)
    } else {
        "Не указан".to_string()
    }
}
