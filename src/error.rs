//! Error types for the Telegram scanner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Environment variable {0} is not set")]
    MissingConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Session file not found: {0}")]
    SessionNotFound(String),

    #[error("Session is locked by another process")]
    SessionLocked,

    #[error("Failed to acquire session lock: {0}")]
    LockError(String),

    #[error("Telegram API error: {0}")]
    TelegramError(String),

    #[error("Authorization required")]
    AuthorizationRequired,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid service account credential: {0}")]
    InvalidCredential(String),

    #[error("Upload error: {0}")]
    UploadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<grammers_client::InvocationError> for Error {
    fn from(err: grammers_client::InvocationError) -> Self {
        Error::TelegramError(err.to_string())
    }
}

impl Error {
    /// Translate a failure into the process exit code it maps to.
    ///
    /// Uploader precondition failures (missing input file, malformed
    /// credential) exit with 2 so callers can tell them apart from generic
    /// runtime failures, which all exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileNotFound(_) | Error::InvalidCredential(_) => 2,
            _ => 1,
        }
    }
}
