//! Google Drive upload command
//!
//! Independent of the scan process: reads the exported file and pushes it to
//! Drive with a service-account credential taken from the environment.

use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::gdrive::{CredentialFile, DriveClient, ServiceAccountKey, UploadedFile};

/// Default environment variable holding the service-account JSON blob.
pub const DEFAULT_CREDENTIAL_ENV: &str = "GDRIVE_SERVICE_ACCOUNT_JSON";

/// Fallback environment variable for the target folder id.
pub const FOLDER_ENV: &str = "GDRIVE_FOLDER_ID";

/// Upload `file` to Google Drive.
///
/// Preconditions are checked before any network call: the file must exist
/// and the credential blob must be valid JSON. The credential only touches
/// disk through a [`CredentialFile`] guard, so it is gone once this returns,
/// whatever the outcome.
pub async fn run(file: &Path, env_var: &str, folder: Option<String>) -> Result<UploadedFile> {
    if !file.exists() {
        return Err(Error::FileNotFound(file.display().to_string()));
    }

    let raw = env::var(env_var).map_err(|_| Error::MissingConfig(env_var.to_string()))?;
    let credential = CredentialFile::materialize(&raw)?;
    let key = ServiceAccountKey::from_file(credential.path())?;

    let folder = folder.or_else(|| env::var(FOLDER_ENV).ok().filter(|f| !f.is_empty()));

    let client = DriveClient::new(key)?;
    let uploaded = client.upload(file, folder.as_deref()).await?;

    println!("Uploaded file id: {}", uploaded.id);
    println!("File link: {}", uploaded.link);

    Ok(uploaded)
}
