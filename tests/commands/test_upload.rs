//! Tests for the upload command preconditions

use std::path::PathBuf;
use std::sync::{LazyLock, Mutex};

use telegram_scanner::commands::upload;
use telegram_scanner::{CredentialFile, Error, ServiceAccountKey};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[tokio::test]
async fn test_missing_file_exits_with_2() {
    let missing = PathBuf::from("/no/such/dir/results.csv");
    let err = upload::run(&missing, "IT_UPLOAD_UNUSED_ENV", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FileNotFound(_)));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_malformed_credential_leaves_no_temp_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("results.csv");
    std::fs::write(&file, "chat_id\n").expect("fixture");

    std::env::set_var("IT_UPLOAD_BAD_JSON", "not json at all");
    let err = upload::run(&file, "IT_UPLOAD_BAD_JSON", None)
        .await
        .unwrap_err();
    std::env::remove_var("IT_UPLOAD_BAD_JSON");

    assert!(matches!(err, Error::InvalidCredential(_)));
    assert_eq!(err.exit_code(), 2);
    // The blob is rejected before a temp file is ever created; the guard API
    // itself is covered below.
}

#[test]
fn test_credential_guard_cleans_up() {
    let blob = r#"{"client_email": "svc@proj", "private_key": "pem"}"#;
    let credential = CredentialFile::materialize(blob).expect("materialize");
    let path = credential.path().to_path_buf();

    assert!(path.exists());
    drop(credential);
    assert!(!path.exists());
}

#[test]
fn test_service_account_key_defaults_token_uri() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("sa.json");
    std::fs::write(
        &path,
        r#"{"client_email": "svc@proj.iam.gserviceaccount.com", "private_key": "pem"}"#,
    )
    .expect("write");

    let key = ServiceAccountKey::from_file(&path).expect("parse");
    assert_eq!(key.token_uri, "https://oauth2.googleapis.com/token");
}
