//! Tests for the scan command building blocks

use telegram_scanner::{check_session_exists, ChatType, DialogRecord, Error, SessionLock};

use chrono::{TimeZone, Utc};

#[test]
fn test_session_lock_lifecycle() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lock_path = temp.path().join("telegram_scanner.lock");

    {
        let _lock = SessionLock::acquire(&lock_path).expect("lock");
        assert!(lock_path.exists());
    }

    // Dropping the guard removes the lock file
    assert!(!lock_path.exists());
}

#[test]
fn test_missing_session_is_reported() {
    let temp = tempfile::tempdir().expect("tempdir");
    let session_file = temp.path().join("telegram_scanner.session");
    let session_str = session_file.to_string_lossy().to_string();

    let err = check_session_exists(&session_str).unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(_)));
}

#[test]
fn test_existing_session_passes_check() {
    let temp = tempfile::tempdir().expect("tempdir");
    let session_file = temp.path().join("telegram_scanner.session");
    std::fs::File::create(&session_file).expect("create session file");

    let session_str = session_file.to_string_lossy().to_string();
    check_session_exists(&session_str).expect("session should exist");
}

#[test]
fn test_dialog_record_fields() {
    let record = DialogRecord {
        chat_id: -1001234567890,
        chat_name: "Новости".to_string(),
        chat_type: ChatType::Channel,
        last_message_date: Utc.with_ymd_and_hms(2025, 7, 1, 9, 15, 0).unwrap(),
        unread_count: 12,
    };

    assert_eq!(record.chat_type.as_str(), "channel");
    assert!(record.unread_count >= 0);

    let cloned = record.clone();
    assert_eq!(cloned, record);
}
