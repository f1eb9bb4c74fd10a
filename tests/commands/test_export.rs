//! Tests for CSV export

use chrono::{TimeZone, Utc};
use telegram_scanner::{export, ChatType, DialogRecord};

fn record(id: i64, name: &str) -> DialogRecord {
    DialogRecord {
        chat_id: id,
        chat_name: name.to_string(),
        chat_type: ChatType::Group,
        last_message_date: Utc.with_ymd_and_hms(2025, 5, 20, 18, 45, 30).unwrap(),
        unread_count: 0,
    }
}

#[test]
fn test_row_count_is_records_plus_header() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("results.csv");

    let records = vec![record(1, "Один"), record(2, "Два"), record(3, "Три")];
    export::write_csv(&records, &path).expect("export");

    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(content.lines().count(), records.len() + 1);
}

#[test]
fn test_header_field_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("results.csv");

    export::write_csv(&[record(1, "Чат")], &path).expect("export");

    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(
        content.lines().next().unwrap(),
        "chat_id,chat_name,chat_type,last_message_date,unread_count"
    );
}

#[test]
fn test_date_format_in_rows() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("results.csv");

    export::write_csv(&[record(5, "Чат")], &path).expect("export");

    let content = std::fs::read_to_string(&path).expect("read back");
    assert!(content.contains("2025-05-20 18:45:30"));
}

#[test]
fn test_empty_set_is_a_no_op() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("results.csv");

    export::write_csv(&[], &path).expect("no-op export");
    assert!(!path.exists());
}
