//! CSV export for scan results

use std::path::Path;

use crate::error::Result;
use crate::scanner::DialogRecord;

/// Column order of the output file. Rows are written in input order.
pub const CSV_HEADER: [&str; 5] = [
    "chat_id",
    "chat_name",
    "chat_type",
    "last_message_date",
    "unread_count",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write the records to `path` as UTF-8 CSV, overwriting any previous file.
///
/// An empty record set is a valid outcome: nothing is written and the
/// operator is told so. Callers must not treat a missing file as a failure
/// in that case.
pub fn write_csv(records: &[DialogRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        println!("Активные чаты не найдены");
        return Ok(());
    }

    println!(
        "\nСохранение {} активных чатов в {}...",
        records.len(),
        path.display()
    );

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.chat_id.to_string(),
            record.chat_name.clone(),
            record.chat_type.as_str().to_string(),
            record.last_message_date.format(DATE_FORMAT).to_string(),
            record.unread_count.to_string(),
        ])?;
    }

    writer.flush()?;
    println!("Результаты сохранены в {}", path.display());
    Ok(())
}
