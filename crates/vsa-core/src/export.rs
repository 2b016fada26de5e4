//! History export formats.
//!
//! - CSV: `id,text,sentiment,timestamp`, UTF-8 with a byte-order mark so
//!   spreadsheet tools pick up the Vietnamese diacritics.
//! - JSON: an array of the canonical `{text, sentiment}` objects.

use crate::entities::ClassificationRecord;
use crate::responses::SentimentOutput;

/// Byte-order mark prefixed to CSV exports.
pub const UTF8_BOM: &str = "\u{feff}";

/// CSV header row.
pub const CSV_HEADER: &str = "id,text,sentiment,timestamp";

/// Render records as CSV, one row per record, in the given order.
#[must_use]
pub fn to_csv(records: &[ClassificationRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(UTF8_BOM);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&record.id.to_string());
        out.push(',');
        out.push_str(&csv_field(&record.text));
        out.push(',');
        out.push_str(record.sentiment.as_str());
        out.push(',');
        out.push_str(&csv_field(&record.timestamp));
        out.push('\n');
    }
    out
}

/// Render records as a pretty JSON array of `{text, sentiment}`.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails.
pub fn to_json(records: &[ClassificationRecord]) -> serde_json::Result<String> {
    let outputs: Vec<SentimentOutput> = records.iter().map(ClassificationRecord::output).collect();
    serde_json::to_string_pretty(&outputs)
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
