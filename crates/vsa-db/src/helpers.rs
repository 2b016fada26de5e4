//! Row-to-entity parsing helpers.

use chrono::Local;

use vsa_core::entities::{ClassificationRecord, TIMESTAMP_FORMAT};
use vsa_core::enums::Sentiment;

use crate::error::DatabaseError;

/// Current local time in the fixed `YYYY-MM-DD HH:MM:SS` layout.
#[must_use]
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `sentiment` column value.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the column holds an unknown label.
pub fn parse_sentiment(s: &str) -> Result<Sentiment, DatabaseError> {
    s.parse()
        .map_err(|e| DatabaseError::InvalidState(format!("bad sentiment column '{s}': {e}")))
}

/// Convert a SQL `COUNT`/`SUM` result into `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for negative values.
pub fn count_to_u64(value: i64) -> Result<u64, DatabaseError> {
    u64::try_from(value)
        .map_err(|_| DatabaseError::InvalidState(format!("negative count {value}")))
}

/// Map a `SELECT id, text, sentiment, timestamp` row.
///
/// # Errors
///
/// Returns `DatabaseError` if a column is missing or holds an unexpected type.
pub fn row_to_record(row: &libsql::Row) -> Result<ClassificationRecord, DatabaseError> {
    Ok(ClassificationRecord {
        id: row.get::<i64>(0)?,
        text: row.get::<String>(1)?,
        sentiment: parse_sentiment(&row.get::<String>(2)?)?,
        timestamp: row.get::<String>(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_timestamp_has_fixed_layout() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19, "unexpected layout: {ts}");
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn parse_sentiment_accepts_stored_labels() {
        assert_eq!(parse_sentiment("NEGATIVE").unwrap(), Sentiment::Negative);
    }

    #[test]
    fn parse_sentiment_rejects_garbage() {
        let err = parse_sentiment("MAYBE").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[test]
    fn negative_count_is_invalid() {
        assert!(count_to_u64(-1).is_err());
        assert_eq!(count_to_u64(7).unwrap(), 7);
    }
}
