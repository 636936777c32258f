//! Row value helpers shared by the conversation and message mappers.
//!
//! Exported archives are not strict about column affinity: a text column can
//! hold a blob, a numeric column can hold a real. These helpers read
//! `ValueRef`s leniently instead of failing the whole row.
//!
//! CHANGELOG:
//! - 02/12/2026 - Initial extraction from message mapper

use chrono::{DateTime, TimeZone, Utc};
use rusqlite::types::ValueRef;
use rusqlite::Row;

/// Trim a string, mapping blank values to `None`.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read a column as trimmed, non-blank text.
///
/// Text and blob values are decoded as (lossy) UTF-8; numbers and NULL give `None`.
pub fn text_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            non_empty(Some(&String::from_utf8_lossy(bytes)))
        }
        ValueRef::Null | ValueRef::Integer(_) | ValueRef::Real(_) => None,
    })
}

/// Read a column as an integer. Whole reals are accepted; anything else is `None`.
pub fn int_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    })
}

/// Convert milliseconds since the Unix epoch. Out-of-range values map to the epoch.
pub fn millis_to_datetime(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  hi ")), Some("hi".to_string()));
        assert_eq!(non_empty(Some(" \n ")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_lenient_column_reads() {
        let conn = Connection::open_in_memory().unwrap();
        let row_values = conn
            .query_row(
                "SELECT ' text ', x'68656c6c6f', 42, 2.0, 2.5, NULL, '7'",
                [],
                |row| {
                    Ok((
                        text_at(row, 0)?,
                        text_at(row, 1)?,
                        text_at(row, 2)?,
                        int_at(row, 2)?,
                        int_at(row, 3)?,
                        int_at(row, 4)?,
                        int_at(row, 5)?,
                        int_at(row, 6)?,
                    ))
                },
            )
            .unwrap();

        assert_eq!(row_values.0, Some("text".to_string()));
        assert_eq!(row_values.1, Some("hello".to_string()));
        assert_eq!(row_values.2, None);
        assert_eq!(row_values.3, Some(42));
        assert_eq!(row_values.4, Some(2));
        assert_eq!(row_values.5, None);
        assert_eq!(row_values.6, None);
        assert_eq!(row_values.7, None);
    }

    #[test]
    fn test_millis_to_datetime() {
        // 2024-01-01T00:00:00Z
        let dt = millis_to_datetime(1_704_067_200_000);
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(millis_to_datetime(i64::MAX), DateTime::<Utc>::default());
    }
}
