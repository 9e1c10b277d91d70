//! Trade timestamp parsing for the `DD-MM-YYYY:HH:MM:SS:fff` format.
//!
//! The last field is a fraction of a second, so `:543` means 0.543 s and
//! `:5` means 0.5 s. At most nanosecond precision (9 digits) is kept.

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT_HINT: &str = "DD-MM-YYYY:HH:mm:sec:ms";

const SECONDS_FORMAT: &str = "%d-%m-%Y:%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Illegal timestamp format: {input}")]
pub struct TimestampError {
    pub input: String,
}

pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TimestampError> {
    let err = || TimestampError {
        input: input.to_string(),
    };
    let trimmed = input.trim();
    let (head, fraction) = trimmed.rsplit_once(':').ok_or_else(err)?;
    if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    // head still carries its own ':'-separated seconds field
    if head.matches(':').count() != 3 {
        return Err(err());
    }
    NaiveDateTime::parse_from_str(&format!("{head}.{fraction}"), SECONDS_FORMAT).map_err(|_| err())
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%d-%m-%Y:%H:%M:%S:%3f").to_string()
}
