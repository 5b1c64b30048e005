//! Reward deadline
//!
//! `metadata.json` stores the deadline either as epoch milliseconds or as a
//! date-time string. Strings with an explicit offset are absolute; naive
//! strings are read as civil time in the report timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display format of the deadline in the report
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Errors that can occur when resolving a deadline
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeadlineError {
    /// String is not a recognized date-time
    #[error("unrecognized deadline: {0:?}")]
    Unrecognized(String),

    /// Timestamp cannot be represented
    #[error("deadline out of range: {0}")]
    OutOfRange(String),
}

/// Deadline exactly as stored in metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDeadline {
    /// Milliseconds since the Unix epoch
    EpochMillis(serde_json::Number),
    /// Date-time text
    Text(String),
}

/// A resolved deadline instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(DateTime<Utc>);

impl Deadline {
    /// Resolve a raw metadata value, reading naive strings in `offset`
    pub fn resolve(raw: &RawDeadline, offset: FixedOffset) -> Result<Self, DeadlineError> {
        match raw {
            RawDeadline::EpochMillis(n) => {
                let millis = n
                    .as_i64()
                    .or_else(|| n.as_f64().and_then(whole_millis))
                    .ok_or_else(|| DeadlineError::OutOfRange(n.to_string()))?;
                Self::from_epoch_millis(millis)
            },
            RawDeadline::Text(s) => Self::parse(s, offset),
        }
    }

    /// Build from milliseconds since the Unix epoch
    pub fn from_epoch_millis(millis: i64) -> Result<Self, DeadlineError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| DeadlineError::OutOfRange(millis.to_string()))
    }

    /// Parse a date-time string
    pub fn parse(s: &str, offset: FixedOffset) -> Result<Self, DeadlineError> {
        let s = s.trim();

        if let Ok(at) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(at.with_timezone(&Utc)));
        }

        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| DeadlineError::Unrecognized(s.to_string()))?;

        offset
            .from_local_datetime(&naive)
            .single()
            .map(|at| Self(at.with_timezone(&Utc)))
            .ok_or_else(|| DeadlineError::OutOfRange(s.to_string()))
    }

    /// Format as `YYYY-MM-DD HH:mm:ss` in the given offset
    #[must_use]
    pub fn format_in(&self, offset: FixedOffset) -> String {
        self.0.with_timezone(&offset).format(DEADLINE_FORMAT).to_string()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_millis(value: f64) -> Option<i64> {
    (value.is_finite() && value.abs() < 9.0e15).then(|| value.trunc() as i64)
}
