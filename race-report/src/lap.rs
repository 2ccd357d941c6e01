//! Lap time calculation
//!
//! Turns a pair of raw start/end timestamps into a lap duration. A lap that
//! ends before it starts is not an error: it is reported as an anomaly and
//! flagged in the output.

use crate::types::{ReportError, Result, Timestamp};
use chrono::{Duration, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Format of the whole-second part of every log timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Most fractional digits a timestamp may carry (microseconds)
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Text printed in place of a lap that ended before it started
pub const NEGATIVE_TIME: &str = "X NEGATIVE TIME";

/// Outcome of a lap calculation
///
/// Variant order matters: the derived `Ord` ranks every real duration ahead
/// of the `Negative` anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LapResult {
    /// Elapsed time between start and end (never negative)
    Duration(Duration),
    /// End timestamp precedes the start timestamp
    Negative,
}

impl LapResult {
    /// Classify an elapsed time
    pub fn from_duration(duration: Duration) -> Self {
        if duration < Duration::zero() {
            LapResult::Negative
        } else {
            LapResult::Duration(duration)
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, LapResult::Negative)
    }

    /// The duration, if this lap is not anomalous
    pub fn duration(&self) -> Option<Duration> {
        match self {
            LapResult::Duration(d) => Some(*d),
            LapResult::Negative => None,
        }
    }
}

/// Renders `H:MM:SS` or `H:MM:SS.ffffff`, with the fraction omitted when it is zero
impl fmt::Display for LapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = match self {
            LapResult::Duration(d) => *d,
            LapResult::Negative => return f.write_str(NEGATIVE_TIME),
        };

        let total_seconds = duration.num_seconds();
        let micros = (duration - Duration::seconds(total_seconds))
            .num_microseconds()
            .unwrap_or(0);

        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)?;
        if micros != 0 {
            write!(f, ".{:06}", micros)?;
        }
        Ok(())
    }
}

impl Serialize for LapResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse one log timestamp (`YYYY-MM-DD_HH:MM:SS.ffffff`)
///
/// The fraction is mandatory and holds 1 to 6 digits.
pub fn parse_timestamp(value: &str) -> Result<Timestamp> {
    let invalid = |source: Option<chrono::ParseError>| ReportError::TimestampFormat {
        value: value.to_string(),
        source,
    };

    let (seconds, fraction) = value.rsplit_once('.').ok_or_else(|| invalid(None))?;
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid(None));
    }

    let whole = NaiveDateTime::parse_from_str(seconds, TIMESTAMP_FORMAT)
        .map_err(|e| invalid(Some(e)))?;

    // "917" means 917000 microseconds
    let digits = fraction
        .bytes()
        .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
    let scale = 10i64.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32);

    Ok(whole + Duration::microseconds(digits * scale))
}

/// Compute the lap between two raw timestamps
pub fn compute_best_lap(start_time: &str, end_time: &str) -> Result<LapResult> {
    let start = parse_timestamp(start_time)?;
    let end = parse_timestamp(end_time)?;

    let result = LapResult::from_duration(end - start);
    if result.is_negative() {
        log::debug!("Lap ends before it starts: {} -> {}", start_time, end_time);
    }

    Ok(result)
}
