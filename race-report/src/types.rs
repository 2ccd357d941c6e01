//! Core types for the race report library
//!
//! This module defines the per-driver record accumulated while reading the
//! session files, the kinds of input lines, and the error type shared by
//! every stage of report generation.

use crate::lap::LapResult;
use std::fmt;
use std::path::PathBuf;

/// Timestamp type used throughout the library
pub type Timestamp = chrono::NaiveDateTime;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Which session file a line came from, and therefore how it is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `ABBR_Name_Vehicle` lines from the abbreviations file
    Abbreviation,
    /// `ABBR<timestamp>` lines from the start log
    Start,
    /// `ABBR<timestamp>` lines from the end log
    End,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Abbreviation => write!(f, "abbreviation"),
            FieldKind::Start => write!(f, "start"),
            FieldKind::End => write!(f, "end"),
        }
    }
}

/// Errors that can occur while building a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Cannot read {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed {kind} line: {line:?}")]
    MalformedLine { kind: FieldKind, line: String },

    #[error("Unknown driver abbreviation: {0}")]
    UnknownDriver(String),

    #[error("Driver {abbreviation} has no {field}")]
    MissingField {
        abbreviation: String,
        field: &'static str,
    },

    #[error("Invalid timestamp {value:?}: expected YYYY-MM-DD_HH:MM:SS.ffffff")]
    TimestampFormat {
        value: String,
        source: Option<chrono::ParseError>,
    },

    #[error("Driver not found: {0}")]
    DriverNotFound(String),
}

/// Everything known about one driver, keyed by abbreviation
///
/// Start and end times are kept as the text found in the logs; they are
/// only parsed when the best lap is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    /// Three-letter driver code (e.g. "SVF")
    pub abbreviation: String,
    /// Full driver name
    pub name: String,
    /// Vehicle or team name
    pub vehicle: String,
    /// Raw start timestamp, once the start log has been read
    pub start_time: Option<String>,
    /// Raw end timestamp, once the end log has been read
    pub end_time: Option<String>,
    /// Best lap, once computed from start and end times
    pub best_lap: Option<LapResult>,
}

impl DriverRecord {
    /// Create a record with no timing data yet
    pub fn new(
        abbreviation: impl Into<String>,
        name: impl Into<String>,
        vehicle: impl Into<String>,
    ) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            name: name.into(),
            vehicle: vehicle.into(),
            start_time: None,
            end_time: None,
            best_lap: None,
        }
    }

    /// Raw start timestamp, or `MissingField` if the start log never mentioned this driver
    pub fn start_time(&self) -> Result<&str> {
        self.start_time
            .as_deref()
            .ok_or_else(|| self.missing("start time"))
    }

    /// Raw end timestamp, or `MissingField` if the end log never mentioned this driver
    pub fn end_time(&self) -> Result<&str> {
        self.end_time
            .as_deref()
            .ok_or_else(|| self.missing("end time"))
    }

    /// Computed best lap, or `MissingField` if it has not been computed
    pub fn best_lap(&self) -> Result<LapResult> {
        self.best_lap.ok_or_else(|| self.missing("best lap"))
    }

    fn missing(&self, field: &'static str) -> ReportError {
        ReportError::MissingField {
            abbreviation: self.abbreviation.clone(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_errors() {
        let record = DriverRecord::new("SVF", "Sebastian Vettel", "FERRARI");

        match record.start_time() {
            Err(ReportError::MissingField { abbreviation, field }) => {
                assert_eq!(abbreviation, "SVF");
                assert_eq!(field, "start time");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
        assert!(record.end_time().is_err());
        assert!(record.best_lap().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ReportError::MalformedLine {
            kind: FieldKind::Abbreviation,
            line: "SVF_Sebastian Vettel".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed abbreviation line: \"SVF_Sebastian Vettel\""
        );

        let err = ReportError::DriverNotFound("Nobody".to_string());
        assert_eq!(err.to_string(), "Driver not found: Nobody");
    }
}
