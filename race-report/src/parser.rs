//! Line parser for the session files
//!
//! Each session file has its own line shape:
//! - abbreviations: `SVF_Sebastian Vettel_FERRARI`
//! - start / end logs: `SVF2018-05-24_12:02:58.917`
//!
//! Parsing is a pure transform; the result is applied to a
//! [`RecordStore`](crate::store::RecordStore) by the caller.

use crate::types::{FieldKind, ReportError, Result};

/// Length of a driver abbreviation at the start of every log line
pub const ABBREVIATION_LEN: usize = 3;

/// Field update carried by one parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Declares a driver (abbreviations file)
    Driver { name: String, vehicle: String },
    /// Raw lap start timestamp
    Start(String),
    /// Raw lap end timestamp
    End(String),
}

/// A parsed line: which driver it refers to and what it says about them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub abbreviation: String,
    pub update: FieldUpdate,
}

/// Parse one raw line from a session file of the given kind
pub fn parse_line(line: &str, kind: FieldKind) -> Result<ParsedLine> {
    let line = line.trim_end();

    match kind {
        FieldKind::Abbreviation => parse_driver_line(line),
        FieldKind::Start | FieldKind::End => {
            let (abbreviation, timestamp) = split_timing_line(line, kind)?;
            let timestamp = timestamp.to_string();
            let update = if kind == FieldKind::Start {
                FieldUpdate::Start(timestamp)
            } else {
                FieldUpdate::End(timestamp)
            };

            Ok(ParsedLine {
                abbreviation: abbreviation.to_string(),
                update,
            })
        }
    }
}

fn parse_driver_line(line: &str) -> Result<ParsedLine> {
    let parts: Vec<&str> = line.split('_').collect();

    match parts.as_slice() {
        [abbreviation, name, vehicle] => Ok(ParsedLine {
            abbreviation: abbreviation.to_string(),
            update: FieldUpdate::Driver {
                name: name.to_string(),
                vehicle: vehicle.to_string(),
            },
        }),
        _ => Err(malformed(line, FieldKind::Abbreviation)),
    }
}

fn split_timing_line(line: &str, kind: FieldKind) -> Result<(&str, &str)> {
    // `get` also rejects a split inside a multi-byte character
    let abbreviation = line
        .get(..ABBREVIATION_LEN)
        .ok_or_else(|| malformed(line, kind))?;
    let timestamp = &line[ABBREVIATION_LEN..];

    Ok((abbreviation, timestamp.trim_end()))
}

fn malformed(line: &str, kind: FieldKind) -> ReportError {
    ReportError::MalformedLine {
        kind,
        line: line.to_string(),
    }
}
