//! Ranked report of best laps
//!
//! Sorts driver records by best lap, optionally narrows the listing to one
//! driver, and renders it as text:
//!
//! ```text
//! 1. Sebastian Vettel | FERRARI | 0:01:04.415000
//! 2. Valtteri Bottas | MERCEDES | 0:01:12.434000
//! ```
//!
//! A separator line follows the entry at the cutline rank.

use crate::config::{SortOrder, DEFAULT_CUTLINE};
use crate::lap::LapResult;
use crate::types::{DriverRecord, ReportError, Result};
use serde::Serialize;
use std::fmt;

/// Width of the separator printed under the cutline
pub const SEPARATOR_WIDTH: usize = 70;

/// Options for building a report from a set of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub order: SortOrder,
    pub focus: Option<FocusDriver>,
    pub cutline: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            order: SortOrder::Ascending,
            focus: None,
            cutline: DEFAULT_CUTLINE,
        }
    }
}

/// A requested focus driver and the abbreviation it resolved to, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusDriver {
    /// Driver name (or abbreviation) as given by the user
    pub query: String,
    /// Abbreviation of the last declared driver that matched the query
    pub abbreviation: Option<String>,
}

impl FocusDriver {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            abbreviation: None,
        }
    }

    /// Check a declared driver against the query; a match replaces any earlier one
    pub fn observe(&mut self, abbreviation: &str, name: &str) -> bool {
        let matched = !self.query.is_empty()
            && (name.contains(self.query.as_str()) || abbreviation == self.query);
        if matched {
            log::debug!("Focus {:?} matched driver {}", self.query, abbreviation);
            self.abbreviation = Some(abbreviation.to_string());
        }
        matched
    }
}

/// One ranked line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub rank: usize,
    pub abbreviation: String,
    pub name: String,
    pub vehicle: String,
    pub best_lap: LapResult,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} | {} | {}",
            self.rank, self.name, self.vehicle, self.best_lap
        )
    }
}

/// The finished, ordered report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    #[serde(skip)]
    pub cutline: usize,
}

impl Report {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines, separator included
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        for entry in &self.entries {
            lines.push(entry.to_string());
            if entry.rank == self.cutline {
                lines.push("-".repeat(SEPARATOR_WIDTH));
            }
        }
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Sort, filter and rank the records
///
/// Every record must already carry a best lap. Equal laps keep their input
/// order in both directions.
pub fn build<'a, I>(records: I, options: &ReportOptions) -> Result<Report>
where
    I: IntoIterator<Item = &'a DriverRecord>,
{
    let mut ranked = records
        .into_iter()
        .map(|record| record.best_lap().map(|lap| (record, lap)))
        .collect::<Result<Vec<_>>>()?;

    match options.order {
        SortOrder::Ascending => ranked.sort_by(|a, b| a.1.cmp(&b.1)),
        SortOrder::Descending => ranked.sort_by(|a, b| b.1.cmp(&a.1)),
    }

    if let Some(focus) = &options.focus {
        let abbreviation = focus
            .abbreviation
            .as_deref()
            .ok_or_else(|| ReportError::DriverNotFound(focus.query.clone()))?;
        ranked.retain(|(record, _)| record.abbreviation == abbreviation);
        if ranked.is_empty() {
            return Err(ReportError::DriverNotFound(focus.query.clone()));
        }
    }

    let entries = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (record, best_lap))| ReportEntry {
            rank: i + 1,
            abbreviation: record.abbreviation.clone(),
            name: record.name.clone(),
            vehicle: record.vehicle.clone(),
            best_lap,
        })
        .collect();

    Ok(Report {
        entries,
        cutline: options.cutline,
    })
}
