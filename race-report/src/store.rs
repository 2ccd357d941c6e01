//! Per-driver record store
//!
//! Accumulates everything the session files say about each driver, keyed by
//! abbreviation and kept in order of first appearance.

use crate::lap::compute_best_lap;
use crate::parser::{FieldUpdate, ParsedLine};
use crate::types::{DriverRecord, ReportError, Result};
use std::collections::HashMap;

/// Mutable store of driver records, owned by the caller for one report
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records in insertion order
    records: Vec<DriverRecord>,
    /// Abbreviation -> index into `records`
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one parsed line
    ///
    /// A driver declaration creates the record (or renames an existing one);
    /// timing updates require the driver to have been declared already.
    pub fn apply(&mut self, line: ParsedLine) -> Result<()> {
        let ParsedLine {
            abbreviation,
            update,
        } = line;

        match update {
            FieldUpdate::Driver { name, vehicle } => {
                if let Some(&idx) = self.index.get(&abbreviation) {
                    log::debug!("Driver {} declared again, replacing name/vehicle", abbreviation);
                    let record = &mut self.records[idx];
                    record.name = name;
                    record.vehicle = vehicle;
                } else {
                    log::trace!("New driver {}: {} ({})", abbreviation, name, vehicle);
                    self.index.insert(abbreviation.clone(), self.records.len());
                    self.records
                        .push(DriverRecord::new(abbreviation, name, vehicle));
                }
            }
            FieldUpdate::Start(timestamp) => {
                self.get_mut(&abbreviation)?.start_time = Some(timestamp);
            }
            FieldUpdate::End(timestamp) => {
                self.get_mut(&abbreviation)?.end_time = Some(timestamp);
            }
        }

        Ok(())
    }

    /// Look up a driver by abbreviation
    pub fn get(&self, abbreviation: &str) -> Option<&DriverRecord> {
        self.index.get(abbreviation).map(|&idx| &self.records[idx])
    }

    fn get_mut(&mut self, abbreviation: &str) -> Result<&mut DriverRecord> {
        match self.index.get(abbreviation) {
            Some(&idx) => Ok(&mut self.records[idx]),
            None => Err(ReportError::UnknownDriver(abbreviation.to_string())),
        }
    }

    /// Iterate over `(abbreviation, record)` pairs in insertion order
    ///
    /// Each call starts a fresh iteration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DriverRecord)> + '_ {
        self.records
            .iter()
            .map(|record| (record.abbreviation.as_str(), record))
    }

    /// Iterate over the records alone, in insertion order
    pub fn records(&self) -> std::slice::Iter<'_, DriverRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compute the best lap of every driver
    ///
    /// Fails on the first driver with a missing start/end time or an
    /// unparseable timestamp.
    pub fn compute_best_laps(&mut self) -> Result<()> {
        for record in &mut self.records {
            let lap = compute_best_lap(record.start_time()?, record.end_time()?)?;
            log::debug!("{} best lap: {}", record.abbreviation, lap);
            record.best_lap = Some(lap);
        }
        Ok(())
    }
}
