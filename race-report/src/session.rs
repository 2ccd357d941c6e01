//! Session loading - the main entry point of the library
//!
//! A `Session` reads the three session files of a race folder in fixed order
//! (abbreviations, start log, end log) into a [`RecordStore`], resolves the
//! focus driver while reading the abbreviations, then computes every best lap.

use crate::config::{FileAccessPolicy, ReportConfig, SortOrder};
use crate::parser::{parse_line, FieldUpdate};
use crate::reader::LogReader;
use crate::report::{self, FocusDriver, Report, ReportOptions};
use crate::store::RecordStore;
use crate::types::{FieldKind, ReportError, Result};
use std::path::Path;

/// Records, focus resolution and report options for one race folder
#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    focus: Option<FocusDriver>,
    file_policy: FileAccessPolicy,
    order: SortOrder,
    cutline: usize,
}

impl Session {
    /// Create an empty session for the given configuration
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            store: RecordStore::new(),
            focus: config
                .focus
                .as_deref()
                .filter(|query| !query.trim().is_empty())
                .map(FocusDriver::new),
            file_policy: config.file_policy,
            order: config.order,
            cutline: config.cutline,
        }
    }

    /// Read all three session files from `folder` and compute best laps
    pub fn load(folder: &Path, config: &ReportConfig) -> Result<Self> {
        log::info!("Loading session from {:?}", folder);

        let mut session = Self::new(config);
        let [abbreviations, start, end] = config.files.paths_in(folder);

        session.ingest_file(&abbreviations, FieldKind::Abbreviation)?;
        session.ingest_file(&start, FieldKind::Start)?;
        session.ingest_file(&end, FieldKind::End)?;

        session.store.compute_best_laps()?;
        log::info!("Loaded {} drivers", session.store.len());

        Ok(session)
    }

    /// Read one session file, returning the number of lines applied
    ///
    /// Under the lenient policy an unreadable file is reported and treated
    /// as empty (or as ending at the failed read).
    pub fn ingest_file(&mut self, path: &Path, kind: FieldKind) -> Result<usize> {
        let reader = match LogReader::open(path) {
            Ok(reader) => reader,
            Err(e) => return self.downgrade(e).map(|_| 0),
        };

        let mut applied = 0;
        for line in reader {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.downgrade(e)?;
                    break;
                }
            };
            if self.ingest_line(&line, kind)? {
                applied += 1;
            }
        }

        log::debug!("Applied {} {} lines from {:?}", applied, kind, path);
        Ok(applied)
    }

    /// Parse and apply one line; blank lines are skipped
    pub fn ingest_line(&mut self, line: &str, kind: FieldKind) -> Result<bool> {
        if line.trim().is_empty() {
            log::debug!("Skipping blank {} line", kind);
            return Ok(false);
        }
        log::trace!("{} line: {}", kind, line);

        let parsed = parse_line(line, kind)?;
        if let (Some(focus), FieldUpdate::Driver { name, .. }) = (&mut self.focus, &parsed.update) {
            focus.observe(&parsed.abbreviation, name);
        }

        self.store.apply(parsed)?;
        Ok(true)
    }

    fn downgrade(&self, error: ReportError) -> Result<()> {
        match self.file_policy {
            FileAccessPolicy::Strict => Err(error),
            FileAccessPolicy::Lenient => {
                log::warn!("{}; continuing without it", error);
                Ok(())
            }
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Focus driver requested by the configuration, with its resolved abbreviation
    pub fn focus(&self) -> Option<&FocusDriver> {
        self.focus.as_ref()
    }

    /// Options the report is built with, all taken from the session's configuration
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            order: self.order,
            focus: self.focus.clone(),
            cutline: self.cutline,
        }
    }

    /// Build the ranked report for this session
    pub fn report(&self) -> Result<Report> {
        report::build(self.store.records(), &self.report_options())
    }
}

/// Load a race folder and build its report in one call
///
/// # Example
/// ```no_run
/// use race_report::{generate_report, ReportConfig, SortOrder};
/// use std::path::Path;
///
/// let config = ReportConfig::new().with_order(SortOrder::Descending);
/// let report = generate_report(Path::new("data"), &config).unwrap();
/// print!("{}", report);
/// ```
pub fn generate_report(folder: &Path, config: &ReportConfig) -> Result<Report> {
    Session::load(folder, config)?.report()
}
