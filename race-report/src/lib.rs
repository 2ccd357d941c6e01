//! Race Report Library
//!
//! Builds a ranked best-lap report from the timing files of one race
//! session. A session folder holds three files:
//! - `abbreviations.txt`: `SVF_Sebastian Vettel_FERRARI`
//! - `start.log`: `SVF2018-05-24_12:02:58.917`
//! - `end.log`: `SVF2018-05-24_12:04:03.332`
//!
//! # Architecture
//!
//! - `parser` turns one raw line into a field update for a driver
//! - `store` accumulates updates into per-driver records
//! - `lap` computes each best lap and flags laps that end before they start
//! - `report` sorts, filters and renders the ranked listing
//! - `session` reads the files in order and ties the stages together
//!
//! Printing and argument handling live in the application layer
//! (race-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use race_report::{ReportConfig, Session, SortOrder};
//! use std::path::Path;
//!
//! let config = ReportConfig::new()
//!     .with_order(SortOrder::Ascending)
//!     .with_focus("Sebastian Vettel");
//!
//! let session = Session::load(Path::new("data"), &config).unwrap();
//! let report = session.report().unwrap();
//!
//! for entry in &report.entries {
//!     println!("{} -> {}", entry.abbreviation, entry.best_lap);
//! }
//! ```

// Public modules
pub mod config;
pub mod lap;
pub mod parser;
pub mod reader;
pub mod report;
pub mod session;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use config::{FileAccessPolicy, ReportConfig, SessionFiles, SortOrder};
pub use lap::{compute_best_lap, LapResult};
pub use parser::{parse_line, FieldUpdate, ParsedLine};
pub use report::{FocusDriver, Report, ReportEntry, ReportOptions};
pub use session::{generate_report, Session};
pub use store::RecordStore;
pub use types::{DriverRecord, FieldKind, ReportError, Result, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
