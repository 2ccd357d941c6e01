//! Report configuration types
//!
//! This module defines the options that shape one report: which files to
//! read, how to treat unreadable files, sort direction, focus driver and the
//! position of the cutline separator.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rank after which the separator line is printed
pub const DEFAULT_CUTLINE: usize = 15;

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Sort direction for best laps
    #[serde(default)]
    pub order: SortOrder,

    /// Optional driver name (or abbreviation) to restrict the report to
    #[serde(default)]
    pub focus: Option<String>,

    /// Separator is printed after this rank (0 disables it)
    #[serde(default = "default_cutline")]
    pub cutline: usize,

    /// Names of the three session files inside the input folder
    #[serde(default)]
    pub files: SessionFiles,

    /// What to do when a session file cannot be read
    #[serde(default)]
    pub file_policy: FileAccessPolicy,
}

fn default_cutline() -> usize {
    DEFAULT_CUTLINE
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::default(),
            focus: None,
            cutline: DEFAULT_CUTLINE,
            files: SessionFiles::default(),
            file_policy: FileAccessPolicy::default(),
        }
    }
}

/// Sort direction for the best lap column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Handling of session files that cannot be opened or read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAccessPolicy {
    /// Warn and treat the file as empty; later stages fail on the missing data
    #[default]
    Lenient,
    /// Abort on the first unreadable file
    Strict,
}

/// File names of the three session inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionFiles {
    #[serde(default = "default_abbreviations")]
    pub abbreviations: PathBuf,
    #[serde(default = "default_start")]
    pub start: PathBuf,
    #[serde(default = "default_end")]
    pub end: PathBuf,
}

fn default_abbreviations() -> PathBuf {
    PathBuf::from("abbreviations.txt")
}

fn default_start() -> PathBuf {
    PathBuf::from("start.log")
}

fn default_end() -> PathBuf {
    PathBuf::from("end.log")
}

impl Default for SessionFiles {
    fn default() -> Self {
        Self {
            abbreviations: default_abbreviations(),
            start: default_start(),
            end: default_end(),
        }
    }
}

impl SessionFiles {
    /// Full paths of the three files inside `folder`, in reading order
    pub fn paths_in(&self, folder: &Path) -> [PathBuf; 3] {
        [
            folder.join(&self.abbreviations),
            folder.join(&self.start),
            folder.join(&self.end),
        ]
    }
}

impl ReportConfig {
    /// Create a report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set sort direction
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder method: restrict the report to one driver
    ///
    /// A blank driver means no filter.
    pub fn with_focus(mut self, driver: impl Into<String>) -> Self {
        let driver = driver.into();
        self.focus = if driver.trim().is_empty() {
            None
        } else {
            Some(driver)
        };
        self
    }

    /// Builder method: set the separator rank
    pub fn with_cutline(mut self, cutline: usize) -> Self {
        self.cutline = cutline;
        self
    }

    /// Builder method: set the session file names
    pub fn with_files(mut self, files: SessionFiles) -> Self {
        self.files = files;
        self
    }

    /// Builder method: set the unreadable-file policy
    pub fn with_file_policy(mut self, policy: FileAccessPolicy) -> Self {
        self.file_policy = policy;
        self
    }
}
