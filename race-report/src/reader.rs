//! Line-by-line reader for session files
//!
//! Each file is read lazily through a buffered reader. A `LogReader` is
//! single-pass: open the file again to restart.

use crate::types::{ReportError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Iterator over the lines of one session file
pub struct LogReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl LogReader {
    /// Open a session file for reading
    pub fn open(path: &Path) -> Result<Self> {
        log::info!("Reading {:?}", path);

        let file = File::open(path).map_err(|source| ReportError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for LogReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|source| ReportError::FileAccess {
            path: self.path.clone(),
            source,
        }))
    }
}
