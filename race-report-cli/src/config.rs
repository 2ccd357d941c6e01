//! Settings file loading and parsing

use anyhow::{Context, Result};
use race_report::{FileAccessPolicy, ReportConfig, SessionFiles, SortOrder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Folder holding the session files
    pub folder: Option<PathBuf>,
    #[serde(flatten)]
    pub files: SessionFiles,
    /// Abort on unreadable session files
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub order: Option<SortOrder>,
    pub driver: Option<String>,
    pub cutline: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Txt,
            order: None,
            driver: None,
            cutline: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

impl AppConfig {
    /// Library configuration described by these settings
    pub fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::new().with_files(self.input.files.clone());

        if self.input.strict {
            config = config.with_file_policy(FileAccessPolicy::Strict);
        }
        if let Some(order) = self.output.order {
            config = config.with_order(order);
        }
        if let Some(driver) = &self.output.driver {
            config = config.with_focus(driver.clone());
        }
        if let Some(cutline) = self.output.cutline {
            config = config.with_cutline(cutline);
        }

        config
    }
}

/// Load settings from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
