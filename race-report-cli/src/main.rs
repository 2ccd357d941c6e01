//! Race Report CLI Application
//!
//! This is the command-line interface for the race report generator.
//! It uses the race-report library and adds:
//! - Argument parsing and an optional TOML settings file
//! - Logging setup
//! - Text or JSON output on stdout

use anyhow::{Context, Result};
use clap::Parser;
use race_report::{FileAccessPolicy, Report, ReportConfig, SortOrder};
use std::path::PathBuf;

mod config;

use config::{AppConfig, OutputFormat};

/// Race Report - Rank drivers by best lap time
#[derive(Parser, Debug)]
#[command(name = "race-report")]
#[command(about = "Build a best-lap ranking from race timing logs", long_about = None)]
#[command(version)]
struct Args {
    /// Folder containing abbreviations.txt, start.log and end.log
    #[arg(short, long, visible_alias = "folder", value_name = "FOLDER")]
    file: Option<PathBuf>,

    /// Sort best laps ascending (default)
    #[arg(long, conflicts_with = "desc")]
    asc: bool,

    /// Sort best laps descending
    #[arg(long)]
    desc: bool,

    /// Only report the driver whose name (or abbreviation) matches
    #[arg(long, value_name = "NAME")]
    driver: Option<String>,

    /// Path to a settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Abort when a session file cannot be read
    #[arg(long)]
    strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::debug!("Race Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using race-report library v{}", race_report::VERSION);

    let settings = match &args.config {
        Some(path) => {
            log::info!("Loading settings from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let folder = args
        .file
        .clone()
        .or_else(|| settings.input.folder.clone())
        .context("No input folder given (use --file <FOLDER> or [input] folder in the settings file)")?;

    let report_config = merge_args(&args, &settings);
    let report = race_report::generate_report(&folder, &report_config)
        .with_context(|| format!("Failed to build report for {:?}", folder))?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        settings.output.format
    };
    print_report(&report, format)?;

    Ok(())
}

/// Command-line flags take precedence over the settings file
fn merge_args(args: &Args, settings: &AppConfig) -> ReportConfig {
    let mut config = settings.report_config();

    if args.desc {
        config = config.with_order(SortOrder::Descending);
    } else if args.asc {
        config = config.with_order(SortOrder::Ascending);
    }
    if let Some(driver) = &args.driver {
        config = config.with_focus(driver.clone());
    }
    if args.strict {
        config = config.with_file_policy(FileAccessPolicy::Strict);
    }

    config
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Txt => print!("{}", report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
