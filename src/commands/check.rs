use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::analyzers;
use crate::cli::OutputFormat;
use crate::config::{discover_config, DocguardConfig};
use crate::core::errors::Error;
use crate::core::FileReport;
use crate::io::output::create_writer;
use crate::io::walker::FileWalker;

pub struct CheckConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_check_type_hint: bool,
    pub no_check_arg_order: bool,
    pub check_short_docstrings: bool,
    pub skip_raises: bool,
    pub quiet: bool,
}

/// Runs the check and returns the total number of violations found.
pub fn handle_check(check: CheckConfig) -> Result<usize> {
    let config = resolve_config(&check)?;

    let files = FileWalker::new(check.path.clone())
        .with_ignore_patterns(config.ignore.clone())
        .walk()
        .with_context(|| format!("failed to walk {}", check.path.display()))?;

    let mut reports: Vec<FileReport> = Vec::with_capacity(files.len());
    for file in &files {
        match analyzers::check_file(file, &config) {
            Ok(report) => reports.push(report),
            // A file that does not parse is reported and skipped, not fatal.
            Err(error @ Error::Parse { .. }) => log::warn!("{error}"),
            Err(error) => return Err(error.into()),
        }
    }

    let destination: Box<dyn Write> = match &check.output {
        Some(path) => Box::new(fs::File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(check.format, destination, check.quiet).write_reports(&reports)?;

    Ok(reports.iter().map(|r| r.violations.len()).sum())
}

/// File configuration first, then CLI flags on top.
fn resolve_config(check: &CheckConfig) -> Result<DocguardConfig> {
    let mut config = match &check.config {
        Some(path) => DocguardConfig::load_from(path)?,
        None => {
            let start = if check.path.is_dir() {
                check.path.clone()
            } else {
                check
                    .path
                    .parent()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."))
            };
            discover_config(&start)
        }
    };

    if check.no_check_type_hint {
        config.check_type_hint = false;
    }
    if check.no_check_arg_order {
        config.check_arg_order = false;
    }
    if check.check_short_docstrings {
        config.skip_checking_short_docstrings = false;
    }
    if check.skip_raises {
        config.skip_checking_raises = true;
    }
    Ok(config)
}
