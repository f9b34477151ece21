use colored::*;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::core::FileReport;

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Flake8-style `path:line: DOC...` lines, one per violation, followed by a
/// one-line summary unless quiet.
pub struct TerminalWriter<W: Write> {
    writer: W,
    quiet: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, quiet: bool) -> Self {
        Self { writer, quiet }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let mut total = 0usize;
        let mut flagged_files = 0usize;

        for report in reports {
            if report.violations.is_empty() {
                continue;
            }
            flagged_files += 1;
            for violation in &report.violations {
                total += 1;
                writeln!(
                    self.writer,
                    "{}:{}: {}",
                    report.path.display(),
                    violation.line,
                    violation
                )?;
            }
        }

        if !self.quiet {
            let summary = if total == 0 {
                format!("Checked {} files, no violations found.", reports.len())
                    .green()
                    .to_string()
            } else {
                format!(
                    "Found {} violations in {} of {} files.",
                    total,
                    flagged_files,
                    reports.len()
                )
                .red()
                .to_string()
            };
            writeln!(self.writer, "{summary}")?;
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
    quiet: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, quiet)),
    }
}
