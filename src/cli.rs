use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with one line per violation
    Terminal,
    /// Machine-readable JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "docguard")]
#[command(about = "Checks Python docstrings against function signatures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check docstrings in a file or directory tree
    Check {
        /// File or directory to check
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to discovering .docguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Do not compare documented type hints against annotations
        #[arg(long = "no-check-type-hint")]
        no_check_type_hint: bool,

        /// Do not require documented arguments in signature order
        #[arg(long = "no-check-arg-order")]
        no_check_arg_order: bool,

        /// Check summary-only docstrings too
        #[arg(long = "check-short-docstrings")]
        check_short_docstrings: bool,

        /// Skip the raise checks
        #[arg(long = "skip-raises")]
        skip_raises: bool,

        /// Print only the violations, no summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default .docguard.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
