// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod docstring;
pub mod io;

// Re-export commonly used types
pub use crate::analyzers::{check_file, check_source, LineIndex};
pub use crate::config::{discover_config, DocguardConfig};
pub use crate::core::{FileReport, Violation, ViolationCode};
pub use crate::docstring::{DocParam, Docstring};
pub use crate::io::output::{create_writer, OutputWriter};
