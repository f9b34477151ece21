//! CLI command implementations.
//!
//! Each submodule handles one subcommand:
//! - **check**: Walk a path, check every Python file, and report violations
//! - **init**: Write a default configuration file

pub mod check;
pub mod init;

pub use check::{handle_check, CheckConfig};
pub use init::init_config;
