use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::Error;

/// Checker configuration, read from `.docguard.toml`. Every field has a
/// default so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocguardConfig {
    /// Compare documented type hints against signature annotations.
    #[serde(default = "default_true")]
    pub check_type_hint: bool,

    /// Require documented arguments in signature order.
    #[serde(default = "default_true")]
    pub check_arg_order: bool,

    /// Leave summary-only docstrings alone.
    #[serde(default = "default_true")]
    pub skip_checking_short_docstrings: bool,

    /// Turn off the `raise` checks entirely.
    #[serde(default)]
    pub skip_checking_raises: bool,

    /// Glob patterns for files to leave out of the walk.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for DocguardConfig {
    fn default() -> Self {
        Self {
            check_type_hint: default_true(),
            check_arg_order: default_true(),
            skip_checking_short_docstrings: default_true(),
            skip_checking_raises: false,
            ignore: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl DocguardConfig {
    /// Parse an explicitly named config file. Unlike discovery, a missing or
    /// malformed file here is the user's mistake and surfaces as an error.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

fn try_load_config_from_path(path: &Path) -> Option<DocguardConfig> {
    if !path.exists() {
        return None;
    }
    match DocguardConfig::load_from(path) {
        Ok(config) => {
            log::debug!("loaded configuration from {}", path.display());
            Some(config)
        }
        Err(error) => {
            log::warn!("ignoring {}: {}", path.display(), error);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find `.docguard.toml` in `start` or one of its ancestors. Falls back to
/// the defaults when nothing is found.
pub fn discover_config(start: &Path) -> DocguardConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            DocguardConfig::default()
        })
}

pub const CONFIG_FILE_NAME: &str = ".docguard.toml";

/// The file `docguard init` writes.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# docguard configuration

# Compare documented type hints against signature annotations.
check_type_hint = true

# Require documented arguments in signature order.
check_arg_order = true

# Leave summary-only docstrings alone.
skip_checking_short_docstrings = true

# Turn off the `raise` checks entirely.
skip_checking_raises = false

# Glob patterns for files to skip.
ignore = []
"#;
