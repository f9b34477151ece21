use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
