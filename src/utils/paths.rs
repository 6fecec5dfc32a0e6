use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".uuid-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_dir()?;
    Ok(app_dir.join("config.toml"))
}

pub fn get_log_dir() -> Result<PathBuf> {
    let app_dir = get_app_dir()?;
    Ok(app_dir.join("logs"))
}

pub fn ensure_log_dir_exists() -> Result<PathBuf> {
    let log_dir = get_log_dir()?;

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}
