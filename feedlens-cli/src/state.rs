use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$FEEDLENS_HOME`, else `~/.feedlens`.
pub fn feedlens_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FEEDLENS_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".feedlens"))
}

pub fn ensure_feedlens_home() -> Result<PathBuf> {
    let dir = feedlens_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
