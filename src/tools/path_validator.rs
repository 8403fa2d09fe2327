use anyhow::{Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("project path {} does not exist", path.display());
    }
    if !path.is_dir() {
        bail!("project path {} is not a directory", path.display());
    }
    Ok(())
}

/// Creates the directory if it is missing. Returns whether it was created,
/// so the caller can log the creation exactly once.
pub fn ensure_directory_exists(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}
