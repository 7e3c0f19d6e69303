//! Data and cache directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.local/share/storefront/`, `~/.cache/storefront/`
//! - macOS: `~/Library/Application Support/storefront/`, `~/Library/Caches/storefront/`
//! - Windows: `%APPDATA%\storefront\`, `%LOCALAPPDATA%\storefront\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "storefront";
const STORAGE_FILE: &str = "storage.json";
const LOCAL_STORAGE_FILE: &str = ".storefront.storage.json";

/// Get the application data directory
/// Returns ~/.local/share/storefront/ on Linux
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/storefront/ on Linux, ~/Library/Caches/storefront/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Path of the storage file used when none is configured
///
/// Falls back to a file in the current working directory when no data
/// directory can be determined.
pub fn default_storage_path() -> PathBuf {
    match data_dir() {
        Ok(dir) => dir.join(STORAGE_FILE),
        Err(e) => {
            log::warn!("No data directory available ({}), using {}", e, LOCAL_STORAGE_FILE);
            PathBuf::from(LOCAL_STORAGE_FILE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_path_file_name() {
        let path = default_storage_path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name == STORAGE_FILE || name == LOCAL_STORAGE_FILE);
    }
}
