//! Lookup of `.storefront.toml`

use std::path::PathBuf;

const CONFIG_FILE: &str = ".storefront.toml";

/// Raw contents of the storefront config, if any
///
/// A `.storefront.toml` in the working directory shadows the one in the
/// home directory, so a checkout can pin its own storage file and pricing.
/// Unreadable files are skipped.
pub fn load_config_file() -> Option<String> {
    config_candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(dirs::home_dir().map(|home| home.join(CONFIG_FILE)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_directory_is_searched_first() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
        assert!(candidates
            .iter()
            .all(|path| path.file_name().is_some_and(|name| name == CONFIG_FILE)));
    }
}
