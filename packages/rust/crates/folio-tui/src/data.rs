//! Loads the compiled navigation document at start-up.

use std::path::Path;

use anyhow::{Context, Result};
use folio_types::NavigationSection;

/// Default document location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/content-data.json";

/// Read and decode the document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a section list.
pub fn try_load_sections(path: &Path) -> Result<Vec<NavigationSection>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the document at `path`, falling back to no sections.
#[must_use]
pub fn load_sections(path: &Path) -> Vec<NavigationSection> {
    match try_load_sections(path) {
        Ok(sections) => {
            log::info!("Loaded {} sections from {}", sections.len(), path.display());
            sections
        }
        Err(err) => {
            log::warn!("Error loading content sections: {err:#}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_sections(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content-data.json");
        std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        assert!(try_load_sections(&path).is_err());
        assert!(load_sections(&path).is_empty());
    }
}
