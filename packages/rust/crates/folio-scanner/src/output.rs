//! Writes the compiled navigation document.

use std::io::Write;
use std::path::Path;

use folio_types::NavigationSection;
use tempfile::NamedTempFile;

use crate::error::ScanError;

/// Render sections as pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`ScanError::Serialize`] if encoding fails.
pub fn render_sections(sections: &[NavigationSection]) -> Result<String, ScanError> {
    let mut json = serde_json::to_string_pretty(sections)?;
    json.push('\n');
    Ok(json)
}

/// Render and atomically write sections to `path`.
///
/// # Errors
///
/// Returns an error if encoding or writing fails; an existing file at `path`
/// is left untouched in that case.
pub fn write_sections(path: &Path, sections: &[NavigationSection]) -> Result<(), ScanError> {
    let json = render_sections(sections)?;
    atomic_write(path, json.as_bytes())
}

/// Write `data` to a tempfile beside `path`, then rename it into place.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ScanError> {
    let write_err = |source: std::io::Error| ScanError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
