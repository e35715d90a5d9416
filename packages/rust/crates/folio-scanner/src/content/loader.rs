//! Content Item Loader - Maps one markdown file to a `ContentItem`.
//!
//! Loading never fails from the caller's point of view: a file that cannot be
//! read or parsed becomes a visibly labeled placeholder item so one bad file
//! cannot take the whole build down.

use std::fs;
use std::path::Path;

use folio_types::{ContentItem, ContentKind};
use serde_yaml::Value;

use crate::error::ScanError;
use crate::frontmatter::{Metadata, ParsedDocument, parse_document};

/// Title of a placeholder item.
pub const PLACEHOLDER_TITLE: &str = "Error";
/// Description of a placeholder item.
pub const PLACEHOLDER_DESCRIPTION: &str = "Failed to load content";
/// Body of a placeholder item.
pub const PLACEHOLDER_BODY: &str = "An error occurred while loading this content.";

/// Item id for a file: its base name without extension.
#[must_use]
pub fn item_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "untitled".to_string())
}

/// Load a markdown file, substituting a placeholder on any failure.
#[must_use]
pub fn load_item(path: &Path) -> ContentItem {
    match try_load_item(path) {
        Ok(item) => item,
        Err(err) => {
            log::error!("Error reading markdown file: {err}");
            placeholder_item(path)
        }
    }
}

/// Load a markdown file.
///
/// # Errors
///
/// Returns [`ScanError::Read`] if the file is unreadable or not UTF-8 and
/// [`ScanError::Frontmatter`] if its metadata block is malformed.
pub fn try_load_item(path: &Path) -> Result<ContentItem, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&content).map_err(|source| ScanError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(item_from_document(item_id(path), document))
}

/// The item substituted for a file that failed to load.
#[must_use]
pub fn placeholder_item(path: &Path) -> ContentItem {
    ContentItem {
        description: PLACEHOLDER_DESCRIPTION.to_string(),
        ..ContentItem::new(item_id(path))
            .with_title(PLACEHOLDER_TITLE)
            .with_kind(ContentKind::Project)
            .with_body(PLACEHOLDER_BODY)
    }
}

/// Build an item from a parsed document, defaulting every missing field.
///
/// Unknown metadata keys are ignored.
#[must_use]
pub fn item_from_document(id: String, document: ParsedDocument) -> ContentItem {
    let ParsedDocument { data, body } = document;
    ContentItem {
        id,
        title: string_field(&data, "title"),
        description: string_field(&data, "description"),
        kind: data
            .get("type")
            .and_then(scalar_string)
            .map(|label| ContentKind::from_label_or_default(&label))
            .unwrap_or_default(),
        date: string_field(&data, "date"),
        tags: tags_field(&data),
        body,
    }
}

fn string_field(data: &Metadata, key: &str) -> String {
    data.get(key).and_then(scalar_string).unwrap_or_default()
}

fn tags_field(data: &Metadata) -> Vec<String> {
    match data.get("tags") {
        Some(Value::Sequence(values)) => values.iter().filter_map(scalar_string).collect(),
        Some(value) => scalar_string(value).into_iter().collect(),
        None => Vec::new(),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
