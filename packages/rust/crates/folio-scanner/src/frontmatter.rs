//! YAML Frontmatter Parsing
//!
//! Splits a markdown document into its leading metadata block and the body.
//! A block exists only when the very first line is `---`; it ends at the next
//! line that is exactly `---`.
//!
//! ```text
//! ---
//! title: Alpha
//! tags: [rust, cli]
//! ---
//! Body text
//! ```

use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::error::FrontmatterError;

/// Delimiter line opening and closing a metadata block.
pub const DELIMITER: &str = "---";

/// Metadata keys mapped to their raw YAML values.
pub type Metadata = BTreeMap<String, Value>;

/// A markdown document split into metadata and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Raw metadata values; empty when the document has no block
    pub data: Metadata,
    /// Text after the closing delimiter, or the whole document
    pub body: String,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Locate the frontmatter block.
///
/// Returns `Ok(None)` when the document does not start with a delimiter line,
/// otherwise the raw YAML text and the body that follows the block.
///
/// # Errors
///
/// Returns [`FrontmatterError::Unterminated`] when no closing line exists.
pub fn split_frontmatter(content: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let text = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if !is_delimiter(first) {
        return Ok(None);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line) {
            let yaml = &text[yaml_start..offset];
            let body = &text[offset + line.len()..];
            return Ok(Some((yaml, body)));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unterminated)
}

/// Decode a YAML block into a metadata mapping.
///
/// An empty or `null` block yields an empty mapping.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or is not a mapping with scalar keys.
pub fn parse_frontmatter(yaml_content: &str) -> Result<Metadata, FrontmatterError> {
    if yaml_content.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let mapping = match serde_yaml::from_str::<Value>(yaml_content)? {
        Value::Null => return Ok(Metadata::new()),
        Value::Mapping(mapping) => mapping,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(FrontmatterError::NotAMapping("a scalar"));
        }
        Value::Sequence(_) => return Err(FrontmatterError::NotAMapping("a sequence")),
        Value::Tagged(_) => return Err(FrontmatterError::NotAMapping("a tagged value")),
    };

    let mut data = Metadata::new();
    for (key, value) in mapping {
        let key = match key {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => return Err(FrontmatterError::InvalidKey("null")),
            Value::Sequence(_) => return Err(FrontmatterError::InvalidKey("a sequence")),
            Value::Mapping(_) => return Err(FrontmatterError::InvalidKey("a mapping")),
            Value::Tagged(_) => return Err(FrontmatterError::InvalidKey("a tagged value")),
        };
        data.insert(key, value);
    }
    Ok(data)
}

/// Parse a whole markdown document.
///
/// Documents without a block yield empty metadata and the full text as body.
///
/// # Errors
///
/// Returns an error for an unterminated block or malformed metadata.
pub fn parse_document(content: &str) -> Result<ParsedDocument, FrontmatterError> {
    match split_frontmatter(content)? {
        Some((yaml, body)) => Ok(ParsedDocument {
            data: parse_frontmatter(yaml)?,
            body: body.to_string(),
        }),
        None => Ok(ParsedDocument {
            data: Metadata::new(),
            body: content.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_with_frontmatter() {
        let doc = parse_document("---\ntitle: Alpha\ntags:\n  - a\n  - b\n---\nBody text").unwrap();
        assert_eq!(doc.data["title"], Value::String("Alpha".to_string()));
        assert!(doc.data["tags"].is_sequence());
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn test_parse_document_without_frontmatter() {
        let content = "# Heading\n\nNo metadata here.\n";
        let doc = parse_document(content).unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_delimiter_not_on_first_line_is_body() {
        let content = "intro\n---\ntitle: x\n---\n";
        let doc = parse_document(content).unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_document("---\ntitle: Alpha\nno end").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = parse_document("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml(_)));
    }

    #[test]
    fn test_scalar_block_is_not_a_mapping() {
        let err = parse_document("---\njust a string\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterError::NotAMapping(_)));
    }

    #[test]
    fn test_empty_block() {
        let doc = parse_document("---\n---\nbody\n").unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn test_crlf_and_bom() {
        let doc = parse_document("\u{feff}---\r\ntitle: Win\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(doc.data["title"].as_str(), Some("Win"));
        assert_eq!(doc.body, "body\r\n");
    }

    #[test]
    fn test_horizontal_rule_in_body_is_kept() {
        let doc = parse_document("---\ntitle: A\n---\none\n---\ntwo").unwrap();
        assert_eq!(doc.body, "one\n---\ntwo");
    }
}
