//! Error types for content scanning.
//!
//! Library code reports failures through these enums; only the assembler and
//! the loader decide to swallow them.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to split or decode a frontmatter block.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// Opening `---` line without a matching closing line.
    #[error("frontmatter block is not terminated by a closing `---` line")]
    Unterminated,

    /// The block is not valid YAML.
    #[error("invalid frontmatter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The block is valid YAML but not a key/value mapping.
    #[error("frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A mapping key that cannot be used as a metadata name.
    #[error("frontmatter keys must be scalars, found {0}")]
    InvalidKey(&'static str),
}

/// Failure anywhere in the scan/assemble/write pipeline.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A markdown file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A markdown file carries a malformed frontmatter block.
    #[error("failed to parse frontmatter in {}: {source}", path.display())]
    Frontmatter {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: FrontmatterError,
    },

    /// The content directory itself could not be traversed.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// Directory being walked
        path: PathBuf,
        /// Underlying error
        source: walkdir::Error,
    },

    /// The section list could not be encoded.
    #[error("failed to serialize content data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The compiled document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}
