//! folio-scanner - Compiles markdown content into the navigation document.
//!
//! Build-time half of folio: walks the content tree, parses YAML frontmatter
//! and writes a single JSON document that the terminal navigator loads.
//!
//! # Architecture
//!
//! ```text
//! folio-scanner/src/
//! ├── lib.rs              # Main module and exports
//! ├── error.rs            # FrontmatterError, ScanError
//! ├── frontmatter.rs      # `---` block splitting and YAML decoding
//! ├── content/
//! │   ├── loader.rs        # One file -> ContentItem (placeholder on failure)
//! │   └── scanner.rs       # Directory walk, deterministic ordering
//! ├── sections.rs         # Fixed four-section assembly + static links
//! ├── output.rs           # Pretty JSON, atomic write
//! ├── config.rs           # folio.yaml + FOLIO_* environment
//! └── bin/folio-gen.rs    # "regenerate content data"
//! ```
//!
//! # Content layout
//!
//! ```text
//! content/
//!   projects/**/*.md
//!   experience/**/*.md
//!   blog/**/*.md
//! ```
//!
//! Recognized frontmatter keys are `title`, `description`, `type`
//! (`project` | `experience` | `blog`), `date` and `tags`; anything else is
//! ignored.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod output;
pub mod sections;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GeneratorConfig;
pub use content::{
    loader::{load_item, placeholder_item, try_load_item},
    scanner::ContentScanner,
};
pub use error::{FrontmatterError, ScanError};
pub use frontmatter::{ParsedDocument, parse_document};
pub use output::{render_sections, write_sections};
pub use sections::{assemble, default_links, try_assemble};

/// Assemble the content tree named by `config` and write the document.
///
/// Returns the number of sections written.
///
/// # Errors
///
/// Returns [`ScanError::Serialize`] or [`ScanError::Write`] when the document
/// cannot be produced; scan problems never surface here.
pub fn generate(config: &GeneratorConfig) -> Result<usize, ScanError> {
    log::info!(
        "Compiling content from {} into {}",
        config.content_dir.display(),
        config.output_path.display()
    );
    let sections = assemble(&config.content_dir);
    write_sections(&config.output_path, &sections)?;
    Ok(sections.len())
}
