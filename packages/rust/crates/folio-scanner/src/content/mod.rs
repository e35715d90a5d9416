//! Content Module
//!
//! Turns markdown files with YAML frontmatter into `ContentItem`s.
//! `loader` handles one file; `scanner` walks a directory tree.

pub mod loader;
pub mod scanner;
