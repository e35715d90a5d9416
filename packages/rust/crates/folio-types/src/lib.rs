//! folio-types - Shared data model for the folio portfolio navigator
//!
//! This crate holds the records that flow from the content scanner into the
//! compiled `content-data.json` document and back out into the terminal
//! navigator. The JSON shape is the contract between the two halves, so every
//! type here derives `Serialize`/`Deserialize`.
//!
//! # Wire format
//!
//! ```json
//! [
//!   {"id":"projects","name":"Projects","icon":"📁","items":[
//!     {"kind":"content","id":"alpha","title":"Alpha","description":"",
//!      "type":"project","date":"","tags":[],"content":"Body text"}
//!   ]},
//!   {"id":"links","name":"Links","icon":"🔗","items":[
//!     {"kind":"link","id":"github","title":"GitHub Profile",
//!      "description":"...","url":"https://...","icon":"🐙"}
//!   ]}
//! ]
//! ```

#![allow(clippy::doc_markdown)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Content items
// =============================================================================

/// Kind of a markdown-authored portfolio item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Side projects and open source work
    #[default]
    Project,
    /// Work history entries
    Experience,
    /// Blog posts
    Blog,
}

/// Error returned when a string names no known [`ContentKind`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown content kind: {0}")]
pub struct UnknownKind(pub String);

impl ContentKind {
    /// Lowercase label used in frontmatter and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Experience => "experience",
            Self::Blog => "blog",
        }
    }

    /// Parse a frontmatter `type` value, falling back to [`ContentKind::Project`].
    #[must_use]
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for ContentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project" => Ok(Self::Project),
            "experience" => Ok(Self::Experience),
            "blog" => Ok(Self::Blog),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio item compiled from one markdown file.
///
/// `id` is the file stem and is never empty. `date` is kept as authored; an
/// empty string means the file carried no date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentItem {
    /// File stem, unique within its section
    pub id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// One-line summary shown in the list panel
    #[serde(default)]
    pub description: String,
    /// Item kind, emitted as `type`
    #[serde(rename = "type", default)]
    pub kind: ContentKind,
    /// ISO-ish date string, used for ordering and display only
    #[serde(default)]
    pub date: String,
    /// Free-form tags, in authored order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Markdown body, emitted as `content`
    #[serde(rename = "content", default)]
    pub body: String,
}

impl ContentItem {
    /// Create an item with the given id and every other field defaulted.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            kind: ContentKind::default(),
            date: String::new(),
            tags: Vec::new(),
            body: String::new(),
        }
    }

    /// Builder: set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: set the date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder: set the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

// =============================================================================
// External links
// =============================================================================

/// A statically authored link to an external site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalLink {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// One-line summary shown in the preview panel
    #[serde(default)]
    pub description: String,
    /// Target URL
    pub url: String,
    /// Glyph shown next to the title
    pub icon: String,
}

// =============================================================================
// Navigation
// =============================================================================

/// One entry of a section's item list.
///
/// The `kind` field is an explicit discriminant, so consumers never have to
/// guess the variant from which fields happen to be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationItem {
    /// A markdown-derived item
    Content(ContentItem),
    /// An external link
    Link(ExternalLink),
}

impl NavigationItem {
    /// Identifier of the wrapped record.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Content(item) => &item.id,
            Self::Link(link) => &link.id,
        }
    }

    /// Display title of the wrapped record.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Content(item) => &item.title,
            Self::Link(link) => &link.title,
        }
    }

    /// Description of the wrapped record.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Content(item) => &item.description,
            Self::Link(link) => &link.description,
        }
    }

    /// URL when this is a link.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Content(_) => None,
            Self::Link(link) => Some(&link.url),
        }
    }

    /// Whether this is a link.
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }
}

impl From<ContentItem> for NavigationItem {
    fn from(item: ContentItem) -> Self {
        Self::Content(item)
    }
}

impl From<ExternalLink> for NavigationItem {
    fn from(link: ExternalLink) -> Self {
        Self::Link(link)
    }
}

/// The four sections of the navigator, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// `content/projects`
    Projects,
    /// `content/experience`
    Experience,
    /// `content/blog`
    Blog,
    /// Static external links
    Links,
}

impl SectionId {
    /// All sections in assembly order.
    pub const ALL: [Self; 4] = [Self::Projects, Self::Experience, Self::Blog, Self::Links];

    /// Section id; also the content subdirectory name for file-backed sections.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Blog => "blog",
            Self::Links => "links",
        }
    }

    /// Display label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Blog => "Blog",
            Self::Links => "Links",
        }
    }

    /// Glyph shown in the nav panel.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Projects => "📁",
            Self::Experience => "💼",
            Self::Blog => "📝",
            Self::Links => "🔗",
        }
    }

    /// Content kind backing this section, `None` for links.
    #[must_use]
    pub fn content_kind(self) -> Option<ContentKind> {
        match self {
            Self::Projects => Some(ContentKind::Project),
            Self::Experience => Some(ContentKind::Experience),
            Self::Blog => Some(ContentKind::Blog),
            Self::Links => None,
        }
    }
}

/// A named group of navigation items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationSection {
    /// Unique across the section list
    pub id: String,
    /// Display label
    pub name: String,
    /// Glyph
    pub icon: String,
    /// Items, in display order
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

impl NavigationSection {
    /// Build an empty section carrying the fixed metadata of `section`.
    #[must_use]
    pub fn empty(section: SectionId) -> Self {
        Self {
            id: section.id().to_string(),
            name: section.name().to_string(),
            icon: section.icon().to_string(),
            items: Vec::new(),
        }
    }

    /// Builder: replace the items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<NavigationItem>) -> Self {
        self.items = items;
        self
    }
}
