//! Section Assembler - Builds the full navigation document.
//!
//! Always produces the four sections of [`SectionId::ALL`] in order. The
//! file-backed sections scan `<root>/<section id>`; the links section is the
//! static list from [`default_links`].

use std::path::Path;

use folio_types::{ContentItem, ExternalLink, NavigationItem, NavigationSection, SectionId};

use crate::content::scanner::ContentScanner;
use crate::error::ScanError;

/// Assemble every section under `content_root`.
///
/// Any failure is logged and yields an empty list rather than a partially
/// filled one.
#[must_use]
pub fn assemble(content_root: &Path) -> Vec<NavigationSection> {
    let scanner = ContentScanner::new();
    assemble_with(content_root, |dir| scanner.scan_all(dir))
}

/// Assemble every section under `content_root`, propagating failures.
///
/// # Errors
///
/// Returns the first scan error hit by any section.
pub fn try_assemble(content_root: &Path) -> Result<Vec<NavigationSection>, ScanError> {
    let scanner = ContentScanner::new();
    try_assemble_with(content_root, |dir| scanner.scan_all(dir))
}

fn assemble_with<F>(content_root: &Path, scan: F) -> Vec<NavigationSection>
where
    F: Fn(&Path) -> Result<Vec<ContentItem>, ScanError>,
{
    match try_assemble_with(content_root, scan) {
        Ok(sections) => sections,
        Err(err) => {
            log::error!("Error loading content sections: {err}");
            Vec::new()
        }
    }
}

fn try_assemble_with<F>(content_root: &Path, scan: F) -> Result<Vec<NavigationSection>, ScanError>
where
    F: Fn(&Path) -> Result<Vec<ContentItem>, ScanError>,
{
    SectionId::ALL
        .iter()
        .map(|&section| {
            let items: Vec<NavigationItem> = if section.content_kind().is_some() {
                scan(&content_root.join(section.id()))?
                    .into_iter()
                    .map(NavigationItem::from)
                    .collect()
            } else {
                default_links()
                    .into_iter()
                    .map(NavigationItem::from)
                    .collect()
            };
            Ok(NavigationSection::empty(section).with_items(items))
        })
        .collect()
}

fn link(id: &str, title: &str, description: &str, url: &str, icon: &str) -> ExternalLink {
    ExternalLink {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    }
}

/// The hard-coded external links shown in the links section.
#[must_use]
pub fn default_links() -> Vec<ExternalLink> {
    vec![
        link(
            "gallery",
            "Photo Gallery",
            "A collection of my photography and visual work.",
            "https://gallery.nuoc.dev",
            "📷",
        ),
        link(
            "notes",
            "Personal documentation",
            "My personal notes and documentation site.",
            "https://notes.nuoc.dev",
            "📝",
        ),
        link(
            "github",
            "GitHub Profile",
            "My GitHub profile with various projects and contributions.",
            "https://github.com/Neroro64",
            "🐙",
        ),
        link(
            "linkedin",
            "LinkedIn Profile",
            "Professional networking profile with my work experience.",
            "https://www.linkedin.com/in/nuo-chen",
            "👔",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fixed_shape_without_content() {
        let temp_dir = TempDir::new().unwrap();
        let sections = assemble(&temp_dir.path().join("missing"));

        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["projects", "experience", "blog", "links"]);
        assert!(sections[..3].iter().all(|s| s.items.is_empty()));
        assert_eq!(sections[3].items.len(), default_links().len());
    }

    #[test]
    fn test_section_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let sections = assemble(temp_dir.path());
        assert_eq!(sections[1].name, "Experience");
        assert_eq!(sections[1].icon, "💼");
        assert_eq!(sections[3].icon, "🔗");
    }

    #[test]
    fn test_failed_section_discards_everything() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = ContentScanner::new();
        let sections = assemble_with(temp_dir.path(), |dir| {
            if dir.ends_with("experience") {
                return Err(ScanError::Read {
                    path: dir.to_path_buf(),
                    source: std::io::Error::other("permission denied"),
                });
            }
            scanner.scan_all(dir)
        });
        assert!(sections.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_section_directory_yields_no_sections() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let blog = temp_dir.path().join("blog");
        std::fs::create_dir_all(&blog).unwrap();
        std::fs::write(blog.join("post.md"), "body").unwrap();
        std::fs::set_permissions(&blog, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the directory; nothing to check then.
        let privileged = std::fs::read_dir(&blog).is_ok();
        let result = try_assemble(temp_dir.path());
        let sections = assemble(temp_dir.path());
        std::fs::set_permissions(&blog, std::fs::Permissions::from_mode(0o755)).unwrap();

        if privileged {
            return;
        }
        assert!(matches!(result, Err(ScanError::Walk { .. })));
        assert!(sections.is_empty());
    }

    #[test]
    fn test_links_are_links() {
        let links = default_links();
        assert!(links.iter().any(|l| l.id == "github"));
        let temp_dir = TempDir::new().unwrap();
        let sections = assemble(temp_dir.path());
        assert!(sections[3].items.iter().all(NavigationItem::is_link));
    }
}
