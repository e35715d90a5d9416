//! Generator settings loader.
//!
//! Resolves where content is read from and where the compiled document is
//! written. Layers, lowest to highest precedence:
//! - Built-in defaults: `content/` and `data/content-data.json`
//! - Settings file: `<FOLIO_ROOT>/folio.yaml`
//! - Environment: `FOLIO_CONTENT_DIR`, `FOLIO_OUTPUT_PATH`
//!
//! Relative paths resolve against the project root (`$FOLIO_ROOT`, else the
//! current directory).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = "folio.yaml";
/// Default content directory, relative to the project root.
pub const DEFAULT_CONTENT_DIR: &str = "content";
/// Default output document, relative to the project root.
pub const DEFAULT_OUTPUT_PATH: &str = "data/content-data.json";

const ROOT_ENV: &str = "FOLIO_ROOT";
const CONTENT_DIR_ENV: &str = "FOLIO_CONTENT_DIR";
const OUTPUT_PATH_ENV: &str = "FOLIO_OUTPUT_PATH";

/// Optional overrides read from `folio.yaml` or the environment.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SiteSettings {
    /// Markdown content root
    pub content_dir: Option<String>,
    /// Compiled JSON document
    pub output_path: Option<String>,
}

impl SiteSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            content_dir: overlay.content_dir.or(self.content_dir),
            output_path: overlay.output_path.or(self.output_path),
        }
    }

    fn from_env(env: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            content_dir: non_empty(env(CONTENT_DIR_ENV)),
            output_path: non_empty(env(OUTPUT_PATH_ENV)),
        }
    }
}

/// Fully resolved generator paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Project root all relative paths hang off
    pub root: PathBuf,
    /// Directory holding `projects/`, `experience/` and `blog/`
    pub content_dir: PathBuf,
    /// Where the compiled JSON document is written
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    /// Resolve settings from the process environment.
    #[must_use]
    pub fn load() -> Self {
        Self::resolve(&|key: &str| std::env::var(key).ok())
    }

    /// Resolve settings using `env` as the environment lookup.
    #[must_use]
    pub fn resolve(env: &dyn Fn(&str) -> Option<String>) -> Self {
        let root = non_empty(env(ROOT_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        Self::resolve_in(&root, env)
    }

    /// Resolve settings for an explicit project root.
    #[must_use]
    pub fn resolve_in(root: &Path, env: &dyn Fn(&str) -> Option<String>) -> Self {
        let settings =
            load_settings_file(&root.join(SETTINGS_FILE)).merge(SiteSettings::from_env(env));
        let content_dir = settings
            .content_dir
            .unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string());
        let output_path = settings
            .output_path
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Self {
            root: root.to_path_buf(),
            content_dir: absolutize(root, PathBuf::from(content_dir)),
            output_path: absolutize(root, PathBuf::from(output_path)),
        }
    }
}

fn load_settings_file(path: &Path) -> SiteSettings {
    if !path.exists() {
        return SiteSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!(
                "Failed to read settings file {}: {err}; ignoring",
                path.display()
            );
            return SiteSettings::default();
        }
    };
    match serde_yaml::from_str::<Option<SiteSettings>>(&raw) {
        Ok(settings) => settings.unwrap_or_default(),
        Err(err) => {
            log::warn!(
                "Failed to parse settings file {}: {err}; ignoring",
                path.display()
            );
            SiteSettings::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn absolutize(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
