//! Input/output locations for a pipeline run.
//!
//! Every document lives under one data directory with conventional file
//! names. The directory is explicit configuration passed into each op —
//! there are no process-wide path globals — so the same pipeline runs
//! unchanged against a test fixture directory.

use std::path::{Path, PathBuf};

/// Conventional location of the token documents in the site repository.
pub const DEFAULT_DATA_DIR: &str = "src/data";

/// Resolved document locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    data_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The primitives document: light/dark hex values per family.
    pub fn primitives_doc(&self) -> PathBuf {
        self.data_dir.join("# Primitives.md")
    }

    /// The semantic design-label document.
    pub fn semantic_doc(&self) -> PathBuf {
        self.data_dir.join("# Semantic.md")
    }

    /// The semantic dev-code document.
    pub fn semantic_dev_doc(&self) -> PathBuf {
        self.data_dir.join("# Semantic_dev_code.md")
    }

    /// The theme dev-code document.
    pub fn theme_doc(&self) -> PathBuf {
        self.data_dir.join("# Theme.md")
    }

    /// Emitted palette document (also an *input* to the theme pass).
    pub fn palette_json(&self) -> PathBuf {
        self.data_dir.join("color_palette.json")
    }

    /// Emitted semantic mapping document.
    pub fn semantic_json(&self) -> PathBuf {
        self.data_dir.join("semantic_color_mapping.json")
    }

    /// Emitted theme mapping document.
    pub fn theme_json(&self) -> PathBuf {
        self.data_dir.join("theme_color_mapping.json")
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_data_dir() {
        let paths = Paths::new("/tmp/fixture");
        assert_eq!(
            paths.primitives_doc(),
            PathBuf::from("/tmp/fixture/# Primitives.md")
        );
        assert_eq!(
            paths.theme_json(),
            PathBuf::from("/tmp/fixture/theme_color_mapping.json")
        );
    }

    #[test]
    fn test_default_is_the_site_convention() {
        assert_eq!(Paths::default().data_dir(), Path::new(DEFAULT_DATA_DIR));
    }
}
