//! Icon fragment loading
//!
//! Icons live on disk as standalone SVG documents, one per badge key. Badges
//! embed only the markup between the document's opening and closing tags so
//! the fragment can be re-wrapped in a tinted, scaled group.
//!
//! Extraction is positional on purpose. The icon corpus is controlled and
//! well-formed by convention, and a tolerant substring scan degrades cleanly
//! (blank icon slot) where a strict parse would abort the whole render.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Loads icon fragments from a directory of `<key>.svg` documents
#[derive(Debug, Clone)]
pub struct IconLibrary {
    dir: PathBuf,
}

impl IconLibrary {
    /// Create a library reading from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this library reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the icon document for a badge key
    pub fn icon_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.svg"))
    }

    /// Load the inner markup of the icon for `key`.
    ///
    /// A missing, unreadable, or malformed icon yields an empty fragment and
    /// the badge renders with a blank icon slot; it is not an error.
    pub fn load(&self, key: &str) -> String {
        let path = self.icon_path(key);
        if !path.exists() {
            return String::new();
        }
        let document = match std::fs::read_to_string(&path) {
            Ok(document) => document,
            Err(err) => {
                warn!(icon = key, error = %err, "failed to read icon file");
                return String::new();
            }
        };
        extract_fragment(&document).unwrap_or_default()
    }
}

/// Extract the markup between an SVG document's opening and closing tags.
///
/// Locates the first `<svg` occurrence, the `>` that ends that tag, and the
/// last `</svg>` occurrence, then returns the trimmed substring between them.
/// Returns `None` when any boundary is missing.
pub fn extract_fragment(document: &str) -> Option<String> {
    let open = document.find("<svg")?;
    let tag_end = open + document[open..].find('>')?;
    let close = document.rfind("</svg>")?;
    if close <= tag_end {
        return None;
    }
    Some(document[tag_end + 1..close].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_simple_document() {
        let doc = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><path d="M10 10h5"/></svg>"#;
        assert_eq!(
            extract_fragment(doc),
            Some(r#"<path d="M10 10h5"/>"#.to_string())
        );
    }

    #[test]
    fn test_extract_trims_surrounding_whitespace() {
        let doc = "<svg viewBox=\"0 0 128 128\">\n  <circle cx=\"64\" cy=\"64\" r=\"60\"/>\n</svg>\n";
        assert_eq!(
            extract_fragment(doc),
            Some(r#"<circle cx="64" cy="64" r="60"/>"#.to_string())
        );
    }

    #[test]
    fn test_extract_uses_last_closing_tag() {
        // A nested document keeps its inner wrapper intact
        let doc = "<svg><g><svg viewBox=\"0 0 8 8\"><rect/></svg></g></svg>";
        assert_eq!(
            extract_fragment(doc),
            Some("<g><svg viewBox=\"0 0 8 8\"><rect/></svg></g>".to_string())
        );
    }

    #[test]
    fn test_extract_missing_opening_tag() {
        assert_eq!(extract_fragment("<g><path/></g>"), None);
    }

    #[test]
    fn test_extract_missing_closing_tag() {
        assert_eq!(extract_fragment("<svg viewBox=\"0 0 1 1\"><path/>"), None);
    }

    #[test]
    fn test_extract_opening_tag_never_closed() {
        assert_eq!(extract_fragment("<svg viewBox=\"0 0 1 1\""), None);
    }

    #[test]
    fn test_extract_empty_body() {
        assert_eq!(extract_fragment("<svg></svg>"), Some(String::new()));
    }

    #[test]
    fn test_load_missing_icon_is_empty() {
        let library = IconLibrary::new("/nonexistent/icon/dir");
        assert_eq!(library.load("python"), "");
    }

    #[test]
    fn test_load_reads_fragment_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("rust.svg"),
            "<svg viewBox=\"0 0 128 128\">\n  <path d=\"M1 1\"/>\n</svg>",
        )
        .expect("write icon");

        let library = IconLibrary::new(dir.path());
        assert_eq!(library.load("rust"), r#"<path d="M1 1"/>"#);
    }

    #[test]
    fn test_load_malformed_icon_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("broken.svg"), "no tags here").expect("write icon");

        let library = IconLibrary::new(dir.path());
        assert_eq!(library.load("broken"), "");
    }
}
