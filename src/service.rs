//! High-level badge service
//!
//! Owns the loaded catalog, the icon library, and the rendering pipeline.
//! Everything here is read-only after construction, so one instance can be
//! shared across threads or requests without coordination.

use serde::Serialize;
use tracing::warn;

use crate::catalog::{BadgeCatalog, BadgeDefinition};
use crate::grid::{GridComposer, GridConfig, GridLayout};
use crate::icon::IconLibrary;
use crate::renderer::{BadgeMetrics, BadgeRenderer, RenderedBadge};
use crate::theme::Theme;

/// How many catalog keys the usage message shows as an example
const USAGE_EXAMPLE_KEYS: usize = 8;

/// JSON projection of the catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogListing {
    pub total: usize,
    pub badges: Vec<String>,
}

/// Catalog, icons, and renderers behind one stateless facade
#[derive(Debug)]
pub struct BadgeService {
    catalog: BadgeCatalog,
    icons: IconLibrary,
    renderer: BadgeRenderer,
    composer: GridComposer,
}

impl BadgeService {
    pub fn new(
        catalog: BadgeCatalog,
        icons: IconLibrary,
        metrics: BadgeMetrics,
        grid: GridConfig,
        theme: Theme,
    ) -> Self {
        let renderer = BadgeRenderer::new(metrics.clone(), theme.clone());
        let composer = GridComposer::new(grid, metrics, theme);
        Self {
            catalog,
            icons,
            renderer,
            composer,
        }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    pub fn icons(&self) -> &IconLibrary {
        &self.icons
    }

    pub fn renderer(&self) -> &BadgeRenderer {
        &self.renderer
    }

    pub fn metrics(&self) -> &BadgeMetrics {
        self.renderer.metrics()
    }

    /// Render one definition with its icon fragment
    pub fn render_definition(&self, definition: &BadgeDefinition) -> RenderedBadge {
        let fragment = self.icons.load(&definition.key);
        self.renderer.render(definition, &fragment)
    }

    /// Render one badge by key; an unknown key yields the in-band error
    /// document rather than a failure
    pub fn badge(&self, key: &str) -> RenderedBadge {
        let key = key.trim().to_lowercase();
        match self.catalog.lookup(&key) {
            Some(definition) => self.render_definition(definition),
            None => self
                .renderer
                .error_badge(&format!("Unknown badge: {key}")),
        }
    }

    /// Compose a grid for the requested keys.
    ///
    /// Unknown keys are dropped from the render list; if none resolve the
    /// result is an error document naming them, and an empty request gets
    /// the usage document. Composition never returns an empty document.
    pub fn grid(&self, keys: &[String], per_line: usize) -> GridLayout {
        if keys.is_empty() {
            return self.usage().into();
        }

        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();
        for key in keys {
            match self.catalog.lookup(key) {
                Some(definition) => resolved.push(definition),
                None => unresolved.push(key.as_str()),
            }
        }

        if resolved.is_empty() {
            let message = format!(
                "No valid badges found. Invalid: {}",
                unresolved.join(", ")
            );
            return self.renderer.error_badge(&message).into();
        }
        if !unresolved.is_empty() {
            warn!(keys = %unresolved.join(","), "dropping unknown badge keys");
        }

        let rendered: Vec<RenderedBadge> = resolved
            .iter()
            .map(|definition| self.render_definition(definition))
            .collect();
        self.composer.compose(&rendered, per_line)
    }

    /// Usage document shown when no keys were requested
    pub fn usage(&self) -> RenderedBadge {
        let example: Vec<&str> = self
            .catalog
            .all()
            .iter()
            .take(USAGE_EXAMPLE_KEYS)
            .map(|definition| definition.key.as_str())
            .collect();
        self.renderer.error_badge(&format!(
            "Usage: ?c={}&perline=4",
            example.join(",")
        ))
    }

    /// Catalog listing with optional search filter and entry limit;
    /// keys come back sorted
    pub fn listing(&self, search: Option<&str>, limit: Option<usize>) -> CatalogListing {
        let mut badges: Vec<String> = match search {
            Some(query) => {
                let mut keys: Vec<String> = self
                    .catalog
                    .search(query)
                    .iter()
                    .map(|definition| definition.key.clone())
                    .collect();
                keys.sort();
                keys
            }
            None => self.catalog.keys_sorted(),
        };
        if let Some(limit) = limit {
            badges.truncate(limit);
        }
        CatalogListing {
            total: badges.len(),
            badges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BadgeService {
        let catalog = BadgeCatalog::from_json(
            r##"{
                "badges": [
                    {"key": "python", "label": "Python", "color": "#3776AB"},
                    {"key": "rust", "label": "Rust", "color": "#000000"},
                    {"key": "react", "label": "React", "color": "#61DAFB"},
                    {"key": "go", "label": "Go", "color": "#00ADD8"},
                    {"key": "docker", "label": "Docker", "color": "#2496ED"}
                ]
            }"##,
        )
        .expect("catalog parses");
        BadgeService::new(
            catalog,
            IconLibrary::new("/nonexistent/icons"),
            BadgeMetrics::default(),
            GridConfig::default(),
            Theme::default(),
        )
    }

    #[test]
    fn test_badge_by_key() {
        let badge = service().badge("Python");
        assert_eq!(badge.width, 114);
        assert!(badge.svg.contains(">Python</text>"));
    }

    #[test]
    fn test_unknown_badge_is_error_document() {
        let badge = service().badge("cobol");
        assert!(badge.svg.contains("Unknown badge: cobol"));
        assert!(badge.svg.contains(r##"fill="#ff4444"/>"##));
    }

    #[test]
    fn test_grid_five_badges_two_rows() {
        let keys: Vec<String> = ["python", "rust", "react", "go", "docker"]
            .iter()
            .map(|k| k.to_string())
            .collect();
        let grid = service().grid(&keys, 4);
        assert_eq!(grid.height, 2 * 30 + 8);
        // widths: 114, 97, 106, 80 in row 1 (total 421 with margins), 114 in row 2
        assert_eq!(grid.width, 421);
        assert!(grid.svg.contains("<g transform=\"translate(341, 0)\">"));
        // the lone second-row badge centers under the wider first row
        assert!(grid.svg.contains("<g transform=\"translate(153.5, 38)\">"));
    }

    #[test]
    fn test_grid_drops_unknown_keys() {
        let keys: Vec<String> = ["python", "cobol"].iter().map(|k| k.to_string()).collect();
        let grid = service().grid(&keys, 4);
        assert!(grid.svg.contains(">Python</text>"));
        assert!(!grid.svg.contains("cobol"));
        assert_eq!(grid.height, 30);
    }

    #[test]
    fn test_grid_all_unknown_names_the_keys() {
        let keys: Vec<String> = ["cobol", "fortran"].iter().map(|k| k.to_string()).collect();
        let grid = service().grid(&keys, 4);
        assert!(grid
            .svg
            .contains("No valid badges found. Invalid: cobol, fortran"));
    }

    #[test]
    fn test_grid_zero_keys_is_usage_document() {
        let grid = service().grid(&[], 4);
        assert!(grid.svg.contains("Usage: ?c="));
        assert!(grid.svg.contains("python"));
        assert!(grid.width > 0);
    }

    #[test]
    fn test_listing_sorted() {
        let listing = service().listing(None, None);
        assert_eq!(listing.total, 5);
        assert_eq!(
            listing.badges,
            vec!["docker", "go", "python", "react", "rust"]
        );
    }

    #[test]
    fn test_listing_search_and_limit() {
        let listing = service().listing(Some("r"), None);
        assert_eq!(listing.badges, vec!["docker", "react", "rust"]);

        let limited = service().listing(None, Some(2));
        assert_eq!(limited.total, 2);
        assert_eq!(limited.badges, vec!["docker", "go"]);
    }
}
