//! badgecraft - SVG badge and badge-grid rendering
//!
//! Renders icon+label badges from a declarative catalog and composes many
//! badges into row-wrapped, centered grids. Rendering is deterministic:
//! badge widths derive from a fixed per-character advance, foreground colors
//! from a luminance policy, and grid geometry from pure arithmetic over
//! badge widths. Malformed inputs degrade to visible placeholders instead
//! of failing, so every request produces a document.
//!
//! # Example
//!
//! ```rust
//! use badgecraft::catalog::{BadgeCatalog, BadgeDefinition};
//! use badgecraft::grid::GridConfig;
//! use badgecraft::icon::IconLibrary;
//! use badgecraft::renderer::BadgeMetrics;
//! use badgecraft::service::BadgeService;
//! use badgecraft::theme::Theme;
//!
//! let catalog = BadgeCatalog::new(vec![BadgeDefinition {
//!     key: "python".into(),
//!     label: "Python".into(),
//!     color: "#3776AB".into(),
//! }]);
//! let service = BadgeService::new(
//!     catalog,
//!     IconLibrary::new("icons"),
//!     BadgeMetrics::default(),
//!     GridConfig::default(),
//!     Theme::default(),
//! );
//!
//! let badge = service.badge("python");
//! assert_eq!(badge.width, 114);
//! assert!(badge.svg.contains("<svg"));
//! ```

pub mod catalog;
pub mod color;
pub mod grid;
pub mod icon;
pub mod query;
pub mod renderer;
pub mod server;
pub mod service;
pub mod theme;

pub use catalog::{BadgeCatalog, BadgeDefinition, CatalogError};
pub use color::{foreground_for, Foreground};
pub use grid::{GridComposer, GridConfig, GridLayout};
pub use icon::{extract_fragment, IconLibrary};
pub use renderer::{BadgeMetrics, BadgeRenderer, RenderedBadge};
pub use service::{BadgeService, CatalogListing};
pub use theme::{Theme, ThemeError};
