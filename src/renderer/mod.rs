//! Badge rendering: geometry constants, the markup builder, and the renderer

pub mod badge;
pub mod config;
pub mod svg;

pub use badge::{BadgeRenderer, RenderedBadge};
pub use config::BadgeMetrics;
pub use svg::{escape_xml, SvgDocument};
