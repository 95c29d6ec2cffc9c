//! Badge rendering
//!
//! Turns one [`BadgeDefinition`] plus its icon fragment into a standalone
//! SVG document. There is no error path here: a malformed background color
//! degrades through the contrast policy and a missing icon leaves the icon
//! slot blank, so every definition renders to something visible.

use crate::catalog::BadgeDefinition;
use crate::color::{foreground_for, parse_rgb};
use crate::theme::Theme;

use super::{BadgeMetrics, SvgDocument};

/// A rendered badge document plus the dimensions the grid needs
#[derive(Debug, Clone)]
pub struct RenderedBadge {
    /// Complete standalone SVG document
    pub svg: String,
    /// Emitted width in px
    pub width: u32,
    /// Fixed badge height in px
    pub height: u32,
}

impl RenderedBadge {
    /// Markup from the background rectangle through just before the closing
    /// tag. Nested copies inside a grid embed this and drop the outer
    /// wrapper; only the grid document carries the namespace and style block.
    pub fn inner_markup(&self) -> &str {
        let start = self.svg.find("<rect").unwrap_or(0);
        let end = self.svg.rfind("</svg>").unwrap_or(self.svg.len());
        self.svg[start..end].trim_end()
    }
}

/// Renders badge definitions into standalone SVG documents
#[derive(Debug, Clone)]
pub struct BadgeRenderer {
    metrics: BadgeMetrics,
    theme: Theme,
}

impl BadgeRenderer {
    pub fn new(metrics: BadgeMetrics, theme: Theme) -> Self {
        Self { metrics, theme }
    }

    pub fn metrics(&self) -> &BadgeMetrics {
        &self.metrics
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one badge. `icon_fragment` may be empty; the icon slot keeps
    /// its reserved space either way so label placement never shifts.
    pub fn render(&self, definition: &BadgeDefinition, icon_fragment: &str) -> RenderedBadge {
        let m = &self.metrics;
        let text_width = m.text_width(&definition.label);
        let width = m.badge_width(&definition.label) as u32;
        let background = fill_color(&definition.color);
        let foreground = foreground_for(&definition.color).as_hex();

        let mut doc = SvgDocument::new(width, m.height);
        doc.import_font(&self.theme.font_import_url);
        doc.rect(width, m.height, m.border_radius, &background);

        doc.start_group(
            &format!(
                "translate({}, {}) scale({})",
                m.padding,
                m.icon_offset_y(),
                m.icon_scale()
            ),
            Some(foreground),
        );
        if !icon_fragment.is_empty() {
            doc.raw(icon_fragment);
        }
        doc.end_group();

        let text_x = f64::from(m.padding + m.icon_size + m.text_padding) + text_width / 2.0;
        doc.centered_text(
            text_x,
            m.text_baseline(),
            &self.theme.font_family,
            m.font_size,
            foreground,
            &definition.label,
        );

        RenderedBadge {
            svg: doc.build(),
            width,
            height: m.height,
        }
    }

    /// Single-line error document: red background, white text, no icon slot.
    /// Error states stay representable as documents because the output
    /// channel is always a document.
    pub fn error_badge(&self, message: &str) -> RenderedBadge {
        let m = &self.metrics;
        let total_width = m.error_width(message);
        let width = total_width as u32;

        let mut doc = SvgDocument::new(width, m.height);
        doc.import_font(&self.theme.font_import_url);
        doc.rect(width, m.height, m.border_radius, &self.theme.error_background);
        doc.centered_text(
            total_width / 2.0,
            m.text_baseline(),
            &self.theme.font_family,
            m.font_size,
            "#ffffff",
            message,
        );

        RenderedBadge {
            svg: doc.build(),
            width,
            height: m.height,
        }
    }
}

/// Fill value for a configured color: a bare 6-hex-digit color gets its `#`
/// restored, anything else passes through untouched
fn fill_color(color: &str) -> String {
    if !color.starts_with('#') && parse_rgb(color).is_some() {
        format!("#{color}")
    } else {
        color.to_string()
    }
}
