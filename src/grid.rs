//! Grid composition
//!
//! Packs an ordered sequence of rendered badges into row-wrapped, centered
//! rows and merges them into one document. Layout is pure arithmetic over
//! badge widths: no re-sorting, no bin packing, caller order is display
//! order. Narrower rows are centered under the widest row, which defines the
//! grid width.

use crate::renderer::{BadgeMetrics, RenderedBadge, SvgDocument};
use crate::theme::Theme;

/// Spacing between badges in a composed grid
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Horizontal gap between badges in a row
    pub margin: u32,
    /// Vertical gap between rows
    pub line_spacing: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            margin: 8,
            line_spacing: 8,
        }
    }
}

/// A composed multi-badge document
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Complete standalone SVG document
    pub svg: String,
    /// Overall width: the widest row
    pub width: u32,
    /// Overall height: `rows * badge_height + (rows - 1) * line_spacing`
    pub height: u32,
}

impl From<RenderedBadge> for GridLayout {
    /// A single document already stands alone; error and usage documents
    /// flow through the same return type as a composed grid
    fn from(badge: RenderedBadge) -> Self {
        Self {
            svg: badge.svg,
            width: badge.width,
            height: badge.height,
        }
    }
}

/// Lays out rendered badges into centered rows
#[derive(Debug, Clone)]
pub struct GridComposer {
    config: GridConfig,
    metrics: BadgeMetrics,
    theme: Theme,
}

impl GridComposer {
    pub fn new(config: GridConfig, metrics: BadgeMetrics, theme: Theme) -> Self {
        Self {
            config,
            metrics,
            theme,
        }
    }

    /// Width of one row: member widths plus margins between them
    fn row_width(&self, row: &[RenderedBadge]) -> u32 {
        let widths: u32 = row.iter().map(|badge| badge.width).sum();
        widths + self.config.margin * (row.len() as u32).saturating_sub(1)
    }

    /// Compose a grid with up to `per_line` badges per row.
    ///
    /// Rows are consecutive chunks of the input, top to bottom; each row is
    /// individually centered within the grid width. A single badge goes
    /// through the same row math as any other input, so the layout formulas
    /// hold uniformly.
    pub fn compose(&self, badges: &[RenderedBadge], per_line: usize) -> GridLayout {
        let per_line = per_line.max(1);
        let rows: Vec<&[RenderedBadge]> = badges.chunks(per_line).collect();

        let grid_width = rows.iter().map(|row| self.row_width(row)).max().unwrap_or(0);
        let row_count = rows.len() as u32;
        let grid_height = row_count * self.metrics.height
            + self.config.line_spacing * row_count.saturating_sub(1);

        let mut doc = SvgDocument::new(grid_width, grid_height);
        doc.import_font(&self.theme.font_import_url);

        let mut y = 0u32;
        for row in &rows {
            let mut x = f64::from(grid_width - self.row_width(row)) / 2.0;
            for badge in *row {
                doc.start_group(&format!("translate({}, {})", x, y), None);
                doc.raw(badge.inner_markup());
                doc.end_group();
                x += f64::from(badge.width + self.config.margin);
            }
            y += self.metrics.height + self.config.line_spacing;
        }

        GridLayout {
            svg: doc.build(),
            width: grid_width,
            height: grid_height,
        }
    }
}
