//! Badge geometry constants
//!
//! Every dimension in a rendered document derives from these values, and the
//! grid layout assumes them. `char_width` stands in for real text shaping:
//! the target face is a bold monospace, so one fixed advance per character
//! keeps badge widths deterministic without a font stack.

/// Fixed geometry shared by every badge
#[derive(Debug, Clone)]
pub struct BadgeMetrics {
    /// Badge height in px
    pub height: u32,
    /// Horizontal padding at both ends of a badge
    pub padding: u32,
    /// Rendered icon size in px
    pub icon_size: u32,
    /// Gap between the icon slot and the label
    pub text_padding: u32,
    /// Corner radius of the background rectangle
    pub border_radius: u32,
    /// Label font size in px
    pub font_size: u32,
    /// Advance width of one label character at `font_size`
    pub char_width: f64,
    /// Canvas size icon sources are authored on
    pub icon_canvas: f64,
}

impl Default for BadgeMetrics {
    fn default() -> Self {
        Self {
            height: 30,
            padding: 16,
            icon_size: 20,
            text_padding: 12,
            border_radius: 15,
            font_size: 14,
            char_width: 8.4,
            icon_canvas: 128.0,
        }
    }
}

impl BadgeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of a label at the fixed per-character advance
    pub fn text_width(&self, label: &str) -> f64 {
        label.chars().count() as f64 * self.char_width
    }

    /// Full badge width for a label: padding, icon slot, gap, text
    pub fn badge_width(&self, label: &str) -> f64 {
        f64::from(2 * self.padding + self.icon_size + self.text_padding) + self.text_width(label)
    }

    /// Width of an error document, which has no icon slot
    pub fn error_width(&self, message: &str) -> f64 {
        f64::from(2 * self.padding) + self.text_width(message)
    }

    /// Scale factor applied to icon fragments
    pub fn icon_scale(&self) -> f64 {
        f64::from(self.icon_size) / self.icon_canvas
    }

    /// Vertical offset centering the icon slot in the badge
    pub fn icon_offset_y(&self) -> f64 {
        f64::from(self.height - self.icon_size) / 2.0
    }

    /// Label baseline, optically centered for the target font metrics
    pub fn text_baseline(&self) -> f64 {
        f64::from(self.height) / 2.0 + f64::from(self.font_size) * 0.35
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_is_exact_multiple() {
        let metrics = BadgeMetrics::default();
        assert_eq!(metrics.text_width(""), 0.0);
        assert_eq!(metrics.text_width("a"), 8.4);
        assert_eq!(metrics.text_width("Python"), 6.0 * 8.4);
        // counts characters, not bytes
        assert_eq!(metrics.text_width("héllo"), 5.0 * 8.4);
    }

    #[test]
    fn test_badge_width_formula() {
        let metrics = BadgeMetrics::default();
        // 2*16 + 20 + 12 + 6*8.4 = 114.4
        assert_eq!(metrics.badge_width("Python"), 60.0 + 6.0 * 8.4);
    }

    #[test]
    fn test_icon_placement() {
        let metrics = BadgeMetrics::default();
        assert_eq!(metrics.icon_scale(), 0.15625);
        assert_eq!(metrics.icon_offset_y(), 5.0);
    }

    #[test]
    fn test_text_baseline() {
        let metrics = BadgeMetrics::default();
        assert_eq!(metrics.text_baseline(), 19.9);
    }

    #[test]
    fn test_error_width_has_no_icon_slot() {
        let metrics = BadgeMetrics::default();
        assert_eq!(metrics.error_width("ab"), 32.0 + 2.0 * 8.4);
    }
}
