//! Foreground color selection for badge backgrounds
//!
//! Badges tint their label and icon with a single foreground color derived
//! from the background. The heuristic uses perceptual-weighted luminance
//! rather than a plain channel average, with the threshold biased toward
//! light text since badge backgrounds are mostly saturated brand colors.

/// Luminance above which a background counts as light
const LIGHT_THRESHOLD: f64 = 0.8;

/// Foreground paint for label text and icon fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    /// White, for dark backgrounds
    Light,
    /// Black, for light backgrounds
    Dark,
}

impl Foreground {
    /// Hex value used in SVG `fill` attributes
    pub fn as_hex(self) -> &'static str {
        match self {
            Foreground::Light => "#ffffff",
            Foreground::Dark => "#000000",
        }
    }
}

/// Pick the legible foreground for a background color.
///
/// Accepts 6 hex digits with an optional leading `#`. Anything else fails
/// closed to [`Foreground::Light`] instead of raising: a malformed color
/// degrades to white-on-dark, it never aborts a render.
pub fn foreground_for(background: &str) -> Foreground {
    match parse_rgb(background) {
        Some((r, g, b)) if luminance(r, g, b) > LIGHT_THRESHOLD => Foreground::Dark,
        _ => Foreground::Light,
    }
}

/// Parse a 6-hex-digit color string into RGB channels
pub(crate) fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Relative luminance of an sRGB color, in `[0, 1]`
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}
