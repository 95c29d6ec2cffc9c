//! Query-surface helpers shared by the CLI and HTTP adapters
//!
//! The HTTP layer hands over raw parameter strings (already URL-decoded by
//! the extractor); these helpers apply the tolerant parsing rules so both
//! adapters agree on defaults and bounds.

/// Smallest accepted badges-per-row value
pub const PER_LINE_MIN: usize = 1;
/// Largest accepted badges-per-row value
pub const PER_LINE_MAX: usize = 20;
/// Badges per row when the parameter is missing or invalid
pub const PER_LINE_DEFAULT: usize = 4;

/// Split a comma-separated key list: trimmed, lowercased, empties dropped
pub fn parse_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Clamp a per-line parameter to `[PER_LINE_MIN, PER_LINE_MAX]`, falling
/// back to [`PER_LINE_DEFAULT`] on missing or unparsable input
pub fn clamp_per_line(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(|value| value.clamp(PER_LINE_MIN as i64, PER_LINE_MAX as i64) as usize)
        .unwrap_or(PER_LINE_DEFAULT)
}
