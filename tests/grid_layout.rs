//! Layout-formula tests for grid composition: row wrapping, overall
//! dimensions, and per-row centering.

use badgecraft::catalog::BadgeDefinition;
use badgecraft::grid::{GridComposer, GridConfig};
use badgecraft::renderer::{BadgeMetrics, BadgeRenderer, RenderedBadge};
use badgecraft::theme::Theme;

fn composer() -> GridComposer {
    GridComposer::new(
        GridConfig::default(),
        BadgeMetrics::default(),
        Theme::default(),
    )
}

/// A one-character badge: 64 + 8.4 = 72.4, emitted width 72
fn unit_badge() -> RenderedBadge {
    let renderer = BadgeRenderer::new(BadgeMetrics::default(), Theme::default());
    renderer.render(
        &BadgeDefinition {
            key: "x".to_string(),
            label: "X".to_string(),
            color: "#333333".to_string(),
        },
        "",
    )
}

/// Count the badges placed in the row at vertical offset `y`
fn badges_at_row(svg: &str, y: u32) -> usize {
    svg.matches(&format!(", {y})\">")).count()
}

#[test]
fn test_row_count_follows_ceiling_division() {
    for (count, per_line) in [(1usize, 1usize), (1, 4), (4, 4), (5, 4), (9, 4), (10, 3), (7, 1)] {
        let badges: Vec<RenderedBadge> = (0..count).map(|_| unit_badge()).collect();
        let grid = composer().compose(&badges, per_line);

        let rows = count.div_ceil(per_line) as u32;
        assert_eq!(
            grid.height,
            rows * 30 + (rows - 1) * 8,
            "height mismatch for {count} badges at {per_line} per line"
        );
    }
}

#[test]
fn test_last_row_holds_the_remainder() {
    for (count, per_line) in [(5usize, 4usize), (9, 4), (10, 3), (6, 3), (7, 2)] {
        let badges: Vec<RenderedBadge> = (0..count).map(|_| unit_badge()).collect();
        let grid = composer().compose(&badges, per_line);

        let rows = count.div_ceil(per_line);
        let last_row_y = ((rows - 1) * 38) as u32;
        let expected_last = count - per_line * ((count - 1) / per_line);
        assert_eq!(
            badges_at_row(&grid.svg, last_row_y),
            expected_last,
            "remainder mismatch for {count} badges at {per_line} per line"
        );

        // every earlier row is full
        for row in 0..rows - 1 {
            assert_eq!(badges_at_row(&grid.svg, (row * 38) as u32), per_line);
        }
    }
}

#[test]
fn test_full_rows_span_the_grid_width() {
    let badges: Vec<RenderedBadge> = (0..8).map(|_| unit_badge()).collect();
    let grid = composer().compose(&badges, 4);

    // identical rows: width 4*72 + 3*8, both rows starting at x = 0
    assert_eq!(grid.width, 4 * 72 + 3 * 8);
    assert!(grid.svg.contains("<g transform=\"translate(0, 0)\">"));
    assert!(grid.svg.contains("<g transform=\"translate(0, 38)\">"));
}

#[test]
fn test_single_row_is_symmetric_about_the_midpoint() {
    let badges: Vec<RenderedBadge> = (0..3).map(|_| unit_badge()).collect();
    let grid = composer().compose(&badges, 4);

    // one row defines the grid width, so it starts flush at 0 and its badges
    // advance by width + margin; the row ends exactly at the grid width
    assert_eq!(grid.width, 3 * 72 + 2 * 8);
    assert!(grid.svg.contains("<g transform=\"translate(0, 0)\">"));
    assert!(grid.svg.contains("<g transform=\"translate(80, 0)\">"));
    assert!(grid.svg.contains("<g transform=\"translate(160, 0)\">"));
    // left edge of first badge and right edge of last are equidistant
    // from the grid edges: 0 and 160 + 72 = grid width
    assert_eq!(160 + 72, grid.width);
}

#[test]
fn test_single_badge_goes_through_the_same_math() {
    let badge = unit_badge();
    let grid = composer().compose(std::slice::from_ref(&badge), 4);

    assert_eq!(grid.width, badge.width);
    assert_eq!(grid.height, 30);
    assert!(grid.svg.contains("<g transform=\"translate(0, 0)\">"));
    assert!(grid.svg.contains(badge.inner_markup()));
}

#[test]
fn test_per_line_one_stacks_vertically() {
    let badges: Vec<RenderedBadge> = (0..3).map(|_| unit_badge()).collect();
    let grid = composer().compose(&badges, 1);

    assert_eq!(grid.width, 72);
    assert_eq!(grid.height, 3 * 30 + 2 * 8);
    for y in [0u32, 38, 76] {
        assert_eq!(badges_at_row(&grid.svg, y), 1);
    }
}
