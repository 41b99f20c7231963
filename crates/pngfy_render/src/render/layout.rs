//! Deterministic text-to-pixel geometry.
//!
//! All canvas math lives here so the text validator and the renderer agree
//! on the exact pixel cost of a piece of text.

use super::geometry::PixelRegion;
use super::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Splits on newline, preserving empty segments including trailing ones: a
/// trailing newline produces a trailing empty line with its own glyph row.
pub fn text_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

pub fn longest_line(text: &str) -> &str {
    text_lines(text).into_iter().max_by_key(|line| line.chars().count()).unwrap_or("")
}

/// Unscaled canvas width: one glyph per character of the longest line plus
/// the horizontal spacing between adjacent glyphs.
pub fn canvas_width(text: &str, horizontal_spacing: u32) -> u32 {
    let longest = longest_line(text).chars().count() as u32;
    longest * GLYPH_WIDTH + longest.saturating_sub(1) * horizontal_spacing
}

/// Unscaled canvas height: one glyph row per text line plus the vertical
/// spacing between adjacent rows.
pub fn canvas_height(text: &str, vertical_spacing: u32) -> u32 {
    let line_count = text_lines(text).len() as u32;
    line_count * GLYPH_HEIGHT + line_count.saturating_sub(1) * vertical_spacing
}

/// How many times each canvas pixel is reported in the render dimensions.
/// The font height is a multiple of the glyph height by construction.
pub fn font_multiplier(font_height: u32) -> u32 {
    font_height / GLYPH_HEIGHT
}

/// The 5x9 canvas rectangle covered by the glyph at character `column` of
/// line `row`.
pub fn glyph_region(
    column: u32,
    row: u32,
    horizontal_spacing: u32,
    vertical_spacing: u32,
) -> PixelRegion {
    let min_x = column * (horizontal_spacing + GLYPH_WIDTH);
    let min_y = row * (vertical_spacing + GLYPH_HEIGHT);
    PixelRegion::new(min_x, min_y, min_x + GLYPH_WIDTH - 1, min_y + GLYPH_HEIGHT - 1)
}
