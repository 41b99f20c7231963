use crate::render::glyphs::GLYPH_HEIGHT;
use crate::PngfyError;

/// Validates a font height and quantizes it to a multiple of the glyph
/// height. Remainders 1..=4 snap down, 5..=8 snap up, so the effective
/// height is always within 4 pixels of the request.
pub fn snap_font_height(desired: i64) -> Result<u32, PngfyError> {
    if desired < i64::from(GLYPH_HEIGHT) {
        return Err(PngfyError::InvalidFontHeight(desired));
    }

    let desired = desired as u32;
    let snapped = match desired % GLYPH_HEIGHT {
        0 => desired,
        1..=4 => (desired / GLYPH_HEIGHT) * GLYPH_HEIGHT,
        _ => (desired / GLYPH_HEIGHT + 1) * GLYPH_HEIGHT,
    };

    Ok(snapped)
}
