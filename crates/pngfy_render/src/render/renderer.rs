use image::{Rgba, RgbaImage};
use log::debug;

use super::{compose, glyphs, layout};
use crate::settings::color::ColorRgba;
use crate::settings::store::SettingsSnapshot;

/// How glyph regions are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Plot each glyph's bitmap design.
    #[default]
    Glyphs,
    /// Fill every glyph region uniformly with the composited font color,
    /// with no bitmap detail.
    Solid,
}

/// Encodes a color for the canvas backend.
pub fn encode_rgba(color: ColorRgba) -> Rgba<u8> {
    Rgba([color.red(), color.green(), color.blue(), color.alpha()])
}

/// Turns settings snapshots into rendered canvases.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    mode: RenderMode,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Renders one snapshot into a fresh canvas.
    ///
    /// The canvas is allocated at the unscaled size and pre-filled with the
    /// background color; the reported render dimensions scale it by the font
    /// multiplier. The font color is composited against the background once
    /// per render since both are fixed for the whole pass.
    pub fn render(&self, settings: &SettingsSnapshot) -> RenderOutput {
        let canvas_width = layout::canvas_width(settings.text(), settings.horizontal_spacing());
        let canvas_height = layout::canvas_height(settings.text(), settings.vertical_spacing());
        let multiplier = layout::font_multiplier(settings.font_height());

        let background = encode_rgba(settings.background_color());
        let ink = encode_rgba(compose::composite(settings.font_color(), settings.background_color()));

        debug!(
            "rendering {}x{} canvas at multiplier {} ({:?} mode)",
            canvas_width, canvas_height, multiplier, self.mode
        );

        let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, background);
        match self.mode {
            RenderMode::Glyphs => plot_glyph_designs(settings, ink, background, &mut canvas),
            RenderMode::Solid => plot_solid_regions(settings, ink, &mut canvas),
        }

        RenderOutput {
            canvas,
            render_width: canvas_width * multiplier,
            render_height: canvas_height * multiplier,
            settings: settings.clone(),
        }
    }
}

fn plot_glyph_designs(
    settings: &SettingsSnapshot,
    ink: Rgba<u8>,
    background: Rgba<u8>,
    canvas: &mut RgbaImage,
) {
    let horizontal_spacing = settings.horizontal_spacing();
    let vertical_spacing = settings.vertical_spacing();

    for (row, line) in layout::text_lines(settings.text()).iter().enumerate() {
        for (column, character) in line.chars().enumerate() {
            // The space glyph is entirely background, which the canvas
            // already is.
            if character == ' ' {
                continue;
            }
            let Some(design) = glyphs::design(character) else { continue };
            let design = design.as_bytes();

            let region = layout::glyph_region(
                column as u32,
                row as u32,
                horizontal_spacing,
                vertical_spacing,
            );
            for (index, (x, y)) in region.indexed_pixels() {
                let color = if glyphs::is_ink(design[index]) { ink } else { background };
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn plot_solid_regions(settings: &SettingsSnapshot, ink: Rgba<u8>, canvas: &mut RgbaImage) {
    let horizontal_spacing = settings.horizontal_spacing();
    let vertical_spacing = settings.vertical_spacing();

    for (row, line) in layout::text_lines(settings.text()).iter().enumerate() {
        for column in 0..line.chars().count() {
            let region = layout::glyph_region(
                column as u32,
                row as u32,
                horizontal_spacing,
                vertical_spacing,
            );
            for (x, y) in region.pixels() {
                canvas.put_pixel(x, y, ink);
            }
        }
    }
}

/// The immutable product of one render call: the canvas, the scaled render
/// dimensions and the exact settings the render consumed.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    canvas: RgbaImage,
    render_width: u32,
    render_height: u32,
    settings: SettingsSnapshot,
}

impl RenderOutput {
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn render_width(&self) -> u32 {
        self.render_width
    }

    pub fn render_height(&self) -> u32 {
        self.render_height
    }

    /// The frozen settings this output was rendered from.
    pub fn settings(&self) -> &SettingsSnapshot {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::color::ColorUpdate;
    use crate::settings::store::SettingsStore;

    fn settings_for(text: &str) -> SettingsStore {
        let mut settings = SettingsStore::new();
        settings.set_text(text, None).unwrap();
        settings
    }

    #[test]
    fn canvas_matches_the_dimension_formula() {
        let mut settings = settings_for("AB\nC");
        settings.set_horizontal_spacing(2).unwrap();
        settings.set_vertical_spacing(1).unwrap();

        let output = Renderer::default().render(&settings.snapshot());
        assert_eq!(output.canvas().width(), 12);
        assert_eq!(output.canvas().height(), 19);
        assert_eq!(output.render_width(), 12);
        assert_eq!(output.render_height(), 19);
    }

    #[test]
    fn font_height_scales_reported_dimensions_only() {
        let mut settings = settings_for("Hi");
        settings.set_horizontal_spacing(0).unwrap();
        settings.set_vertical_spacing(0).unwrap();
        settings.set_font_height(18).unwrap();

        let output = Renderer::default().render(&settings.snapshot());
        assert_eq!((output.canvas().width(), output.canvas().height()), (10, 9));
        assert_eq!((output.render_width(), output.render_height()), (20, 18));
    }

    #[test]
    fn ink_and_background_pixels_follow_the_glyph_design() {
        let mut settings = settings_for("!");
        settings.set_background_color(ColorUpdate::rgba(10, 20, 30, 255)).unwrap();

        let output = Renderer::default().render(&settings.snapshot());
        let canvas = output.canvas();
        // The '!' design has its first ink cell at index 2 -> (2, 0).
        assert_eq!(canvas.get_pixel(2, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        // Row 7 of '!' is empty.
        assert_eq!(canvas.get_pixel(2, 7), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn space_leaves_the_background_untouched() {
        let settings = settings_for(" ");
        let output = Renderer::default().render(&settings.snapshot());
        for pixel in output.canvas().pixels() {
            assert_eq!(pixel, &Rgba([0, 0, 0, 255]));
        }
    }

    #[test]
    fn translucent_font_is_composited_once_against_the_background() {
        let mut settings = settings_for("!");
        settings.set_font_color(ColorUpdate::rgba(255, 255, 255, 128)).unwrap();

        let output = Renderer::default().render(&settings.snapshot());
        // White at alpha 128 over opaque black lands on 128-gray.
        assert_eq!(output.canvas().get_pixel(2, 0), &Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn solid_mode_fills_whole_regions_including_spaces() {
        let mut settings = settings_for("a b");
        settings.set_horizontal_spacing(0).unwrap();

        let output = Renderer::new(RenderMode::Solid).render(&settings.snapshot());
        for pixel in output.canvas().pixels() {
            assert_eq!(pixel, &Rgba([255, 255, 255, 255]));
        }
    }

    #[test]
    fn solid_mode_leaves_spacing_gaps_as_background() {
        let mut settings = settings_for("ab");
        settings.set_horizontal_spacing(3).unwrap();

        let output = Renderer::new(RenderMode::Solid).render(&settings.snapshot());
        let canvas = output.canvas();
        assert_eq!(canvas.width(), 13);
        // Glyph regions: x 0..=4 and x 8..=12; the gap keeps the background.
        assert_eq!(canvas.get_pixel(4, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.get_pixel(5, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(7, 8), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(8, 8), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn output_holds_the_snapshot_it_was_rendered_from() {
        let mut settings = settings_for("frozen");
        let output = Renderer::default().render(&settings.snapshot());

        settings.set_text("mutated later", None).unwrap();
        assert_eq!(output.settings().text(), "frozen");
    }
}
