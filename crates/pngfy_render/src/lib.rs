mod render;
mod settings;

use std::fmt;

pub use render::{
    compose, glyphs, layout,
    geometry::PixelRegion,
    renderer::{encode_rgba, RenderMode, RenderOutput, Renderer},
};
pub use settings::{
    color::{ColorChannel, ColorRgba, ColorUpdate},
    store::{SettingCall, SettingName, SettingValue, SettingsSnapshot, SettingsStore},
};

/// Widest unscaled canvas a single render may produce, in pixels.
pub const MAX_CANVAS_WIDTH: u32 = 3840;
/// Tallest unscaled canvas a single render may produce, in pixels.
pub const MAX_CANVAS_HEIGHT: u32 = 2160;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PngfyError {
    #[error("{value} is not a valid {channel} channel value. Must be an integer in the range (0..=255)")]
    InvalidColorValue { channel: ColorChannel, value: i64 },
    #[error("{0} is not a valid font height. Must be an integer in the range (9..)")]
    InvalidFontHeight(i64),
    #[error("{0} is not a valid horizontal spacing. Must be an integer in the range (0..)")]
    InvalidHorizontalSpacing(i64),
    #[error("{0} is not a valid vertical spacing. Must be an integer in the range (0..)")]
    InvalidVerticalSpacing(i64),
    #[error("replacement text contains unsupported characters: {characters}. Only characters with ASCII code 10 or in the range (32..=126) are supported")]
    InvalidReplacementText { characters: String },
    #[error("text contains unsupported characters: {characters}. Only characters with ASCII code 10 or in the range (32..=126) are supported")]
    InvalidCharacter { characters: String },
    #[error("text cannot be empty because it would produce an image with zero width or height{hint}")]
    EmptyText { hint: EmptyTextHint },
    #[error("the text line {line:?} is too long to fit a {max} pixel wide canvas. Use shorter lines or reduce the horizontal spacing", max = MAX_CANVAS_WIDTH)]
    TextLineTooLong { line: String },
    #[error("the text {text:?} contains too many lines to fit a {max} pixel high canvas. Use fewer lines or reduce the vertical spacing", max = MAX_CANVAS_HEIGHT)]
    TooManyTextLines { text: String },
    #[error("{operation} is not supported: {reason}")]
    UnsupportedOperation { operation: String, reason: String },
}

/// Distinguishes the ways text can end up empty during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyTextHint {
    TextEmpty,
    BothEmpty,
    ReplacementProducedEmpty,
}

impl fmt::Display for EmptyTextHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyTextHint::TextEmpty => Ok(()),
            EmptyTextHint::BothEmpty => {
                write!(f, " (both the text and the replacement text are empty)")
            },
            EmptyTextHint::ReplacementProducedEmpty => {
                write!(f, " (an empty replacement text reduces text made of unsupported characters to an empty string)")
            },
        }
    }
}

/// Top-level entry point: a live settings store plus the render operations
/// that consume snapshots of it.
#[derive(Clone, Debug, Default)]
pub struct Pngfyer {
    settings: SettingsStore,
}

impl Pngfyer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_color(&mut self, update: ColorUpdate) -> Result<ColorRgba, PngfyError> {
        self.settings.set_font_color(update)
    }

    pub fn set_background_color(&mut self, update: ColorUpdate) -> Result<ColorRgba, PngfyError> {
        self.settings.set_background_color(update)
    }

    pub fn set_font_height(&mut self, desired: i64) -> Result<u32, PngfyError> {
        self.settings.set_font_height(desired)
    }

    pub fn set_horizontal_spacing(&mut self, desired: i64) -> Result<u32, PngfyError> {
        self.settings.set_horizontal_spacing(desired)
    }

    pub fn set_vertical_spacing(&mut self, desired: i64) -> Result<u32, PngfyError> {
        self.settings.set_vertical_spacing(desired)
    }

    pub fn set_text(
        &mut self,
        desired: &str,
        replacement: Option<&str>,
    ) -> Result<String, PngfyError> {
        self.settings.set_text(desired, replacement)
    }

    /// Dispatches a dynamic setting operation against the live store.
    pub fn apply(&mut self, call: SettingCall) -> Result<SettingValue, PngfyError> {
        self.settings.apply(call)
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        self.settings.snapshot()
    }

    pub fn render(&self) -> RenderOutput {
        self.render_with_mode(RenderMode::default())
    }

    pub fn render_with_mode(&self, mode: RenderMode) -> RenderOutput {
        Renderer::new(mode).render(&self.settings.snapshot())
    }
}
