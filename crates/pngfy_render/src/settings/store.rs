use std::fmt;
use std::str::FromStr;

use super::color::{ColorRgba, ColorUpdate};
use super::{font, spacing, text};
use crate::PngfyError;

const DEFAULT_TEXT: &str = "<3 Ascii-Pngfy <3";

/// The live, mutable rendering configuration.
///
/// Every field is guarded by its own validator and each setter is
/// all-or-nothing: a rejected value leaves the previous state fully intact.
/// Setters return the newly effective value so callers can observe
/// normalization such as font-height snapping.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsStore {
    font_color: ColorRgba,
    background_color: ColorRgba,
    font_height: u32,
    horizontal_spacing: u32,
    vertical_spacing: u32,
    text: String,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            font_color: ColorRgba::new(255, 255, 255, 255),
            background_color: ColorRgba::new(0, 0, 0, 255),
            font_height: 9,
            horizontal_spacing: 1,
            vertical_spacing: 1,
            text: DEFAULT_TEXT.to_owned(),
        }
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_color(&self) -> ColorRgba {
        self.font_color
    }

    pub fn background_color(&self) -> ColorRgba {
        self.background_color
    }

    pub fn font_height(&self) -> u32 {
        self.font_height
    }

    pub fn horizontal_spacing(&self) -> u32 {
        self.horizontal_spacing
    }

    pub fn vertical_spacing(&self) -> u32 {
        self.vertical_spacing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_font_color(&mut self, update: ColorUpdate) -> Result<ColorRgba, PngfyError> {
        self.font_color = self.font_color.with_update(update)?;
        Ok(self.font_color)
    }

    pub fn set_background_color(&mut self, update: ColorUpdate) -> Result<ColorRgba, PngfyError> {
        self.background_color = self.background_color.with_update(update)?;
        Ok(self.background_color)
    }

    pub fn set_font_height(&mut self, desired: i64) -> Result<u32, PngfyError> {
        self.font_height = font::snap_font_height(desired)?;
        Ok(self.font_height)
    }

    pub fn set_horizontal_spacing(&mut self, desired: i64) -> Result<u32, PngfyError> {
        self.horizontal_spacing = spacing::validate_horizontal(desired)?;
        Ok(self.horizontal_spacing)
    }

    pub fn set_vertical_spacing(&mut self, desired: i64) -> Result<u32, PngfyError> {
        self.vertical_spacing = spacing::validate_vertical(desired)?;
        Ok(self.vertical_spacing)
    }

    /// Validates and commits new text. Unsupported characters are replaced
    /// with `replacement` when one is given; the canvas dimension caps are
    /// checked against the spacings in effect right now.
    pub fn set_text(
        &mut self,
        desired: &str,
        replacement: Option<&str>,
    ) -> Result<String, PngfyError> {
        let committed =
            text::validate_text(desired, replacement, self.horizontal_spacing, self.vertical_spacing)?;
        self.text = committed.clone();
        Ok(committed)
    }

    /// An independent read-only copy of the current state. Later mutation of
    /// the live store never shows through a snapshot taken earlier.
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot { inner: self.clone() }
    }

    /// Dispatches a dynamic setting operation against the live store.
    pub fn apply(&mut self, call: SettingCall) -> Result<SettingValue, PngfyError> {
        match call {
            SettingCall::SetFontColor(update) => {
                Ok(SettingValue::Color(self.set_font_color(update)?))
            },
            SettingCall::SetBackgroundColor(update) => {
                Ok(SettingValue::Color(self.set_background_color(update)?))
            },
            SettingCall::SetFontHeight(desired) => {
                Ok(SettingValue::Integer(self.set_font_height(desired)?))
            },
            SettingCall::SetHorizontalSpacing(desired) => {
                Ok(SettingValue::Integer(self.set_horizontal_spacing(desired)?))
            },
            SettingCall::SetVerticalSpacing(desired) => {
                Ok(SettingValue::Integer(self.set_vertical_spacing(desired)?))
            },
            SettingCall::SetText { text, replacement } => {
                Ok(SettingValue::Text(self.set_text(&text, replacement.as_deref())?))
            },
            getter => read_setting(&getter, self),
        }
    }
}

/// A frozen copy of the settings at one point in time.
///
/// Snapshots answer the same getters as the live store but carry no typed
/// setters at all; dynamic setter operations are rejected with an
/// `UnsupportedOperation` error rather than silently ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsSnapshot {
    inner: SettingsStore,
}

impl SettingsSnapshot {
    pub fn font_color(&self) -> ColorRgba {
        self.inner.font_color
    }

    pub fn background_color(&self) -> ColorRgba {
        self.inner.background_color
    }

    pub fn font_height(&self) -> u32 {
        self.inner.font_height
    }

    pub fn horizontal_spacing(&self) -> u32 {
        self.inner.horizontal_spacing
    }

    pub fn vertical_spacing(&self) -> u32 {
        self.inner.vertical_spacing
    }

    pub fn text(&self) -> &str {
        &self.inner.text
    }

    /// Answers get operations exactly like the live store and fails loudly
    /// for every set operation.
    pub fn apply(&self, call: SettingCall) -> Result<SettingValue, PngfyError> {
        if call.is_setter() {
            return Err(PngfyError::UnsupportedOperation {
                operation: call.operation_name(),
                reason: "settings snapshots are read-only".to_owned(),
            });
        }
        read_setting(&call, &self.inner)
    }
}

fn read_setting(call: &SettingCall, settings: &SettingsStore) -> Result<SettingValue, PngfyError> {
    let value = match call {
        SettingCall::GetFontColor => SettingValue::Color(settings.font_color),
        SettingCall::GetBackgroundColor => SettingValue::Color(settings.background_color),
        SettingCall::GetFontHeight => SettingValue::Integer(settings.font_height),
        SettingCall::GetHorizontalSpacing => SettingValue::Integer(settings.horizontal_spacing),
        SettingCall::GetVerticalSpacing => SettingValue::Integer(settings.vertical_spacing),
        SettingCall::GetText => SettingValue::Text(settings.text.clone()),
        // Setters are dispatched before this point.
        other => {
            return Err(PngfyError::UnsupportedOperation {
                operation: other.operation_name(),
                reason: "not a readable setting operation".to_owned(),
            });
        },
    };
    Ok(value)
}

/// The closed set of recognized setting names. Unknown names fail loudly so
/// configuration typos never pass silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingName {
    FontColor,
    BackgroundColor,
    FontHeight,
    HorizontalSpacing,
    VerticalSpacing,
    Text,
}

impl SettingName {
    pub const ALL: [SettingName; 6] = [
        SettingName::FontColor,
        SettingName::BackgroundColor,
        SettingName::FontHeight,
        SettingName::HorizontalSpacing,
        SettingName::VerticalSpacing,
        SettingName::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingName::FontColor => "font_color",
            SettingName::BackgroundColor => "background_color",
            SettingName::FontHeight => "font_height",
            SettingName::HorizontalSpacing => "horizontal_spacing",
            SettingName::VerticalSpacing => "vertical_spacing",
            SettingName::Text => "text",
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingName {
    type Err = PngfyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SettingName::ALL
            .into_iter()
            .find(|setting| setting.as_str() == name)
            .ok_or_else(|| PngfyError::UnsupportedOperation {
                operation: name.to_owned(),
                reason: "no setting with this name is registered".to_owned(),
            })
    }
}

/// One dynamic operation against a settings store or snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingCall {
    SetFontColor(ColorUpdate),
    SetBackgroundColor(ColorUpdate),
    SetFontHeight(i64),
    SetHorizontalSpacing(i64),
    SetVerticalSpacing(i64),
    SetText { text: String, replacement: Option<String> },
    GetFontColor,
    GetBackgroundColor,
    GetFontHeight,
    GetHorizontalSpacing,
    GetVerticalSpacing,
    GetText,
}

impl SettingCall {
    pub fn is_setter(&self) -> bool {
        matches!(
            self,
            SettingCall::SetFontColor(_)
                | SettingCall::SetBackgroundColor(_)
                | SettingCall::SetFontHeight(_)
                | SettingCall::SetHorizontalSpacing(_)
                | SettingCall::SetVerticalSpacing(_)
                | SettingCall::SetText { .. }
        )
    }

    pub fn setting(&self) -> SettingName {
        match self {
            SettingCall::SetFontColor(_) | SettingCall::GetFontColor => SettingName::FontColor,
            SettingCall::SetBackgroundColor(_) | SettingCall::GetBackgroundColor => {
                SettingName::BackgroundColor
            },
            SettingCall::SetFontHeight(_) | SettingCall::GetFontHeight => SettingName::FontHeight,
            SettingCall::SetHorizontalSpacing(_) | SettingCall::GetHorizontalSpacing => {
                SettingName::HorizontalSpacing
            },
            SettingCall::SetVerticalSpacing(_) | SettingCall::GetVerticalSpacing => {
                SettingName::VerticalSpacing
            },
            SettingCall::SetText { .. } | SettingCall::GetText => SettingName::Text,
        }
    }

    /// The `set_x`/`get_x` style name of this operation, used in errors.
    pub fn operation_name(&self) -> String {
        let prefix = if self.is_setter() { "set" } else { "get" };
        format!("{prefix}_{}", self.setting())
    }
}

/// The value a dynamic setting operation hands back.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Color(ColorRgba),
    Integer(u32),
    Text(String),
}
