use std::fmt;

use crate::PngfyError;

/// Names one of the four RGBA channels in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
            ColorChannel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// An RGBA color with every channel held in 0..=255.
///
/// Values are validated at the point they enter; a stored color is always
/// valid and is handed out by value, never by reference into the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl ColorRgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Builds a color from wide integers, rejecting any channel outside
    /// 0..=255. Nothing is clamped or rounded.
    pub fn from_channels(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self, PngfyError> {
        Ok(Self {
            red: channel_value(ColorChannel::Red, red)?,
            green: channel_value(ColorChannel::Green, green)?,
            blue: channel_value(ColorChannel::Blue, blue)?,
            alpha: channel_value(ColorChannel::Alpha, alpha)?,
        })
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Returns a copy with the update applied. Channels the update leaves
    /// unset keep their current value; the first invalid channel aborts the
    /// whole update and `self` is never touched.
    pub fn with_update(self, update: ColorUpdate) -> Result<Self, PngfyError> {
        let mut next = self;
        if let Some(red) = update.red {
            next.red = channel_value(ColorChannel::Red, red)?;
        }
        if let Some(green) = update.green {
            next.green = channel_value(ColorChannel::Green, green)?;
        }
        if let Some(blue) = update.blue {
            next.blue = channel_value(ColorChannel::Blue, blue)?;
        }
        if let Some(alpha) = update.alpha {
            next.alpha = channel_value(ColorChannel::Alpha, alpha)?;
        }
        Ok(next)
    }
}

fn channel_value(channel: ColorChannel, value: i64) -> Result<u8, PngfyError> {
    if (0..=255).contains(&value) {
        Ok(value as u8)
    } else {
        Err(PngfyError::InvalidColorValue { channel, value })
    }
}

/// A partial color assignment: only the channels that are `Some` change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorUpdate {
    pub red: Option<i64>,
    pub green: Option<i64>,
    pub blue: Option<i64>,
    pub alpha: Option<i64>,
}

impl ColorUpdate {
    pub fn rgb(red: i64, green: i64, blue: i64) -> Self {
        Self { red: Some(red), green: Some(green), blue: Some(blue), alpha: None }
    }

    pub fn rgba(red: i64, green: i64, blue: i64, alpha: i64) -> Self {
        Self { red: Some(red), green: Some(green), blue: Some(blue), alpha: Some(alpha) }
    }

    pub fn alpha(alpha: i64) -> Self {
        Self { alpha: Some(alpha), ..Self::default() }
    }
}
