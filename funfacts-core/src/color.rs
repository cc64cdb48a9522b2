//! RGB color type with HSV conversion and contrast selection.
//!
//! The background is parameterized by hue alone; saturation and
//! brightness stay fixed so every step of the rotation keeps roughly
//! the same intensity.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for hex color notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Saturation used for the rotating background.
pub const BACKGROUND_SATURATION: f32 = 0.6;
/// Brightness used for the rotating background.
pub const BACKGROUND_VALUE: f32 = 0.9;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Convert an HSV triple to RGB.
    ///
    /// `hue` is in degrees and is wrapped into [0, 360); `saturation`
    /// and `value` are in [0, 1].
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let c = value * saturation;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = value - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(channel(r + m), channel(g + m), channel(b + m))
    }

    /// Perceptual luminance in [0, 1].
    pub fn luminance(&self) -> f32 {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Whether text on this background needs a light foreground.
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.5
    }

    /// Black or white, whichever reads against `self` as a background.
    pub fn contrast_text(&self) -> Rgb {
        if self.is_dark() {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse `#RRGGBB` or `RRGGBB` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
        };

        Ok(Rgb::new(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
