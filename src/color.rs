//! Colour values and catalog entries.
//!
//! A [`ColorEntry`] keeps its hex string as the source of truth; the RGB and
//! HSL fields are always derived from it on construction.

use std::fmt;

use serde::Serialize;

use crate::error::ColorError;
use crate::math;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as uppercase hex (no `#` prefix).
    pub fn to_hex(self) -> String {
        math::rgb_to_hex((f64::from(self.r), f64::from(self.g), f64::from(self.b)))
    }

    /// Convert to HSL with whole-number components.
    pub fn to_hsl(self) -> Hsl {
        math::rgb_to_hsl(self)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// HSL with hue in degrees (0–360) and saturation/lightness in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.h, self.s, self.l)
    }
}

/// A named catalog colour annotated with its RGB and HSL forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorEntry {
    pub name: String,
    /// As stored in the catalog, `#RRGGBB` or bare `RRGGBB`.
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl ColorEntry {
    /// Create an entry, deriving RGB/HSL from `hex`.
    ///
    /// A hex string without any hex-digit run is annotated as black.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        let hex = hex.into();
        let rgb = math::hex_to_rgb(&hex);
        Self {
            name: name.into(),
            rgb,
            hsl: rgb.to_hsl(),
            hex,
        }
    }

    /// Like [`ColorEntry::new`], but fails instead of falling back to black.
    pub fn try_new(name: impl Into<String>, hex: impl Into<String>) -> Result<Self, ColorError> {
        let hex = hex.into();
        let rgb = math::try_hex_to_rgb(&hex)?;
        Ok(Self {
            name: name.into(),
            rgb,
            hsl: rgb.to_hsl(),
            hex,
        })
    }
}
