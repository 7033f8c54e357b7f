// File: crates/chart-dataset/src/color.rs
// Summary: Renderer-agnostic RGBA color used by palettes and value styling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataSetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::from_rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::from_rgb(255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    /// Light cyan, the series color used when none is configured.
    fn default() -> Self {
        Rgba::from_rgb(140, 234, 255)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = DataSetError;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DataSetError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self { r, g, b, a })
    }
}
