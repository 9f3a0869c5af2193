//! Visual style types shared by the annotation model and both render backends.
//!
//! Colors are 8-bit RGBA, packed as `0xRRGGBBAA` where a packed form is
//! needed (palettes, pixel buffers) and formatted as CSS `rgba(..)` strings
//! where the direct-styling backend needs them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color string that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color string: {value:?}")]
pub struct ColorParseError {
    /// The offending input, as supplied by the caller.
    pub value: String,
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fallback color for NaN/undefined mapper inputs.
    pub const GRAY: Color = Color {
        r: 0x80,
        g: 0x80,
        b: 0x80,
        a: 0xff,
    };

    /// Default box fill: translucent pale yellow.
    pub const PALE_YELLOW: Color = Color {
        r: 0xff,
        g: 0xf9,
        b: 0xba,
        a: 0xff,
    };

    /// Default box line: light gray.
    pub const LIGHT_GRAY: Color = Color {
        r: 0xcc,
        g: 0xcc,
        b: 0xcc,
        a: 0xff,
    };

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    ///
    /// Strings without an alpha channel get an opaque `ff` suffix appended
    /// before parsing, so `#ff0000` and `#ff0000ff` are the same color.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            value: value.to_string(),
        };
        let full = if value.len() != 9 {
            format!("{value}ff")
        } else {
            value.to_string()
        };
        let digits = full.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 8 {
            return Err(err());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| err())?;
        Ok(Self::from_packed(packed))
    }

    /// Build from a packed `0xRRGGBBAA` value.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }

    /// Pack as `0xRRGGBBAA`.
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Format as a CSS `rgba(r, g, b, a)` string.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            f32::from(self.a) / 255.0
        )
    }
}

/// A line dash specification.
///
/// The immediate-mode backend consumes segment lists as-is; the
/// direct-styling backend only supports named border styles and collapses
/// segment lists through [`DashPattern::border_style`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashPattern {
    /// On/off segment lengths in screen units.
    Segments(Vec<f32>),
    /// An already-named style ("solid", "dashed", "dotted", ...).
    Named(String),
}

impl Default for DashPattern {
    fn default() -> Self {
        DashPattern::Segments(Vec::new())
    }
}

impl DashPattern {
    /// Nearest named border style.
    ///
    /// Segment lists with fewer than two entries collapse to `"solid"`,
    /// anything longer to `"dashed"`; exact dash spacing is not reproduced.
    /// Named styles pass through unchanged.
    pub fn border_style(&self) -> &str {
        match self {
            DashPattern::Segments(segments) if segments.len() < 2 => "solid",
            DashPattern::Segments(_) => "dashed",
            DashPattern::Named(name) => name,
        }
    }
}

/// Stroke style group for the box outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub alpha: f32,
    pub dash: DashPattern,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::LIGHT_GRAY,
            width: 1.0,
            alpha: 0.3,
            dash: DashPattern::default(),
        }
    }
}

/// Fill style group for the box interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: Color,
    pub alpha: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Color::PALE_YELLOW,
            alpha: 0.4,
        }
    }
}
