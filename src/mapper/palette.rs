//! Palette codec: heterogeneous color lists into packed numeric form.

use serde::{Deserialize, Serialize};

use crate::mapper::error::PaletteError;
use crate::visual::Color;

/// One palette entry as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Already packed; passed through unchanged. The caller guarantees a
    /// valid packed form.
    Packed(u32),
    /// A hex color string, with or without an alpha channel.
    Hex(String),
}

impl From<u32> for ColorSpec {
    fn from(value: u32) -> Self {
        ColorSpec::Packed(value)
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Hex(value.to_string())
    }
}

/// Normalize a raw palette into packed `0xRRGGBBAA` values.
///
/// Numeric entries pass through unchanged; hex strings without an alpha
/// channel become opaque. The output always has the same length as the
/// input.
pub fn normalize(raw: &[ColorSpec]) -> Result<Vec<u32>, PaletteError> {
    raw.iter()
        .map(|spec| match spec {
            ColorSpec::Packed(value) => Ok(*value),
            ColorSpec::Hex(value) => Ok(Color::from_hex(value)?.to_packed()),
        })
        .collect()
}

/// Runtime byte-order probe.
///
/// Writes a known 32-bit pattern through a native store and compares its
/// bytes against the big-endian expectation. A pure function of the host;
/// the mapper runs it once at construction and caches the result, since the
/// byte order decides which pixel packing path is correct.
pub fn is_little_endian() -> bool {
    let probe: [u8; 4] = 0x0a0b0c0d_u32.to_ne_bytes();
    probe != [0x0a, 0x0b, 0x0c, 0x0d]
}
