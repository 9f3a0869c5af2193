//! Maps arrays of scalars to palette colors and packed pixel buffers.

use crate::mapper::error::PaletteError;
use crate::mapper::palette::{is_little_endian, normalize, ColorSpec};
use crate::visual::Color;

/// Value-to-palette-index bucketing policy.
///
/// Concrete mapper flavors (linear, log, categorical, ...) supply this; the
/// mapper itself only owns the palette and the packing machinery.
pub trait PaletteIndexer {
    /// Palette slot for a value, or `None` for NaN/undefined input.
    ///
    /// `image_context` is set when mapping image data, which may bucket
    /// differently than categorical mapping.
    fn index_for(&self, value: f64, palette_len: usize, image_context: bool) -> Option<usize>;
}

/// Owns a palette and turns scalar arrays into colors or pixel bytes.
pub struct ColorMapper {
    raw_palette: Vec<ColorSpec>,
    built_palette: Vec<u32>,
    nan_color: Color,
    little_endian: bool,
    indexer: Box<dyn PaletteIndexer>,
}

impl ColorMapper {
    /// Build a mapper over the given palette. The host byte order is probed
    /// here, once, and cached for the mapper's lifetime.
    pub fn new(
        palette: Vec<ColorSpec>,
        indexer: Box<dyn PaletteIndexer>,
    ) -> Result<Self, PaletteError> {
        let built_palette = normalize(&palette)?;
        Ok(Self {
            raw_palette: palette,
            built_palette,
            nan_color: Color::GRAY,
            little_endian: is_little_endian(),
            indexer,
        })
    }

    pub fn with_nan_color(mut self, nan_color: Color) -> Self {
        self.nan_color = nan_color;
        self
    }

    pub fn raw_palette(&self) -> &[ColorSpec] {
        &self.raw_palette
    }

    /// The normalized packed palette, always in sync with the latest
    /// successfully set raw palette.
    pub fn built_palette(&self) -> &[u32] {
        &self.built_palette
    }

    pub fn nan_color(&self) -> Color {
        self.nan_color
    }

    pub fn little_endian(&self) -> bool {
        self.little_endian
    }

    /// Replace the palette and synchronously rebuild the packed form.
    ///
    /// On failure the previously built palette stays intact and usable.
    pub fn set_palette(&mut self, palette: Vec<ColorSpec>) -> Result<(), PaletteError> {
        let built_palette = normalize(&palette)?;
        self.raw_palette = palette;
        self.built_palette = built_palette;
        log::trace!("rebuilt palette, {} entries", self.built_palette.len());
        Ok(())
    }

    /// Mapping a single scalar outside an array/image context is not a
    /// meaningful operation for a color mapper; always `None`.
    pub fn compute(&self, _x: f64) -> Option<u32> {
        None
    }

    /// Map each value to its packed palette entry.
    pub fn compute_many(&self, values: &[f64]) -> Vec<u32> {
        self.values_for(values, false)
    }

    /// Pack mapped colors into a buffer of `4 * values.len()` bytes, ready
    /// for direct consumption by a pixel surface.
    pub fn map_to_pixel_buffer(&self, values: &[f64], image_context: bool) -> Vec<u8> {
        let mapped = self.values_for(values, image_context);
        pack_pixel_buffer(&mapped, self.little_endian)
    }

    fn values_for(&self, values: &[f64], image_context: bool) -> Vec<u32> {
        let nan = self.nan_color.to_packed();
        values
            .iter()
            .map(|&value| {
                self.indexer
                    .index_for(value, self.built_palette.len(), image_context)
                    .and_then(|index| self.built_palette.get(index).copied())
                    .unwrap_or(nan)
            })
            .collect()
    }
}

/// Pack colors into a byte buffer.
///
/// The two branches are intentionally not re-derivations of one formula and
/// must stay independent:
/// - little-endian: per-value bytes; byte 0 comes from the floating-point
///   division by `4278190080.0` (`0xFF000000`), not a 24-bit shift, then
///   bits 16-23, 8-15, and 0-7;
/// - big-endian: a 32-bit word `(value << 8) | 0xff` in native byte order,
///   forcing full alpha.
///
/// The flag is explicit so both branches can be exercised deterministically
/// regardless of the host; callers normally pass the probed host order.
pub fn pack_pixel_buffer(colors: &[u32], little_endian: bool) -> Vec<u8> {
    let mut buf = vec![0u8; colors.len() * 4];
    if little_endian {
        for (chunk, &value) in buf.chunks_exact_mut(4).zip(colors) {
            chunk[0] = ((f64::from(value) / 4278190080.0) * 255.0).floor() as u8;
            chunk[1] = ((value & 0x00ff_0000) >> 16) as u8;
            chunk[2] = ((value & 0x0000_ff00) >> 8) as u8;
            chunk[3] = (value & 0xff) as u8;
        }
    } else {
        for (chunk, &value) in buf.chunks_exact_mut(4).zip(colors) {
            let word = (value << 8) | 0xff;
            chunk.copy_from_slice(&word.to_be_bytes());
        }
    }
    buf
}
