//! Scalar-to-color mapping: palette normalization and pixel buffer packing.

mod color_mapper;
mod error;
mod palette;

pub use color_mapper::{pack_pixel_buffer, ColorMapper, PaletteIndexer};
pub use error::PaletteError;
pub use palette::{is_little_endian, normalize, ColorSpec};
