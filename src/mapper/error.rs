//! Error types for palette normalization.

use thiserror::Error;

use crate::visual::ColorParseError;

/// Errors that can occur while building a packed palette.
///
/// These are configuration errors (malformed caller input), not runtime
/// conditions to recover from; a failed rebuild leaves the previously built
/// palette in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A palette entry was not a parseable hex color string.
    #[error("invalid palette entry: {0}")]
    InvalidColor(#[from] ColorParseError),
}
