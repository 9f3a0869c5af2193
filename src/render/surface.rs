//! Drawing capabilities consumed by the box renderer.
//!
//! Concrete surfaces and elements live with the embedding plot; the
//! renderer only needs these two narrow trait surfaces.

use crate::visual::{FillStyle, LineStyle};

/// An immediate-mode drawing surface, shared by every annotation on the
/// plot. Callers bracket their drawing with `save`/`restore` so style and
/// path state never leaks into a sibling's draw.
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn begin_path(&mut self);

    /// Describe a rectangle on the current path. Width and height may be
    /// negative; the surface handles inverted extents per its normal
    /// contract, without pre-normalization.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Write the fill style group onto the surface.
    fn set_fill_style(&mut self, style: &FillStyle);
    fn fill(&mut self);

    /// Write the line style group onto the surface.
    fn set_line_style(&mut self, style: &LineStyle);
    fn stroke(&mut self);
}

/// A positioned element owned by the direct-styling backend.
///
/// Elements persist across visibility toggles, so hiding is an explicit
/// style write rather than removal.
pub trait StyledElement {
    fn set_position(&mut self, left: f64, top: f64);
    fn set_size(&mut self, width: f64, height: f64);
    fn set_border(&mut self, width: f32, color: &str, style: &str);
    fn set_background(&mut self, color: &str, opacity: f32);
    fn show(&mut self);
    fn hide(&mut self);
}
