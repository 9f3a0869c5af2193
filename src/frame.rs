//! Narrow interfaces onto the owning plot.
//!
//! The plot's coordinate system and scale bookkeeping live elsewhere; this
//! core only needs forward transforms and the frame's screen extrema, so
//! that is all these traits expose.

/// A forward 1-D coordinate transform.
///
/// Implemented both by scales (data units to screen pixels) and by frame
/// views (secondary screen-unit adjustment such as ratio/offset correction).
pub trait AxisTransform {
    fn compute(&self, value: f64) -> f64;
}

/// Screen-space extrema of the plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEdges {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// The frame surface an annotation renders against.
///
/// Scales are keyed by range name; implementations are expected to fall
/// back to their default scale when a name is unknown, since rendering
/// never fails.
pub trait PlotFrame {
    fn edges(&self) -> FrameEdges;

    /// Data-to-screen scale for the named x range.
    fn x_scale(&self, range_name: &str) -> &dyn AxisTransform;

    /// Data-to-screen scale for the named y range.
    fn y_scale(&self, range_name: &str) -> &dyn AxisTransform;

    /// Screen-unit adjustment along x.
    fn x_view(&self) -> &dyn AxisTransform;

    /// Screen-unit adjustment along y.
    fn y_view(&self) -> &dyn AxisTransform;
}
