//! Resolves logical box bounds into screen coordinates.

use crate::frame::{AxisTransform, PlotFrame};
use crate::model::{BoxAnnotation, SpatialUnits};

/// A box resolved into screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ScreenBox {
    /// Signed horizontal extent; negative when the bounds are inverted.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Signed vertical extent; negative when the bounds are inverted.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Resolve an annotation's bounds against the frame.
///
/// Each bound is handled independently: an open bound clips to the frame
/// edge on that side, a set bound goes through the axis scale (data units),
/// the frame view (screen units), or passes through raw when the entity is
/// in screen-space mode.
///
/// Returns `None` when all four bounds are open; the caller must treat that
/// as "no box", never as a full-frame box.
pub fn resolve(model: &BoxAnnotation, frame: &dyn PlotFrame) -> Option<ScreenBox> {
    let bounds = model.bounds();
    if bounds.is_fully_open() {
        return None;
    }

    let edges = frame.edges();
    let units = model.units();
    let screen = model.is_screen_space();
    let xscale = frame.x_scale(model.x_range_name());
    let yscale = frame.y_scale(model.y_range_name());

    Some(ScreenBox {
        left: resolve_bound(bounds.left, units.left, screen, xscale, frame.x_view(), edges.left),
        right: resolve_bound(
            bounds.right,
            units.right,
            screen,
            xscale,
            frame.x_view(),
            edges.right,
        ),
        top: resolve_bound(bounds.top, units.top, screen, yscale, frame.y_view(), edges.top),
        bottom: resolve_bound(
            bounds.bottom,
            units.bottom,
            screen,
            yscale,
            frame.y_view(),
            edges.bottom,
        ),
    })
}

fn resolve_bound(
    bound: Option<f64>,
    units: SpatialUnits,
    screen_space: bool,
    scale: &dyn AxisTransform,
    view: &dyn AxisTransform,
    frame_edge: f64,
) -> f64 {
    match bound {
        None => frame_edge,
        Some(value) if screen_space => value,
        Some(value) => match units {
            SpatialUnits::Data => scale.compute(value),
            SpatialUnits::Screen => view.compute(value),
        },
    }
}
