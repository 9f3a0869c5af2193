//! Overplot - box overlay annotations and scalar color mapping for 2D plots.
//!
//! Two tightly related rendering pieces live here: resolving a box overlay's
//! logical bounds (data units, screen units, or open-ended) into screen
//! coordinates and drawing it through one of two backends, and turning arrays
//! of numeric values into packed pixel buffers ready for a rendering surface.
//!
//! The plot's scale system, scene hierarchy, and property machinery are
//! external collaborators, consumed through the narrow traits in `frame` and
//! `render`.

mod frame;
mod mapper;
mod model;
mod render;
mod signal;
mod visual;

pub use frame::{AxisTransform, FrameEdges, PlotFrame};
pub use mapper::{
    is_little_endian, normalize, pack_pixel_buffer, ColorMapper, ColorSpec, PaletteError,
    PaletteIndexer,
};
pub use model::{Bounds, BoundsUnits, BoxAnnotation, RenderMode, SpatialUnits};
pub use render::{
    resolve, Backend, BoxAnnotationView, DrawSurface, RenderResponse, ScreenBox, StyledElement,
};
pub use signal::Signal;
pub use visual::{Color, ColorParseError, DashPattern, FillStyle, LineStyle};
