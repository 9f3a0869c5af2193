//! Data models for plot annotations.

mod box_annotation;

pub use box_annotation::{Bounds, BoundsUnits, BoxAnnotation, RenderMode, SpatialUnits};
