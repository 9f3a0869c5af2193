//! Box overlay rendering: geometry resolution and the dual render backends.

mod box_view;
mod geometry;
mod surface;

pub use box_view::{Backend, BoxAnnotationView, RenderResponse};
pub use geometry::{resolve, ScreenBox};
pub use surface::{DrawSurface, StyledElement};

#[cfg(test)]
mod tests;
