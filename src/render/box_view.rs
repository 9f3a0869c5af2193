//! The box annotation view: one model, one backend, one render entry point.

use crate::frame::PlotFrame;
use crate::model::{BoxAnnotation, RenderMode};
use crate::render::geometry::{resolve, ScreenBox};
use crate::render::surface::{DrawSurface, StyledElement};

/// How a view reacts to a model notification, on either channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderResponse {
    /// Repaint this annotation immediately. The direct-styling backend only
    /// mutates its own element, so there is nothing to coalesce.
    Paint,
    /// Ask the owning plot for a full re-render, coalesced externally.
    RequestPlotRender,
}

/// Terminal render path, fixed when the view is constructed.
pub enum Backend {
    /// Styles an owned element in place.
    Css(Box<dyn StyledElement>),
    /// Draws into the plot's shared surface each frame.
    Canvas,
}

/// Renders one [`BoxAnnotation`] through its selected backend.
pub struct BoxAnnotationView {
    backend: Backend,
}

impl BoxAnnotationView {
    /// Direct-styling view owning the given element.
    pub fn css(element: Box<dyn StyledElement>) -> Self {
        Self {
            backend: Backend::Css(element),
        }
    }

    /// Immediate-mode view drawing into the surface passed to `render`.
    pub fn canvas() -> Self {
        Self {
            backend: Backend::Canvas,
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Notification response for a render mode, applied to both the
    /// ordinary-change and the data-update channel alike.
    pub fn response_for(mode: RenderMode) -> RenderResponse {
        match mode {
            RenderMode::Css => RenderResponse::Paint,
            RenderMode::Canvas => RenderResponse::RequestPlotRender,
        }
    }

    /// Render the model. Idempotent and safe to call repeatedly.
    ///
    /// Invisible or fully-open models draw nothing; the css backend hides
    /// its persistent element in those cases, the canvas backend simply
    /// skips (nothing persists between frames there).
    pub fn render(
        &mut self,
        model: &BoxAnnotation,
        frame: &dyn PlotFrame,
        surface: &mut dyn DrawSurface,
    ) {
        if !model.visible() {
            if let Backend::Css(element) = &mut self.backend {
                element.hide();
            }
            return;
        }

        let Some(coords) = resolve(model, frame) else {
            log::debug!("box annotation has no set bounds, skipping draw");
            if let Backend::Css(element) = &mut self.backend {
                element.hide();
            }
            return;
        };

        match &mut self.backend {
            Backend::Css(element) => style_element(element.as_mut(), model, &coords),
            Backend::Canvas => draw_box(surface, model, &coords),
        }
    }
}

/// Direct-styling path: position and size from the resolved coordinates,
/// border from the line group, background from the fill group.
fn style_element(element: &mut dyn StyledElement, model: &BoxAnnotation, coords: &ScreenBox) {
    element.set_position(coords.left, coords.top);
    element.set_size(coords.width().abs(), coords.height().abs());

    let line = model.line();
    element.set_border(line.width, &line.color.to_css(), line.dash.border_style());

    let fill = model.fill();
    element.set_background(&fill.color.to_css(), fill.alpha);

    element.show();
}

/// Immediate-mode path. Save/restore bracket the whole draw; the surface is
/// shared with sibling annotations.
fn draw_box(surface: &mut dyn DrawSurface, model: &BoxAnnotation, coords: &ScreenBox) {
    surface.save();

    surface.begin_path();
    surface.rect(coords.left, coords.top, coords.width(), coords.height());

    surface.set_fill_style(model.fill());
    surface.fill();

    surface.set_line_style(model.line());
    surface.stroke();

    surface.restore();
}
