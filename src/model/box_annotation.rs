//! Box overlay annotation entity.
//!
//! The entity is a plain data record plus two notification channels. Ordinary
//! attribute mutation goes through the setters and emits `change`; the
//! specialized [`BoxAnnotation::update`] operation sets all four bounds
//! silently and emits `data_update` instead, so high-frequency interactive
//! geometry changes (drag-select feedback) skip the generic change pipeline
//! while still repainting every frame.

use serde::{Deserialize, Serialize};

use crate::signal::Signal;
use crate::visual::{FillStyle, LineStyle};

/// Default range name, resolved externally against the frame's scale set.
pub const DEFAULT_RANGE_NAME: &str = "default";

/// Coordinate units for a single bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpatialUnits {
    /// Data units, mapped through the axis scale.
    #[default]
    Data,
    /// Screen units, mapped through the frame view.
    Screen,
}

/// Rendering backend selector. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Direct element styling; persists between frames.
    Css,
    /// Immediate-mode drawing on the shared plot surface.
    #[default]
    Canvas,
}

/// The four optional box edges.
///
/// `None` means the bound is open: the box extends to the corresponding
/// frame edge on that side. Open is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
}

impl Bounds {
    pub fn new(
        left: Option<f64>,
        right: Option<f64>,
        top: Option<f64>,
        bottom: Option<f64>,
    ) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// True when every edge is open. A fully open box renders nothing;
    /// it is "no box", not an infinite box.
    pub fn is_fully_open(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

/// Per-bound unit tags. Each of the four bounds is tagged independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundsUnits {
    pub left: SpatialUnits,
    pub right: SpatialUnits,
    pub top: SpatialUnits,
    pub bottom: SpatialUnits,
}

/// A rectangular overlay annotation on the plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxAnnotation {
    bounds: Bounds,
    units: BoundsUnits,
    /// Internal screen-space override, set only by [`BoxAnnotation::update`].
    /// When true all four bounds are already screen coordinates, regardless
    /// of the per-bound unit tags.
    screen: bool,
    x_range_name: String,
    y_range_name: String,
    render_mode: RenderMode,
    line: LineStyle,
    fill: FillStyle,
    visible: bool,
    #[serde(skip)]
    change: Signal,
    #[serde(skip)]
    data_update: Signal,
}

impl Default for BoxAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxAnnotation {
    /// Create an annotation with open bounds, canvas render mode, and the
    /// preset translucent yellow fill / gray line styles.
    pub fn new() -> Self {
        Self::with_render_mode(RenderMode::default())
    }

    pub fn with_render_mode(render_mode: RenderMode) -> Self {
        Self {
            bounds: Bounds::default(),
            units: BoundsUnits::default(),
            screen: false,
            x_range_name: DEFAULT_RANGE_NAME.to_string(),
            y_range_name: DEFAULT_RANGE_NAME.to_string(),
            render_mode,
            line: LineStyle::default(),
            fill: FillStyle::default(),
            visible: true,
            change: Signal::new(),
            data_update: Signal::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn units(&self) -> BoundsUnits {
        self.units
    }

    /// Whether the bounds are already screen coordinates.
    pub fn is_screen_space(&self) -> bool {
        self.screen
    }

    pub fn x_range_name(&self) -> &str {
        &self.x_range_name
    }

    pub fn y_range_name(&self) -> &str {
        &self.y_range_name
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn line(&self) -> &LineStyle {
        &self.line
    }

    pub fn fill(&self) -> &FillStyle {
        &self.fill
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Subscribe to ordinary attribute changes.
    pub fn connect_change<F>(&mut self, f: F)
    where
        F: Fn() + 'static,
    {
        self.change.connect(f);
    }

    /// Subscribe to silent geometry updates.
    pub fn connect_data_update<F>(&mut self, f: F)
    where
        F: Fn() + 'static,
    {
        self.data_update.connect(f);
    }

    // Ordinary mutation path: assign, then notify.

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.change.emit();
    }

    pub fn set_units(&mut self, units: BoundsUnits) {
        self.units = units;
        self.change.emit();
    }

    pub fn set_range_names(&mut self, x_range_name: &str, y_range_name: &str) {
        self.x_range_name = x_range_name.to_string();
        self.y_range_name = y_range_name.to_string();
        self.change.emit();
    }

    pub fn set_line(&mut self, line: LineStyle) {
        self.line = line;
        self.change.emit();
    }

    pub fn set_fill(&mut self, fill: FillStyle) {
        self.fill = fill;
        self.change.emit();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.change.emit();
    }

    /// Silent geometry update for interactive adjustment.
    ///
    /// Sets all four bounds and the screen-space override atomically without
    /// emitting `change`, then emits `data_update`. Views respond to both
    /// channels with the same backend-appropriate repaint.
    pub fn update(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.screen = true;
        self.data_update.emit();
    }
}
