//! Unit tests for geometry resolution and the dual-backend box renderer.
//!
//! Shared test doubles live here: a linear transform, a fixed frame, a
//! recording draw surface, and a mock styled element.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::frame::{AxisTransform, FrameEdges, PlotFrame};
use crate::render::surface::{DrawSurface, StyledElement};
use crate::visual::{FillStyle, LineStyle};


/// Linear 1-D transform `v * m + b`.
#[derive(Debug, Clone, Copy)]
pub struct Linear {
    pub m: f64,
    pub b: f64,
}

impl Linear {
    /// Identity transform.
    pub fn identity() -> Self {
        Self { m: 1.0, b: 0.0 }
    }

    /// The line through two (input, output) pairs.
    pub fn through(p0: (f64, f64), p1: (f64, f64)) -> Self {
        let m = (p1.1 - p0.1) / (p1.0 - p0.0);
        let b = p0.1 - m * p0.0;
        Self { m, b }
    }
}

impl AxisTransform for Linear {
    fn compute(&self, value: f64) -> f64 {
        value * self.m + self.b
    }
}

/// A frame with fixed edges and linear scales/views.
pub struct FixedFrame {
    pub edges: FrameEdges,
    pub x_scales: HashMap<String, Linear>,
    pub y_scales: HashMap<String, Linear>,
    pub x_view: Linear,
    pub y_view: Linear,
}

impl FixedFrame {
    pub fn new(edges: FrameEdges, x_scale: Linear, y_scale: Linear) -> Self {
        let mut x_scales = HashMap::new();
        x_scales.insert("default".to_string(), x_scale);
        let mut y_scales = HashMap::new();
        y_scales.insert("default".to_string(), y_scale);
        Self {
            edges,
            x_scales,
            y_scales,
            x_view: Linear::identity(),
            y_view: Linear::identity(),
        }
    }
}

impl PlotFrame for FixedFrame {
    fn edges(&self) -> FrameEdges {
        self.edges
    }

    fn x_scale(&self, range_name: &str) -> &dyn AxisTransform {
        self.x_scales
            .get(range_name)
            .unwrap_or(&self.x_scales["default"])
    }

    fn y_scale(&self, range_name: &str) -> &dyn AxisTransform {
        self.y_scales
            .get(range_name)
            .unwrap_or(&self.y_scales["default"])
    }

    fn x_view(&self) -> &dyn AxisTransform {
        &self.x_view
    }

    fn y_view(&self) -> &dyn AxisTransform {
        &self.y_view
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    BeginPath,
    Rect { x: f64, y: f64, w: f64, h: f64 },
    SetFill(FillStyle),
    Fill,
    SetLine(LineStyle),
    Stroke,
}

/// Records every call in order so tests can assert the full draw sequence.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::Rect {
            x,
            y,
            w: width,
            h: height,
        });
    }

    fn set_fill_style(&mut self, style: &FillStyle) {
        self.ops.push(SurfaceOp::SetFill(style.clone()));
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.ops.push(SurfaceOp::SetLine(style.clone()));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }
}

/// Observable state of a mock styled element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub position: Option<(f64, f64)>,
    pub size: Option<(f64, f64)>,
    pub border: Option<(f32, String, String)>,
    pub background: Option<(String, f32)>,
    pub visible: Option<bool>,
    pub style_writes: usize,
}

/// Mock element sharing its state with the test through an `Rc`.
pub struct MockElement {
    pub state: Rc<RefCell<ElementState>>,
}

impl MockElement {
    /// Returns the element and a handle onto its recorded state.
    pub fn new() -> (Self, Rc<RefCell<ElementState>>) {
        let state = Rc::new(RefCell::new(ElementState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl StyledElement for MockElement {
    fn set_position(&mut self, left: f64, top: f64) {
        let mut state = self.state.borrow_mut();
        state.position = Some((left, top));
        state.style_writes += 1;
    }

    fn set_size(&mut self, width: f64, height: f64) {
        let mut state = self.state.borrow_mut();
        state.size = Some((width, height));
        state.style_writes += 1;
    }

    fn set_border(&mut self, width: f32, color: &str, style: &str) {
        let mut state = self.state.borrow_mut();
        state.border = Some((width, color.to_string(), style.to_string()));
        state.style_writes += 1;
    }

    fn set_background(&mut self, color: &str, opacity: f32) {
        let mut state = self.state.borrow_mut();
        state.background = Some((color.to_string(), opacity));
        state.style_writes += 1;
    }

    fn show(&mut self) {
        self.state.borrow_mut().visible = Some(true);
    }

    fn hide(&mut self) {
        self.state.borrow_mut().visible = Some(false);
    }
}
