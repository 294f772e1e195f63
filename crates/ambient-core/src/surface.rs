//! Drawing-surface abstraction.
//!
//! Renderers only talk to [`Canvas2d`], the subset of the HTML 2D-canvas API
//! they need. The web front-end implements it over
//! `CanvasRenderingContext2d`. With the `testing` feature, `Recorder`
//! implements it in memory so the renderers can be exercised on the host.

use crate::color::Rgba;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Round,
}

/// One segment of a replayable path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    CubicTo { c1: DVec2, c2: DVec2, to: DVec2 },
    Close,
}

pub trait Canvas2d {
    /// Erase the `width` x `height` area (in CSS pixels) from the origin.
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: DVec2);
    fn scale(&mut self, factor: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, to: DVec2);
    /// Full circle sub-path.
    fn circle(&mut self, center: DVec2, radius: f64);
    fn close_path(&mut self);

    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
    /// `blur == 0.0` disables the shadow.
    fn set_shadow(&mut self, color: Rgba, blur: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Composite another surface of the same kind onto this one, optionally
    /// through a Gaussian blur, at the given global alpha.
    fn draw_layer(&mut self, layer: &Self, width: f64, height: f64, blur_px: Option<f64>, alpha: f64)
    where
        Self: Sized;
}

pub fn trace_path<C: Canvas2d>(canvas: &mut C, commands: &[PathCommand]) {
    canvas.begin_path();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => canvas.move_to(p),
            PathCommand::CubicTo { c1, c2, to } => canvas.bezier_curve_to(c1, c2, to),
            PathCommand::Close => canvas.close_path(),
        }
    }
}

// Test support below: host tests enable it through the `testing` feature.

/// A recorded drawing operation.
#[cfg(any(test, feature = "testing"))]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    Translate(DVec2),
    Scale(f64),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    BezierTo { c1: DVec2, c2: DVec2, to: DVec2 },
    Circle { center: DVec2, radius: f64 },
    ClosePath,
    SetFill(Rgba),
    SetStroke(Rgba),
    SetLineWidth(f64),
    SetLineJoin(LineJoin),
    SetShadow { color: Rgba, blur: f64 },
    Fill,
    Stroke,
    DrawLayer { layer_id: u32, blur_px: Option<f64>, alpha: f64 },
}

/// In-memory [`Canvas2d`] that records every call.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct Recorder {
    pub id: u32,
    pub ops: Vec<DrawOp>,
}

#[cfg(any(test, feature = "testing"))]
impl Recorder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ops: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn fills(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Fill))
    }

    pub fn strokes(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Stroke))
    }

    /// Number of geometry operations (anything that adds to a path).
    pub fn path_ops(&self) -> usize {
        self.count(|op| {
            matches!(
                op,
                DrawOp::MoveTo(_)
                    | DrawOp::LineTo(_)
                    | DrawOp::BezierTo { .. }
                    | DrawOp::Circle { .. }
            )
        })
    }

    /// Every point passed to the recorder, in call order.
    pub fn points(&self) -> Vec<DVec2> {
        let mut out = Vec::new();
        for op in &self.ops {
            match *op {
                DrawOp::MoveTo(p) | DrawOp::LineTo(p) | DrawOp::Translate(p) => out.push(p),
                DrawOp::BezierTo { c1, c2, to } => out.extend([c1, c2, to]),
                DrawOp::Circle { center, .. } => out.push(center),
                _ => {}
            }
        }
        out
    }

    pub fn circles(&self) -> Vec<(DVec2, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Circle { center, radius } => Some((center, radius)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

#[cfg(any(test, feature = "testing"))]
impl Canvas2d for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }
    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }
    fn translate(&mut self, offset: DVec2) {
        self.ops.push(DrawOp::Translate(offset));
    }
    fn scale(&mut self, factor: f64) {
        self.ops.push(DrawOp::Scale(factor));
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.ops.push(DrawOp::MoveTo(p));
    }
    fn line_to(&mut self, p: DVec2) {
        self.ops.push(DrawOp::LineTo(p));
    }
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, to: DVec2) {
        self.ops.push(DrawOp::BezierTo { c1, c2, to });
    }
    fn circle(&mut self, center: DVec2, radius: f64) {
        self.ops.push(DrawOp::Circle { center, radius });
    }
    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
    fn set_fill(&mut self, color: Rgba) {
        self.ops.push(DrawOp::SetFill(color));
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.ops.push(DrawOp::SetStroke(color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }
    fn set_line_join(&mut self, join: LineJoin) {
        self.ops.push(DrawOp::SetLineJoin(join));
    }
    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ops.push(DrawOp::SetShadow { color, blur });
    }
    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
    fn draw_layer(&mut self, layer: &Self, _width: f64, _height: f64, blur_px: Option<f64>, alpha: f64) {
        self.ops.push(DrawOp::DrawLayer {
            layer_id: layer.id,
            blur_px,
            alpha,
        });
    }
}
