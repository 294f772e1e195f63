
use crate::color::Rgba;
use crate::surface::{trace_path, Canvas2d, PathCommand};
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::{PI, TAU};

/// First vertex points straight up.
pub const DEFAULT_ROTATION: f64 = -PI / 2.0;

pub type Vertices = SmallVec<[DVec2; 8]>;

/// `sides` points evenly spaced around `center`, the first at `rotation`.
pub fn polygon_vertices(center: DVec2, radius: f64, sides: usize, rotation: f64) -> Vertices {
    (0..sides)
        .map(|i| {
            let a = rotation + TAU * i as f64 / sides as f64;
            center + radius * DVec2::new(a.cos(), a.sin())
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct PolygonStyle {
    pub stroke: Rgba,
    pub fill: Option<Rgba>,
    pub line_width: f64,
}

impl PolygonStyle {
    pub const fn outline(stroke: Rgba, line_width: f64) -> Self {
        Self {
            stroke,
            fill: None,
            line_width,
        }
    }
}

pub fn draw_polygon<C: Canvas2d>(
    canvas: &mut C,
    center: DVec2,
    radius: f64,
    sides: usize,
    rotation: f64,
    style: &PolygonStyle,
) {
    let verts = polygon_vertices(center, radius, sides, rotation);
    let Some((first, rest)) = verts.split_first() else {
        return;
    };
    canvas.begin_path();
    canvas.move_to(*first);
    for v in rest {
        canvas.line_to(*v);
    }
    canvas.close_path();
    if let Some(fill) = style.fill {
        canvas.set_fill(fill);
        canvas.fill();
    }
    canvas.set_stroke(style.stroke);
    canvas.set_line_width(style.line_width);
    canvas.stroke();
}

pub fn draw_dot<C: Canvas2d>(canvas: &mut C, center: DVec2, radius: f64, color: Rgba) {
    canvas.begin_path();
    canvas.circle(center, radius);
    canvas.set_fill(color);
    canvas.fill();
}

/// Heart silhouette around the origin: four cubic segments, tip at
/// `(0, 0.35 * size)`, notch at `(0, -0.35 * size)`. The right lobe mirrors
/// the left about the vertical axis.
pub fn heart_path(size: f64) -> [PathCommand; 6] {
    let p = |x: f64, y: f64| DVec2::new(x * size, y * size);
    [
        PathCommand::MoveTo(p(0.0, 0.35)),
        // left lobe
        PathCommand::CubicTo {
            c1: p(-0.05, 0.15),
            c2: p(-0.55, 0.1),
            to: p(-0.55, -0.2),
        },
        PathCommand::CubicTo {
            c1: p(-0.55, -0.55),
            c2: p(-0.15, -0.65),
            to: p(0.0, -0.35),
        },
        // right lobe
        PathCommand::CubicTo {
            c1: p(0.15, -0.65),
            c2: p(0.55, -0.55),
            to: p(0.55, -0.2),
        },
        PathCommand::CubicTo {
            c1: p(0.55, 0.1),
            c2: p(0.05, 0.15),
            to: p(0.0, 0.35),
        },
        PathCommand::Close,
    ]
}

pub fn trace_heart<C: Canvas2d>(canvas: &mut C, size: f64) {
    trace_path(canvas, &heart_path(size));
}
