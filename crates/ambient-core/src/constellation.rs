//! Recursive pentagon constellation.
//!
//! A root pentagon spins slowly at the viewport centre. Each of its five
//! vertices seeds a smaller child pentagon, and each child does the same
//! once more, giving root, mid and leaf levels. Leaf vertices are drawn as
//! dots whose lit state is a cheap oscillation of time and position.

use crate::color::{Rgba, AGITATED, INDIGO, NEON, NEON_LIT, NEON_UNLIT, SLATE};
use crate::constants::*;
use crate::geometry::{draw_dot, draw_polygon, polygon_vertices, PolygonStyle, Vertices};
use crate::noise::fbm;
use crate::surface::Canvas2d;
use crate::viewport::Viewport;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstellationNode {
    pub center: DVec2,
    pub radius: f64,
    pub rotation: f64,
}

impl ConstellationNode {
    pub fn vertices(&self) -> Vertices {
        polygon_vertices(self.center, self.radius, CONSTELLATION_SIDES, self.rotation)
    }

    /// Child seeded at `vertex`. `depth` is the child's level (1 = mid,
    /// 2 = leaf); it selects the radius ratio.
    pub fn child(&self, vertex: DVec2, depth: usize) -> Self {
        let ratio = if depth <= 1 {
            MID_RADIUS_RATIO
        } else {
            LEAF_RADIUS_RATIO
        };
        Self {
            center: vertex + (self.center - vertex) * CHILD_SHRINK,
            radius: self.radius * ratio,
            rotation: self.rotation + CHILD_ROTATION_STEP,
        }
    }
}

/// Visual treatment of the constellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstellationStyle {
    /// Bright teal strokes and large dots.
    Neon,
    /// Faint indigo strokes; leaf dots near the viewport edge get agitated.
    Subtle,
}

impl ConstellationStyle {
    pub fn spin_rate(self) -> f64 {
        match self {
            ConstellationStyle::Neon => 0.1,
            ConstellationStyle::Subtle => 0.08,
        }
    }

    pub fn radius_fraction(self) -> f64 {
        match self {
            ConstellationStyle::Neon => 0.3,
            ConstellationStyle::Subtle => 0.38,
        }
    }

    /// Outline style per level; deeper levels are brighter.
    pub fn level_style(self, depth: usize) -> PolygonStyle {
        let d = depth.min(CONSTELLATION_DEPTH - 1);
        match self {
            ConstellationStyle::Neon => {
                PolygonStyle::outline(NEON.with_alpha([0.10, 0.16, 0.20][d]), [1.4, 1.2, 1.0][d])
            }
            ConstellationStyle::Subtle => {
                PolygonStyle::outline(INDIGO.with_alpha([0.04, 0.07, 0.09][d]), [0.5, 0.4, 0.3][d])
            }
        }
    }
}

pub fn root_node(style: ConstellationStyle, time: f64, vp: &Viewport) -> ConstellationNode {
    ConstellationNode {
        center: vp.center(),
        radius: vp.min_dim() * style.radius_fraction(),
        rotation: time * style.spin_rate() - FRAC_PI_2,
    }
}

/// Leaf dot lit state for mid index `i`, leaf index `j` at x-coordinate `x`.
#[inline]
pub fn leaf_lit(time: f64, i: usize, j: usize, x: f64) -> bool {
    (time + i as f64 * 1.3 + j as f64 * 0.7 + x * 0.01).sin() > 0.0
}

/// 0 away from the edges, rising to 1 at an edge; starts within
/// `EDGE_AGITATION_THRESHOLD` of the viewport size.
pub fn edge_agitation(p: DVec2, vp: &Viewport) -> f64 {
    if vp.is_empty() {
        return 0.0;
    }
    (1.0 - vp.normalized_edge_distance(p) / EDGE_AGITATION_THRESHOLD).clamp(0.0, 1.0)
}

/// Walk the tree depth-first, calling `visit(node, depth, path)` for every
/// node. `path` holds the vertex index taken at each level below the root.
pub fn walk(root: ConstellationNode, mut visit: impl FnMut(&ConstellationNode, usize, &[usize])) {
    fn go(
        node: &ConstellationNode,
        depth: usize,
        path: &mut Vec<usize>,
        visit: &mut dyn FnMut(&ConstellationNode, usize, &[usize]),
    ) {
        visit(node, depth, path);
        if depth + 1 >= CONSTELLATION_DEPTH {
            return;
        }
        for (k, v) in node.vertices().into_iter().enumerate() {
            path.push(k);
            go(&node.child(v, depth + 1), depth + 1, path, visit);
            path.pop();
        }
    }
    let mut path = Vec::with_capacity(CONSTELLATION_DEPTH);
    go(&root, 0, &mut path, &mut visit);
}

pub fn render<C: Canvas2d>(canvas: &mut C, style: ConstellationStyle, time: f64, vp: &Viewport) {
    if vp.is_empty() {
        return;
    }
    let root = root_node(style, time, vp);
    walk(root, |node, depth, path| {
        draw_polygon(
            canvas,
            node.center,
            node.radius,
            CONSTELLATION_SIDES,
            node.rotation,
            &style.level_style(depth),
        );
        if depth + 1 == CONSTELLATION_DEPTH {
            let (i, j) = (path[0], path[1]);
            for dot in node.vertices() {
                draw_leaf(canvas, style, dot, i, j, time, vp);
            }
        }
    });
}

fn draw_leaf<C: Canvas2d>(
    canvas: &mut C,
    style: ConstellationStyle,
    dot: DVec2,
    i: usize,
    j: usize,
    time: f64,
    vp: &Viewport,
) {
    let lit = leaf_lit(time, i, j, dot.x);
    match style {
        ConstellationStyle::Neon => {
            draw_dot(canvas, dot, 2.5, if lit { NEON_LIT } else { NEON_UNLIT });
        }
        ConstellationStyle::Subtle => {
            let near = edge_agitation(dot, vp);
            if near > 0.1 {
                let jitter = DVec2::new(
                    fbm(dot.x * 0.08 + time * 4.0, dot.y * 0.08, 2) - 0.5,
                    fbm(dot.x * 0.08, dot.y * 0.08 + time * 4.0, 2) - 0.5,
                ) * 10.0
                    * near;
                let size = 1.2 + near * 1.5 * (0.7 + 0.3 * (time * 6.0 + dot.x * 0.1).sin());
                draw_dot(canvas, dot + jitter, size, AGITATED.with_alpha(0.2 + near * 0.4));
            } else {
                let color: Rgba = if lit {
                    INDIGO.with_alpha(0.2)
                } else {
                    SLATE.with_alpha(0.3)
                };
                draw_dot(canvas, dot, 1.2, color);
            }
        }
    }
}
