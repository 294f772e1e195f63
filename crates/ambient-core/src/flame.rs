//! Layered, edge-hugging flame field.
//!
//! Each of the four edges gets `FIRE_LAYER_COUNT` translucent bands whose
//! inward reach follows fBm noise scrolled over time. Layer 0 is the deepest
//! and dimmest, the last layer hugs the edge and is the brightest. The bands
//! are drawn to an off-screen glow surface and composited twice (blurred,
//! then sharp). Tongue strokes go on top.

use crate::color::{Rgba, FIRE_DEEP, FIRE_EDGE, TONGUE};
use crate::constants::*;
use crate::noise::{fbm, value_noise};
use crate::surface::Canvas2d;
use crate::viewport::{Edge, Viewport};
use glam::DVec2;
use std::f64::consts::PI;

/// How the glow surface lands on the visible one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowComposite {
    pub blur_px: f64,
    pub sharp_alpha: f64,
}

impl Default for GlowComposite {
    fn default() -> Self {
        Self {
            blur_px: GLOW_BLUR_PX,
            sharp_alpha: GLOW_SHARP_ALPHA,
        }
    }
}

/// Constants for one depth layer, derived from its index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlameLayer {
    pub index: usize,
    pub max_depth: f64,
    pub scroll_speed: f64,
    pub color: Rgba,
}

impl FlameLayer {
    pub fn new(index: usize, layer_count: usize, max_fire_depth: f64) -> Self {
        // 0 = deep, 1 = edge
        let lf = if layer_count > 1 {
            index as f64 / (layer_count - 1) as f64
        } else {
            1.0
        };
        let alpha = 0.029 + lf * 0.158;
        Self {
            index,
            max_depth: max_fire_depth * (1.0 - lf * 0.5),
            scroll_speed: 0.4 + index as f64 * 0.2,
            color: FIRE_DEEP.lerp(FIRE_EDGE, lf).with_alpha(alpha),
        }
    }

    /// Inward depth of the band boundary at `along` (raw edge coordinate)
    /// and edge fraction `f`.
    pub fn depth(&self, along: f64, f: f64, time: f64) -> f64 {
        let layer = self.index as f64;
        let nx = along * FIRE_SPATIAL_FREQ + layer * FIRE_LAYER_X_OFFSET;
        let ny = time * self.scroll_speed + layer * FIRE_LAYER_Y_OFFSET;
        let flame = fbm(nx, ny, FBM_DEFAULT_OCTAVES);

        let flicker = (along * 0.04 + time * 6.0 + layer * 2.1).sin() * FIRE_FLICKER_AMOUNT * (0.5 + flame);
        let envelope = edge_envelope(f);

        self.max_depth * (0.25 + flame * 0.75 + flicker) * envelope
    }

    /// Displaced boundary samples along `edge`, `FIRE_STEP_PX` apart.
    pub fn boundary(&self, edge: Edge, time: f64, vp: &Viewport) -> Vec<DVec2> {
        let len = edge.length(vp);
        if vp.is_empty() || len <= 0.0 {
            return Vec::new();
        }
        let segs = (len / FIRE_STEP_PX).ceil().max(1.0) as usize;
        (0..=segs)
            .map(|i| {
                let f = i as f64 / segs as f64;
                let base = edge.boundary_point(f, vp);
                let depth = self.depth(edge.along(base), f, time);
                edge.displaced(f, depth, vp)
            })
            .collect()
    }
}

/// Tapers the flame toward the corners: 0.7 at the ends, 1.0 mid-edge.
#[inline]
pub fn edge_envelope(f: f64) -> f64 {
    (f * PI).sin() * (1.0 - FIRE_ENVELOPE_FLOOR) + FIRE_ENVELOPE_FLOOR
}

pub fn max_fire_depth(vp: &Viewport) -> f64 {
    vp.min_dim() * FIRE_DEPTH_FRACTION
}

/// Fill every layer band on every edge.
pub fn draw_layers<C: Canvas2d>(canvas: &mut C, time: f64, vp: &Viewport) {
    if vp.is_empty() {
        return;
    }
    let max_depth = max_fire_depth(vp);
    for layer in 0..FIRE_LAYER_COUNT {
        let params = FlameLayer::new(layer, FIRE_LAYER_COUNT, max_depth);
        for edge in Edge::ALL {
            let points = params.boundary(edge, time, vp);
            if points.is_empty() {
                continue;
            }
            let start = edge.boundary_point(0.0, vp);
            let end = edge.boundary_point(1.0, vp);
            canvas.begin_path();
            canvas.move_to(start);
            for p in points {
                canvas.line_to(p);
            }
            canvas.line_to(end);
            canvas.line_to(start);
            canvas.close_path();
            canvas.set_fill(params.color);
            canvas.fill();
        }
    }
}

/// Blurred glow first, then the same layer unblurred at reduced alpha so the
/// crisp edges never get blurred.
pub fn composite_glow<C: Canvas2d>(target: &mut C, glow: &C, vp: &Viewport, settings: GlowComposite) {
    if vp.is_empty() {
        return;
    }
    target.draw_layer(glow, vp.width, vp.height, Some(settings.blur_px), 1.0);
    target.draw_layer(glow, vp.width, vp.height, None, settings.sharp_alpha);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tongue {
    pub index: usize,
    pub depth: f64,
    pub speed: f64,
    pub freq: f64,
    pub color: Rgba,
    pub line_width: f64,
}

impl Tongue {
    pub fn new(index: usize, max_fire_depth: f64) -> Self {
        let ti = index as f64;
        Self {
            index,
            depth: max_fire_depth * (0.6 + ti * 0.15),
            speed: 1.2 + ti * 0.6,
            freq: 0.02 + ti * 0.01,
            color: TONGUE.with_alpha(0.198 + ti * 0.072),
            line_width: 0.8 + (2.0 - ti) * 0.3,
        }
    }

    pub fn depth_at(&self, pos: f64, edge: Edge, time: f64) -> f64 {
        let ti = self.index as f64;
        let row = edge.index() as f64 * 10.0;
        let (freq, speed) = (self.freq, self.speed);

        let n1 = value_noise(pos * freq + time * speed + ti * 5.0, row + time * 0.7);
        let n2 = value_noise(pos * freq * 2.2 + time * speed * 1.4 + ti * 3.0, row + 5.0);
        let n3 = value_noise(pos * freq * 4.5 - time * speed * 0.8 + ti * 8.0, row + 10.0);
        let flame = n1 * 0.5 + n2 * 0.3 + n3 * 0.2;

        let flicker = 1.0 + (pos * 0.03 + time * 4.0 + ti * 2.5).sin() * 0.3;
        self.depth * flame * flicker
    }
}

/// Sharp flame licks stroked over the composited glow.
pub fn draw_tongues<C: Canvas2d>(canvas: &mut C, time: f64, vp: &Viewport) {
    if vp.is_empty() {
        return;
    }
    let max_depth = max_fire_depth(vp);
    for edge in Edge::ALL {
        let length = edge.length(vp);
        let segments = (length / TONGUE_STEP_PX).ceil().max(1.0) as usize;
        for ti in 0..TONGUE_COUNT {
            let tongue = Tongue::new(ti, max_depth);
            canvas.begin_path();
            for i in 0..=segments {
                let f = i as f64 / segments as f64;
                let depth = tongue.depth_at(f * length, edge, time);
                let p = edge.displaced(f, depth, vp);
                if i == 0 {
                    canvas.move_to(p);
                } else {
                    canvas.line_to(p);
                }
            }
            canvas.set_stroke(tongue.color);
            canvas.set_line_width(tongue.line_width);
            canvas.stroke();
        }
    }
}

/// Full filled-fire pass. Without a glow surface the bands are drawn
/// straight onto `target`.
pub fn render<C: Canvas2d>(target: &mut C, glow: Option<&mut C>, time: f64, vp: &Viewport, settings: GlowComposite) {
    if vp.is_empty() {
        return;
    }
    match glow {
        Some(glow) => {
            draw_layers(glow, time, vp);
            composite_glow(target, glow, vp, settings);
        }
        None => draw_layers(target, time, vp),
    }
    draw_tongues(target, time, vp);
}
