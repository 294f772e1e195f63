// Stroked flame: independent sine lines per edge plus fBm turbulence.

use crate::color::Rgba;
use crate::constants::{WAVE_COUNT, WAVE_DEPTH_FRACTION, WAVE_STEP_PX};
use crate::noise::fbm;
use crate::surface::Canvas2d;
use crate::viewport::{Edge, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub index: usize,
    pub freq: f64,
    pub speed: f64,
    pub base_depth: f64,
    pub amp: f64,
    pub color: Rgba,
    pub line_width: f64,
}

impl Wave {
    pub fn new(index: usize, wave_count: usize, max_depth: f64) -> Self {
        let wi = index as f64;
        let n = wave_count.max(1) as f64;
        let blue = (140.0 + wi * 15.0).min(255.0) as u8;
        Self {
            index,
            freq: 0.008 + wi * 0.006,
            speed: 1.2 + wi * 0.7,
            base_depth: (wi + 1.0) / n * max_depth * 0.6,
            amp: 4.0 + wi * 3.0,
            // inner waves brighter
            color: Rgba::new(70, 78, blue, 0.06 + (wi / n) * 0.12),
            line_width: 0.6 + (n - wi) * 0.15,
        }
    }

    pub fn depth_at(&self, pos: f64, edge: Edge, time: f64) -> f64 {
        let wi = self.index as f64;
        let wave = (pos * self.freq + time * self.speed + wi * 2.1).sin()
            * self.amp
            * (0.7 + 0.3 * (pos * self.freq * 0.3 + time * 0.5).sin());
        let turb = (fbm(pos * 0.01 + time * 0.4 + wi, edge.index() as f64 * 10.0, 3) - 0.5) * self.amp * 1.5;
        self.base_depth + wave + turb
    }
}

pub fn render<C: Canvas2d>(canvas: &mut C, time: f64, vp: &Viewport) {
    if vp.is_empty() {
        return;
    }
    let max_depth = vp.min_dim() * WAVE_DEPTH_FRACTION;
    for edge in Edge::ALL {
        let length = edge.length(vp);
        let segments = (length / WAVE_STEP_PX).ceil().max(1.0) as usize;
        for wi in 0..WAVE_COUNT {
            let wave = Wave::new(wi, WAVE_COUNT, max_depth);
            canvas.begin_path();
            for i in 0..=segments {
                let f = i as f64 / segments as f64;
                let p = edge.displaced(f, wave.depth_at(f * length, edge, time), vp);
                if i == 0 {
                    canvas.move_to(p);
                } else {
                    canvas.line_to(p);
                }
            }
            canvas.set_stroke(wave.color);
            canvas.set_line_width(wave.line_width);
            canvas.stroke();
        }
    }
}
