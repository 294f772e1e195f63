//! One engine instance: the only mutable state behind an animated surface.
//!
//! `AmbientScene` owns the ember field, its RNG and the latest live summary.
//! Everything else is recomputed from `(time, viewport)` every frame.

use crate::config::{AmbientConfig, Variant};
use crate::constellation::{self, ConstellationStyle};
use crate::embers::EmberField;
use crate::flame;
use crate::heartbeat::{self, HeartStyle};
use crate::live::{self, ConstellationSummary};
use crate::surface::Canvas2d;
use crate::viewport::Viewport;
use crate::waveform;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Inputs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Seconds since the loop started.
    pub time: f64,
    pub viewport: Viewport,
}

pub struct AmbientScene {
    config: AmbientConfig,
    embers: EmberField,
    rng: StdRng,
    summary: ConstellationSummary,
}

impl AmbientScene {
    pub fn new(config: AmbientConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(config: AmbientConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: AmbientConfig, rng: StdRng) -> Self {
        let embers = EmberField::new(config.ember_cap, config.spawn_probability);
        Self {
            config,
            embers,
            rng,
            summary: ConstellationSummary::default(),
        }
    }

    pub fn config(&self) -> &AmbientConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn embers(&self) -> &EmberField {
        &self.embers
    }

    pub fn summary(&self) -> &ConstellationSummary {
        &self.summary
    }

    pub fn set_summary(&mut self, summary: ConstellationSummary) {
        log::debug!(
            "[live] summary cells={} tier={} phase={:?}",
            summary.cells.len(),
            summary.current_tier,
            summary.phase
        );
        self.summary = summary;
    }

    /// Clear the owned surfaces and draw one frame: flame, embers, heart,
    /// constellation, in that order. An empty viewport draws nothing and
    /// leaves the ember state untouched.
    pub fn render<C: Canvas2d>(&mut self, frame: FrameInput, main: &mut C, mut glow: Option<&mut C>) {
        let FrameInput { time, viewport: vp } = frame;
        main.clear(vp.width.max(0.0), vp.height.max(0.0));
        if let Some(g) = glow.as_deref_mut() {
            g.clear(vp.width.max(0.0), vp.height.max(0.0));
        }
        if vp.is_empty() || !time.is_finite() {
            return;
        }

        match self.config.variant {
            Variant::Filled => {
                flame::render(main, glow, time, &vp, self.config.glow());
                self.embers.step(&mut self.rng, time, &vp);
                self.embers.render(main);
                heartbeat::render(main, HeartStyle::Filled, time, self.config.beat_period, &vp);
                constellation::render(main, ConstellationStyle::Neon, time, &vp);
            }
            Variant::Waveform => {
                waveform::render(main, time, &vp);
                heartbeat::render(main, HeartStyle::Outlined, time, self.config.beat_period, &vp);
                constellation::render(main, ConstellationStyle::Subtle, time, &vp);
            }
            Variant::Pentagon => {
                constellation::render(main, ConstellationStyle::Neon, time, &vp);
            }
            Variant::Live => {
                live::render(main, &self.summary, time, &vp);
            }
        }
    }
}
