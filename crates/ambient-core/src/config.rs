//! Per-instance configuration.
//!
//! Every field has a default taken from `constants`, so a host only passes
//! the keys it wants to change, e.g. `{"variant":"waveform"}`.

use crate::constants::*;
use crate::error::ConfigError;
use crate::flame::GlowComposite;
use serde::{Deserialize, Serialize};

/// Which front-end of the renderer family an instance shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Filled fire layers, tongues, embers, filled heart, neon constellation.
    #[default]
    Filled,
    /// Stroked waveform fire, outlined heart, subtle constellation.
    Waveform,
    /// Neon constellation only.
    Pentagon,
    /// Grid of voting cells from a live summary.
    Live,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Waveform => "waveform",
            Variant::Pentagon => "pentagon",
            Variant::Live => "live",
        }
    }

    /// Whether this variant needs the off-screen glow surface.
    pub fn uses_glow(&self) -> bool {
        matches!(self, Variant::Filled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbientConfig {
    pub variant: Variant,
    /// Maximum live embers.
    pub ember_cap: usize,
    /// Chance per frame of spawning one ember.
    pub spawn_probability: f64,
    /// Seconds per heartbeat.
    pub beat_period: f64,
    /// Gaussian blur of the glow pass, in CSS pixels.
    pub glow_blur_px: f64,
    /// Global alpha of the sharp pass over the glow.
    pub sharp_alpha: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Filled,
            ember_cap: EMBER_CAP,
            spawn_probability: EMBER_SPAWN_PROBABILITY,
            beat_period: BEAT_PERIOD_SEC,
            glow_blur_px: GLOW_BLUR_PX,
            sharp_alpha: GLOW_SHARP_ALPHA,
        }
    }
}

impl AmbientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });
        if self.ember_cap == 0 {
            return invalid("emberCap", "must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return invalid("spawnProbability", "must be within 0..=1");
        }
        if !(self.beat_period.is_finite() && self.beat_period > 0.0) {
            return invalid("beatPeriod", "must be a positive number of seconds");
        }
        if !(self.glow_blur_px.is_finite() && self.glow_blur_px >= 0.0) {
            return invalid("glowBlurPx", "must be zero or positive");
        }
        if !(0.0..=1.0).contains(&self.sharp_alpha) {
            return invalid("sharpAlpha", "must be within 0..=1");
        }
        Ok(())
    }

    pub fn glow(&self) -> GlowComposite {
        GlowComposite {
            blur_px: self.glow_blur_px,
            sharp_alpha: self.sharp_alpha,
        }
    }
}
