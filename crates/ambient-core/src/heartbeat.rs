
use crate::color::WHITE;
use crate::constants::*;
use crate::geometry::trace_heart;
use crate::surface::{Canvas2d, LineJoin};
use crate::viewport::Viewport;

/// Biphasic pulse intensity for `time` seconds with a beat every `period`.
///
/// Sharp attack to 1.0, release to 0.4, a dicrotic bump back to 0.7, a final
/// release to 0, then rest. Continuous at every phase boundary. A
/// non-positive or non-finite period is silent.
pub fn thump(time: f64, period: f64) -> f64 {
    if !(period.is_finite() && period > 0.0) || !time.is_finite() {
        return 0.0;
    }
    let phase = time.rem_euclid(period) / period;
    if phase < BEAT_ATTACK_END {
        phase / BEAT_ATTACK_END
    } else if phase < BEAT_RELEASE_END {
        let t = (phase - BEAT_ATTACK_END) / (BEAT_RELEASE_END - BEAT_ATTACK_END);
        1.0 - t * (1.0 - BEAT_RELEASE_LEVEL)
    } else if phase < BEAT_NOTCH_END {
        let t = (phase - BEAT_RELEASE_END) / (BEAT_NOTCH_END - BEAT_RELEASE_END);
        BEAT_RELEASE_LEVEL + t * (BEAT_NOTCH_LEVEL - BEAT_RELEASE_LEVEL)
    } else if phase < BEAT_REST_START {
        let t = (phase - BEAT_NOTCH_END) / (BEAT_REST_START - BEAT_NOTCH_END);
        BEAT_NOTCH_LEVEL * (1.0 - t)
    } else {
        0.0
    }
}

#[inline]
pub fn heart_scale(thump: f64, gain: f64) -> f64 {
    1.0 + thump * gain
}

/// How the heart is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartStyle {
    /// Solid white fill with a pulsing shadow glow.
    Filled,
    /// Bold outline with a faint inner fill.
    Outlined,
}

impl HeartStyle {
    /// Heart size as a fraction of the smaller viewport dimension.
    pub fn size_fraction(self) -> f64 {
        match self {
            HeartStyle::Filled => 0.12,
            HeartStyle::Outlined => 0.18,
        }
    }

    pub fn scale_gain(self) -> f64 {
        match self {
            HeartStyle::Filled => 0.1,
            HeartStyle::Outlined => 0.08,
        }
    }

    fn ring_spread(self) -> f64 {
        match self {
            HeartStyle::Filled => 0.35,
            HeartStyle::Outlined => 0.4,
        }
    }

    fn ring_alpha(self) -> f64 {
        match self {
            HeartStyle::Filled => 0.05,
            HeartStyle::Outlined => 0.06,
        }
    }
}

/// Radius of the expanding ring; grows as the pulse falls off its peak.
/// `None` while the pulse is too weak to show one.
pub fn ring_radius(style: HeartStyle, heart_size: f64, thump: f64) -> Option<f64> {
    (thump > RING_THUMP_THRESHOLD).then(|| heart_size * 0.5 + (1.0 - thump) * heart_size * style.ring_spread())
}

/// Heart glyph plus its ring, centred in the viewport.
pub fn render<C: Canvas2d>(canvas: &mut C, style: HeartStyle, time: f64, period: f64, vp: &Viewport) {
    if vp.is_empty() {
        return;
    }
    let pulse = thump(time, period);
    let size = vp.min_dim() * style.size_fraction();
    let center = vp.center();

    canvas.save();
    canvas.translate(center);
    canvas.scale(heart_scale(pulse, style.scale_gain()));
    match style {
        HeartStyle::Filled => {
            trace_heart(canvas, size);
            canvas.set_fill(WHITE.with_alpha(0.65 + pulse * 0.35));
            canvas.fill();
            canvas.set_shadow(WHITE.with_alpha(0.12 + pulse * 0.25), 18.0 + pulse * 14.0);
            canvas.fill();
            canvas.set_shadow(WHITE.with_alpha(0.0), 0.0);
        }
        HeartStyle::Outlined => {
            trace_heart(canvas, size);
            canvas.set_stroke(WHITE.with_alpha(0.55 + pulse * 0.35));
            canvas.set_line_width(2.5 + pulse);
            canvas.set_line_join(LineJoin::Round);
            canvas.stroke();

            trace_heart(canvas, size);
            canvas.set_fill(WHITE.with_alpha(0.03 + pulse * 0.04));
            canvas.fill();
        }
    }
    canvas.restore();

    if let Some(r) = ring_radius(style, size, pulse) {
        canvas.begin_path();
        canvas.circle(center, r);
        canvas.set_stroke(WHITE.with_alpha(pulse * style.ring_alpha()));
        canvas.set_line_width(1.0);
        canvas.stroke();
    }
}
