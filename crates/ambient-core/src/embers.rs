//! Short-lived glowing particles shed by the flame edges.
//!
//! Ages are counted in frames. Each [`EmberField::step`] first advances and
//! culls the live embers, then runs the spawn gate, so an ember spawned on
//! frame 0 with `max_age = M` is drawn on frames `0..M`.

use crate::color::EMBER;
use crate::constants::*;
use crate::geometry::draw_dot;
use crate::noise::fbm;
use crate::surface::Canvas2d;
use crate::viewport::{Edge, Viewport};
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Ember {
    pub position: DVec2,
    pub velocity: DVec2,
    pub age: f64,
    pub max_age: f64,
    pub size: f64,
    pub brightness: f64,
}

impl Ember {
    /// Normalised age in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.max_age > 0.0 {
            (self.age / self.max_age).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.max_age
    }

    pub fn alpha(&self) -> f64 {
        life_envelope(self.progress()) * self.brightness * 0.5
    }

    pub fn radius(&self) -> f64 {
        self.size * (1.0 - self.progress() * EMBER_SHRINK)
    }
}

/// Attack/decay envelope: linear ramp over the first 15% of life, then a
/// squared fall to zero.
pub fn life_envelope(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < EMBER_ATTACK_FRACTION {
        p / EMBER_ATTACK_FRACTION
    } else {
        (1.0 - (p - EMBER_ATTACK_FRACTION) / (1.0 - EMBER_ATTACK_FRACTION)).powi(2)
    }
}

/// A fresh ember at a random point on a random edge, offset inward by a
/// noise-sampled base depth and drifting into the viewport.
pub fn spawn_ember<R: Rng>(rng: &mut R, time: f64, vp: &Viewport) -> Ember {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let f: f64 = rng.gen();
    let start = edge.boundary_point(f, vp);

    let bn = fbm(start.x * 0.015 + time * 0.3, start.y * 0.015 + time * 0.2, 5);
    let base_depth = (0.04 + bn * 0.06) * vp.min_dim();

    let speed = rng.gen_range(0.3..0.8);
    let drift = (rng.gen::<f64>() - 0.5) * 0.4;

    Ember {
        position: edge.displaced(f, base_depth, vp),
        velocity: edge.inward() * speed + edge.tangent() * drift,
        age: 0.0,
        max_age: rng.gen_range(EMBER_MIN_AGE..EMBER_MAX_AGE),
        size: rng.gen_range(EMBER_MIN_SIZE..EMBER_MAX_SIZE),
        brightness: rng.gen_range(0.5..1.0),
    }
}

#[derive(Clone, Debug)]
pub struct EmberField {
    embers: Vec<Ember>,
    cap: usize,
    spawn_probability: f64,
}

impl Default for EmberField {
    fn default() -> Self {
        Self::new(EMBER_CAP, EMBER_SPAWN_PROBABILITY)
    }
}

impl EmberField {
    pub fn new(cap: usize, spawn_probability: f64) -> Self {
        Self {
            embers: Vec::with_capacity(cap),
            cap,
            spawn_probability: spawn_probability.clamp(0.0, 1.0),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.embers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ember> {
        self.embers.iter()
    }

    /// Adds `ember` unless the field is full. The cap is checked before the
    /// push, so the live count can never exceed it.
    pub fn try_spawn(&mut self, ember: Ember) -> bool {
        if self.embers.len() >= self.cap {
            return false;
        }
        self.embers.push(ember);
        true
    }

    /// Integrate, age and cull every live ember. Survivors keep their order.
    pub fn advance(&mut self, time: f64) {
        self.embers.retain_mut(|em| {
            let tb = fbm(em.position.x * 0.05 + time * 2.0, em.position.y * 0.05 + time * 1.5, 2);
            let turbulence = (tb - 0.5) * EMBER_TURBULENCE;
            em.position += em.velocity + DVec2::splat(turbulence);
            em.age += 1.0;
            !em.is_expired()
        });
    }

    /// The per-frame spawn gate. Returns true when an ember was added.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R, time: f64, vp: &Viewport) -> bool {
        if self.embers.len() >= self.cap || rng.gen::<f64>() >= self.spawn_probability {
            return false;
        }
        let ember = spawn_ember(rng, time, vp);
        self.try_spawn(ember)
    }

    /// One frame of simulation. Skipped entirely for an empty viewport so no
    /// degenerate coordinates reach the particle state.
    pub fn step<R: Rng>(&mut self, rng: &mut R, time: f64, vp: &Viewport) {
        if vp.is_empty() || !time.is_finite() {
            return;
        }
        self.advance(time);
        self.maybe_spawn(rng, time, vp);
    }

    pub fn render<C: Canvas2d>(&self, canvas: &mut C) {
        for em in &self.embers {
            draw_dot(canvas, em.position, em.radius(), EMBER.with_alpha(em.alpha()));
        }
    }
}
