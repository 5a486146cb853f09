use std::f32::consts::TAU;

use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;

pub const PARTICLE_COUNT: usize = 20;
const FLOAT_HEIGHT: f32 = 20.0;

/// A background speck drifting up and down on its own period.
pub struct Particle {
    pub anchor: Vector2,
    pub delay: f32,
    pub period: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            anchor: Vector2::new(
                rng.random_range(0.0..1.0) * RENDER_WIDTH as f32,
                rng.random_range(0.0..1.0) * RENDER_HEIGHT as f32,
            ),
            delay: rng.random_range(0.0..5.0),
            period: rng.random_range(3.0..7.0),
        }
    }

    pub fn position(&self, time: f32) -> Vector2 {
        let phase = (time + self.delay) / self.period * TAU;
        Vector2::new(self.anchor.x, self.anchor.y - phase.sin() * FLOAT_HEIGHT)
    }
}

pub fn scatter(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect()
}
