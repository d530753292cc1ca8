//! Point masses making up a ring body

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single point mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl Particle {
    /// A particle at rest
    pub fn new(pos: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass,
        }
    }

    /// Add a velocity change directly (impulse already divided by mass)
    #[inline]
    pub fn add_velocity(&mut self, delta: Vec2) {
        self.vel += delta;
    }

    /// Explicit Euler position step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Multiplicative damping of both velocity components
    #[inline]
    pub fn apply_friction(&mut self, friction: f32) {
        self.vel *= friction;
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}
