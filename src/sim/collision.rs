//! Play-field bounds collision
//!
//! Bounds are tested in device-scaled units and resolved in native units. A particle
//! crossing a bound is clamped back onto it and its normal velocity is reflected with
//! restitution.

use super::particle::Particle;
use crate::platform::ScreenParams;

/// Which bound a particle hit, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsHit {
    None,
    Floor,
    Ceiling,
    Left,
    Right,
}

/// Resolve collision with the floor, or failing that the ceiling
pub fn collide_vertical(particle: &mut Particle, screen: &ScreenParams, restitution: f32) -> BoundsHit {
    let scale = screen.scale_fit_native;
    let top = screen.offset_to_native_top;
    let scaled_y = particle.pos.y * scale;
    let scaled_radius = particle.radius * scale;

    if scaled_y + scaled_radius > -top {
        particle.pos.y = (-top / scale) - particle.radius;
        particle.vel.y = -particle.vel.y * restitution;
        BoundsHit::Floor
    } else if scaled_y - scaled_radius < top {
        particle.pos.y = (top / scale) + particle.radius;
        particle.vel.y = -particle.vel.y * restitution;
        BoundsHit::Ceiling
    } else {
        BoundsHit::None
    }
}

/// Resolve collision with the right wall, or failing that the left wall
pub fn collide_horizontal(particle: &mut Particle, screen: &ScreenParams, restitution: f32) -> BoundsHit {
    let scale = screen.scale_fit_native;
    let left = screen.offset_to_native_left;
    let scaled_x = particle.pos.x * scale;
    let scaled_radius = particle.radius * scale;

    if scaled_x + scaled_radius > -left {
        particle.pos.x = (-left / scale) - particle.radius;
        particle.vel.x = -particle.vel.x * restitution;
        BoundsHit::Right
    } else if scaled_x - scaled_radius < left {
        particle.pos.x = (left / scale) + particle.radius;
        particle.vel.x = -particle.vel.x * restitution;
        BoundsHit::Left
    } else {
        BoundsHit::None
    }
}
