//! Ring-holding force models
//!
//! Both return a force that the ring integrates as `vel += force * dt * spring_damping`.
//! A particle sitting exactly on its reference point gets no force.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vector::{angle, difference, magnitude, normalize, normalize_angle, scale};

/// Constant-magnitude pull toward the particle's slot position
pub fn slot_spring_force(pos: Vec2, desired: Vec2, spring_constant: f32) -> Vec2 {
    let offset = difference(desired, pos);
    if magnitude(offset) == 0.0 {
        return Vec2::ZERO;
    }
    scale(normalize(offset), spring_constant)
}

/// Neighbors and ring-wide parameters for the radial model
#[derive(Debug, Clone, Copy)]
pub struct RadialParams {
    pub center: Vec2,
    pub rest_length: f32,
    pub particle_count: usize,
    pub spring_constant: f32,
    pub angular_spring_constant: f32,
}

/// Hooke spring toward the rest radius plus a tangential push evening out neighbor spacing
pub fn radial_angular_force(pos: Vec2, prev: Vec2, next: Vec2, params: &RadialParams) -> Vec2 {
    let offset = difference(pos, params.center);
    let distance = magnitude(offset);
    if distance == 0.0 {
        return Vec2::ZERO;
    }

    let stretch = distance - params.rest_length;
    let radial = scale(offset, -params.spring_constant * stretch / distance);

    let current = offset.y.atan2(offset.x);
    let prev_angle = angle(params.center, prev);
    let next_angle = angle(params.center, next);
    let spacing = TAU / params.particle_count as f32;

    let prev_diff = normalize_angle(current - prev_angle) - spacing;
    let next_diff = normalize_angle(next_angle - current) - spacing;

    let tangent = Vec2::new(-offset.y / distance, offset.x / distance);
    // Positive when the gap ahead is wider than the gap behind
    radial + scale(tangent, (next_diff - prev_diff) * params.angular_spring_constant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::vector::polar_to_cartesian;
    use std::f32::consts::PI;

    #[test]
    fn test_slot_force_has_constant_magnitude() {
        let near = slot_spring_force(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0), 5000.0);
        let far = slot_spring_force(Vec2::new(0.0, 0.0), Vec2::new(0.0, -300.0), 5000.0);
        assert!((near - Vec2::new(5000.0, 0.0)).length() < 1e-2);
        assert!((far - Vec2::new(0.0, -5000.0)).length() < 1e-2);
    }

    #[test]
    fn test_slot_force_zero_on_target() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(slot_spring_force(p, p, 5000.0), Vec2::ZERO);
    }

    fn params(n: usize) -> RadialParams {
        RadialParams {
            center: Vec2::ZERO,
            rest_length: 80.0,
            particle_count: n,
            spring_constant: 0.8,
            angular_spring_constant: 1.0,
        }
    }

    #[test]
    fn test_radial_force_balanced_on_even_ring() {
        let step = TAU / 8.0;
        let at = |k: f32| polar_to_cartesian(80.0, k * step + PI / 8.0);
        let f = radial_angular_force(at(1.0), at(0.0), at(2.0), &params(8));
        assert!(f.length() < 1e-3, "force = {f:?}");
    }

    #[test]
    fn test_radial_force_pulls_stretched_particle_inward() {
        let step = TAU / 8.0;
        let pos = polar_to_cartesian(100.0, step);
        let prev = polar_to_cartesian(80.0, 0.0);
        let next = polar_to_cartesian(80.0, 2.0 * step);
        let f = radial_angular_force(pos, prev, next, &params(8));
        // 20 units over rest at k=0.8
        assert!((f.length() - 16.0).abs() < 1e-2);
        assert!(f.dot(pos) < 0.0);
    }

    #[test]
    fn test_radial_force_spreads_crowded_particle() {
        let step = TAU / 8.0;
        // Particle squeezed toward its previous neighbor gets pushed toward the next one
        let pos = polar_to_cartesian(80.0, 0.25 * step);
        let prev = polar_to_cartesian(80.0, 0.0);
        let next = polar_to_cartesian(80.0, 2.0 * step);
        let f = radial_angular_force(pos, prev, next, &params(8));
        let tangent = Vec2::new(-pos.y, pos.x).normalize();
        assert!(f.dot(tangent) > 0.0);
    }

    #[test]
    fn test_radial_force_zero_at_center() {
        assert_eq!(radial_angular_force(Vec2::ZERO, Vec2::X, Vec2::Y, &params(8)), Vec2::ZERO);
    }
}
