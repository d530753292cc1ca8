//! 2D vector helpers
//!
//! Thin free functions over `glam::Vec2` used by the force models and the renderer.
//! None of them fail: degenerate input (zero-length vectors) yields zero output.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Euclidean norm
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Componentwise `a - b`
#[inline]
pub fn difference(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

/// Angle of the direction from `a` to `b`, in (-π, π]
#[inline]
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Unit vector along `v`, or zero when `v` has no length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let length = magnitude(v);
    if length == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(v.x / length, v.y / length)
}

/// Wrap an angle into (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Componentwise scalar multiply
#[inline]
pub fn scale(v: Vec2, k: f32) -> Vec2 {
    Vec2::new(v.x * k, v.y * k)
}

/// Perpendicular of `v`; `left` rotates +90°, otherwise -90°
#[inline]
pub fn perpendicular(v: Vec2, left: bool) -> Vec2 {
    if left {
        Vec2::new(-v.y, v.x)
    } else {
        Vec2::new(v.y, -v.x)
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
