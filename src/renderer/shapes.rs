//! Device-space geometry for drawing the creature
//!
//! Everything here is in device pixels relative to the viewport center; the host only has
//! to translate its origin to the middle of the canvas before painting.

use glam::Vec2;
use std::f32::consts::PI;

use crate::consts::{NATIVE_HEIGHT, NATIVE_WIDTH};
use crate::platform::ScreenParams;
use crate::sim::RingBody;
use crate::sim::vector::polar_to_cartesian;

/// Arrow head length in device pixels
pub const ARROW_HEAD_LENGTH: f32 = 10.0;
/// Half-angle between the arrow shaft and each head stroke
const ARROW_HEAD_ANGLE: f32 = PI / 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Aiming arrow from the viewport origin along the pending jump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub tail: Vec2,
    pub tip: Vec2,
    /// End points of the two head strokes, both starting at `tip`
    pub head: [Vec2; 2],
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub play_field: Rect,
    /// Closed polygon around the particles
    pub outline: Vec<Vec2>,
    pub circles: Vec<Circle>,
    pub center: Vec2,
    pub arrow: Option<Arrow>,
}

/// Build the draw list for `body`, optionally with an aiming arrow for `drag`
pub fn ring_draw_list(body: &RingBody, screen: &ScreenParams, drag: Option<Vec2>) -> DrawList {
    let s = screen.scale_fit_native;

    let outline = body
        .outline()
        .into_iter()
        .map(|p| screen.native_to_device(p))
        .collect();

    let circles = body
        .particles()
        .iter()
        .map(|p| Circle {
            center: screen.native_to_device(p.pos),
            radius: p.radius * s,
        })
        .collect();

    DrawList {
        play_field: Rect {
            origin: Vec2::new(screen.offset_to_native_left, screen.offset_to_native_top),
            size: Vec2::new(NATIVE_WIDTH * s, NATIVE_HEIGHT * s),
        },
        outline,
        circles,
        center: screen.native_to_device(body.center_position()),
        arrow: drag.filter(|d| *d != Vec2::ZERO).map(|d| arrow(Vec2::ZERO, d)),
    }
}

/// Arrow from `tail` to `tip` with a fixed-size head
pub fn arrow(tail: Vec2, tip: Vec2) -> Arrow {
    let dir = tip - tail;
    let theta = dir.y.atan2(dir.x);
    Arrow {
        tail,
        tip,
        head: [
            tip - polar_to_cartesian(ARROW_HEAD_LENGTH, theta - ARROW_HEAD_ANGLE),
            tip - polar_to_cartesian(ARROW_HEAD_LENGTH, theta + ARROW_HEAD_ANGLE),
        ],
    }
}
