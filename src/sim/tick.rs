//! Per-frame simulation tick
//!
//! Applies one frame's input intents to the body, then advances it.

use glam::Vec2;

use super::ring::RingBody;
use crate::platform::ScreenParams;

/// Input intents for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump impulse in device pixels/s (from a released drag)
    pub jump: Option<Vec2>,
    /// Move controls currently held
    pub move_left: bool,
    pub move_right: bool,
}

/// Apply `input` and advance `body` by `delta_time_millis`.
///
/// Returns false (and does nothing) when the screen is not ready.
pub fn tick(
    body: &mut RingBody,
    input: &TickInput,
    delta_time_millis: f32,
    screen: Option<&ScreenParams>,
) -> bool {
    let Some(screen) = screen.filter(|s| s.is_ready()) else {
        return false;
    };

    if let Some(jump) = input.jump {
        log::debug!("Jump ({:.1}, {:.1})", jump.x, jump.y);
        body.jump(jump, screen);
    }
    if input.move_left {
        body.move_left(screen);
    }
    if input.move_right {
        body.move_right(screen);
    }

    body.update(delta_time_millis, Some(screen));
    true
}
