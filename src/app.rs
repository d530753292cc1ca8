//! Application context
//!
//! Owns everything the frame loop touches: viewport, input, clock and the creature.
//! Lifecycle: `new` -> `resize` (on ready and on every host resize) -> `frame` each tick.
//! Until the first `resize` the context is not ready and frames do nothing.

use glam::Vec2;

use crate::consts::{RING_PARTICLES, RING_RADIUS};
use crate::platform::{FrameClock, InputState, ScreenParams};
use crate::renderer::{DrawList, ring_draw_list};
use crate::settings::Settings;
use crate::sim::{RingBody, TickInput, tick};

pub struct AppContext {
    screen: Option<ScreenParams>,
    input: InputState,
    clock: FrameClock,
    body: RingBody,
    /// Released drag waiting for the next frame
    pending_jump: Option<Vec2>,
    /// Set once the not-ready warning has been logged, cleared when ready again
    warned_not_ready: bool,
}

impl AppContext {
    /// Default creature at the origin of the play-field
    pub fn new(settings: Settings) -> Self {
        Self::with_body(RingBody::with_settings(
            Vec2::ZERO,
            RING_RADIUS,
            RING_PARTICLES,
            settings,
        ))
    }

    pub fn with_body(body: RingBody) -> Self {
        Self {
            screen: None,
            input: InputState::new(),
            clock: FrameClock::new(),
            body,
            pending_jump: None,
            warned_not_ready: false,
        }
    }

    /// Refit the play-field to a new device viewport
    pub fn resize(&mut self, device_width: f32, device_height: f32) -> &ScreenParams {
        let screen = ScreenParams::fit(device_width, device_height);
        if screen.is_ready() {
            log::info!(
                "Viewport {}x{} -> scale {:.3}",
                device_width,
                device_height,
                screen.scale_fit_native
            );
        } else {
            log::warn!("Viewport {}x{} cannot fit the play-field", device_width, device_height);
        }
        self.screen.insert(screen)
    }

    pub fn screen(&self) -> Option<&ScreenParams> {
        self.screen.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.screen.is_some_and(|s| s.is_ready())
    }

    pub fn body(&self) -> &RingBody {
        &self.body
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Begin timing from the host's current timestamp
    pub fn start(&mut self, now_ms: f64) {
        self.clock.start(now_ms);
    }

    // === Input handlers ===

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.input.drag_start(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.input.drag_move(pos);
    }

    /// Releasing a drag queues a jump for the next frame
    pub fn pointer_up(&mut self, pos: Vec2) {
        if let Some(jump) = self.input.drag_end(pos) {
            self.pending_jump = Some(jump);
        }
    }

    pub fn focus_lost(&mut self) {
        self.input.clear();
    }

    /// Run one frame at host time `now_ms`. Returns whether the simulation stepped.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let elapsed = self.clock.tick(now_ms);

        if !self.is_ready() {
            if !self.warned_not_ready {
                log::warn!("Frame skipped: screen params not ready");
                self.warned_not_ready = true;
            }
            return false;
        }
        self.warned_not_ready = false;

        let input = TickInput {
            jump: self.pending_jump.take(),
            move_left: self.input.move_left_held(),
            move_right: self.input.move_right_held(),
        };
        tick(&mut self.body, &input, elapsed, self.screen.as_ref())
    }

    /// Geometry for the current frame, or `None` when not ready
    pub fn draw_list(&self) -> Option<DrawList> {
        let screen = self.screen.filter(|s| s.is_ready())?;
        Some(ring_draw_list(&self.body, &screen, self.input.drag_vector()))
    }
}
