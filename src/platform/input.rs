//! Input state shared between event handlers and the frame loop
//!
//! Handlers write, the frame loop reads once per frame. Both run on the same thread.

use std::collections::HashMap;

use glam::Vec2;

const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start: Vec2,
    current: Vec2,
}

/// Held keys and the in-progress drag gesture
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    drag: Option<Drag>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_string(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.insert(key.to_string(), false);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn move_left_held(&self) -> bool {
        LEFT_KEYS.iter().any(|k| self.is_held(k))
    }

    pub fn move_right_held(&self) -> bool {
        RIGHT_KEYS.iter().any(|k| self.is_held(k))
    }

    /// Begin a drag at a device-pixel position
    pub fn drag_start(&mut self, pos: Vec2) {
        self.drag = Some(Drag {
            start: pos,
            current: pos,
        });
    }

    /// Track the pointer; ignored when no drag is active
    pub fn drag_move(&mut self, pos: Vec2) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = pos;
        }
    }

    /// Finish the drag and return the jump it produces: opposite the pull, like a slingshot.
    /// A drag that never moved produces nothing.
    pub fn drag_end(&mut self, pos: Vec2) -> Option<Vec2> {
        let drag = self.drag.take()?;
        let launch = -(pos - drag.start);
        if launch == Vec2::ZERO {
            return None;
        }
        Some(launch)
    }

    /// Launch vector of the drag in progress, for the aiming arrow
    pub fn drag_vector(&self) -> Option<Vec2> {
        self.drag.map(|d| -(d.current - d.start))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drop all held keys and any drag (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.keys.clear();
        self.drag = None;
    }
}
