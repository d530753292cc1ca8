//! Platform abstraction layer
//!
//! Host-facing state the simulation reads but never computes:
//! - Screen fitting (device viewport to native play-field)
//! - Input state (held keys, drag gesture)
//! - Frame timing

pub mod input;
pub mod screen;
pub mod time;

pub use input::InputState;
pub use screen::ScreenParams;
pub use time::FrameClock;
