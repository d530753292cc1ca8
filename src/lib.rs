//! Slime Ring - a soft-body "slime" creature toy
//!
//! Core modules:
//! - `sim`: Deterministic particle-ring simulation (forces, integration, collisions)
//! - `settings`: Tunable physics constants and force-model presets
//! - `platform`: Screen fitting, input state and frame timing
//! - `renderer`: Device-space draw geometry
//! - `app`: Application context tying the above together for a frame loop

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::AppContext;
pub use error::SettingsError;
pub use platform::{FrameClock, InputState, ScreenParams};
pub use settings::{ForceModel, Settings};
pub use sim::{Particle, RingBody, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Native design resolution; all physics runs in these units
    pub const NATIVE_WIDTH: f32 = 1920.0;
    pub const NATIVE_HEIGHT: f32 = 1080.0;

    /// Default creature geometry
    pub const RING_RADIUS: f32 = 80.0;
    pub const RING_PARTICLES: usize = 8;
    /// Fewer particles than this cannot form a ring
    pub const MIN_RING_PARTICLES: usize = 3;

    /// Slot-spring model defaults
    pub const SPRING_CONSTANT: f32 = 5000.0;
    pub const SPRING_DAMPING: f32 = 0.9;
    /// Gravity (native units/s², +y is down)
    pub const GRAVITY: f32 = 1000.0;
    /// Multiplicative velocity damping per step
    pub const FRICTION: f32 = 0.99;
    /// Velocity retained (sign flipped) after a bounds collision
    pub const RESTITUTION: f32 = 0.7;
    /// Fraction of the gap to the particle mean the center covers per step
    pub const RECENTER_FACTOR: f32 = 0.8;
    /// Largest integration step (seconds); longer frames are truncated
    pub const MAX_STEP_SECS: f32 = 0.016;
    /// Lateral velocity added per move call (native units/s)
    pub const MOVE_SPEED: f32 = 100.0;

    pub const PARTICLE_RADIUS: f32 = 10.0;
    pub const PARTICLE_MASS: f32 = 1.0;
}
