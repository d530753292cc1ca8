//! Deterministic simulation module
//!
//! All creature physics lives here. This module must be pure and deterministic:
//! - Identical inputs and state produce identical steps
//! - Forces read pre-step state only, so particle order never matters
//! - No rendering or platform dependencies beyond `ScreenParams`

pub mod collision;
pub mod forces;
pub mod particle;
pub mod ring;
pub mod tick;
pub mod vector;

pub use collision::{BoundsHit, collide_horizontal, collide_vertical};
pub use forces::{RadialParams, radial_angular_force, slot_spring_force};
pub use particle::Particle;
pub use ring::RingBody;
pub use tick::{TickInput, tick};
pub use vector::{angle, difference, magnitude, normalize, normalize_angle, perpendicular, polar_to_cartesian, scale};
