//! Physics tuning settings
//!
//! Every magic constant of the creature lives here so presets and tests can override them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Which force holds the particles in their ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ForceModel {
    /// Each particle is pulled toward a fixed angular slot around the center
    #[default]
    SlotSpring,
    /// Hooke spring to the rest radius plus a tangential neighbor-spacing correction
    RadialAngular,
}

impl ForceModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForceModel::SlotSpring => "slot-spring",
            ForceModel::RadialAngular => "radial-angular",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slot" | "slot-spring" | "slot_spring" => Some(ForceModel::SlotSpring),
            "radial" | "radial-angular" | "radial_angular" => Some(ForceModel::RadialAngular),
            _ => None,
        }
    }
}

/// Tunable constants for a ring body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub force_model: ForceModel,

    // === Springs ===
    /// Spring strength (slot model: constant pull magnitude; radial model: Hooke k)
    pub spring_constant: f32,
    /// Scales every spring contribution before it enters velocity
    pub spring_damping: f32,
    /// Tangential spacing strength (radial model only)
    pub angular_spring_constant: f32,

    // === Integration ===
    /// Downward acceleration, undamped
    pub gravity: f32,
    /// Multiplicative velocity damping per step (1.0 = none)
    pub friction: f32,
    /// Largest integration step in seconds
    pub max_step_secs: f32,
    /// Fraction of the way the center moves toward the particle mean per step (1.0 = snap)
    pub recenter_factor: f32,

    // === Collisions ===
    /// Velocity fraction kept after bouncing off a bound
    pub restitution: f32,
    /// Collide with the top and bottom of the play-field
    pub collide_vertical: bool,
    /// Collide with the left and right of the play-field
    pub collide_horizontal: bool,

    // === Particles and control ===
    pub particle_radius: f32,
    pub particle_mass: f32,
    /// Lateral velocity added per move call, before screen scaling
    pub move_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            force_model: ForceModel::SlotSpring,

            spring_constant: SPRING_CONSTANT,
            spring_damping: SPRING_DAMPING,
            angular_spring_constant: 1.0,

            gravity: GRAVITY,
            friction: FRICTION,
            max_step_secs: MAX_STEP_SECS,
            recenter_factor: RECENTER_FACTOR,

            restitution: RESTITUTION,
            collide_vertical: true,
            collide_horizontal: false,

            particle_radius: PARTICLE_RADIUS,
            particle_mass: PARTICLE_MASS,
            move_speed: MOVE_SPEED,
        }
    }
}

impl Settings {
    /// Settings preset matching a force model's tuned constants
    pub fn from_model(model: ForceModel) -> Self {
        match model {
            ForceModel::SlotSpring => Self::default(),
            ForceModel::RadialAngular => Self {
                force_model: ForceModel::RadialAngular,
                spring_constant: 0.8,
                spring_damping: 0.95,
                angular_spring_constant: 1.0,
                gravity: 2000.0,
                friction: 1.0,
                recenter_factor: 1.0,
                particle_radius: 20.0,
                ..Self::default()
            },
        }
    }

    pub fn with_force_model(mut self, model: ForceModel) -> Self {
        self.force_model = model;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_spring(mut self, constant: f32, damping: f32) -> Self {
        self.spring_constant = constant;
        self.spring_damping = damping;
        self
    }

    pub fn with_horizontal_collision(mut self, enabled: bool) -> Self {
        self.collide_horizontal = enabled;
        self
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("Loaded settings ({} model)", settings.force_model.as_str());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the integrator cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            ("spring_constant", self.spring_constant),
            ("spring_damping", self.spring_damping),
            ("angular_spring_constant", self.angular_spring_constant),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("max_step_secs", self.max_step_secs),
            ("recenter_factor", self.recenter_factor),
            ("restitution", self.restitution),
            ("particle_radius", self.particle_radius),
            ("particle_mass", self.particle_mass),
            ("move_speed", self.move_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid("friction", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid("restitution", "must be in [0, 1]"));
        }
        if self.recenter_factor <= 0.0 || self.recenter_factor > 1.0 {
            return Err(invalid("recenter_factor", "must be in (0, 1]"));
        }
        if self.max_step_secs <= 0.0 {
            return Err(invalid("max_step_secs", "must be positive"));
        }
        if self.particle_radius < 0.0 {
            return Err(invalid("particle_radius", "must not be negative"));
        }
        if self.particle_mass <= 0.0 {
            return Err(invalid("particle_mass", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> SettingsError {
    SettingsError::Invalid { field, reason }
}
