//! The ring body: point masses held around a tracked center
//!
//! Each particle owns a fixed angular slot `i * 2π/N + π/N`. Every step the particle is
//! pushed toward its slot (or, in the radial model, toward the rest radius with even
//! neighbor spacing), falls under gravity, integrates, and bounces off the play-field.
//! The center then eases toward the mean of the particles.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::collision::{collide_horizontal, collide_vertical};
use super::forces::{RadialParams, radial_angular_force, slot_spring_force};
use super::particle::Particle;
use super::vector::{angle, polar_to_cartesian, scale};
use crate::consts::MIN_RING_PARTICLES;
use crate::platform::ScreenParams;
use crate::settings::{ForceModel, Settings};

/// The simulated creature
#[derive(Debug, Clone)]
pub struct RingBody {
    /// Ordered by slot index; length never changes after construction
    particles: Vec<Particle>,
    center: Vec2,
    rest_length: f32,
    settings: Settings,
}

impl RingBody {
    /// Build a ring with default tuning
    pub fn new(center: Vec2, radius: f32, particle_count: usize) -> Self {
        Self::with_settings(center, radius, particle_count, Settings::default())
    }

    pub fn with_settings(center: Vec2, radius: f32, particle_count: usize, settings: Settings) -> Self {
        let count = if particle_count < MIN_RING_PARTICLES {
            log::warn!(
                "Ring needs at least {} particles, got {}; using {}",
                MIN_RING_PARTICLES,
                particle_count,
                MIN_RING_PARTICLES
            );
            MIN_RING_PARTICLES
        } else {
            particle_count
        };

        let particles = (0..count)
            .map(|i| {
                let pos = center + polar_to_cartesian(radius, slot_angle(i, count));
                Particle::new(pos, settings.particle_radius, settings.particle_mass)
            })
            .collect();

        log::debug!(
            "Ring body: {} particles, radius {}, {} model",
            count,
            radius,
            settings.force_model.as_str()
        );

        Self {
            particles,
            center,
            rest_length: radius,
            settings,
        }
    }

    /// Advance every particle one step and ease the center toward their mean.
    ///
    /// `delta_time_millis` is the wall time since the previous frame; the step is capped at
    /// `max_step_secs`. Absent or unusable screen params skip the frame.
    pub fn update(&mut self, delta_time_millis: f32, screen: Option<&ScreenParams>) {
        let Some(screen) = screen.filter(|s| s.is_ready()) else {
            log::debug!("Ring update skipped: screen params not ready");
            return;
        };

        let secs = delta_time_millis / 1000.0;
        let dt = if secs.is_finite() {
            secs.min(self.settings.max_step_secs).max(0.0)
        } else {
            0.0
        };

        let count = self.particles.len();
        let center = self.center;
        let settings = &self.settings;

        // Forces read pre-step state only, so particle order never matters
        let forces: Vec<Vec2> = match settings.force_model {
            ForceModel::SlotSpring => (0..count)
                .map(|i| {
                    let desired = center + polar_to_cartesian(self.rest_length, slot_angle(i, count));
                    slot_spring_force(self.particles[i].pos, desired, settings.spring_constant)
                })
                .collect(),
            ForceModel::RadialAngular => {
                let params = RadialParams {
                    center,
                    rest_length: self.rest_length,
                    particle_count: count,
                    spring_constant: settings.spring_constant,
                    angular_spring_constant: settings.angular_spring_constant,
                };
                (0..count)
                    .map(|i| {
                        let prev = self.particles[(i + count - 1) % count].pos;
                        let next = self.particles[(i + 1) % count].pos;
                        radial_angular_force(self.particles[i].pos, prev, next, &params)
                    })
                    .collect()
            }
        };

        for (particle, force) in self.particles.iter_mut().zip(forces) {
            particle.add_velocity(force * (dt * settings.spring_damping));
            particle.vel.y += settings.gravity * dt;

            particle.integrate(dt);
            particle.apply_friction(settings.friction);

            if settings.collide_vertical {
                collide_vertical(particle, screen, settings.restitution);
            }
            if settings.collide_horizontal {
                collide_horizontal(particle, screen, settings.restitution);
            }
        }

        let mean = self.mean_position();
        self.center += (mean - self.center) * self.settings.recenter_factor;

        log::trace!("Ring step dt={:.4} center=({:.2}, {:.2})", dt, self.center.x, self.center.y);
    }

    /// Add the same impulse to every particle; `vector` is in device pixels/s
    pub fn jump(&mut self, vector: Vec2, screen: &ScreenParams) {
        if !screen.is_ready() {
            log::debug!("Jump ignored: screen params not ready");
            return;
        }
        let delta = scale(vector, 1.0 / screen.scale_fit_native);
        for particle in &mut self.particles {
            particle.add_velocity(delta);
        }
    }

    /// Push the whole body left; call once per frame while the control is held
    pub fn move_left(&mut self, screen: &ScreenParams) {
        self.push_lateral(-self.settings.move_speed, screen);
    }

    /// Push the whole body right; call once per frame while the control is held
    pub fn move_right(&mut self, screen: &ScreenParams) {
        self.push_lateral(self.settings.move_speed, screen);
    }

    fn push_lateral(&mut self, speed: f32, screen: &ScreenParams) {
        if !screen.is_ready() {
            return;
        }
        let dx = speed * (1.0 / screen.scale_fit_native);
        for particle in &mut self.particles {
            particle.vel.x += dx;
        }
    }

    /// Tracked (smoothed) center in native units
    pub fn center_position(&self) -> Vec2 {
        self.center
    }

    /// Arithmetic mean of all particle positions
    pub fn mean_position(&self) -> Vec2 {
        let sum: Vec2 = self.particles.iter().map(|p| p.pos).sum();
        sum / self.particles.len() as f32
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fixed slot angle of particle `index`
    pub fn slot_angle(&self, index: usize) -> f32 {
        slot_angle(index, self.particles.len())
    }

    /// Where particle `index` would sit at rest around the current center
    pub fn desired_position(&self, index: usize) -> Vec2 {
        self.center + polar_to_cartesian(self.rest_length, self.slot_angle(index))
    }

    /// Outline points (native units) wrapping the particles: for each particle, two points
    /// on its outer rim either side of the center-to-particle direction.
    pub fn outline(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.particles.len() * 2);
        for p in &self.particles {
            let theta = angle(self.center, p.pos);
            let rim = p.pos + polar_to_cartesian(p.radius, theta);
            points.push(rim + polar_to_cartesian(1.0, theta + FRAC_PI_2));
            points.push(rim + polar_to_cartesian(1.0, theta - FRAC_PI_2));
        }
        points
    }
}

/// Slot `index` of `count`, offset half a slot so slot 0 is not at angle 0
#[inline]
fn slot_angle(index: usize, count: usize) -> f32 {
    let n = count as f32;
    index as f32 * TAU / n + PI / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{RESTITUTION, RING_PARTICLES, RING_RADIUS};
    use proptest::prelude::*;

    fn full_hd() -> ScreenParams {
        ScreenParams {
            device_width: 1920.0,
            device_height: 1080.0,
            offset_to_native_top: -540.0,
            offset_to_native_left: -960.0,
            scale_fit_native: 1.0,
        }
    }

    /// No springs, gravity or friction: particles coast on their own velocity
    fn inert() -> Settings {
        Settings {
            friction: 1.0,
            ..Settings::default()
        }
        .with_spring(0.0, 0.9)
        .with_gravity(0.0)
    }

    #[test]
    fn test_construction_places_slots() {
        let body = RingBody::new(Vec2::new(100.0, -50.0), 80.0, 8);
        assert_eq!(body.particle_count(), 8);
        assert_eq!(body.rest_length(), 80.0);
        assert!((body.slot_angle(0) - PI / 8.0).abs() < 1e-6);
        for (i, p) in body.particles().iter().enumerate() {
            assert_eq!(p.pos, body.desired_position(i));
            assert_eq!(p.vel, Vec2::ZERO);
            assert!(((p.pos - body.center_position()).length() - 80.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_too_few_particles_raised_to_minimum() {
        let body = RingBody::new(Vec2::ZERO, 50.0, 1);
        assert_eq!(body.particle_count(), MIN_RING_PARTICLES);
    }

    #[test]
    fn test_update_without_screen_is_noop() {
        let mut body = RingBody::new(Vec2::ZERO, 80.0, 8);
        let before = body.particles().to_vec();
        body.update(16.0, None);
        assert_eq!(body.particles(), &before[..]);
        assert_eq!(body.center_position(), Vec2::ZERO);

        let broken = ScreenParams::fit(0.0, 0.0);
        body.update(16.0, Some(&broken));
        assert_eq!(body.particles(), &before[..]);
    }

    #[test]
    fn test_particle_on_slot_gets_no_spring() {
        let settings = Settings::default().with_gravity(0.0);
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, settings);
        body.update(16.0, Some(&full_hd()));
        for p in body.particles() {
            assert_eq!(p.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_spring_pulls_toward_slot() {
        let settings = Settings::default().with_gravity(0.0);
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, settings);
        body.particles[0].pos += Vec2::new(10.0, 0.0);
        body.update(16.0, Some(&full_hd()));
        // 5000 * 0.016 * 0.9 * 0.99 toward -x
        let vel = body.particles[0].vel;
        assert!((vel.x + 71.28).abs() < 1e-2, "vel = {vel:?}");
        assert!(vel.y.abs() < 1e-3);
    }

    #[test]
    fn test_gravity_and_step_clamp() {
        let settings = Settings::default().with_spring(0.0, 0.9);
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, settings);
        // A 500 ms frame integrates as a 16 ms step
        body.update(500.0, Some(&full_hd()));
        let vy = body.particles[0].vel.y;
        assert!((vy - 1000.0 * 0.016 * 0.99).abs() < 1e-3);
    }

    #[test]
    fn test_zero_elapsed_time_moves_nothing() {
        let mut body = RingBody::new(Vec2::new(0.0, 100.0), 80.0, 8);
        body.particles[3].pos += Vec2::new(4.0, -7.0);
        let before = body.particles().to_vec();
        body.update(0.0, Some(&full_hd()));
        for (after, before) in body.particles().iter().zip(&before) {
            assert_eq!(after.pos, before.pos);
            assert_eq!(after.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_floor_collision_clamps_and_reflects() {
        let sp = ScreenParams::fit(960.0, 540.0);
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, inert());
        body.particles[2].pos.y = 545.0;
        body.particles[2].vel.y = 200.0;
        body.update(16.0, Some(&sp));

        let p = body.particles[2];
        let floor = (-sp.offset_to_native_top / sp.scale_fit_native) - p.radius;
        assert_eq!(p.pos.y, floor);
        assert!((p.vel.y + 200.0 * RESTITUTION).abs() < 1e-3);
    }

    #[test]
    fn test_ceiling_collision_reflects() {
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, inert());
        body.particles[5].pos.y = -560.0;
        body.particles[5].vel.y = -50.0;
        body.update(16.0, Some(&full_hd()));
        let p = body.particles[5];
        assert_eq!(p.pos.y, -530.0);
        assert!((p.vel.y - 35.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_bounds_off_by_default() {
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, inert());
        body.particles[0].pos.x = 2000.0;
        body.update(16.0, Some(&full_hd()));
        assert!(body.particles[0].pos.x > 1999.0);

        let settings = inert().with_horizontal_collision(true);
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, settings);
        body.particles[0].pos.x = 2000.0;
        body.update(16.0, Some(&full_hd()));
        assert_eq!(body.particles[0].pos.x, 950.0);
    }

    #[test]
    fn test_center_eases_toward_mean() {
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, inert());
        let start = body.mean_position();
        body.center = start + Vec2::new(-30.0, 50.0);
        let gap = start - body.center;

        body.update(16.0, Some(&full_hd()));
        let moved = body.center_position() - (start - gap);
        assert!((moved - gap * 0.8).length() < 1e-3, "moved = {moved:?}");
        // Never snaps all the way
        assert!((body.center_position() - body.mean_position()).length() > 1.0);
    }

    #[test]
    fn test_center_snaps_with_full_recenter() {
        let settings = Settings {
            recenter_factor: 1.0,
            ..inert()
        };
        let mut body = RingBody::with_settings(Vec2::ZERO, 80.0, 8, settings);
        body.center = Vec2::new(25.0, 25.0);
        body.update(16.0, Some(&full_hd()));
        assert!((body.center_position() - body.mean_position()).length() < 1e-4);
    }

    #[test]
    fn test_jump_adds_uniform_impulse() {
        let sp = ScreenParams::fit(960.0, 540.0);
        let mut body = RingBody::new(Vec2::ZERO, 80.0, 8);
        let before = body.particles().to_vec();
        body.jump(Vec2::new(100.0, -300.0), &sp);
        for (after, before) in body.particles().iter().zip(&before) {
            assert_eq!(after.vel, Vec2::new(200.0, -600.0));
            assert_eq!(after.pos, before.pos);
        }
    }

    #[test]
    fn test_move_grows_without_bound() {
        // Held input keeps adding speed; there is no cap
        let sp = full_hd();
        let mut body = RingBody::new(Vec2::ZERO, 80.0, 8);
        for _ in 0..50 {
            body.move_right(&sp);
        }
        assert!(body.particles().iter().all(|p| p.vel.x == 5000.0));
        for _ in 0..20 {
            body.move_left(&sp);
        }
        assert!(body.particles().iter().all(|p| p.vel.x == 3000.0));
    }

    #[test]
    fn test_outline_wraps_particles() {
        let body = RingBody::new(Vec2::ZERO, 80.0, 8);
        let outline = body.outline();
        assert_eq!(outline.len(), 16);
        for pair in outline.chunks(2) {
            let mid = (pair[0] + pair[1]) / 2.0;
            assert!((mid.length() - 90.0).abs() < 1e-3);
            assert!(((pair[0] - pair[1]).length() - 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_determinism() {
        let sp = full_hd();
        let mut a = RingBody::new(Vec2::ZERO, 80.0, 8);
        let mut b = RingBody::new(Vec2::ZERO, 80.0, 8);
        for frame in 0..120 {
            if frame == 30 {
                a.jump(Vec2::new(0.0, -900.0), &sp);
                b.jump(Vec2::new(0.0, -900.0), &sp);
            }
            a.update(16.0, Some(&sp));
            b.update(16.0, Some(&sp));
        }
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.center_position(), b.center_position());
    }

    #[test]
    fn test_settles_on_floor() {
        let sp = full_hd();
        let settings = Settings::default().with_gravity(1500.0);
        let mut body = RingBody::with_settings(Vec2::ZERO, RING_RADIUS, RING_PARTICLES, settings);
        let floor = sp.floor_y() - body.settings().particle_radius;

        let mut late_center_y = Vec::new();
        for frame in 0..300 {
            body.update(16.0, Some(&sp));
            for p in body.particles() {
                assert!(p.is_finite(), "frame {frame}: {p:?}");
                assert!(p.pos.y <= floor + 1e-3, "frame {frame}: below floor {p:?}");
                assert!(p.pos.y >= -floor - 1e-3, "frame {frame}: above ceiling {p:?}");
            }
            if frame >= 240 {
                late_center_y.push(body.center_position().y);
            }
        }

        let resting = sp.floor_y() - body.rest_length();
        for y in late_center_y {
            assert!((y - resting).abs() < 30.0, "center.y = {y}, expected near {resting}");
        }
        assert!(body.center_position().x.abs() < 960.0);
    }

    #[test]
    fn test_radial_model_stays_bounded() {
        let sp = full_hd();
        let settings = Settings::from_model(ForceModel::RadialAngular);
        let mut body = RingBody::with_settings(Vec2::ZERO, RING_RADIUS, RING_PARTICLES, settings);
        for _ in 0..300 {
            body.update(16.0, Some(&sp));
        }
        for p in body.particles() {
            assert!(p.is_finite());
            assert!(p.pos.y <= 520.0 + 1e-3);
        }
        // Snap recentering keeps the center on the mean
        assert!((body.center_position() - body.mean_position()).length() < 1e-3);
        assert!(body.center_position().y > 400.0);
    }

    proptest! {
        #[test]
        fn prop_state_stays_finite(
            jx in -5000.0f32..5000.0,
            jy in -5000.0f32..5000.0,
            frames in 1usize..90,
            delta_ms in 0.0f32..250.0,
            radial in any::<bool>(),
        ) {
            let model = if radial { ForceModel::RadialAngular } else { ForceModel::SlotSpring };
            let sp = full_hd();
            let mut body = RingBody::with_settings(
                Vec2::ZERO,
                RING_RADIUS,
                RING_PARTICLES,
                Settings::from_model(model),
            );
            body.jump(Vec2::new(jx, jy), &sp);
            for _ in 0..frames {
                body.update(delta_ms, Some(&sp));
                body.move_left(&sp);
            }
            for p in body.particles() {
                prop_assert!(p.is_finite());
            }
            prop_assert!(body.center_position().is_finite());
        }
    }
}
