//! Comets: inclined orbits with a particle tail that continuously streams
//! back toward the head.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::angle::wrap_angle;

/// Particles in each comet tail. The count is fixed for the lifetime of the
/// comet; recycling happens in place.
pub const TAIL_PARTICLE_COUNT: usize = 1000;

/// Head nucleus radius.
pub const COMET_NUCLEUS_RADIUS: f32 = 5.0;

/// Tail particles live in the comet's local frame: negative X trails behind
/// the head, which always faces the origin.
#[derive(Clone, Debug)]
pub struct Comet {
    /// Orbital angle in radians, wrapped to `[0, 2π)`.
    pub angle: f32,
    /// Orbit radius in world units.
    pub orbit_radius: f32,
    /// Orbital angular speed, radians per tick.
    pub orbit_speed: f32,
    /// Vertical inclination factor applied to the orbit's Y component.
    pub inclination: f32,
    /// Current head position in world space.
    pub position: Vec3,
    /// Unit vector the comet faces, pointed back at the origin.
    pub facing: Vec3,
    /// Tail particle positions in the comet's local frame.
    pub tail: Vec<Vec3>,
}

impl Comet {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let orbit_radius = rng.random_range(500.0..1500.0);
        let orbit_speed = rng.random_range(0.0005..0.001);
        let inclination = rng.random_range(-0.5..0.5);

        let tail = (0..TAIL_PARTICLE_COUNT)
            .map(|_| {
                let behind = rng.random::<f32>() * 100.0;
                let lateral_angle = rng.random_range(0.0..TAU);
                Vec3::new(
                    -behind,
                    behind * lateral_angle.sin() * 0.1,
                    behind * lateral_angle.cos() * 0.1,
                )
            })
            .collect();

        let position = orbit_point(orbit_radius, angle, inclination);
        Self {
            angle,
            orbit_radius,
            orbit_speed,
            inclination,
            facing: face_origin(position),
            position,
            tail,
        }
    }

    /// Advance one tick: move along the inclined orbit, turn the head back
    /// toward the origin, and stream the tail.
    ///
    /// Each tail particle drifts toward the head by a 5% decay per tick; once
    /// it closes within one unit it is recycled to the back of the tail. The
    /// particle count never changes.
    pub(crate) fn tick(&mut self) {
        self.angle = wrap_angle(self.angle + self.orbit_speed);
        self.position = orbit_point(self.orbit_radius, self.angle, self.inclination);
        self.facing = face_origin(self.position);

        for particle in &mut self.tail {
            particle.x *= 0.95;
            if particle.x > -1.0 {
                particle.x = -100.0;
            }
        }
    }
}

fn orbit_point(radius: f32, angle: f32, inclination: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * radius,
        angle.sin() * radius * inclination,
        angle.sin() * radius,
    )
}

fn face_origin(position: Vec3) -> Vec3 {
    (-position).normalize_or(Vec3::NEG_X)
}
