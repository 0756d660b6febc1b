//! The asteroid belt: a ring of small rocks between Mars and Jupiter with
//! its own fade curve.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::angle::wrap_angle;
use crate::fade::belt_opacity;

/// Inner edge of the belt annulus in world units.
pub const BELT_INNER_RADIUS: f32 = 278.0;
/// Outer edge of the belt annulus in world units.
pub const BELT_OUTER_RADIUS: f32 = 728.0;
/// Half-height of the belt above and below the ecliptic.
pub const BELT_HALF_HEIGHT: f32 = 12.5;

const BELT_MID_RADIUS: f32 = (BELT_INNER_RADIUS + BELT_OUTER_RADIUS) / 2.0;

/// One asteroid in the belt.
#[derive(Clone, Debug)]
pub struct BeltMember {
    /// Orbital angle in radians, wrapped to `[0, 2π)`.
    pub angle: f32,
    /// Orbit radius in world units, fixed at construction.
    pub radius: f32,
    /// Height above the ecliptic, fixed at construction.
    pub height: f32,
    /// Orbital angular speed, radians per tick.
    pub orbit_speed: f32,
    /// Tumble speed, radians per tick.
    pub rotation_speed: f32,
    /// Tumble accumulator, radians.
    pub rotation: f32,
    /// Visual scale multiplier.
    pub scale: f32,
    /// Current world position.
    pub position: Vec3,
    /// Material opacity from the belt fade curve.
    pub opacity: f32,
}

impl BeltMember {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        // Sum of two uniforms: radii cluster toward the middle of the
        // annulus instead of spreading flat across it.
        let width = BELT_OUTER_RADIUS - BELT_INNER_RADIUS;
        let radius =
            BELT_INNER_RADIUS + (rng.random::<f32>() + rng.random::<f32>()) * width / 2.0;
        let height = rng.random::<f32>() * BELT_HALF_HEIGHT * 2.0 - BELT_HALF_HEIGHT;
        // Kepler-flavored: outer asteroids orbit slower.
        let orbit_speed = rng.random_range(0.001..0.002) * (BELT_MID_RADIUS / radius);
        let rotation_speed = rng.random_range(0.01..0.02);
        let scale = rng.random_range(1.0..2.5);

        Self {
            angle,
            radius,
            height,
            orbit_speed,
            rotation_speed,
            rotation: 0.0,
            scale,
            position: belt_position(radius, angle, height),
            opacity: 1.0,
        }
    }

    /// Advance one tick: orbit, tumble, and apply the belt fade.
    pub(crate) fn tick(&mut self, camera_distance: f32) {
        self.angle = wrap_angle(self.angle + self.orbit_speed);
        self.position = belt_position(self.radius, self.angle, self.height);
        self.rotation = wrap_angle(self.rotation + self.rotation_speed);
        self.opacity = belt_opacity(camera_distance);
    }
}

fn belt_position(radius: f32, angle: f32, height: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), height, radius * angle.sin())
}
