//! Background star point cloud: placed once at construction, static after.

use glam::Vec3;
use rand::Rng;

use crate::scatter::shell_point;

/// Inner radius of the star shell in world units.
pub const STARFIELD_MIN_RADIUS: f32 = 400.0;
/// Outer radius of the star shell in world units.
pub const STARFIELD_MAX_RADIUS: f32 = 3000.0;

/// A single background star. Stars have no dynamic state; the whole field is
/// excluded from the fade scheduler.
#[derive(Clone, Debug)]
pub struct StarPoint {
    /// World position inside the star shell.
    pub position: Vec3,
    /// Point color in linear RGB: blue-tinted, white, or warm.
    pub color: [f32; 3],
    /// Point sprite size.
    pub size: f32,
}

/// Generate the star point cloud. Deterministic for a given RNG state.
///
/// Color split: roughly 30% blue-tinted stars, 50% white, 20% warm yellow.
pub fn generate_starfield(rng: &mut impl Rng, count: u32) -> Vec<StarPoint> {
    let mut stars = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let position = shell_point(rng, STARFIELD_MIN_RADIUS, STARFIELD_MAX_RADIUS);

        let color_choice: f32 = rng.random();
        let color = if color_choice < 0.3 {
            [
                0.6 + rng.random::<f32>() * 0.4,
                0.6 + rng.random::<f32>() * 0.4,
                1.0,
            ]
        } else if color_choice < 0.8 {
            [1.0, 1.0, 1.0]
        } else {
            [1.0, 1.0, 0.8]
        };

        let size = rng.random::<f32>() * 3.0;

        stars.push(StarPoint {
            position,
            color,
            size,
        });
    }

    stars
}
