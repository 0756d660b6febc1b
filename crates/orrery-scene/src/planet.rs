//! The Sun and the eight planets: identity tables and per-tick orbital state.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::angle::wrap_angle;
use crate::fade::{LABEL_VISIBILITY_MIN, ORBIT_LINE_FACTOR, solar_opacity};

/// Number of segments in a derived orbit ring.
pub const ORBIT_RING_SEGMENTS: usize = 128;

/// Identity of a solar-system body. The set is closed; all per-body visual
/// parameters are match tables on this enum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlanetId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    /// All bodies in registry iteration order (stable; ties in the nearest
    /// scan resolve to the earlier entry).
    pub const ALL: [PlanetId; 9] = [
        PlanetId::Sun,
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlanetId::Sun => "Sun",
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }

    /// Visual sphere radius in world units.
    pub fn size(&self) -> f32 {
        match self {
            PlanetId::Sun => 20.0,
            PlanetId::Mercury => 3.8,
            PlanetId::Venus => 9.5,
            PlanetId::Earth => 10.0,
            PlanetId::Mars => 5.3,
            PlanetId::Jupiter => 19.8,
            PlanetId::Saturn => 16.6,
            PlanetId::Uranus => 14.2,
            PlanetId::Neptune => 13.8,
        }
    }

    /// Base material color in linear RGB.
    pub fn color(&self) -> [f32; 3] {
        match self {
            PlanetId::Sun => [1.0, 1.0, 0.0],
            PlanetId::Mercury => [0.533, 0.533, 0.533],
            PlanetId::Venus => [1.0, 0.843, 0.0],
            PlanetId::Earth => [0.133, 0.2, 1.0],
            PlanetId::Mars => [1.0, 0.267, 0.0],
            PlanetId::Jupiter => [1.0, 0.667, 0.533],
            PlanetId::Saturn => [1.0, 0.8, 0.6],
            PlanetId::Uranus => [0.6, 1.0, 1.0],
            PlanetId::Neptune => [0.2, 0.2, 1.0],
        }
    }

    /// Orbit radius in world units (0 for the Sun).
    pub fn orbit_radius(&self) -> f32 {
        match self {
            PlanetId::Sun => 0.0,
            PlanetId::Mercury => 40.0,
            PlanetId::Venus => 70.0,
            PlanetId::Earth => 100.0,
            PlanetId::Mars => 150.0,
            PlanetId::Jupiter => 200.0,
            PlanetId::Saturn => 250.0,
            PlanetId::Uranus => 300.0,
            PlanetId::Neptune => 350.0,
        }
    }

    /// Orbital angular speed in radians per tick.
    pub fn orbit_speed(&self) -> f32 {
        match self {
            PlanetId::Sun => 0.0,
            PlanetId::Mercury => 0.04,
            PlanetId::Venus => 0.015,
            PlanetId::Earth => 0.01,
            PlanetId::Mars => 0.008,
            PlanetId::Jupiter => 0.002,
            PlanetId::Saturn => 0.0009,
            PlanetId::Uranus => 0.0004,
            PlanetId::Neptune => 0.0001,
        }
    }

    /// Self-rotation angular speed in radians per tick.
    pub fn rotation_speed(&self) -> f32 {
        match self {
            PlanetId::Sun => 0.002,
            PlanetId::Mercury => 0.004,
            PlanetId::Venus => 0.002,
            PlanetId::Earth => 0.02,
            PlanetId::Mars => 0.018,
            PlanetId::Jupiter => 0.04,
            PlanetId::Saturn => 0.038,
            PlanetId::Uranus => 0.03,
            PlanetId::Neptune => 0.032,
        }
    }

    pub fn is_sun(&self) -> bool {
        matches!(self, PlanetId::Sun)
    }
}

/// A solar-system body in the registry: identity plus mutable per-tick state.
#[derive(Clone, Debug)]
pub struct PlanetBody {
    pub id: PlanetId,
    /// Orbital angle in radians, wrapped to `[0, 2π)`.
    pub angle: f32,
    /// Self-rotation accumulator in radians, wrapped to `[0, 2π)`.
    pub rotation: f32,
    /// Current world position on the ecliptic plane.
    pub position: Vec3,
    /// Material opacity in `[0, 1]`.
    pub opacity: f32,
    /// Opacity of the derived orbit ring.
    pub orbit_line_opacity: f32,
    /// Whether the text label should be shown this frame.
    pub label_visible: bool,
}

impl PlanetBody {
    /// Create a body at a random starting point along its orbit.
    pub fn generate(id: PlanetId, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        Self {
            id,
            angle,
            rotation: 0.0,
            position: orbit_position(id.orbit_radius(), angle),
            opacity: 1.0,
            orbit_line_opacity: ORBIT_LINE_FACTOR,
            label_visible: true,
        }
    }

    /// Advance one tick: orbit, spin, and distance fade.
    ///
    /// The Sun is pinned at the origin and always fully opaque.
    pub(crate) fn tick(&mut self, camera_distance: f32) {
        if self.id.is_sun() {
            return;
        }

        self.angle = wrap_angle(self.angle + self.id.orbit_speed());
        self.position = orbit_position(self.id.orbit_radius(), self.angle);
        self.rotation = wrap_angle(self.rotation + self.id.rotation_speed());

        let opacity = solar_opacity(camera_distance);
        self.opacity = opacity;
        self.orbit_line_opacity = opacity * ORBIT_LINE_FACTOR;
        self.label_visible = opacity > LABEL_VISIBILITY_MIN;
    }

    /// The static ring of points tracing this body's orbit, for line
    /// rendering. Empty for the Sun.
    pub fn orbit_ring(&self) -> Vec<Vec3> {
        if self.id.is_sun() {
            return Vec::new();
        }
        let radius = self.id.orbit_radius();
        (0..=ORBIT_RING_SEGMENTS)
            .map(|i| {
                let theta = i as f32 / ORBIT_RING_SEGMENTS as f32 * TAU;
                orbit_position(radius, theta)
            })
            .collect()
    }
}

/// Position on a circular orbit of the given radius at the given angle.
fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_orbit_radii_increase_outward() {
        let mut prev = -1.0;
        for id in PlanetId::ALL {
            let r = id.orbit_radius();
            assert!(r > prev, "{} orbit radius {r} not beyond previous {prev}", id.label());
            prev = r;
        }
    }

    #[test]
    fn test_planet_stays_on_orbit_circle() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut earth = PlanetBody::generate(PlanetId::Earth, &mut rng);
        for _ in 0..500 {
            earth.tick(0.0);
            let r = earth.position.length();
            assert!(
                (r - 100.0).abs() < 1e-3,
                "Earth left its orbit circle: radius {r}"
            );
            assert_eq!(earth.position.y, 0.0);
        }
    }

    #[test]
    fn test_sun_is_pinned_and_opaque() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut sun = PlanetBody::generate(PlanetId::Sun, &mut rng);
        for _ in 0..100 {
            sun.tick(5000.0);
        }
        assert_eq!(sun.position, Vec3::ZERO);
        assert_eq!(sun.opacity, 1.0);
    }

    #[test]
    fn test_fade_out_with_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut mars = PlanetBody::generate(PlanetId::Mars, &mut rng);

        mars.tick(0.0);
        assert!((mars.opacity - 1.0).abs() < 1e-3);
        assert!(mars.label_visible);

        mars.tick(1000.0);
        assert!((mars.opacity - 0.5).abs() < 1e-3, "got {}", mars.opacity);
        assert!(
            (mars.orbit_line_opacity - 0.15).abs() < 1e-3,
            "orbit line should be 0.3x planet opacity, got {}",
            mars.orbit_line_opacity
        );

        mars.tick(2000.0);
        assert_eq!(mars.opacity, 0.0);
        assert!(!mars.label_visible);
    }

    #[test]
    fn test_label_hides_below_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut venus = PlanetBody::generate(PlanetId::Venus, &mut rng);
        // opacity 1 - 1850/2000 = 0.075, under the 0.1 label floor
        venus.tick(1850.0);
        assert!(venus.opacity > 0.0);
        assert!(!venus.label_visible);
    }

    #[test]
    fn test_orbit_ring_closed_loop() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let neptune = PlanetBody::generate(PlanetId::Neptune, &mut rng);
        let ring = neptune.orbit_ring();
        assert_eq!(ring.len(), ORBIT_RING_SEGMENTS + 1);
        let first = ring.first().unwrap();
        let last = ring.last().unwrap();
        assert!((*first - *last).length() < 1e-3, "ring should close on itself");
        for p in &ring {
            assert!((p.length() - 350.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_sun_has_no_orbit_ring() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let sun = PlanetBody::generate(PlanetId::Sun, &mut rng);
        assert!(sun.orbit_ring().is_empty());
    }

    #[test]
    fn test_angles_remain_wrapped() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut mercury = PlanetBody::generate(PlanetId::Mercury, &mut rng);
        for _ in 0..10_000 {
            mercury.tick(0.0);
            assert!((0.0..TAU).contains(&mercury.angle));
            assert!((0.0..TAU).contains(&mercury.rotation));
        }
    }
}
