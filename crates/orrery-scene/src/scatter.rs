//! Randomized placement helpers shared by the construction code.

use glam::Vec3;
use rand::Rng;

/// Sample a point inside a spherical shell between `min_radius` and
/// `max_radius`, using independent uniform draws for radius and the two
/// angles. Deliberately not area-uniform; the slight pole clustering reads
/// fine for background scatter.
pub(crate) fn shell_point(rng: &mut impl Rng, min_radius: f32, max_radius: f32) -> Vec3 {
    let radius = rng.random_range(min_radius..max_radius);
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    let phi = rng.random_range(0.0..std::f32::consts::PI);

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Sample uniformly in `[-half_range, half_range]`.
pub(crate) fn spread(rng: &mut impl Rng, half_range: f32) -> f32 {
    rng.random_range(-half_range..half_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_shell_point_radius_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = shell_point(&mut rng, 400.0, 3000.0);
            let r = p.length();
            assert!(
                (399.0..=3001.0).contains(&r),
                "shell point radius {r} outside [400, 3000]"
            );
        }
    }

    #[test]
    fn test_shell_points_cover_both_hemispheres() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let points: Vec<Vec3> = (0..500).map(|_| shell_point(&mut rng, 100.0, 200.0)).collect();
        let above = points.iter().filter(|p| p.z > 0.0).count();
        assert!(
            (100..400).contains(&above),
            "expected points on both sides of the equator, {above}/500 above"
        );
    }

    #[test]
    fn test_spread_symmetric_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = spread(&mut rng, 50.0);
            assert!((-50.0..=50.0).contains(&v), "spread value {v} out of bounds");
        }
    }
}
