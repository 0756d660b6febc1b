//! The top-level object registry: seeded construction and the per-tick
//! integrator that walks every category in a fixed order.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::belt::BeltMember;
use crate::cloud::{GasCloud, Nebula};
use crate::comet::Comet;
use crate::deepsky::{BlackHole, GalaxyCluster, GalaxyKind, UniverseShell};
use crate::planet::{PlanetBody, PlanetId};
use crate::starfield::{StarPoint, generate_starfield};

/// How many of each scatterable object category to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenePopulation {
    pub stars: u32,
    pub nebulas: u32,
    pub gas_clouds: u32,
    pub comets: u32,
    pub asteroids: u32,
    pub nearby_galaxies: u32,
    pub distant_galaxies: u32,
}

impl Default for ScenePopulation {
    fn default() -> Self {
        Self {
            stars: 5000,
            nebulas: 8,
            gas_clouds: 15,
            comets: 5,
            asteroids: 1000,
            nearby_galaxies: 20,
            distant_galaxies: 100,
        }
    }
}

/// Result of a nearest-planet scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPlanet {
    pub id: PlanetId,
    /// Straight-line distance from the camera in world units.
    pub distance: f32,
    /// Distance from the camera to Earth specifically, in world units.
    /// Tracked in the same pass because the info panel always reports it.
    pub earth_distance: f32,
}

impl NearestPlanet {
    /// Earth distance on the display scale, in millions of kilometers.
    pub fn earth_distance_mkm(&self) -> f32 {
        self.earth_distance / KM_SCALE
    }
}

/// World units per displayed million kilometers.
const KM_SCALE: f32 = 50.0;

/// Everything in the scene. Construction is fully determined by the seed and
/// population; after that the only inputs are camera distance and time.
pub struct Universe {
    pub planets: Vec<PlanetBody>,
    pub stars: Vec<StarPoint>,
    pub nebulas: Vec<Nebula>,
    pub gas_clouds: Vec<GasCloud>,
    pub galaxies: Vec<GalaxyCluster>,
    pub shell: UniverseShell,
    pub black_hole: BlackHole,
    pub comets: Vec<Comet>,
    pub belt: Vec<BeltMember>,
}

impl Universe {
    /// Build the whole scene from one seed. The category order below is
    /// load-bearing: it fixes how the RNG stream is partitioned, so the same
    /// seed and population always produce the same universe.
    pub fn generate(seed: u64, population: ScenePopulation) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let planets = PlanetId::ALL
            .iter()
            .map(|&id| PlanetBody::generate(id, &mut rng))
            .collect();
        let stars = generate_starfield(&mut rng, population.stars);
        let nebulas = (0..population.nebulas)
            .map(|_| Nebula::generate(&mut rng))
            .collect();
        let mut galaxies: Vec<GalaxyCluster> = (0..population.nearby_galaxies)
            .map(|_| GalaxyCluster::generate(&mut rng, GalaxyKind::Nearby))
            .collect();
        galaxies.extend(
            (0..population.distant_galaxies)
                .map(|_| GalaxyCluster::generate(&mut rng, GalaxyKind::Distant)),
        );
        let shell = UniverseShell::new();
        let black_hole = BlackHole::new();
        let comets = (0..population.comets)
            .map(|_| Comet::generate(&mut rng))
            .collect();
        let belt = (0..population.asteroids)
            .map(|_| BeltMember::generate(&mut rng))
            .collect();
        let gas_clouds = (0..population.gas_clouds)
            .map(|_| GasCloud::generate(&mut rng))
            .collect();

        debug!(
            seed,
            stars = population.stars,
            asteroids = population.asteroids,
            galaxies = population.nearby_galaxies + population.distant_galaxies,
            "universe generated"
        );

        Self {
            planets,
            stars,
            nebulas,
            gas_clouds,
            galaxies,
            shell,
            black_hole,
            comets,
            belt,
        }
    }

    /// Advance the whole scene by one fixed tick.
    ///
    /// `camera_distance` keys every fade; `time_secs` is elapsed wall-clock
    /// time and only drives the pulsing effects. The starfield is static and
    /// is not visited.
    pub fn advance(&mut self, camera_distance: f32, time_secs: f64) {
        for planet in &mut self.planets {
            planet.tick(camera_distance);
        }
        self.black_hole.tick(time_secs);
        for comet in &mut self.comets {
            comet.tick();
        }
        for member in &mut self.belt {
            member.tick(camera_distance);
        }
        for cloud in &mut self.gas_clouds {
            cloud.tick(camera_distance, time_secs);
        }
        for nebula in &mut self.nebulas {
            nebula.tick(camera_distance);
        }
        for galaxy in &mut self.galaxies {
            galaxy.tick(camera_distance);
        }
        self.shell.tick(camera_distance);
    }

    /// Find the planet closest to the camera, excluding the Sun.
    ///
    /// Ties resolve to the earlier body in registry order (the strict `<`
    /// keeps the first minimum found).
    pub fn nearest_planet(&self, camera_position: Vec3) -> Option<NearestPlanet> {
        let mut nearest: Option<(PlanetId, f32)> = None;
        let mut earth_distance = f32::INFINITY;
        for planet in &self.planets {
            if planet.id.is_sun() {
                continue;
            }
            let distance = (planet.position - camera_position).length();
            if planet.id == PlanetId::Earth {
                earth_distance = distance;
            }
            if nearest.map_or(true, |(_, d)| distance < d) {
                nearest = Some((planet.id, distance));
            }
        }
        nearest.map(|(id, distance)| NearestPlanet {
            id,
            distance,
            earth_distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_counts_respected() {
        let population = ScenePopulation {
            stars: 100,
            nebulas: 3,
            gas_clouds: 4,
            comets: 2,
            asteroids: 50,
            nearby_galaxies: 5,
            distant_galaxies: 7,
        };
        let universe = Universe::generate(1, population);
        assert_eq!(universe.planets.len(), 9);
        assert_eq!(universe.stars.len(), 100);
        assert_eq!(universe.nebulas.len(), 3);
        assert_eq!(universe.gas_clouds.len(), 4);
        assert_eq!(universe.comets.len(), 2);
        assert_eq!(universe.belt.len(), 50);
        assert_eq!(universe.galaxies.len(), 12);
    }

    #[test]
    fn test_same_seed_same_universe() {
        let a = Universe::generate(99, ScenePopulation::default());
        let b = Universe::generate(99, ScenePopulation::default());
        for (pa, pb) in a.planets.iter().zip(b.planets.iter()) {
            assert_eq!(pa.angle, pb.angle, "{} differs between seeds", pa.id.label());
        }
        for (ca, cb) in a.comets.iter().zip(b.comets.iter()) {
            assert_eq!(ca.orbit_radius, cb.orbit_radius);
        }
        for (na, nb) in a.nebulas.iter().zip(b.nebulas.iter()) {
            assert_eq!(na.position, nb.position);
        }
    }

    #[test]
    fn test_nearest_excludes_sun() {
        let universe = Universe::generate(3, ScenePopulation::default());
        // Right at the origin the Sun is trivially closest, but must never win.
        let nearest = universe.nearest_planet(Vec3::ZERO);
        let nearest = nearest.unwrap();
        assert_ne!(nearest.id, PlanetId::Sun);
    }

    #[test]
    fn test_nearest_picks_closest_body() {
        let universe = Universe::generate(3, ScenePopulation::default());
        let camera = Vec3::new(5000.0, 0.0, 0.0);
        let nearest = universe.nearest_planet(camera).unwrap();
        for planet in &universe.planets {
            if planet.id.is_sun() {
                continue;
            }
            let d = (planet.position - camera).length();
            assert!(
                nearest.distance <= d,
                "{} at {d} beats reported nearest {} at {}",
                planet.id.label(),
                nearest.id.label(),
                nearest.distance
            );
        }
    }

    #[test]
    fn test_nearest_reports_earth_distance() {
        let universe = Universe::generate(3, ScenePopulation::default());
        let camera = Vec3::new(0.0, 2000.0, 0.0);
        let nearest = universe.nearest_planet(camera).unwrap();
        let earth = universe
            .planets
            .iter()
            .find(|p| p.id == PlanetId::Earth)
            .unwrap();
        let expected = (earth.position - camera).length();
        assert!(
            (nearest.earth_distance - expected).abs() < 1e-3,
            "earth distance {} != {expected}",
            nearest.earth_distance
        );
        assert!(
            (nearest.earth_distance_mkm() - expected / 50.0).abs() < 1e-4,
            "display scale should be world distance / 50"
        );
    }

    #[test]
    fn test_advance_touches_every_dynamic_category() {
        let mut universe = Universe::generate(7, ScenePopulation::default());
        let planet_angle = universe.planets[3].angle;
        let comet_angle = universe.comets[0].angle;
        let belt_angle = universe.belt[0].angle;
        let star = universe.stars[0].position;

        for i in 0..10 {
            universe.advance(10_000.0, i as f64 / 60.0);
        }

        assert_ne!(universe.planets[3].angle, planet_angle);
        assert_ne!(universe.comets[0].angle, comet_angle);
        assert_ne!(universe.belt[0].angle, belt_angle);
        assert!(universe.shell.opacity == 0.0, "shell still dark at 10k");
        assert!(universe.nebulas[0].opacity > 0.0);
        assert_eq!(universe.stars[0].position, star, "starfield must stay static");
    }
}
