//! Scene core for the Orrery viewer: celestial object registry, the
//! distance-keyed fade policy, and the per-tick motion integrator.
//!
//! Everything here is deterministic: construction randomness flows through a
//! seeded RNG, and the only per-frame inputs are the camera distance and
//! elapsed wall-clock seconds. Rendering is someone else's job: collaborators
//! borrow the [`Universe`] read-only after each tick.

pub mod angle;
pub mod belt;
pub mod cloud;
pub mod comet;
pub mod deepsky;
pub mod fade;
pub mod planet;
pub mod scatter;
pub mod starfield;
pub mod universe;

pub use angle::wrap_angle;
pub use belt::{BELT_INNER_RADIUS, BELT_OUTER_RADIUS, BeltMember};
pub use cloud::{CloudLayer, GasCloud, Nebula};
pub use comet::{Comet, TAIL_PARTICLE_COUNT};
pub use deepsky::{BlackHole, GalaxyCluster, GalaxyKind, UniverseShell, hsl_to_rgb};
pub use fade::{FadeBand, belt_opacity, solar_opacity};
pub use planet::{PlanetBody, PlanetId};
pub use starfield::StarPoint;
pub use universe::{NearestPlanet, ScenePopulation, Universe};
