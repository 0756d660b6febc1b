//! UI overlay state: the rotating space-facts carousel and the info panel
//! describing the nearest planet.
//!
//! Nothing here draws. Both components produce plain strings and field lists
//! for whatever surface ends up displaying them.

pub mod facts;
pub mod panel;

pub use facts::{FACT_ROTATION_INTERVAL, FactsCarousel, SPACE_FACTS};
pub use panel::{PanelUpdate, PlanetSheet};
