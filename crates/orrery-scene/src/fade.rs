//! Distance-keyed fade policy: pure functions from camera distance to
//! opacity, one linear ramp per zoom level.
//!
//! Every object category reads one of the bands below. Solar-system objects
//! fade *out* as the camera pulls away; everything beyond the belt fades *in*
//! across its own band, scaled or capped by a per-category ceiling. All
//! results are clamped so an opacity never leaves `[0, ceiling]`.

/// A `[start, end]` camera-distance interval defining a linear fade ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeBand {
    /// Distance at which the ramp begins (factor 0 for fade-in).
    pub start: f32,
    /// Distance at which the ramp saturates (factor 1 for fade-in).
    pub end: f32,
}

/// Inner solar system: planets, orbit lines, labels.
pub const SOLAR_SYSTEM: FadeBand = FadeBand::new(0.0, 2000.0);
/// Nebulas and gas clouds.
pub const NEBULA: FadeBand = FadeBand::new(3000.0, 6000.0);
/// Nearby galaxy clusters.
pub const NEARBY_GALAXIES: FadeBand = FadeBand::new(5000.0, 9000.0);
/// Distant galaxy clusters.
pub const DISTANT_GALAXIES: FadeBand = FadeBand::new(8000.0, 14000.0);
/// Universe background shell.
pub const UNIVERSE: FadeBand = FadeBand::new(12000.0, 20000.0);

/// Ceiling multiplier for nebula opacity.
pub const NEBULA_CEILING: f32 = 0.5;
/// Ceiling multiplier for gas cloud opacity.
pub const GAS_CLOUD_CEILING: f32 = 0.15;
/// Ceiling multiplier for nearby galaxy opacity.
pub const NEARBY_GALAXY_CEILING: f32 = 0.8;
/// Ceiling multiplier for distant galaxy opacity.
pub const DISTANT_GALAXY_CEILING: f32 = 0.5;
/// Hard cap on universe shell opacity.
pub const SHELL_CEILING: f32 = 0.3;
/// Orbit lines render at this fraction of their planet's opacity.
pub const ORBIT_LINE_FACTOR: f32 = 0.3;
/// Planet labels hide once their planet drops below this opacity.
pub const LABEL_VISIBILITY_MIN: f32 = 0.1;

impl FadeBand {
    /// Construct a band from its two boundary distances.
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Linear fade-in factor in `[0, 1]`: 0 at or below `start`, 1 at or
    /// above `end`.
    ///
    /// A degenerate band (`end <= start`) acts as a step function: 0 below
    /// `start`, 1 at or above it. This keeps the policy total instead of
    /// dividing by zero.
    pub fn fade_in(&self, distance: f32) -> f32 {
        if self.end <= self.start {
            return if distance < self.start { 0.0 } else { 1.0 };
        }
        ((distance - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Linear fade-out factor in `[0, 1]`: the complement of
    /// [`fade_in`](Self::fade_in).
    pub fn fade_out(&self, distance: f32) -> f32 {
        1.0 - self.fade_in(distance)
    }
}

/// Opacity of solar-system objects at the given camera distance: fully
/// visible at the origin, gone at the solar-system band's far edge.
pub fn solar_opacity(camera_distance: f32) -> f32 {
    SOLAR_SYSTEM.fade_out(camera_distance)
}

/// Camera distance at which the asteroid belt begins fading.
pub const BELT_FADE_START: f32 = 1000.0;
/// Distance span over which the belt fade runs.
pub const BELT_FADE_RANGE: f32 = 2000.0;
/// Visibility boost keeping the belt readable after the planets are gone.
pub const BELT_VISIBILITY_BOOST: f32 = 1.5;

/// Opacity of asteroid belt members at the given camera distance.
///
/// The belt uses its own fixed near/far pair rather than the named bands,
/// and a boost factor so it stays more persistently visible than planets.
pub fn belt_opacity(camera_distance: f32) -> f32 {
    let ramp = (1.0 - (camera_distance - BELT_FADE_START) / BELT_FADE_RANGE).max(0.0);
    (ramp * BELT_VISIBILITY_BOOST).min(1.0)
}
