//! Deep-sky objects: galaxy clusters, the universe background shell, and
//! the black hole.

use glam::Vec3;
use rand::Rng;

use crate::angle::wrap_angle;
use crate::fade::{
    DISTANT_GALAXIES, DISTANT_GALAXY_CEILING, NEARBY_GALAXIES, NEARBY_GALAXY_CEILING,
    SHELL_CEILING, UNIVERSE, FadeBand,
};
use crate::scatter::{shell_point, spread};

/// Galaxy cluster subtype; each has its own fade band, ceiling, and
/// placement shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GalaxyKind {
    Nearby,
    Distant,
}

impl GalaxyKind {
    /// The fade band this subtype reads.
    pub fn band(&self) -> FadeBand {
        match self {
            GalaxyKind::Nearby => NEARBY_GALAXIES,
            GalaxyKind::Distant => DISTANT_GALAXIES,
        }
    }

    /// Maximum opacity for this subtype.
    pub fn ceiling(&self) -> f32 {
        match self {
            GalaxyKind::Nearby => NEARBY_GALAXY_CEILING,
            GalaxyKind::Distant => DISTANT_GALAXY_CEILING,
        }
    }
}

/// A galaxy cluster: a single tinted sphere spinning slowly about Y.
#[derive(Clone, Debug)]
pub struct GalaxyCluster {
    pub kind: GalaxyKind,
    pub position: Vec3,
    /// Sphere radius in world units.
    pub size: f32,
    /// Tint in linear RGB, drawn from a random hue.
    pub color: [f32; 3],
    /// Y-axis rotation accumulator, radians.
    pub rotation: f32,
    /// Y-axis rotation speed, radians per tick.
    pub rotation_speed: f32,
    /// Opacity in `[0, ceiling]`.
    pub opacity: f32,
}

impl GalaxyCluster {
    pub fn generate(rng: &mut impl Rng, kind: GalaxyKind) -> Self {
        let (size, position, color, rotation_speed) = match kind {
            GalaxyKind::Nearby => (
                rng.random_range(200.0..400.0),
                shell_point(rng, 4000.0, 7000.0),
                hsl_to_rgb(rng.random(), 0.7, 0.4),
                spread(rng, 0.00005),
            ),
            GalaxyKind::Distant => (
                rng.random_range(100.0..200.0),
                shell_point(rng, 7000.0, 12000.0),
                hsl_to_rgb(rng.random(), 0.6, 0.3),
                spread(rng, 0.000025),
            ),
        };
        Self {
            kind,
            position,
            size,
            color,
            rotation: 0.0,
            rotation_speed,
            opacity: 0.0,
        }
    }

    /// Advance one tick: fade against the subtype band, keep spinning.
    pub(crate) fn tick(&mut self, camera_distance: f32) {
        self.opacity = self.kind.band().fade_in(camera_distance) * self.kind.ceiling();
        self.rotation = wrap_angle(self.rotation + self.rotation_speed);
    }
}

/// Convert an HSL color (all components in `[0, 1]`) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue = |mut t: f32| -> f32 {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}

/// The outermost background: a huge back-facing sphere that fades in across
/// the universe band and never exceeds its hard cap.
#[derive(Clone, Debug)]
pub struct UniverseShell {
    /// Shell radius in world units.
    pub radius: f32,
    /// Deep blue tint in linear RGB.
    pub color: [f32; 3],
    /// Opacity in `[0, 0.3]`.
    pub opacity: f32,
}

impl UniverseShell {
    pub fn new() -> Self {
        Self {
            radius: 15000.0,
            color: [0.0, 0.0, 0.4],
            opacity: 0.0,
        }
    }

    /// The shell fade is a cap, not a multiplier: the ramp rises linearly
    /// and is simply cut off at the ceiling.
    pub(crate) fn tick(&mut self, camera_distance: f32) {
        self.opacity = UNIVERSE.fade_in(camera_distance).min(SHELL_CEILING);
    }
}

impl Default for UniverseShell {
    fn default() -> Self {
        Self::new()
    }
}

/// The black hole: event horizon, accretion disk, and pulsing glow at a
/// fixed position well outside the solar system.
#[derive(Clone, Debug)]
pub struct BlackHole {
    pub position: Vec3,
    /// Whole-group yaw accumulator, radians.
    pub yaw: f32,
    /// Accretion disk spin accumulator, radians.
    pub disk_spin: f32,
    /// Glow opacity, pulsing around its base value.
    pub glow_opacity: f32,
}

impl BlackHole {
    /// Event horizon sphere radius.
    pub const HORIZON_RADIUS: f32 = 100.0;
    /// Event horizon opacity (static).
    pub const HORIZON_OPACITY: f32 = 0.9;
    /// Accretion disk annulus inner radius.
    pub const DISK_INNER_RADIUS: f32 = 150.0;
    /// Accretion disk annulus outer radius.
    pub const DISK_OUTER_RADIUS: f32 = 400.0;
    /// Accretion disk opacity (static).
    pub const DISK_OPACITY: f32 = 0.6;
    /// Glow sphere radius.
    pub const GLOW_RADIUS: f32 = 120.0;
    /// Glow base opacity; the pulse swings ±0.1 around this.
    pub const GLOW_BASE_OPACITY: f32 = 0.3;

    /// Whole-group yaw speed, radians per tick.
    pub const YAW_SPEED: f32 = 0.001;
    /// Disk spin speed, radians per tick.
    pub const DISK_SPIN_SPEED: f32 = 0.002;

    pub fn new() -> Self {
        Self {
            position: Vec3::new(3000.0, 500.0, -2000.0),
            yaw: 0.0,
            disk_spin: 0.0,
            glow_opacity: Self::GLOW_BASE_OPACITY,
        }
    }

    /// Advance one tick. The glow pulse is a pure function of wall-clock
    /// seconds, so its phase is independent of the tick rate.
    pub(crate) fn tick(&mut self, time_secs: f64) {
        self.yaw = wrap_angle(self.yaw + Self::YAW_SPEED);
        self.disk_spin = wrap_angle(self.disk_spin + Self::DISK_SPIN_SPEED);
        self.glow_opacity = Self::GLOW_BASE_OPACITY + ((time_secs * 2.0).sin() as f32) * 0.1;
    }
}

impl Default for BlackHole {
    fn default() -> Self {
        Self::new()
    }
}
