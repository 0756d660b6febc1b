//! Nebulas and gas clouds: layered translucent sphere groups that fade in
//! as the camera leaves the solar system.

use glam::Vec3;
use rand::Rng;

use crate::angle::wrap_angle;
use crate::fade::{GAS_CLOUD_CEILING, NEBULA, NEBULA_CEILING};
use crate::scatter::{shell_point, spread};

/// Layers per nebula group.
pub const NEBULA_LAYER_COUNT: usize = 5;
/// Layers per gas cloud group.
pub const GAS_CLOUD_LAYER_COUNT: usize = 8;

const NEBULA_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.42, 0.553],  // pink
    [0.294, 0.475, 1.0], // blue
    [0.42, 1.0, 0.62],   // green
    [1.0, 0.796, 0.42],  // gold
];

const GAS_CLOUD_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.6, 0.6], // red
    [0.6, 1.0, 0.6], // green
    [0.6, 0.6, 1.0], // blue
    [1.0, 1.0, 0.6], // yellow
];

/// One translucent sphere within a cloud group. Fixed at construction.
#[derive(Clone, Debug)]
pub struct CloudLayer {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Offset from the group center.
    pub offset: Vec3,
    /// Per-axis scale distortion.
    pub scale: Vec3,
}

impl CloudLayer {
    fn generate(
        rng: &mut impl Rng,
        radius_range: (f32, f32),
        offset_half_range: f32,
        scale_range: (f32, f32),
    ) -> Self {
        Self {
            radius: rng.random_range(radius_range.0..radius_range.1),
            offset: Vec3::new(
                spread(rng, offset_half_range),
                spread(rng, offset_half_range),
                spread(rng, offset_half_range),
            ),
            scale: Vec3::new(
                rng.random_range(scale_range.0..scale_range.1),
                rng.random_range(scale_range.0..scale_range.1),
                rng.random_range(scale_range.0..scale_range.1),
            ),
        }
    }
}

/// A nebula: five layered spheres sharing one color and one opacity,
/// rotating slowly on all three axes while visible.
#[derive(Clone, Debug)]
pub struct Nebula {
    pub position: Vec3,
    pub color: [f32; 3],
    pub layers: Vec<CloudLayer>,
    /// Accumulated rotation per axis, radians.
    pub rotation: Vec3,
    /// Rotation speed per axis, radians per tick.
    pub rotation_speed: Vec3,
    /// Shared opacity of all layers, in `[0, 0.5]`.
    pub opacity: f32,
}

impl Nebula {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let color = NEBULA_PALETTE[rng.random_range(0..NEBULA_PALETTE.len())];
        let layers = (0..NEBULA_LAYER_COUNT)
            .map(|_| CloudLayer::generate(rng, (200.0, 400.0), 50.0, (0.8, 1.2)))
            .collect();
        let position = shell_point(rng, 2000.0, 4000.0);
        let rotation_speed = Vec3::new(
            spread(rng, 0.00005),
            spread(rng, 0.00005),
            spread(rng, 0.00005),
        );
        Self {
            position,
            color,
            layers,
            rotation: Vec3::ZERO,
            rotation_speed,
            opacity: 0.0,
        }
    }

    /// Advance one tick. Opacity tracks the nebula band; rotation only
    /// advances while the group is visible at all.
    pub(crate) fn tick(&mut self, camera_distance: f32) {
        let factor = NEBULA.fade_in(camera_distance);
        self.opacity = factor * NEBULA_CEILING;

        if factor > 0.0 {
            self.rotation.x = wrap_angle(self.rotation.x + self.rotation_speed.x);
            self.rotation.y = wrap_angle(self.rotation.y + self.rotation_speed.y);
            self.rotation.z = wrap_angle(self.rotation.z + self.rotation_speed.z);
        }
    }
}

/// A gas cloud: eight layered spheres with a time-based pulsing scale.
///
/// Dimmer and closer-in than nebulas. When fully faded out the cloud skips
/// its rotation and pulse updates entirely, so invisible clouds cost nothing
/// beyond the fade check.
#[derive(Clone, Debug)]
pub struct GasCloud {
    pub position: Vec3,
    pub color: [f32; 3],
    pub layers: Vec<CloudLayer>,
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
    /// Shared opacity of all layers, in `[0, 0.15]`.
    pub opacity: f32,
    /// Whole-group pulsing scale, recomputed from wall-clock time.
    pub pulse_scale: Vec3,
}

impl GasCloud {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let color = GAS_CLOUD_PALETTE[rng.random_range(0..GAS_CLOUD_PALETTE.len())];
        let layers = (0..GAS_CLOUD_LAYER_COUNT)
            .map(|_| CloudLayer::generate(rng, (100.0, 300.0), 100.0, (0.5, 1.5)))
            .collect();
        let position = shell_point(rng, 1000.0, 3000.0);
        let rotation_speed =
            Vec3::new(spread(rng, 0.0001), spread(rng, 0.0001), spread(rng, 0.0001));
        Self {
            position,
            color,
            layers,
            rotation: Vec3::ZERO,
            rotation_speed,
            opacity: 0.0,
            pulse_scale: Vec3::ONE,
        }
    }

    /// Advance one tick using the current camera distance and elapsed
    /// wall-clock seconds (for the pulse phase).
    pub(crate) fn tick(&mut self, camera_distance: f32, time_secs: f64) {
        let factor = NEBULA.fade_in(camera_distance);
        if factor <= 0.0 {
            self.opacity = 0.0;
            return;
        }

        self.opacity = factor * GAS_CLOUD_CEILING;

        self.rotation.x = wrap_angle(self.rotation.x + self.rotation_speed.x);
        self.rotation.y = wrap_angle(self.rotation.y + self.rotation_speed.y);
        self.rotation.z = wrap_angle(self.rotation.z + self.rotation_speed.z);

        let t = time_secs;
        self.pulse_scale = Vec3::new(
            1.0 + (t.sin() as f32) * 0.1,
            1.0 + ((t * 1.1).cos() as f32) * 0.1,
            1.0 + ((t * 0.9).sin() as f32) * 0.1,
        );
    }
}
