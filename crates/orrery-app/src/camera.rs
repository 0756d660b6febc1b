//! Damped orbit camera pinned to the solar-system origin.
//!
//! Input writes desired spherical coordinates; each frame the actual
//! coordinates chase the desired ones by the damping factor, which gives the
//! characteristic eased glide when the user releases the mouse.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use orrery_config::CameraConfig;

/// Pitch never quite reaches the poles, so the up vector stays well defined.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Auto-rotate yaw speed in radians per frame at 60 Hz.
const AUTO_ROTATE_SPEED: f32 = 0.0017;

/// Orbit camera state in spherical coordinates around a target point.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    desired_yaw: f32,
    desired_pitch: f32,
    desired_distance: f32,
    target: Vec3,
    aspect: f32,
    fov_y_degrees: f32,
    near: f32,
    far: f32,
    min_distance: f32,
    max_distance: f32,
    damping_enabled: bool,
    damping_factor: f32,
    auto_rotate: bool,
    allow_pan: bool,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let start = Vec3::from_array(config.start_position);
        let distance = start.length().clamp(config.min_distance, config.max_distance);
        let yaw = start.z.atan2(start.x);
        let pitch = if distance > 0.0 {
            (start.y / start.length()).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT)
        } else {
            0.0
        };

        Self {
            yaw,
            pitch,
            distance,
            desired_yaw: yaw,
            desired_pitch: pitch,
            desired_distance: distance,
            target: Vec3::ZERO,
            aspect,
            fov_y_degrees: config.fov_y_degrees,
            near: config.near,
            far: config.far,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping_enabled: config.damping_enabled,
            damping_factor: config.damping_factor,
            auto_rotate: config.auto_rotate,
            allow_pan: config.allow_pan,
        }
    }

    /// Rotate the desired view by the given yaw/pitch deltas in radians.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.desired_yaw += delta_yaw;
        self.desired_pitch = (self.desired_pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the desired distance, clamped to the configured range.
    pub fn zoom(&mut self, factor: f32) {
        self.desired_distance =
            (self.desired_distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Shift the orbit target. Ignored unless panning is enabled, so by
    /// default the camera stays locked on the Sun.
    pub fn pan(&mut self, delta: Vec3) {
        if self.allow_pan {
            self.target += delta;
        }
    }

    /// Advance the camera one frame: apply auto-rotate, then chase the
    /// desired coordinates.
    pub fn update(&mut self) {
        if self.auto_rotate {
            self.desired_yaw += AUTO_ROTATE_SPEED;
        }

        if self.damping_enabled {
            let k = self.damping_factor;
            self.yaw += (self.desired_yaw - self.yaw) * k;
            self.pitch += (self.desired_pitch - self.pitch) * k;
            self.distance += (self.desired_distance - self.distance) * k;
        } else {
            self.yaw = self.desired_yaw;
            self.pitch = self.desired_pitch;
            self.distance = self.desired_distance;
        }
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// World-space camera position.
    pub fn position(&self) -> Vec3 {
        let flat = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                flat * self.yaw.cos(),
                self.distance * self.pitch.sin(),
                flat * self.yaw.sin(),
            )
    }

    /// Distance from the world origin, the input every fade curve keys on.
    /// With panning disabled this equals the orbit distance.
    pub fn distance_from_origin(&self) -> f32 {
        self.position().length()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}
