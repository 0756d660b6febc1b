//! Angle bookkeeping for the per-tick accumulators.

use std::f32::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
///
/// Orbit and rotation angles grow by a fixed increment every tick and are
/// only ever fed to trigonometric functions, so wrapping after each increment
/// keeps them small without changing any observable position. Left unwrapped
/// they would lose float precision over very long sessions.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the remainder rounds up.
    if wrapped >= TAU { 0.0 } else { wrapped }
}
