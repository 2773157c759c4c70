//! Camera pose: world position plus Euler orientation in degrees.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::util::angle::normalize_axis;

/// Per-axis deltas smaller than this (degrees) snap straight to the target.
const SNAP_EPSILON: f32 = 1e-4;

/// Orientation as pitch/yaw/roll in degrees.
///
/// Z is up. Yaw turns counter-clockwise about +Z viewed from above, with
/// yaw 0 looking along +X. Positive pitch looks up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the right axis, degrees.
    pub pitch: f32,
    /// Rotation about +Z, degrees.
    pub yaw: f32,
    /// Rotation about the forward axis, degrees.
    pub roll: f32,
}

impl EulerAngles {
    /// Construct from pitch, yaw and roll in degrees.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Every component folded into (-180, 180].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }

    /// Step toward `target` at `speed` over `dt` seconds.
    ///
    /// Each axis moves along its shortest arc by `clamp(dt * speed, 0, 1)`
    /// of the remaining delta, so convergence is rate-controlled rather than
    /// fixed-duration. A zero `dt` (paused frame) leaves the orientation
    /// where it is; otherwise a non-positive `speed` jumps straight to
    /// `target`.
    #[must_use]
    pub fn interp_to(self, target: Self, dt: f32, speed: f32) -> Self {
        if dt == 0.0 || self == target {
            return self;
        }
        if speed <= 0.0 {
            return target;
        }

        let delta = Self {
            pitch: normalize_axis(target.pitch - self.pitch),
            yaw: normalize_axis(target.yaw - self.yaw),
            roll: normalize_axis(target.roll - self.roll),
        };
        if delta.pitch.abs() < SNAP_EPSILON
            && delta.yaw.abs() < SNAP_EPSILON
            && delta.roll.abs() < SNAP_EPSILON
        {
            return target;
        }

        let alpha = (dt * speed).clamp(0.0, 1.0);
        Self {
            pitch: self.pitch + delta.pitch * alpha,
            yaw: self.yaw + delta.yaw * alpha,
            roll: self.roll + delta.roll * alpha,
        }
        .normalized()
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Unit up direction, accounting for roll.
    #[must_use]
    pub fn up(self) -> Vec3 {
        let forward = self.forward();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        // Horizontal right vector is independent of pitch.
        let right = Vec3::new(sy, -cy, 0.0);
        let level_up = right.cross(forward);
        let (sr, cr) = self.roll.to_radians().sin_cos();
        level_up * cr + right * sr
    }
}

/// A camera position and orientation, as written to a [`PoseSink`].
///
/// [`PoseSink`]: super::PoseSink
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    /// World-space eye position.
    pub position: Vec3,
    /// View orientation.
    pub orientation: EulerAngles,
}

impl CameraPose {
    /// Construct a pose.
    #[must_use]
    pub const fn new(position: Vec3, orientation: EulerAngles) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_interp_zero_speed_snaps() {
        let from = EulerAngles::new(0.0, 0.0, 0.0);
        let to = EulerAngles::new(-30.0, 90.0, 0.0);
        assert_eq!(from.interp_to(to, 0.016, 0.0), to);
    }

    #[test]
    fn test_interp_zero_dt_holds_current() {
        let from = EulerAngles::new(-35.0, 0.0, 0.0);
        let to = EulerAngles::new(-35.0, 90.0, 0.0);
        assert_eq!(from.interp_to(to, 0.0, 0.0), from);
        assert_eq!(from.interp_to(to, 0.0, 5.0), from);
    }

    #[test]
    fn test_interp_partial_step() {
        let from = EulerAngles::new(0.0, 0.0, 0.0);
        let to = EulerAngles::new(0.0, 90.0, 0.0);
        // alpha = 0.1 * 2.0 = 0.2
        let step = from.interp_to(to, 0.1, 2.0);
        assert!(approx(step.yaw, 18.0));
        assert!(approx(step.pitch, 0.0));
    }

    #[test]
    fn test_interp_alpha_clamps_to_target() {
        let from = EulerAngles::new(10.0, 20.0, 0.0);
        let to = EulerAngles::new(-30.0, 90.0, 0.0);
        let step = from.interp_to(to, 1.0, 50.0);
        assert!(approx(step.pitch, -30.0));
        assert!(approx(step.yaw, 90.0));
    }

    #[test]
    fn test_interp_takes_shortest_arc() {
        let from = EulerAngles::new(0.0, 170.0, 0.0);
        let to = EulerAngles::new(0.0, -170.0, 0.0);
        // Shortest arc is +20 degrees through 180, not -340.
        let step = from.interp_to(to, 0.5, 1.0);
        assert!(approx(step.yaw, 180.0));
    }

    #[test]
    fn test_forward_axes() {
        let f = EulerAngles::new(0.0, 0.0, 0.0).forward();
        assert!((f - Vec3::X).length() < 1e-6);

        let f = EulerAngles::new(0.0, 90.0, 0.0).forward();
        assert!((f - Vec3::Y).length() < 1e-6);

        let f = EulerAngles::new(-90.0, 0.0, 0.0).forward();
        assert!((f - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_up_is_orthogonal_to_forward() {
        let angles = EulerAngles::new(-35.0, 120.0, 0.0);
        let up = angles.up();
        assert!(up.dot(angles.forward()).abs() < 1e-5);
        assert!(up.z > 0.0);
        assert!(approx(up.length(), 1.0));
    }
}
