//! Orbit-offset geometry.

use glam::Vec3;

use super::pose::{CameraPose, EulerAngles};
use crate::options::CameraOptions;

/// Fixed orbit shape: radius, height above the subject, and tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    /// Orbit radius before the pitch projection.
    pub distance: f32,
    /// Vertical offset above the subject.
    pub height: f32,
    /// Tilt in degrees. Sign only affects orientation, not placement.
    pub pitch: f32,
}

impl OrbitRig {
    /// Construct a rig from its three constants.
    #[must_use]
    pub const fn new(distance: f32, height: f32, pitch: f32) -> Self {
        Self {
            distance,
            height,
            pitch,
        }
    }

    /// Vector from the camera to the subject for the given yaw.
    ///
    /// The camera sits at `subject - offset(yaw)`. At ±90° pitch the planar
    /// component collapses to zero and yaw has no visible effect.
    #[must_use]
    pub fn offset(&self, yaw: f32) -> Vec3 {
        let planar = self.distance * self.pitch.to_radians().cos();
        let (sy, cy) = yaw.to_radians().sin_cos();
        Vec3::new(planar * cy, planar * sy, -self.height)
    }

    /// Camera position for a subject at `subject` and the given yaw.
    #[must_use]
    pub fn destination(&self, subject: Vec3, yaw: f32) -> Vec3 {
        subject - self.offset(yaw)
    }

    /// Orientation that looks along the orbit at `yaw`.
    #[must_use]
    pub fn orientation(&self, yaw: f32) -> EulerAngles {
        EulerAngles::new(self.pitch, yaw, 0.0)
    }

    /// Fully settled pose: on the orbit at `yaw`, facing along it.
    #[must_use]
    pub fn settled_pose(&self, subject: Vec3, yaw: f32) -> CameraPose {
        CameraPose::new(self.destination(subject, yaw), self.orientation(yaw))
    }
}

impl From<&CameraOptions> for OrbitRig {
    fn from(opts: &CameraOptions) -> Self {
        Self::new(opts.distance, opts.height, opts.pitch)
    }
}
