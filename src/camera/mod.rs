//! Orbit camera: controller state machine, orbit geometry, and pose output.
//!
//! The controller owns no rendering state. Each frame it reads the followed
//! subject's position through [`SubjectPositions`](crate::scene::SubjectPositions)
//! and writes one [`CameraPose`] to a [`PoseSink`].

/// Eased orbit camera state machine.
pub mod controller;
/// View camera that turns poses into matrices.
pub mod core;
/// Orbit-offset geometry.
pub mod orbit;
/// Pose and Euler-angle types.
pub mod pose;

pub use controller::OrbitCameraController;
pub use self::core::ViewCamera;
pub use orbit::OrbitRig;
pub use pose::{CameraPose, EulerAngles};

/// Receiver for the pose emitted on each frame.
pub trait PoseSink {
    /// Apply `pose` to the rendered viewpoint.
    fn set_camera_pose(&mut self, pose: CameraPose);
}

impl PoseSink for CameraPose {
    fn set_camera_pose(&mut self, pose: CameraPose) {
        *self = pose;
    }
}

impl<S: PoseSink + ?Sized> PoseSink for &mut S {
    fn set_camera_pose(&mut self, pose: CameraPose) {
        (**self).set_camera_pose(pose);
    }
}
