use glam::{Mat4, Vec3};

use super::pose::CameraPose;
use super::PoseSink;

/// Perspective view camera driven by emitted poses.
///
/// The controller writes poses; this turns them into matrices a renderer can
/// consume. World space is right-handed with Z up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            forward: Vec3::X,
            up: Vec3::Z,
            aspect: 16.0 / 9.0,
            fovy: 45.0,
            znear: 10.0,
            zfar: 20000.0,
        }
    }
}

impl ViewCamera {
    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl PoseSink for ViewCamera {
    fn set_camera_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.forward = pose.orientation.forward();
        self.up = pose.orientation.up();
    }
}
