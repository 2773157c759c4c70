use glam::Vec3;

use super::orbit::OrbitRig;
use super::pose::CameraPose;
use super::PoseSink;
use crate::error::CameraError;
use crate::input::{CameraCommand, RotateDirection};
use crate::options::CameraOptions;
use crate::scene::{SubjectId, SubjectPositions, SubjectRegistry};
use crate::util::angle::{normalize_axis, normalize_yaw};
use crate::util::easing::ease_over;

/// Eased orbit camera for third-person and tactical views.
///
/// Follows one subject at a fixed distance, height and pitch. Yaw moves in
/// fixed steps via [`rotate`](Self::rotate), the followed subject changes via
/// [`retarget`](Self::retarget), and [`advance`](Self::advance) eases the
/// emitted pose toward both targets once per frame.
///
/// Rotation and translation run on independent timers. Translation is a
/// fixed-duration lerp that lands exactly on the orbit once its timer passes
/// the ease window. Rotation re-approaches its target every frame at a rate
/// that grows with the ease curve, so it converges without a fixed end time.
#[derive(Debug, Clone)]
pub struct OrbitCameraController {
    rig: OrbitRig,
    rotation_step: f32,
    rotation_cooldown: f32,
    ease_scale: f32,
    rotation_rate: f32,
    initial_yaw: f32,

    current_yaw: f32,
    rotation_elapsed: f32,
    translation_elapsed: f32,
    followed: Option<SubjectId>,
    /// Last successfully queried subject position; used while the followed
    /// subject does not resolve.
    last_subject_position: Vec3,
    subject_lost: bool,
    last_pose: CameraPose,
}

impl OrbitCameraController {
    /// Create an uninitialized controller. Call one of the `initialize`
    /// entry points before the first [`advance`](Self::advance).
    ///
    /// Fails with [`CameraError::InvalidOptions`] when `options` would break
    /// the yaw range or the ease window.
    pub fn new(options: &CameraOptions) -> Result<Self, CameraError> {
        options.validate()?;
        Ok(Self {
            rig: OrbitRig::from(options),
            rotation_step: options.rotation_step,
            rotation_cooldown: options.rotation_cooldown,
            ease_scale: options.ease_scale,
            rotation_rate: options.rotation_rate,
            initial_yaw: options.initial_yaw,
            current_yaw: normalize_axis(options.initial_yaw),
            rotation_elapsed: 0.0,
            translation_elapsed: 0.0,
            followed: None,
            last_subject_position: Vec3::ZERO,
            subject_lost: false,
            last_pose: CameraPose::default(),
        })
    }

    // -- Initialization --

    /// Bind `subject` and snap straight to the settled orbit pose for
    /// `initial_yaw`, with no easing. Both timers restart.
    pub fn initialize(
        &mut self,
        subject: SubjectId,
        initial_yaw: f32,
        subjects: &impl SubjectPositions,
        sink: &mut impl PoseSink,
    ) -> Result<CameraPose, CameraError> {
        let position = subjects
            .position(subject)
            .ok_or(CameraError::SubjectNotFound(subject))?;

        self.followed = Some(subject);
        self.current_yaw = normalize_axis(initial_yaw);
        self.rotation_elapsed = 0.0;
        self.translation_elapsed = 0.0;
        self.last_subject_position = position;
        self.subject_lost = false;
        self.last_pose = self.rig.settled_pose(position, self.current_yaw);
        sink.set_camera_pose(self.last_pose);

        log::info!(
            "camera initialized on subject {subject} at yaw {}",
            self.current_yaw
        );
        Ok(self.last_pose)
    }

    /// Initialize against a freshly spawned placeholder subject, for preview
    /// contexts that have nothing real to follow yet. Returns the
    /// placeholder's id so the host can retarget away from it later.
    pub fn initialize_for_preview(
        &mut self,
        registry: &mut SubjectRegistry,
        sink: &mut impl PoseSink,
    ) -> Result<SubjectId, CameraError> {
        let placeholder = registry.spawn_placeholder();
        let _ = self.initialize(placeholder, self.initial_yaw, &*registry, sink)?;
        Ok(placeholder)
    }

    /// Initialize against the real subject once play begins.
    pub fn initialize_for_play(
        &mut self,
        subject: SubjectId,
        subjects: &impl SubjectPositions,
        sink: &mut impl PoseSink,
    ) -> Result<CameraPose, CameraError> {
        self.initialize(subject, self.initial_yaw, subjects, sink)
    }

    // -- Commands --

    /// Follow `subject` from now on. Position eases from wherever the camera
    /// is; yaw and the rotation timer are untouched.
    pub fn retarget(
        &mut self,
        subject: SubjectId,
        subjects: &impl SubjectPositions,
    ) -> Result<(), CameraError> {
        if self.followed.is_none() {
            return Err(CameraError::NotInitialized);
        }
        if !subjects.contains(subject) {
            return Err(CameraError::SubjectNotFound(subject));
        }
        log::debug!("camera retargeted to subject {subject}");
        self.followed = Some(subject);
        self.translation_elapsed = 0.0;
        Ok(())
    }

    /// Step the target yaw by one increment in `direction`.
    ///
    /// Ignored while less than the cooldown has passed since the last
    /// accepted rotation. Returns whether the rotation was accepted.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        // rotation_elapsed only restarts here and in initialize.
        if self.rotation_elapsed < self.rotation_cooldown {
            log::debug!(
                "rotate {direction:?} ignored ({:.2}s since last)",
                self.rotation_elapsed
            );
            return false;
        }
        self.current_yaw = normalize_yaw(
            self.current_yaw + self.rotation_step * direction.sign(),
        );
        self.rotation_elapsed = 0.0;
        log::debug!("rotate {direction:?} → target yaw {}", self.current_yaw);
        true
    }

    /// Apply a command. Returns whether it changed a target.
    pub fn execute(
        &mut self,
        command: CameraCommand,
        subjects: &impl SubjectPositions,
    ) -> Result<bool, CameraError> {
        match command {
            CameraCommand::Rotate(direction) => Ok(self.rotate(direction)),
            CameraCommand::Retarget(subject) => {
                self.retarget(subject, subjects).map(|()| true)
            }
        }
    }

    // -- Per-frame update --

    /// Advance both transitions by `delta_time` seconds and emit the new pose.
    ///
    /// Call exactly once per frame. Negative deltas count as zero.
    pub fn advance(
        &mut self,
        delta_time: f32,
        subjects: &impl SubjectPositions,
        sink: &mut impl PoseSink,
    ) -> Result<CameraPose, CameraError> {
        let followed = self.followed.ok_or(CameraError::NotInitialized)?;
        let dt = delta_time.max(0.0);

        self.rotation_elapsed += dt;
        self.translation_elapsed += dt;

        let subject_position = self.resolve_subject(followed, subjects);

        let orientation = self.last_pose.orientation.interp_to(
            self.rig.orientation(self.current_yaw),
            dt,
            self.ease(self.rotation_elapsed) * self.rotation_rate,
        );

        let destination =
            self.rig.destination(subject_position, orientation.yaw);
        let factor = self.ease(self.translation_elapsed);
        let position = if factor >= 1.0 {
            destination
        } else {
            self.last_pose.position.lerp(destination, factor)
        };

        self.last_pose = CameraPose::new(position, orientation);
        sink.set_camera_pose(self.last_pose);
        Ok(self.last_pose)
    }

    fn resolve_subject(
        &mut self,
        followed: SubjectId,
        subjects: &impl SubjectPositions,
    ) -> Vec3 {
        if let Some(position) = subjects.position(followed) {
            self.last_subject_position = position;
            self.subject_lost = false;
        } else if !self.subject_lost {
            log::warn!(
                "followed subject {followed} disappeared; holding last known position"
            );
            self.subject_lost = true;
        }
        self.last_subject_position
    }

    fn ease(&self, elapsed: f32) -> f32 {
        ease_over(elapsed, self.ease_scale)
    }

    // -- Accessors --

    /// Yaw the camera is easing toward, in (-180, 180].
    #[must_use]
    pub fn current_yaw(&self) -> f32 {
        self.current_yaw
    }

    /// Seconds since the last accepted rotation.
    #[must_use]
    pub fn rotation_elapsed(&self) -> f32 {
        self.rotation_elapsed
    }

    /// Seconds since the last retarget.
    #[must_use]
    pub fn translation_elapsed(&self) -> f32 {
        self.translation_elapsed
    }

    /// Currently followed subject, if initialized.
    #[must_use]
    pub fn followed(&self) -> Option<SubjectId> {
        self.followed
    }

    /// Whether an `initialize` entry point has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.followed.is_some()
    }

    /// Pose written on the most recent frame.
    #[must_use]
    pub fn last_pose(&self) -> CameraPose {
        self.last_pose
    }

    /// Orbit shape.
    #[must_use]
    pub fn rig(&self) -> &OrbitRig {
        &self.rig
    }
}
