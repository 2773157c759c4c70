//! The controller's complete command vocabulary.
//!
//! Every camera operation a host can trigger from input (key press, GUI
//! button, gameplay event) is a [`CameraCommand`], passed to
//! [`OrbitCameraController::execute`](crate::camera::OrbitCameraController::execute).

use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::scene::{SubjectId, SubjectRegistry};

/// Direction of a yaw step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateDirection {
    /// Yaw decreases (clockwise viewed from above).
    Clockwise,
    /// Yaw increases (counter-clockwise viewed from above).
    CounterClockwise,
}

impl RotateDirection {
    /// Unit multiplier applied to the rotation step.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }
}

impl TryFrom<i32> for RotateDirection {
    type Error = CameraError;

    /// Accepts only -1 and 1.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Clockwise),
            1 => Ok(Self::CounterClockwise),
            other => Err(CameraError::InvalidDirection(other)),
        }
    }
}

/// A request to the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Step the target yaw one increment (debounced).
    Rotate(RotateDirection),
    /// Start easing toward a new followed subject.
    Retarget(SubjectId),
}

/// Serializable tag for the key-bindable subset of camera actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraCommandTag {
    /// Swing the camera clockwise around the subject (yaw decreases).
    ///
    /// "Left" is the key's label, not a view turn: it maps to
    /// [`RotateDirection::Clockwise`].
    RotateLeft,
    /// Swing the camera counter-clockwise around the subject (yaw
    /// increases). Mirror of [`RotateLeft`](Self::RotateLeft).
    RotateRight,
    /// Retarget to the next subject in the registry.
    CycleTarget,
}

impl CameraCommandTag {
    /// Resolve to a concrete command.
    ///
    /// `CycleTarget` needs the registry and the currently followed subject;
    /// it yields `None` when there is nothing else to follow.
    #[must_use]
    pub fn to_command(
        self,
        followed: Option<SubjectId>,
        registry: &SubjectRegistry,
    ) -> Option<CameraCommand> {
        match self {
            Self::RotateLeft => {
                Some(CameraCommand::Rotate(RotateDirection::Clockwise))
            }
            Self::RotateRight => {
                Some(CameraCommand::Rotate(RotateDirection::CounterClockwise))
            }
            Self::CycleTarget => {
                let current = followed?;
                registry
                    .next_after(current)
                    .filter(|&next| next != current)
                    .map(CameraCommand::Retarget)
            }
        }
    }
}
