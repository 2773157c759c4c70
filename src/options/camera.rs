use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::util::easing::EASE_SCALE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit shape and transition timing.
pub struct CameraOptions {
    /// Orbit radius before the pitch projection.
    #[schemars(title = "Distance", range(min = 100.0, max = 5000.0), extend("step" = 10.0))]
    pub distance: f32,
    /// Height above the followed subject.
    #[schemars(title = "Height", range(min = 0.0, max = 5000.0), extend("step" = 10.0))]
    pub height: f32,
    /// Tilt in degrees (negative looks down).
    #[schemars(title = "Pitch", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Yaw used when the controller is initialized, degrees.
    #[schemars(title = "Initial Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub initial_yaw: f32,
    /// Degrees added per rotate command.
    #[schemars(skip)]
    pub rotation_step: f32,
    /// Seconds after a rotate during which further rotates are ignored.
    #[schemars(skip)]
    pub rotation_cooldown: f32,
    /// Seconds over which the ease curve saturates.
    #[schemars(skip)]
    pub ease_scale: f32,
    /// Multiplier on the ease value for the rotation approach rate.
    #[schemars(skip)]
    pub rotation_rate: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            distance: 1500.0,
            height: 1000.0,
            pitch: -35.0,
            initial_yaw: 0.0,
            rotation_step: 90.0,
            rotation_cooldown: 1.0,
            ease_scale: EASE_SCALE,
            rotation_rate: 5.0,
        }
    }
}

impl CameraOptions {
    /// Check that every value keeps the controller's invariants.
    ///
    /// A single yaw wrap only restores (-180, 180] for steps of at most one
    /// turn, and the ease window divides elapsed time, so both are bounded.
    pub fn validate(&self) -> Result<(), CameraError> {
        let invalid = |msg: String| Err(CameraError::InvalidOptions(msg));

        let finite = [
            ("distance", self.distance),
            ("height", self.height),
            ("pitch", self.pitch),
            ("initial_yaw", self.initial_yaw),
            ("rotation_step", self.rotation_step),
            ("rotation_cooldown", self.rotation_cooldown),
            ("ease_scale", self.ease_scale),
            ("rotation_rate", self.rotation_rate),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("{name} must be finite, got {value}"));
        }

        if self.distance < 0.0 {
            return invalid(format!("distance must be >= 0, got {}", self.distance));
        }
        if !(-90.0..=90.0).contains(&self.pitch) {
            return invalid(format!("pitch must be in [-90, 90], got {}", self.pitch));
        }
        if self.rotation_step == 0.0 || self.rotation_step.abs() > 360.0 {
            return invalid(format!(
                "rotation_step must satisfy 0 < |step| <= 360, got {}",
                self.rotation_step
            ));
        }
        if self.rotation_cooldown < 0.0 {
            return invalid(format!(
                "rotation_cooldown must be >= 0, got {}",
                self.rotation_cooldown
            ));
        }
        if self.ease_scale <= 0.0 {
            return invalid(format!("ease_scale must be > 0, got {}", self.ease_scale));
        }
        if self.rotation_rate <= 0.0 {
            return invalid(format!(
                "rotation_rate must be > 0, got {}",
                self.rotation_rate
            ));
        }
        Ok(())
    }
}
