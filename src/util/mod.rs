//! Shared utilities for the camera.
//!
//! Helpers for easing curves, angle normalization, and frame timing.

pub mod angle;
pub mod easing;
pub mod frame_timing;
