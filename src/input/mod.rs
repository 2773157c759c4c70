//! Input vocabulary: camera commands and the key-binding map that
//! produces them.

/// Key string → command tag mapping.
pub mod bindings;
/// Camera commands and rotation directions.
pub mod command;

pub use bindings::KeyBindings;
pub use command::{CameraCommand, CameraCommandTag, RotateDirection};
