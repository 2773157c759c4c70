use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::command::{CameraCommand, CameraCommandTag};
use crate::scene::{SubjectId, SubjectRegistry};

/// Maps physical key strings to camera command tags.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyQ"`, `"Tab"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, CameraCommandTag>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyQ".into(), CameraCommandTag::RotateLeft),
            ("KeyE".into(), CameraCommandTag::RotateRight),
            ("Tab".into(), CameraCommandTag::CycleTarget),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command tag for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraCommandTag> {
        self.bindings.get(key).copied()
    }

    /// Look up and resolve a key press into a command.
    #[must_use]
    pub fn resolve(
        &self,
        key: &str,
        followed: Option<SubjectId>,
        registry: &SubjectRegistry,
    ) -> Option<CameraCommand> {
        self.lookup(key)?.to_command(followed, registry)
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: CameraCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RotateDirection;

    #[test]
    fn test_default_lookup() {
        let kb = KeyBindings::default();
        assert_eq!(kb.lookup("KeyQ"), Some(CameraCommandTag::RotateLeft));
        assert_eq!(kb.lookup("KeyE"), Some(CameraCommandTag::RotateRight));
        assert_eq!(kb.lookup("Tab"), Some(CameraCommandTag::CycleTarget));
        assert_eq!(kb.lookup("KeyZ"), None);
    }

    #[test]
    fn test_rebind() {
        let mut kb = KeyBindings::default();
        kb.bind("ArrowLeft", CameraCommandTag::RotateLeft);
        let reg = SubjectRegistry::new();
        assert_eq!(
            kb.resolve("ArrowLeft", None, &reg),
            Some(CameraCommand::Rotate(RotateDirection::Clockwise))
        );
    }
}
