use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SubjectId
// ---------------------------------------------------------------------------

/// Lookup-only handle to a subject in a [`SubjectRegistry`].
///
/// Ids are never reused, so a handle to a despawned subject stays dead
/// instead of silently resolving to a newer one.
///
/// [`SubjectRegistry`]: super::SubjectRegistry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct SubjectId(pub(crate) u32);

impl SubjectId {
    /// Raw index value.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// A positionable entity the camera can follow.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub(super) id: SubjectId,
    /// Human-readable name.
    pub name: String,
    /// World-space position (Z up).
    pub position: Vec3,
    /// Stand-in subject used before a real one exists (editor preview).
    pub placeholder: bool,
}

impl Subject {
    /// Registry-assigned identifier.
    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.id
    }
}
