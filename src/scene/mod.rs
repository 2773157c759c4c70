//! Followed-subject storage.
//!
//! The camera never owns what it follows. It holds a [`SubjectId`] and asks a
//! [`SubjectPositions`] implementation for the current position each frame.
//! [`SubjectRegistry`] is the flat in-crate implementation used by the demo
//! and tests; hosts with their own entity storage implement the trait
//! directly.

mod subject;

use glam::Vec3;
pub use subject::{Subject, SubjectId};

/// Position query for followed subjects.
pub trait SubjectPositions {
    /// Current world-space position of `id`, or `None` if it no longer
    /// exists.
    fn position(&self, id: SubjectId) -> Option<Vec3>;

    /// Whether `id` currently resolves.
    fn contains(&self, id: SubjectId) -> bool {
        self.position(id).is_some()
    }
}

// ---------------------------------------------------------------------------
// SubjectRegistry
// ---------------------------------------------------------------------------

/// Owns all followable subjects in a flat list.
#[derive(Debug, Default)]
pub struct SubjectRegistry {
    /// Subjects in spawn order.
    subjects: Vec<Subject>,
    next_id: u32,
}

impl SubjectRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a subject at `position`. Returns its id.
    pub fn spawn(&mut self, name: impl Into<String>, position: Vec3) -> SubjectId {
        self.insert(name.into(), position, false)
    }

    /// Spawn a placeholder subject at the origin, for contexts (editor
    /// preview, startup) that have nothing real to follow yet.
    pub fn spawn_placeholder(&mut self) -> SubjectId {
        self.insert("placeholder".to_owned(), Vec3::ZERO, true)
    }

    fn insert(&mut self, name: String, position: Vec3, placeholder: bool) -> SubjectId {
        let id = SubjectId(self.next_id);
        self.next_id += 1;
        self.subjects.push(Subject {
            id,
            name,
            position,
            placeholder,
        });
        log::debug!("spawned subject {id} at {position}");
        id
    }

    /// Remove a subject. Returns it, if it existed.
    pub fn despawn(&mut self, id: SubjectId) -> Option<Subject> {
        let idx = self.subjects.iter().position(|s| s.id == id)?;
        log::debug!("despawned subject {id}");
        Some(self.subjects.remove(idx))
    }

    /// Read access to a subject.
    #[must_use]
    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Move a subject to an absolute position. Returns false if it does not
    /// exist.
    pub fn set_position(&mut self, id: SubjectId, position: Vec3) -> bool {
        match self.subjects.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                s.position = position;
                true
            }
            None => false,
        }
    }

    /// Move a subject by `delta`. Returns false if it does not exist.
    pub fn translate(&mut self, id: SubjectId, delta: Vec3) -> bool {
        match self.subjects.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                s.position += delta;
                true
            }
            None => false,
        }
    }

    /// Ids of all subjects in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.subjects.iter().map(Subject::id)
    }

    /// Number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Next non-placeholder subject after `current` in spawn order, wrapping
    /// around. Falls back to the first real subject when `current` is gone.
    #[must_use]
    pub fn next_after(&self, current: SubjectId) -> Option<SubjectId> {
        let mut real = self.subjects.iter().filter(|s| !s.placeholder);
        let first = real.clone().next()?.id;
        Some(real.find(|s| s.id > current).map_or(first, |s| s.id))
    }
}

impl SubjectPositions for SubjectRegistry {
    fn position(&self, id: SubjectId) -> Option<Vec3> {
        self.get(id).map(|s| s.position)
    }
}
