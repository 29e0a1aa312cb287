use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use uuid::Uuid;

/// In-memory map from receipt ID to awarded points.
///
/// Clones share the same map. Entries are never updated or removed, so the
/// store lives (and grows) as long as the process does.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    scores: Arc<RwLock<HashMap<Uuid, u64>>>,
}

impl ScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `points` for a freshly generated `id`.
    ///
    /// IDs are unique by construction; storing one twice is a caller bug.
    pub fn put(&self, id: Uuid, points: u64) {
        // A single insert cannot leave the map half-written, so a poisoned
        // lock still guards a consistent map.
        let previous = self
            .scores
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, points);
        debug_assert!(previous.is_none(), "receipt id {id} stored twice");
    }

    /// Points stored for `id`, or `None` if this process never stored it.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<u64> {
        self.scores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
