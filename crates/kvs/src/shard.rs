use std::collections::HashMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::value::Value;

/// One independently lockable partition of the key space.
///
/// A shard's id is its ordinal position in the owning store's shard
/// sequence; it is informational only and plays no part in routing.
/// Shards are created empty at store construction and live exactly as
/// long as the store — nothing outside the crate ever sees one.
pub(crate) struct Shard<V> {
    id: usize,
    entries: RwLock<HashMap<String, V>>,
}

impl<V: Value> Shard<V> {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Acquire this shard's lock in shared mode.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<String, V>> {
        self.entries.read().expect("lock poisoned")
    }

    /// Acquire this shard's lock in exclusive mode.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, V>> {
        self.entries.write().expect("lock poisoned")
    }

    /// Snapshot this shard's keys under its own shared lock.
    pub(crate) fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Number of entries, taken under this shard's shared lock.
    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }
}

impl<V: Value> fmt::Debug for Shard<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shard")
            .field("id", &self.id)
            .field("entries", &self.len())
            .finish()
    }
}
