//! The whole-store exclusive lock bracket.
//!
//! [`Transaction`] is a scoped-acquisition guard, not a transaction in the
//! database sense: it buffers nothing and undoes nothing. Every write made
//! through it lands in the shard maps immediately; `commit` and `rollback`
//! are two names for the same thing — release every shard's lock.

use std::collections::HashMap;
use std::sync::RwLockWriteGuard;

use tracing::trace;

use crate::error::{StoreError, StoreResult};
use crate::shard::Shard;
use crate::store::shard_index;
use crate::value::Value;

/// Exclusive access to every shard of a [`KeyValueStore`], acquired via
/// [`KeyValueStore::begin`].
///
/// While the bracket is held, all other store operations block. Reads and
/// writes issued through the bracket route by the same hash as the store's
/// own operations and apply immediately.
///
/// The locks are released when the bracket is consumed by
/// [`commit`](Transaction::commit) or [`rollback`](Transaction::rollback),
/// or when it is dropped — release happens on every exit path, including
/// panics. Holding the guard makes an unpaired release unrepresentable:
/// there is no way to "commit" without having begun.
///
/// ```
/// use kvs::KeyValueStore;
///
/// let store: KeyValueStore<String> = KeyValueStore::new(4)?;
/// let mut tx = store.begin();
/// tx.set("a", &"1".to_string());
/// tx.rollback(); // releases the locks; the write stays applied
/// assert_eq!(store.get("a")?, "1");
/// # Ok::<(), kvs::StoreError>(())
/// ```
///
/// [`KeyValueStore`]: crate::KeyValueStore
/// [`KeyValueStore::begin`]: crate::KeyValueStore::begin
pub struct Transaction<'store, V> {
    // One write guard per shard, indexed like the store's shard sequence.
    shards: Vec<RwLockWriteGuard<'store, HashMap<String, V>>>,
}

impl<'store, V: Value> Transaction<'store, V> {
    /// Lock every shard exclusively, in ascending shard-index order.
    ///
    /// Ascending order is the fixed global order shared with the batch
    /// operations; any multi-shard acquisition using a different order
    /// could form a circular wait against this one.
    pub(crate) fn begin(shards: &'store [Shard<V>]) -> Self {
        let guards = shards.iter().map(Shard::write).collect();
        trace!(shards = shards.len(), "acquired whole-store lock bracket");
        Self { shards: guards }
    }

    fn entries_mut(&mut self, key: &str) -> &mut HashMap<String, V> {
        let index = shard_index(key, self.shards.len());
        &mut self.shards[index]
    }

    /// Retrieve a deep copy of the value under `key`, as
    /// [`KeyValueStore::get`](crate::KeyValueStore::get) would.
    pub fn get(&self, key: &str) -> StoreResult<V> {
        let index = shard_index(key, self.shards.len());
        self.shards[index]
            .get(key)
            .map(Value::clone_value)
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }

    /// Store a deep copy of `value` under `key`. Applies immediately;
    /// a later [`rollback`](Transaction::rollback) will not undo it.
    pub fn set(&mut self, key: impl Into<String>, value: &V) {
        let key = key.into();
        self.entries_mut(&key).insert(key, value.clone_value());
    }

    /// Remove the entry under `key`, returning the stored value if the
    /// key was present.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries_mut(key).remove(key)
    }

    /// Remove the entry under `key`, failing with
    /// [`StoreError::NotFound`] if it is absent.
    pub fn delete(&mut self, key: &str) -> StoreResult<()> {
        match self.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key.to_owned())),
        }
    }

    /// Release every shard's lock. Writes made through the bracket are
    /// already applied; commit adds nothing beyond the release.
    pub fn commit(self) {}

    /// Release every shard's lock. Identical in effect to
    /// [`commit`](Transaction::commit): writes made through the bracket
    /// are *not* undone. Callers needing real rollback must buffer their
    /// own inverse operations.
    pub fn rollback(self) {}
}

impl<V> Drop for Transaction<'_, V> {
    fn drop(&mut self) {
        trace!(shards = self.shards.len(), "released whole-store lock bracket");
    }
}
