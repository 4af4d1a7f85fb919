//! The sharded store: hash routing, single-key CRUD, cross-shard reads,
//! and the multi-shard batch operations.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::format::format_size;
use crate::shard::Shard;
use crate::transaction::Transaction;
use crate::value::Value;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Map a key to a shard index with a 32-bit FNV-1a hash over its raw
/// bytes, reduced by the shard count.
///
/// Pure function of the key and the shard count. The store never changes
/// either after construction, so a key resolves to the same shard for the
/// store's whole lifetime — Get/Set/Delete for one key always contend on
/// the same lock and observe the same map.
pub(crate) fn shard_index(key: &str, shard_count: usize) -> usize {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in key.bytes() {
        hash = hash.wrapping_mul(FNV_PRIME) ^ u32::from(byte);
    }
    hash as usize % shard_count
}

/// A thread-safe, in-memory key-value store partitioned across a fixed
/// number of independently locked shards.
///
/// Every operation routes its key through [`shard_index`] and takes only
/// that shard's lock, so operations on keys in different shards proceed
/// fully in parallel. Values are deep-copied on the way in ([`set`]) and
/// on the way out ([`get`]); the store never aliases caller-owned data.
///
/// [`set`]: KeyValueStore::set
/// [`get`]: KeyValueStore::get
pub struct KeyValueStore<V> {
    // Fixed length after construction; the length is the hash modulus.
    shards: Vec<Shard<V>>,
}

impl<V: Value> KeyValueStore<V> {
    /// Create a store with `num_shards` empty shards.
    ///
    /// Fails with [`StoreError::InvalidShardCount`] when `num_shards` is
    /// zero — the shard count is the hash-routing modulus.
    pub fn new(num_shards: usize) -> StoreResult<Self> {
        if num_shards == 0 {
            return Err(StoreError::InvalidShardCount(num_shards));
        }
        let shards = (0..num_shards).map(Shard::new).collect();
        debug!(shards = num_shards, "created key-value store");
        Ok(Self { shards })
    }

    /// Number of shards the key space is partitioned into.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, key: &str) -> &Shard<V> {
        &self.shards[shard_index(key, self.shards.len())]
    }

    /// Retrieve a deep copy of the value stored under `key`.
    ///
    /// Takes the owning shard's lock in shared mode. Fails with
    /// [`StoreError::NotFound`] if the key is absent. The returned value
    /// is independent of the stored one: mutating it never touches the
    /// store.
    pub fn get(&self, key: &str) -> StoreResult<V> {
        let entries = self.shard_for(key).read();
        entries
            .get(key)
            .map(Value::clone_value)
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }

    /// Store a deep copy of `value` under `key`, overwriting any existing
    /// entry. Set is an unconditional upsert and never reports
    /// [`StoreError::Duplicate`].
    ///
    /// Takes the owning shard's lock in exclusive mode. The caller keeps
    /// ownership of `value`; the store holds its own copy.
    pub fn set(&self, key: impl Into<String>, value: &V) -> StoreResult<()> {
        let key = key.into();
        let mut entries = self.shard_for(&key).write();
        entries.insert(key, value.clone_value());
        Ok(())
    }

    /// Remove the entry under `key`.
    ///
    /// Takes the owning shard's lock in exclusive mode. Fails with
    /// [`StoreError::NotFound`] if the key is absent; nothing is mutated
    /// on that path.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.shard_for(key).write();
        match entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key.to_owned())),
        }
    }

    /// All keys currently in the store, in unspecified order.
    ///
    /// Each shard is snapshotted under its own shared lock, one shard at
    /// a time, and the snapshots are concatenated. Because the shards are
    /// not locked simultaneously this is *not* a point-in-time view of
    /// the whole store: a concurrent writer can be observed on a shard
    /// not yet visited and missed on one already visited.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for shard in &self.shards {
            keys.extend(shard.keys());
        }
        keys
    }

    /// Total number of entries, summed shard by shard.
    ///
    /// Same weak-consistency caveat as [`keys`](KeyValueStore::keys).
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry count rendered through a byte-magnitude formatter
    /// (`B`, `KB`, `MB`, ...), so "2 KB" means 2048 entries.
    ///
    /// The name and the unit suffixes are part of the store's contract
    /// even though no byte accounting happens; same weak-consistency
    /// caveat as [`keys`](KeyValueStore::keys).
    pub fn size(&self) -> String {
        format_size(self.len() as u64)
    }

    /// Acquire exclusive access to the entire store.
    ///
    /// Takes every shard's lock in exclusive mode, in ascending shard
    /// index order, and hands them to the returned [`Transaction`]. All
    /// other store operations block until the bracket is released via
    /// [`Transaction::commit`], [`Transaction::rollback`], or drop.
    ///
    /// Calling `begin` again on the same thread before releasing the
    /// first bracket deadlocks against itself, as does calling any
    /// `KeyValueStore` method while the bracket is held — mutate through
    /// the [`Transaction`] instead.
    pub fn begin(&self) -> Transaction<'_, V> {
        Transaction::begin(&self.shards)
    }

    /// Store a deep copy of every entry in `entries`, atomically with
    /// respect to all other store operations.
    ///
    /// Every shard's exclusive lock is held (acquired in ascending index
    /// order) for the duration, so no other caller can observe a state
    /// where only part of the batch has been applied. There is no
    /// rollback: if a `clone_value` implementation panics mid-batch,
    /// already-applied entries stay applied — the locks themselves are
    /// still released.
    pub fn batch_set(&self, entries: &HashMap<String, V>) -> StoreResult<()> {
        let mut tx = self.begin();
        for (key, value) in entries {
            tx.set(key.clone(), value);
        }
        tx.commit();
        debug!(entries = entries.len(), "applied batch set");
        Ok(())
    }

    /// Remove every listed key, atomically with respect to all other
    /// store operations. Absent keys are skipped silently rather than
    /// reported as [`StoreError::NotFound`].
    ///
    /// Same locking discipline as [`batch_set`](KeyValueStore::batch_set).
    pub fn batch_delete<K: AsRef<str>>(&self, keys: &[K]) -> StoreResult<()> {
        let mut tx = self.begin();
        for key in keys {
            let _ = tx.remove(key.as_ref());
        }
        tx.commit();
        debug!(keys = keys.len(), "applied batch delete");
        Ok(())
    }
}

impl<V: Value> fmt::Debug for KeyValueStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValueStore")
            .field("shards", &self.shards.len())
            .field("entries", &self.len())
            .finish()
    }
}
