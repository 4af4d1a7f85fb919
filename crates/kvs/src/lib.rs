//! Sharded, thread-safe, in-memory key-value store.
//!
//! The key space is partitioned across a fixed number of independently
//! locked shards so that concurrent callers touching different keys
//! rarely contend. Each operation hashes its key (32-bit FNV-1a), takes
//! exactly one shard's reader/writer lock for its duration, and releases
//! it on every exit path. Multi-key operations ([`batch_set`],
//! [`batch_delete`]) and the whole-store bracket ([`begin`]) take every
//! shard's lock in ascending index order before touching anything.
//!
//! # Value ownership
//!
//! Values must implement the [`Value`] trait, whose `clone_value` is a
//! deep copy. The store clones on both boundaries: `set` stores a copy of
//! the caller's value and `get` returns a copy of the stored one, so
//! caller state and store state never alias.
//!
//! # Consistency
//!
//! - Operations on the same key are serialized by that key's shard lock.
//! - [`keys`], [`len`] and [`size`] visit shards one at a time and are
//!   therefore *not* point-in-time snapshots under concurrent writes.
//! - The [`Transaction`] bracket grants whole-store exclusivity but has
//!   no isolation or undo: its writes apply immediately and `rollback`
//!   only releases the locks.
//!
//! # Example
//!
//! ```
//! use kvs::KeyValueStore;
//!
//! let store: KeyValueStore<String> = KeyValueStore::new(16)?;
//! store.set("greeting", &"hello".to_string())?;
//! assert_eq!(store.get("greeting")?, "hello");
//! store.delete("greeting")?;
//! assert!(store.get("greeting").is_err());
//! # Ok::<(), kvs::StoreError>(())
//! ```
//!
//! [`batch_set`]: KeyValueStore::batch_set
//! [`batch_delete`]: KeyValueStore::batch_delete
//! [`begin`]: KeyValueStore::begin
//! [`keys`]: KeyValueStore::keys
//! [`len`]: KeyValueStore::len
//! [`size`]: KeyValueStore::size

pub mod error;
mod format;
mod shard;
pub mod store;
pub mod transaction;
pub mod value;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use store::KeyValueStore;
pub use transaction::Transaction;
pub use value::Value;
