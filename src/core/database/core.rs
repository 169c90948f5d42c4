// src/core/database/core.rs

use super::shard::DbShard;
use crate::core::storage::data_types::StoredValue;
use bytes::Bytes;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// The number of shards per keyspace.
pub const NUM_SHARDS: usize = 16;

/// `Db` is the keyspace, composed of multiple `DbShard`s.
#[derive(Debug, Clone)]
pub struct Db {
    pub shards: Vec<Arc<DbShard>>,
}

/// Which end of a list a push targets.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PushDirection {
    Left,
    Right,
}

/// Which end of a list a pop targets.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PopDirection {
    Left,
    Right,
}

impl Db {
    /// Creates a new, empty `Db` instance.
    pub fn new() -> Self {
        let shards = (0..NUM_SHARDS).map(|_| Arc::new(DbShard::new())).collect();
        Self { shards }
    }

    /// Calculates the shard index for a given key using hashing.
    pub fn get_shard_index(&self, key: &Bytes) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % NUM_SHARDS
    }

    /// Returns the total number of keys in the keyspace. O(1) complexity.
    pub fn get_key_count(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.key_count.load(Ordering::Relaxed))
            .sum()
    }

    /// Calculates the total memory used across all shards.
    pub fn get_current_memory(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.current_memory.load(Ordering::Relaxed))
            .sum()
    }

    pub fn get_shard(&self, index: usize) -> &Arc<DbShard> {
        &self.shards[index]
    }

    /// Inserts a value outside of command execution, e.g. when seeding fixtures.
    pub async fn insert_value(&self, key: Bytes, value: StoredValue) {
        let shard_index = self.get_shard_index(&key);
        let mut guard = self.shards[shard_index].entries.lock().await;
        guard.put(key, value);
    }

    /// Returns a copy of the value stored at `key`, if any.
    pub async fn get_value(&self, key: &Bytes) -> Option<StoredValue> {
        let shard_index = self.get_shard_index(key);
        let guard = self.shards[shard_index].entries.lock().await;
        guard.get(key).cloned()
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}
