// src/core/database/shard.rs

//! Defines the `DbShard` and `ShardCache` structs, which form the fundamental
//! storage units within a `Db`.

use crate::core::storage::data_types::StoredValue;
use bytes::Bytes;
use std::collections::HashMap;
use std::collections::hash_map;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// A `DbShard` is a single, concurrent slice of the keyspace.
/// It contains a mutex-guarded `ShardCache` and atomic counters that can be
/// read without taking the lock.
#[derive(Debug)]
pub struct DbShard {
    /// The actual key-value store, protected by a Mutex for thread-safe access.
    pub entries: Mutex<ShardCache>,
    /// An atomic counter for the total memory used by this shard in bytes.
    pub current_memory: Arc<AtomicUsize>,
    /// An atomic counter for the total number of keys in this shard.
    pub key_count: Arc<AtomicUsize>,
}

/// A `ShardCache` wraps the key map and keeps the shard's memory and key
/// counters in step with every insertion and removal.
#[derive(Debug)]
pub struct ShardCache {
    store: HashMap<Bytes, StoredValue>,
    memory_counter: Arc<AtomicUsize>,
    key_counter: Arc<AtomicUsize>,
}

impl DbShard {
    pub(super) fn new() -> Self {
        let current_memory = Arc::new(AtomicUsize::new(0));
        let key_count = Arc::new(AtomicUsize::new(0));
        Self {
            entries: Mutex::new(ShardCache::new(current_memory.clone(), key_count.clone())),
            current_memory,
            key_count,
        }
    }
}

impl ShardCache {
    fn new(memory_counter: Arc<AtomicUsize>, key_counter: Arc<AtomicUsize>) -> Self {
        Self {
            store: HashMap::new(),
            memory_counter,
            key_counter,
        }
    }

    /// Puts a key-value pair into the shard, handling memory and key count accounting.
    /// It returns the old value if the key already existed.
    pub fn put(&mut self, key: Bytes, mut value: StoredValue) -> Option<StoredValue> {
        value.size = value.data.memory_usage();
        let new_item_mem = key.len() + value.size;
        let key_len = key.len();

        let old_value = self.store.insert(key, value);

        if let Some(ref old) = old_value {
            let old_item_mem = key_len + old.size;
            self.update_memory(new_item_mem as isize - old_item_mem as isize);
        } else {
            self.update_memory(new_item_mem as isize);
            self.key_counter.fetch_add(1, Ordering::Relaxed);
        }
        old_value
    }

    /// Removes a key, returning the value if the key was present.
    pub fn pop(&mut self, key: &Bytes) -> Option<StoredValue> {
        let popped = self.store.remove(key)?;
        self.update_memory(-((key.len() + popped.size) as isize));
        self.key_counter.fetch_sub(1, Ordering::Relaxed);
        Some(popped)
    }

    /// Adjusts the shard's memory counter by a signed delta.
    pub(crate) fn update_memory(&self, diff: isize) {
        if diff > 0 {
            self.memory_counter
                .fetch_add(diff as usize, Ordering::Relaxed);
        } else if diff < 0 {
            self.memory_counter
                .fetch_sub(diff.unsigned_abs(), Ordering::Relaxed);
        }
    }

    /// Clears all entries from the shard, resetting memory and key counters.
    pub fn clear(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.store.clear();
        self.memory_counter.store(0, Ordering::Relaxed);
        self.key_counter.store(0, Ordering::Relaxed);
    }

    /// Gets a mutable reference to a value, inserting one built by `f` if the key is absent.
    pub fn get_or_insert_with_mut<F>(&mut self, key: Bytes, f: F) -> &mut StoredValue
    where
        F: FnOnce() -> StoredValue,
    {
        match self.store.entry(key) {
            hash_map::Entry::Occupied(entry) => entry.into_mut(),
            hash_map::Entry::Vacant(entry) => {
                let mut value = f();
                value.size = value.data.memory_usage();
                let item_mem = entry.key().len() + value.size;
                self.key_counter.fetch_add(1, Ordering::Relaxed);
                if item_mem > 0 {
                    self.memory_counter.fetch_add(item_mem, Ordering::Relaxed);
                }
                entry.insert(value)
            }
        }
    }

    pub fn get_mut(&mut self, key: &Bytes) -> Option<&mut StoredValue> {
        self.store.get_mut(key)
    }

    pub fn get(&self, key: &Bytes) -> Option<&StoredValue> {
        self.store.get(key)
    }

    pub fn contains_key(&self, key: &Bytes) -> bool {
        self.store.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Bytes, StoredValue> {
        self.store.iter()
    }
}
