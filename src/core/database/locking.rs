// src/core/database/locking.rs

use super::core::{Db, NUM_SHARDS};
use super::shard::ShardCache;
use crate::core::Command;
use crate::core::commands::command_trait::CommandExt;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::MutexGuard;

/// `ExecutionLocks` holds the `MutexGuard`s a command executes under.
pub enum ExecutionLocks<'a> {
    /// A lock on a single shard.
    Single {
        shard_index: usize,
        guard: MutexGuard<'a, ShardCache>,
    },
    /// Locks on several shards, keyed (and therefore acquired) in ascending index order.
    Multi {
        guards: BTreeMap<usize, MutexGuard<'a, ShardCache>>,
    },
    /// Locks on every shard, in index order.
    All {
        guards: Vec<MutexGuard<'a, ShardCache>>,
    },
    /// No locks are required for this command.
    None,
}

impl Db {
    /// Determines and acquires the locks a command needs, based on the keys it touches.
    pub async fn determine_locks_for_command<'a>(
        &'a self,
        command: &Command,
    ) -> ExecutionLocks<'a> {
        let keys = command.get_keys();

        match command {
            Command::FlushDb(_) => ExecutionLocks::All {
                guards: self.lock_all_shards().await,
            },

            // RPOPLPUSH, multi-key DEL/EXISTS.
            _ if keys.len() > 1 => ExecutionLocks::Multi {
                guards: self.lock_shards_for_keys(&keys).await,
            },

            _ if keys.len() == 1 => {
                let shard_index = self.get_shard_index(&keys[0]);
                ExecutionLocks::Single {
                    shard_index,
                    guard: self.get_shard(shard_index).entries.lock().await,
                }
            }

            _ => ExecutionLocks::None,
        }
    }

    /// Locks the shards owning `keys`, in ascending shard index order.
    pub async fn lock_shards_for_keys<'a>(
        &'a self,
        keys: &[Bytes],
    ) -> BTreeMap<usize, MutexGuard<'a, ShardCache>> {
        let indices: BTreeSet<usize> = keys.iter().map(|key| self.get_shard_index(key)).collect();
        let mut guards = BTreeMap::new();
        for index in indices {
            guards.insert(index, self.shards[index].entries.lock().await);
        }
        guards
    }

    /// Locks all shards, in a fixed order (0 to NUM_SHARDS-1).
    pub async fn lock_all_shards<'a>(&'a self) -> Vec<MutexGuard<'a, ShardCache>> {
        let mut guards = Vec::with_capacity(NUM_SHARDS);
        for i in 0..NUM_SHARDS {
            guards.push(self.shards[i].entries.lock().await);
        }
        guards
    }
}
