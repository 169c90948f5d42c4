// src/core/database/context.rs

use super::core::Db;
use super::locking::ExecutionLocks;
use super::shard::ShardCache;
use crate::core::ListDbError;
use crate::core::state::ServerState;
use bytes::Bytes;
use std::sync::Arc;

/// `ExecutionContext` provides all the state and locks required to execute a `Command`.
pub struct ExecutionContext<'a> {
    pub state: Arc<ServerState>,
    pub locks: ExecutionLocks<'a>,
    pub db: &'a Db,
}

impl<'a> ExecutionContext<'a> {
    /// Returns the locked shard that owns `key`.
    ///
    /// Fails with a locking error if the router did not acquire that shard,
    /// which means the command's declared keys and its execution disagree.
    pub fn shard_for_key(&mut self, key: &Bytes) -> Result<&mut ShardCache, ListDbError> {
        let shard_index = self.db.get_shard_index(key);
        match &mut self.locks {
            ExecutionLocks::Single {
                shard_index: held,
                guard,
            } if *held == shard_index => Ok(&mut **guard),
            ExecutionLocks::Multi { guards } => guards
                .get_mut(&shard_index)
                .map(|guard| &mut **guard)
                .ok_or_else(|| ListDbError::LockingError("Required shard lock missing.".into())),
            ExecutionLocks::All { guards } => guards
                .get_mut(shard_index)
                .map(|guard| &mut **guard)
                .ok_or_else(|| ListDbError::LockingError("Required shard lock missing.".into())),
            _ => Err(ListDbError::LockingError(
                "Command expected a lock on the shard owning its key.".into(),
            )),
        }
    }

    /// Releases all locks held by the context.
    pub fn release_locks(&mut self) {
        self.locks = ExecutionLocks::None;
    }
}
