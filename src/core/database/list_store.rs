// src/core/database/list_store.rs

//! The `ListStore` adapter: whole-list load and write-back over a locked shard.
//!
//! A list command is a single load-mutate-store unit. Handlers obtain the list
//! with one of the `load_*` methods, perform every check that can fail, mutate
//! in place, and finish with `store_list`, which is the only place an emptied
//! list is turned into a deleted key.

use super::shard::ShardCache;
use crate::core::ListDbError;
use crate::core::commands::command_trait::WriteOutcome;
use crate::core::storage::{DataValue, ListValue, StoredValue};
use bytes::Bytes;

pub trait ListStore {
    /// Loads the list at `key`. Absent keys yield `None`; non-list values fail with `WrongType`.
    fn load_list(&self, key: &Bytes) -> Result<Option<&ListValue>, ListDbError>;

    /// Mutable variant of [`ListStore::load_list`].
    fn load_list_mut(&mut self, key: &Bytes) -> Result<Option<&mut ListValue>, ListDbError>;

    /// Loads the list at `key`, creating an empty one if the key is absent.
    fn load_or_create_list(&mut self, key: &Bytes) -> Result<&mut ListValue, ListDbError>;

    /// Commits a mutation of the list at `key`.
    fn store_list(&mut self, key: &Bytes) -> WriteOutcome;

    /// Drops `key` from the keyspace, returning whether it existed.
    fn remove_list(&mut self, key: &Bytes) -> bool;
}

impl ListStore for ShardCache {
    fn load_list(&self, key: &Bytes) -> Result<Option<&ListValue>, ListDbError> {
        match self.get(key) {
            None => Ok(None),
            Some(StoredValue {
                data: DataValue::List(list),
                ..
            }) => Ok(Some(list)),
            Some(_) => Err(ListDbError::WrongType),
        }
    }

    fn load_list_mut(&mut self, key: &Bytes) -> Result<Option<&mut ListValue>, ListDbError> {
        match self.get_mut(key) {
            None => Ok(None),
            Some(StoredValue {
                data: DataValue::List(list),
                ..
            }) => Ok(Some(list)),
            Some(_) => Err(ListDbError::WrongType),
        }
    }

    fn load_or_create_list(&mut self, key: &Bytes) -> Result<&mut ListValue, ListDbError> {
        if self.get(key).is_some_and(|v| !matches!(v.data, DataValue::List(_))) {
            return Err(ListDbError::WrongType);
        }
        let entry = self.get_or_insert_with_mut(key.clone(), || {
            StoredValue::new(DataValue::List(ListValue::new()))
        });
        match &mut entry.data {
            DataValue::List(list) => Ok(list),
            _ => Err(ListDbError::WrongType),
        }
    }

    fn store_list(&mut self, key: &Bytes) -> WriteOutcome {
        let is_empty = match self.get(key) {
            Some(StoredValue {
                data: DataValue::List(list),
                ..
            }) => list.is_empty(),
            _ => return WriteOutcome::DidNotWrite,
        };

        if is_empty {
            self.pop(key);
            return WriteOutcome::Delete { keys_deleted: 1 };
        }

        let diff = self.get_mut(key).map_or(0, |entry| entry.touch());
        self.update_memory(diff);
        WriteOutcome::Write { keys_modified: 1 }
    }

    fn remove_list(&mut self, key: &Bytes) -> bool {
        self.pop(key).is_some()
    }
}
