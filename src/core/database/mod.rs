// src/core/database/mod.rs

//! The keyspace engine.
//! This module defines the `Db` struct, a sharded in-memory key-value store,
//! along with its locking strategy, the execution context handed to commands,
//! and the `ListStore` adapter the list commands operate through.

pub mod context;
pub mod core;
pub mod list_store;
pub mod locking;
pub mod shard;

pub use self::core::{Db, NUM_SHARDS, PopDirection, PushDirection};
pub use context::ExecutionContext;
pub use list_store::ListStore;
pub use locking::ExecutionLocks;
pub use shard::{DbShard, ShardCache};
