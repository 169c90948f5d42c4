// src/core/mod.rs

//! The central module containing the core logic and data structures of ListDB.

pub mod commands;
pub mod database;
pub mod errors;
pub mod handler;
pub mod latency;
pub mod protocol;
pub mod state;
pub mod storage;

pub use commands::Command;
pub use errors::ListDbError;
pub use protocol::RespValue;
