// src/core/commands/generic/mod.rs

//! Key-space commands that apply to values of any type.

pub mod del;
pub mod exists;
pub mod flushdb;
pub mod slowlog;
pub mod type_cmd;

pub use self::del::Del;
pub use self::exists::Exists;
pub use self::flushdb::FlushDb;
pub use self::slowlog::{Slowlog, SlowlogSubcommand};
pub use self::type_cmd::TypeInfo;
