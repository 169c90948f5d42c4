// src/core/commands/string/mod.rs

//! The minimal string surface: enough to place a non-list value under a key.

pub mod get;
pub mod set;

pub use self::get::Get;
pub use self::set::Set;
