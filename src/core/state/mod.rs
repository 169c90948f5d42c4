// src/core/state/mod.rs

//! Defines the central `ServerState` struct and its statistics component.

mod core;
mod stats;

pub use self::core::ServerState;
pub use stats::StatsState;
