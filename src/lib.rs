// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::core::handler::Router;
pub use crate::core::state::ServerState;
