// src/core/state/stats.rs

//! Contains state definitions and logic for engine statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by the router after every command.
#[derive(Debug)]
pub struct StatsState {
    /// The total number of commands processed since startup.
    total_commands: AtomicU64,
    /// The number of key modifications since startup.
    dirty: AtomicU64,
    /// The number of commands that returned an error.
    total_errors: AtomicU64,
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsState {
    pub fn new() -> Self {
        Self {
            total_commands: AtomicU64::new(0),
            dirty: AtomicU64::new(0),
            total_errors: AtomicU64::new(0),
        }
    }

    pub fn increment_total_commands(&self) {
        self.total_commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_total_commands(&self) -> u64 {
        self.total_commands.load(Ordering::Relaxed)
    }

    pub fn add_dirty(&self, keys: u64) {
        self.dirty.fetch_add(keys, Ordering::Relaxed);
    }

    /// Gets the number of key modifications recorded so far.
    pub fn get_dirty(&self) -> u64 {
        self.dirty.load(Ordering::Relaxed)
    }

    pub fn increment_total_errors(&self) {
        self.total_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_total_errors(&self) -> u64 {
        self.total_errors.load(Ordering::Relaxed)
    }
}
