// src/core/state/core.rs

//! Defines the central `ServerState` struct, holding all shared engine-wide state.

use super::stats::StatsState;
use crate::config::Config;
use crate::core::ListDbError;
use crate::core::database::Db;
use crate::core::latency::LatencyMonitor;
use std::sync::Arc;
use tracing::{debug, info};

/// The central struct holding all shared state.
/// Wrapped in an `Arc` and handed to the router and every executing command.
#[derive(Debug)]
pub struct ServerState {
    /// The sharded keyspace.
    pub db: Arc<Db>,
    /// The configuration the state was initialized with.
    pub config: Config,
    /// The slow log backing the `SLOWLOG` command.
    pub latency_monitor: LatencyMonitor,
    pub stats: StatsState,
}

impl ServerState {
    /// Initializes the engine state from the given configuration.
    pub fn initialize(config: Config) -> Result<Arc<Self>, ListDbError> {
        config
            .validate()
            .map_err(|e| ListDbError::InvalidRequest(format!("invalid configuration: {e}")))?;

        debug!(
            "Slow log threshold {:?}, capacity {}.",
            config.slowlog.log_slower_than, config.slowlog.max_len
        );
        let latency_monitor = LatencyMonitor::new(config.slowlog.max_len);

        let state = Arc::new(Self {
            db: Arc::new(Db::new()),
            config,
            latency_monitor,
            stats: StatsState::new(),
        });
        info!("ListDB state initialized.");
        Ok(state)
    }
}
