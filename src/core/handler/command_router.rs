// src/core/handler/command_router.rs

//! The central component for routing commands to their handlers.
//!
//! The `Router` turns a `RespFrame` invocation into a `Command` (command table
//! lookup and arity check first, then per-command parsing), acquires the
//! shard locks the command needs, executes it, and records statistics and
//! slow-log samples.

use crate::core::commands::command_trait::{CommandExt, WriteOutcome};
use crate::core::database::{Db, ExecutionContext};
use crate::core::protocol::RespFrame;
use crate::core::state::ServerState;
use crate::core::{Command, ListDbError, RespValue};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, info_span};

/// Routes commands against a shared `ServerState`.
#[derive(Debug, Clone)]
pub struct Router {
    state: Arc<ServerState>,
}

impl Router {
    pub fn new(state: Arc<ServerState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }

    /// Parses and routes a raw invocation frame.
    pub async fn route_frame(&self, frame: RespFrame) -> Result<RespValue, ListDbError> {
        let command = match Command::try_from(frame) {
            Ok(command) => command,
            Err(e) => {
                self.state.stats.increment_total_commands();
                self.state.stats.increment_total_errors();
                debug!("Rejected invocation: {e}");
                return Err(e);
            }
        };
        self.route(command).await
    }

    /// Like [`Router::route_frame`], but renders failures as error replies.
    pub async fn dispatch(&self, frame: RespFrame) -> RespValue {
        self.route_frame(frame).await.unwrap_or_else(|e| e.to_resp())
    }

    /// Executes a parsed command under the locks it requires.
    pub async fn route(&self, command: Command) -> Result<RespValue, ListDbError> {
        let command_name = command.name();
        let span = info_span!("command", name = %command_name);

        async move {
            let start_time = Instant::now();
            self.state.stats.increment_total_commands();

            let db = self.state.db.clone();
            let result = self.execute_command(&command, &db).await;

            let latency = start_time.elapsed();
            if latency >= self.state.config.slowlog.log_slower_than {
                self.state
                    .latency_monitor
                    .add_sample(command_name, command.get_resp_args(), latency);
            }

            match result {
                Ok((value, outcome)) => {
                    if outcome != WriteOutcome::DidNotWrite {
                        self.state.stats.add_dirty(outcome.dirty_keys());
                    }
                    Ok(value)
                }
                Err(e) => {
                    self.state.stats.increment_total_errors();
                    debug!("Command failed: {e}");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Builds the execution context (acquiring locks) and runs the command.
    /// Locks are released when the context is dropped at the end of this call.
    async fn execute_command(
        &self,
        command: &Command,
        db: &Db,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let mut ctx = ExecutionContext {
            state: self.state.clone(),
            locks: db.determine_locks_for_command(command).await,
            db,
        };
        command.execute(&mut ctx).await
    }
}
