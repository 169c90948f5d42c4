// src/core/commands/generic/flushdb.rs

use crate::core::ListDbError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::validate_arg_count;
use crate::core::database::{ExecutionContext, ExecutionLocks};
use crate::core::protocol::{RespFrame, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

/// Represents the `FLUSHDB` command.
#[derive(Debug, Clone, Default)]
pub struct FlushDb;

impl ParseCommand for FlushDb {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 0, "FLUSHDB")?;
        Ok(FlushDb)
    }
}

#[async_trait]
impl ExecutableCommand for FlushDb {
    /// Clears every shard. The router hands this command all shard locks.
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        if let ExecutionLocks::All { guards } = &mut ctx.locks {
            for guard in guards.iter_mut() {
                guard.clear();
            }
        } else {
            return Err(ListDbError::Internal(
                "FLUSHDB requires all shard locks".into(),
            ));
        }

        Ok((RespValue::ok(), WriteOutcome::Flush))
    }
}

impl CommandSpec for FlushDb {
    fn name(&self) -> &'static str {
        "flushdb"
    }

    fn arity(&self) -> i64 {
        1
    }

    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE
    }

    fn first_key(&self) -> i64 {
        0
    }

    fn last_key(&self) -> i64 {
        0
    }

    fn step(&self) -> i64 {
        0
    }

    fn get_keys(&self) -> Vec<Bytes> {
        vec![]
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![]
    }
}
