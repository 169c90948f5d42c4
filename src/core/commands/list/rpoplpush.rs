// src/core/commands/list/rpoplpush.rs

//! Implements the `RPOPLPUSH` command.

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::{extract_bytes, validate_arg_count};
use crate::core::database::{ExecutionContext, ListStore};
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

/// Moves the tail element of `source` to the head of `destination`.
#[derive(Debug, Clone, Default)]
pub struct RPopLPush {
    pub source: Bytes,
    pub destination: Bytes,
}

impl ParseCommand for RPopLPush {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 2, "RPOPLPUSH")?;
        Ok(RPopLPush {
            source: extract_bytes(&args[0])?,
            destination: extract_bytes(&args[1])?,
        })
    }
}

/// The atomic move. Both shard locks are held by the caller for the whole call.
///
/// Every check (source type, source emptiness, destination type) runs before
/// the source is touched, so a failure leaves both keys as they were.
async fn rpoplpush_logic<'a>(
    source: &Bytes,
    destination: &Bytes,
    ctx: &mut ExecutionContext<'a>,
) -> Result<(RespValue, WriteOutcome), ListDbError> {
    if ctx.shard_for_key(source)?.load_list(source)?.is_none() {
        return Ok((RespValue::Null, WriteOutcome::DidNotWrite));
    }

    if source == destination {
        // Rotation: the tail becomes the head.
        let shard = ctx.shard_for_key(source)?;
        let Some(list) = shard.load_list_mut(source)? else {
            return Ok((RespValue::Null, WriteOutcome::DidNotWrite));
        };
        let Some(value) = list.pop_back() else {
            return Ok((RespValue::Null, WriteOutcome::DidNotWrite));
        };
        list.push_front(value.clone());
        let outcome = shard.store_list(source);
        return Ok((RespValue::BulkString(value), outcome));
    }

    ctx.shard_for_key(destination)?.load_list(destination)?;

    let source_shard = ctx.shard_for_key(source)?;
    let Some(value) = source_shard
        .load_list_mut(source)?
        .and_then(|list| list.pop_back())
    else {
        return Ok((RespValue::Null, WriteOutcome::DidNotWrite));
    };
    let source_outcome = source_shard.store_list(source);

    let dest_shard = ctx.shard_for_key(destination)?;
    dest_shard
        .load_or_create_list(destination)?
        .push_front(value.clone());
    let dest_outcome = dest_shard.store_list(destination);

    Ok((
        RespValue::BulkString(value),
        source_outcome.merge(dest_outcome),
    ))
}

#[async_trait]
impl ExecutableCommand for RPopLPush {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        rpoplpush_logic(&self.source, &self.destination, ctx).await
    }
}

impl CommandSpec for RPopLPush {
    fn name(&self) -> &'static str {
        "rpoplpush"
    }

    fn arity(&self) -> i64 {
        3
    }

    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM | CommandFlags::MOVABLEKEYS
    }

    fn first_key(&self) -> i64 {
        1
    }

    fn last_key(&self) -> i64 {
        2
    }

    fn step(&self) -> i64 {
        1
    }

    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.source.clone(), self.destination.clone()]
    }
}
