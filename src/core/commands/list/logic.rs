// src/core/commands/list/logic.rs

use crate::core::commands::command_trait::WriteOutcome;
use crate::core::database::{ExecutionContext, ListStore, PopDirection, PushDirection};
use crate::core::{ListDbError, RespValue};
use bytes::Bytes;

/// Whether a push may create the list.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub(crate) enum PushMode {
    /// `LPUSH`/`RPUSH`: create the key if absent.
    Always,
    /// `LPUSHX`/`RPUSHX`: only push onto an existing list.
    OnlyIfExists,
}

/// Shared logic for `LPUSH`, `RPUSH`, `LPUSHX` and `RPUSHX`.
///
/// Values are pushed one at a time in argument order, so `LPUSH k a b c`
/// leaves `c` at the head.
pub(crate) async fn list_push_logic<'a>(
    ctx: &mut ExecutionContext<'a>,
    key: &Bytes,
    values: &[Bytes],
    direction: PushDirection,
    mode: PushMode,
) -> Result<(RespValue, WriteOutcome), ListDbError> {
    let shard = ctx.shard_for_key(key)?;

    let list = match mode {
        PushMode::Always => shard.load_or_create_list(key)?,
        PushMode::OnlyIfExists => match shard.load_list_mut(key)? {
            Some(list) => list,
            None => return Ok((RespValue::Integer(0), WriteOutcome::DidNotWrite)),
        },
    };

    for value in values {
        match direction {
            PushDirection::Left => list.push_front(value.clone()),
            PushDirection::Right => list.push_back(value.clone()),
        }
    }
    let final_len = list.len() as i64;

    let outcome = shard.store_list(key);
    Ok((RespValue::Integer(final_len), outcome))
}

/// Shared logic for `LPOP` and `RPOP`.
pub(crate) async fn list_pop_logic<'a>(
    ctx: &mut ExecutionContext<'a>,
    key: &Bytes,
    direction: PopDirection,
) -> Result<(RespValue, WriteOutcome), ListDbError> {
    let shard = ctx.shard_for_key(key)?;

    let Some(list) = shard.load_list_mut(key)? else {
        return Ok((RespValue::Null, WriteOutcome::DidNotWrite));
    };

    let popped = match direction {
        PopDirection::Left => list.pop_front(),
        PopDirection::Right => list.pop_back(),
    };

    match popped {
        Some(value) => {
            let outcome = shard.store_list(key);
            Ok((RespValue::BulkString(value), outcome))
        }
        None => Ok((RespValue::Null, WriteOutcome::DidNotWrite)),
    }
}
