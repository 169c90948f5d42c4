// src/core/commands/list/lrange.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::{extract_bytes, parse_i64, validate_arg_count};
use crate::core::commands::list::index::resolve_range;
use crate::core::database::{ExecutionContext, ListStore};
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct LRange {
    pub key: Bytes,
    pub start: i64,
    pub stop: i64,
}
impl ParseCommand for LRange {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 3, "LRANGE")?;
        Ok(LRange {
            key: extract_bytes(&args[0])?,
            start: parse_i64(&args[1])?,
            stop: parse_i64(&args[2])?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for LRange {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let max_len = ctx.state.config.safety.max_list_range_len;
        let shard = ctx.shard_for_key(&self.key)?;

        let Some(list) = shard.load_list(&self.key)? else {
            return Ok((RespValue::Array(vec![]), WriteOutcome::DidNotWrite));
        };
        let Some((from, to)) = resolve_range(self.start, self.stop, list.len()) else {
            return Ok((RespValue::Array(vec![]), WriteOutcome::DidNotWrite));
        };

        let count = to - from + 1;
        if max_len > 0 && count > max_len {
            return Err(ListDbError::InvalidRequest(format!(
                "LRANGE would return {count} elements, exceeding the configured limit of {max_len}"
            )));
        }

        let values = list
            .range(from, to)
            .cloned()
            .map(RespValue::BulkString)
            .collect();
        Ok((RespValue::Array(values), WriteOutcome::DidNotWrite))
    }
}
impl CommandSpec for LRange {
    fn name(&self) -> &'static str {
        "lrange"
    }
    fn arity(&self) -> i64 {
        4
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::READONLY | CommandFlags::MOVABLEKEYS
    }
    fn first_key(&self) -> i64 {
        1
    }
    fn last_key(&self) -> i64 {
        1
    }
    fn step(&self) -> i64 {
        1
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.start.to_string().into(),
            self.stop.to_string().into(),
        ]
    }
}
