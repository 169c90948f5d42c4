// src/core/commands/list/lindex.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::{extract_bytes, parse_i64, validate_arg_count};
use crate::core::commands::list::index::resolve_index;
use crate::core::database::{ExecutionContext, ListStore};
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct LIndex {
    pub key: Bytes,
    pub index: i64,
}
impl ParseCommand for LIndex {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 2, "LINDEX")?;
        Ok(LIndex {
            key: extract_bytes(&args[0])?,
            index: parse_i64(&args[1])?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for LIndex {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let shard = ctx.shard_for_key(&self.key)?;
        let value = shard
            .load_list(&self.key)?
            .and_then(|list| {
                resolve_index(self.index, list.len()).and_then(|pos| list.get(pos).cloned())
            })
            .map_or(RespValue::Null, RespValue::BulkString);
        Ok((value, WriteOutcome::DidNotWrite))
    }
}
impl CommandSpec for LIndex {
    fn name(&self) -> &'static str {
        "lindex"
    }
    fn arity(&self) -> i64 {
        3
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
        vec![self.key.clone(), self.index.to_string().into()]
    }
}
