// src/core/commands/list/lset.rs

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
pub struct LSet {
    pub key: Bytes,
    pub index: i64,
    pub element: Bytes,
}
impl ParseCommand for LSet {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 3, "LSET")?;
        Ok(LSet {
            key: extract_bytes(&args[0])?,
            index: parse_i64(&args[1])?,
            element: extract_bytes(&args[2])?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for LSet {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let shard = ctx.shard_for_key(&self.key)?;
        let list = shard
            .load_list_mut(&self.key)?
            .ok_or(ListDbError::KeyNotFound)?;

        let pos = resolve_index(self.index, list.len()).ok_or(ListDbError::IndexOutOfRange)?;
        list.replace(pos, self.element.clone());

        let outcome = shard.store_list(&self.key);
        Ok((RespValue::ok(), outcome))
    }
}
impl CommandSpec for LSet {
    fn name(&self) -> &'static str {
        "lset"
    }
    fn arity(&self) -> i64 {
        4
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::DENY_OOM | CommandFlags::MOVABLEKEYS
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
            self.index.to_string().into(),
            self.element.clone(),
        ]
    }
}
