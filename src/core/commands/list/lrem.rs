// src/core/commands/list/lrem.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::{extract_bytes, parse_i64, validate_arg_count};
use crate::core::database::{ExecutionContext, ListStore};
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

/// `LREM key count element`.
///
/// A positive `count` removes from head to tail, a negative one from tail to
/// head, and zero removes every occurrence.
#[derive(Debug, Clone, Default)]
pub struct LRem {
    pub key: Bytes,
    pub count: i64,
    pub element: Bytes,
}
impl ParseCommand for LRem {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 3, "LREM")?;
        Ok(LRem {
            key: extract_bytes(&args[0])?,
            count: parse_i64(&args[1])?,
            element: extract_bytes(&args[2])?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for LRem {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let shard = ctx.shard_for_key(&self.key)?;
        let Some(list) = shard.load_list_mut(&self.key)? else {
            return Ok((RespValue::Integer(0), WriteOutcome::DidNotWrite));
        };

        let removed = list.remove_matching(&self.element, self.count);
        if removed == 0 {
            return Ok((RespValue::Integer(0), WriteOutcome::DidNotWrite));
        }

        let outcome = shard.store_list(&self.key);
        Ok((RespValue::Integer(removed as i64), outcome))
    }
}
impl CommandSpec for LRem {
    fn name(&self) -> &'static str {
        "lrem"
    }
    fn arity(&self) -> i64 {
        4
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE | CommandFlags::MOVABLEKEYS
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
            self.count.to_string().into(),
            self.element.clone(),
        ]
    }
}
