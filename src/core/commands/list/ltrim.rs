// src/core/commands/list/ltrim.rs

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
pub struct LTrim {
    pub key: Bytes,
    pub start: i64,
    pub stop: i64,
}
impl ParseCommand for LTrim {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 3, "LTRIM")?;
        Ok(LTrim {
            key: extract_bytes(&args[0])?,
            start: parse_i64(&args[1])?,
            stop: parse_i64(&args[2])?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for LTrim {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let shard = ctx.shard_for_key(&self.key)?;
        let Some(list) = shard.load_list_mut(&self.key)? else {
            return Ok((RespValue::ok(), WriteOutcome::DidNotWrite));
        };

        let len = list.len();
        let outcome = match resolve_range(self.start, self.stop, len) {
            // Whole list selected.
            Some((0, to)) if to + 1 == len => WriteOutcome::DidNotWrite,
            Some((from, to)) => {
                list.retain_range(from, to);
                shard.store_list(&self.key)
            }
            None => {
                shard.remove_list(&self.key);
                WriteOutcome::Delete { keys_deleted: 1 }
            }
        };
        Ok((RespValue::ok(), outcome))
    }
}
impl CommandSpec for LTrim {
    fn name(&self) -> &'static str {
        "ltrim"
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
            self.start.to_string().into(),
            self.stop.to_string().into(),
        ]
    }
}
