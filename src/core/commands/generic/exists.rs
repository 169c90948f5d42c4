// src/core/commands/generic/exists.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::parse_keys;
use crate::core::database::ExecutionContext;
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

/// `EXISTS key [key ...]`. A key named several times is counted each time.
#[derive(Debug, Clone, Default)]
pub struct Exists {
    pub keys: Vec<Bytes>,
}
impl ParseCommand for Exists {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        Ok(Exists {
            keys: parse_keys(args, "EXISTS")?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for Exists {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let mut count = 0i64;
        for key in &self.keys {
            if ctx.shard_for_key(key)?.contains_key(key) {
                count += 1;
            }
        }
        Ok((RespValue::Integer(count), WriteOutcome::DidNotWrite))
    }
}
impl CommandSpec for Exists {
    fn name(&self) -> &'static str {
        "exists"
    }
    fn arity(&self) -> i64 {
        -2
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::READONLY | CommandFlags::MOVABLEKEYS
    }
    fn first_key(&self) -> i64 {
        1
    }
    fn last_key(&self) -> i64 {
        -1
    }
    fn step(&self) -> i64 {
        1
    }
    fn get_keys(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
}
