// src/core/commands/list/pushx.rs

//! `LPUSHX` and `RPUSHX`: pushes that never create the key.

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{
    CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::commands::helpers::parse_key_and_values;
use crate::core::commands::list::logic::{PushMode, list_push_logic};
use crate::core::database::{ExecutionContext, PushDirection};
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

// --- LPUSHX ---
#[derive(Debug, Clone, Default)]
pub struct LPushX {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl ParseCommand for LPushX {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        let (key, values) = parse_key_and_values(args, 2, "LPUSHX")?;
        Ok(LPushX { key, values })
    }
}

#[async_trait]
impl ExecutableCommand for LPushX {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        list_push_logic(
            ctx,
            &self.key,
            &self.values,
            PushDirection::Left,
            PushMode::OnlyIfExists,
        )
        .await
    }
}

impl CommandSpec for LPushX {
    fn name(&self) -> &'static str {
        "lpushx"
    }
    fn arity(&self) -> i64 {
        -3
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
        let mut args = vec![self.key.clone()];
        args.extend(self.values.clone());
        args
    }
}

// --- RPUSHX ---
#[derive(Debug, Clone, Default)]
pub struct RPushX {
    pub key: Bytes,
    pub values: Vec<Bytes>,
}

impl ParseCommand for RPushX {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        let (key, values) = parse_key_and_values(args, 2, "RPUSHX")?;
        Ok(RPushX { key, values })
    }
}

#[async_trait]
impl ExecutableCommand for RPushX {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        list_push_logic(
            ctx,
            &self.key,
            &self.values,
            PushDirection::Right,
            PushMode::OnlyIfExists,
        )
        .await
    }
}

impl CommandSpec for RPushX {
    fn name(&self) -> &'static str {
        "rpushx"
    }
    fn arity(&self) -> i64 {
        -3
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
        let mut args = vec![self.key.clone()];
        args.extend(self.values.clone());
        args
    }
}
