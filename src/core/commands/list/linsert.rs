// src/core/commands/list/linsert.rs

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

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InsertPosition {
    #[default]
    Before,
    After,
}

#[derive(Debug, Clone, Default)]
pub struct LInsert {
    pub key: Bytes,
    pub position: InsertPosition,
    pub pivot: Bytes,
    pub element: Bytes,
}
impl ParseCommand for LInsert {
    fn parse(args: &[RespFrame]) -> Result<Self, ListDbError> {
        validate_arg_count(args, 4, "LINSERT")?;
        let key = extract_bytes(&args[0])?;
        // The position token is matched exactly.
        let position = match extract_bytes(&args[1])?.as_ref() {
            b"BEFORE" => InsertPosition::Before,
            b"AFTER" => InsertPosition::After,
            _ => return Err(ListDbError::SyntaxError),
        };
        Ok(LInsert {
            key,
            position,
            pivot: extract_bytes(&args[2])?,
            element: extract_bytes(&args[3])?,
        })
    }
}
#[async_trait]
impl ExecutableCommand for LInsert {
    async fn execute<'a>(
        &self,
        ctx: &mut ExecutionContext<'a>,
    ) -> Result<(RespValue, WriteOutcome), ListDbError> {
        let shard = ctx.shard_for_key(&self.key)?;
        let Some(list) = shard.load_list_mut(&self.key)? else {
            return Ok((RespValue::Integer(0), WriteOutcome::DidNotWrite));
        };

        let Some(pos) = list.position(&self.pivot) else {
            return Ok((RespValue::Integer(-1), WriteOutcome::DidNotWrite));
        };
        let insert_at = match self.position {
            InsertPosition::Before => pos,
            InsertPosition::After => pos + 1,
        };
        list.insert(insert_at, self.element.clone());
        let new_len = list.len() as i64;

        let outcome = shard.store_list(&self.key);
        Ok((RespValue::Integer(new_len), outcome))
    }
}
impl CommandSpec for LInsert {
    fn name(&self) -> &'static str {
        "linsert"
    }
    fn arity(&self) -> i64 {
        5
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
            (match self.position {
                InsertPosition::Before => "BEFORE",
                InsertPosition::After => "AFTER",
            })
            .into(),
            self.pivot.clone(),
            self.element.clone(),
        ]
    }
}
