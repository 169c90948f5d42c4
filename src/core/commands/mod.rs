// src/core/commands/mod.rs

//! This module defines all supported commands, organizes them into categories,
//! and provides the central `Command` enum that encapsulates their parsed state.
//! The `define_commands!` macro is used to generate the enum and its core
//! implementations, reducing boilerplate and ensuring consistency.

use crate::core::commands::command_trait::{
    CommandExt, CommandFlags, ExecutableCommand, ParseCommand, WriteOutcome,
};
use crate::core::database::ExecutionContext;
use crate::core::protocol::RespFrame;
use crate::core::{ListDbError, RespValue};
use async_trait::async_trait;
use bytes::Bytes;

pub use command_spec::CommandSpec;

#[macro_use]
mod command_def;

pub mod command_spec;
pub mod command_table;
pub mod command_trait;
pub mod generic;
pub mod helpers;
pub mod list;
pub mod string;

define_commands! {
    // --- List Commands ---
    (LPush, LPush, list),
    (RPush, RPush, list),
    (LPushX, LPushX, list),
    (RPushX, RPushX, list),
    (LPop, LPop, list),
    (RPop, RPop, list),
    (RPopLPush, RPopLPush, list),
    (LRem, LRem, list),
    (LTrim, LTrim, list),
    (LSet, LSet, list),
    (LInsert, LInsert, list),
    (LIndex, LIndex, list),
    (LLen, LLen, list),
    (LRange, LRange, list),

    // --- Generic Commands ---
    (Del, Del, generic),
    (Exists, Exists, generic),
    (Type, TypeInfo, generic),
    (FlushDb, FlushDb, generic),
    (Slowlog, Slowlog, generic),

    // --- String Commands ---
    (Get, Get, string),
    (Set, Set, string),
}

impl TryFrom<RespFrame> for Command {
    type Error = ListDbError;

    /// Resolves the command name against the command table, checks arity, then
    /// lets the command type parse its own arguments.
    fn try_from(frame: RespFrame) -> Result<Self, Self::Error> {
        let RespFrame::Array(parts) = frame else {
            return Err(ListDbError::InvalidRequest(
                "Protocol error: expected a command array".into(),
            ));
        };
        let Some(name_frame) = parts.first() else {
            return Err(ListDbError::InvalidRequest(
                "Protocol error: empty command".into(),
            ));
        };
        let name = helpers::extract_string(name_frame)
            .map_err(|_| ListDbError::InvalidRequest("Protocol error: invalid command name".into()))?;

        let info = command_table::check_arity(&name, parts.len())?;
        (info.parse)(&parts[1..])
    }
}

impl From<Command> for RespFrame {
    /// Re-encodes a parsed command as an invocation frame.
    fn from(command: Command) -> Self {
        RespFrame::command(command.name(), command.get_resp_args())
    }
}
