// src/core/commands/command_table.rs

//! The static command table: one `CommandInfo` per supported command, built
//! once from each command type's `CommandSpec`.
//!
//! The table is consulted before a handler parses anything, so an invocation
//! with the wrong number of tokens is rejected with the canonical arity error
//! regardless of which handler would have run.

use super::command_trait::CommandFlags;
use super::{Command, CommandSpec, command_infos};
use crate::core::ListDbError;
use crate::core::protocol::RespFrame;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Builds a `Command` from the arguments that follow the command name.
pub type CommandParser = fn(&[RespFrame]) -> Result<Command, ListDbError>;

/// Registry metadata for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub arity: i64,
    pub flags: CommandFlags,
    pub first_key: i64,
    pub last_key: i64,
    pub step: i64,
    pub parse: CommandParser,
}

impl CommandInfo {
    pub fn from_spec<S: CommandSpec>(spec: &S, parse: CommandParser) -> Self {
        Self {
            name: spec.name(),
            arity: spec.arity(),
            flags: spec.flags(),
            first_key: spec.first_key(),
            last_key: spec.last_key(),
            step: spec.step(),
            parse,
        }
    }

    /// Whether `argc` tokens (including the command name) satisfy the arity.
    pub fn accepts(&self, argc: usize) -> bool {
        let argc = argc as i64;
        if self.arity >= 0 {
            argc == self.arity
        } else {
            argc >= -self.arity
        }
    }
}

static COMMAND_TABLE: Lazy<HashMap<&'static str, CommandInfo>> = Lazy::new(|| {
    command_infos()
        .into_iter()
        .map(|info| (info.name, info))
        .collect()
});

/// Looks up a command by name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static CommandInfo> {
    COMMAND_TABLE.get(name.to_ascii_lowercase().as_str())
}

/// Resolves `name` and checks that `argc` tokens satisfy its arity.
pub fn check_arity(name: &str, argc: usize) -> Result<&'static CommandInfo, ListDbError> {
    let info = lookup(name).ok_or_else(|| ListDbError::UnknownCommand(name.to_string()))?;
    if !info.accepts(argc) {
        return Err(ListDbError::wrong_args(info.name));
    }
    Ok(info)
}

/// Every registered command, ordered by name.
pub fn all() -> Vec<&'static CommandInfo> {
    let mut infos: Vec<_> = COMMAND_TABLE.values().collect();
    infos.sort_by_key(|info| info.name);
    infos
}
