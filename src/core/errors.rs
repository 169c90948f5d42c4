// src/core/errors.rs

//! Defines the primary error type for the list engine.
//!
//! The `Display` text of every variant is the exact message a client sees, so
//! renderers can emit `e.to_string()` verbatim as a RESP error.

use crate::core::protocol::RespValue;
use std::num::ParseIntError;
use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing every failure a command can signal.
#[derive(Error, Debug)]
pub enum ListDbError {
    #[error("ERR IO error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("ERR unknown command '{0}'")]
    UnknownCommand(String),

    #[error("ERR syntax error")]
    SyntaxError,

    /// Holds the lower-cased command name.
    #[error("ERR wrong number of arguments for '{0}' command")]
    WrongArgumentCount(String),

    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,

    #[error("ERR value is not an integer or out of range")]
    NotAnInteger,

    #[error("ERR index out of range")]
    IndexOutOfRange,

    #[error("ERR no such key")]
    KeyNotFound,

    #[error("ERR {0}")]
    InvalidRequest(String),

    #[error("ERR locking error: {0}")]
    LockingError(String),

    #[error("ERR internal error: {0}")]
    Internal(String),
}

impl ListDbError {
    /// Builds the arity error for `cmd`, normalising the name to lower case.
    pub fn wrong_args(cmd: &str) -> Self {
        ListDbError::WrongArgumentCount(cmd.to_ascii_lowercase())
    }

    /// Renders the error as a reply value for the wire layer.
    pub fn to_resp(&self) -> RespValue {
        RespValue::Error(self.to_string())
    }
}

// `std::io::Error` is not `Clone`, so it is shared behind an `Arc`.
impl Clone for ListDbError {
    fn clone(&self) -> Self {
        match self {
            ListDbError::Io(e) => ListDbError::Io(Arc::clone(e)),
            ListDbError::UnknownCommand(s) => ListDbError::UnknownCommand(s.clone()),
            ListDbError::SyntaxError => ListDbError::SyntaxError,
            ListDbError::WrongArgumentCount(s) => ListDbError::WrongArgumentCount(s.clone()),
            ListDbError::WrongType => ListDbError::WrongType,
            ListDbError::NotAnInteger => ListDbError::NotAnInteger,
            ListDbError::IndexOutOfRange => ListDbError::IndexOutOfRange,
            ListDbError::KeyNotFound => ListDbError::KeyNotFound,
            ListDbError::InvalidRequest(s) => ListDbError::InvalidRequest(s.clone()),
            ListDbError::LockingError(s) => ListDbError::LockingError(s.clone()),
            ListDbError::Internal(s) => ListDbError::Internal(s.clone()),
        }
    }
}

impl PartialEq for ListDbError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ListDbError::Io(e1), ListDbError::Io(e2)) => e1.to_string() == e2.to_string(),
            (ListDbError::UnknownCommand(s1), ListDbError::UnknownCommand(s2)) => s1 == s2,
            (ListDbError::WrongArgumentCount(s1), ListDbError::WrongArgumentCount(s2)) => {
                s1 == s2
            }
            (ListDbError::InvalidRequest(s1), ListDbError::InvalidRequest(s2)) => s1 == s2,
            (ListDbError::LockingError(s1), ListDbError::LockingError(s2)) => s1 == s2,
            (ListDbError::Internal(s1), ListDbError::Internal(s2)) => s1 == s2,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for ListDbError {
    fn from(e: std::io::Error) -> Self {
        ListDbError::Io(Arc::new(e))
    }
}

impl From<ParseIntError> for ListDbError {
    fn from(_: ParseIntError) -> Self {
        ListDbError::NotAnInteger
    }
}

impl From<std::str::Utf8Error> for ListDbError {
    fn from(_: std::str::Utf8Error) -> Self {
        ListDbError::WrongType
    }
}

impl From<std::string::FromUtf8Error> for ListDbError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        ListDbError::WrongType
    }
}
