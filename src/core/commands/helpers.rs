// src/core/commands/helpers.rs

//! Provides helper functions for parsing command arguments from `RespFrame`s.
//! These helpers reduce boilerplate and ensure consistent error handling across commands.

use crate::core::ListDbError;
use crate::core::protocol::RespFrame;
use bytes::Bytes;

/// Extracts a UTF-8 string from a bulk string frame.
pub fn extract_string(frame: &RespFrame) -> Result<String, ListDbError> {
    if let RespFrame::BulkString(bs) = frame {
        String::from_utf8(bs.to_vec()).map_err(|_| ListDbError::WrongType)
    } else {
        Err(ListDbError::WrongType)
    }
}

pub fn extract_bytes(frame: &RespFrame) -> Result<Bytes, ListDbError> {
    match frame {
        RespFrame::BulkString(bs) => Ok(bs.clone()),
        _ => Err(ListDbError::WrongType),
    }
}

/// Parses a signed 64-bit integer argument (index, start, stop, count).
/// Anything that is not a decimal `i64` fails with `NotAnInteger`.
pub fn parse_i64(frame: &RespFrame) -> Result<i64, ListDbError> {
    match frame {
        RespFrame::BulkString(bs) => std::str::from_utf8(bs)
            .map_err(|_| ListDbError::NotAnInteger)?
            .parse::<i64>()
            .map_err(|_| ListDbError::NotAnInteger),
        RespFrame::Integer(i) => Ok(*i),
        _ => Err(ListDbError::NotAnInteger),
    }
}

/// Checks that exactly `expected` arguments follow the command name.
pub fn validate_arg_count(
    args: &[RespFrame],
    expected: usize,
    cmd: &str,
) -> Result<(), ListDbError> {
    if args.len() != expected {
        Err(ListDbError::wrong_args(cmd))
    } else {
        Ok(())
    }
}

/// Parses `key value [value ...]`, requiring at least `min_args` arguments.
pub fn parse_key_and_values(
    args: &[RespFrame],
    min_args: usize,
    cmd: &str,
) -> Result<(Bytes, Vec<Bytes>), ListDbError> {
    if args.len() < min_args {
        return Err(ListDbError::wrong_args(cmd));
    }
    let key = extract_bytes(&args[0])?;
    let values = args[1..]
        .iter()
        .map(extract_bytes)
        .collect::<Result<_, _>>()?;
    Ok((key, values))
}

/// Parses one or more keys, as taken by `DEL` and `EXISTS`.
pub fn parse_keys(args: &[RespFrame], cmd: &str) -> Result<Vec<Bytes>, ListDbError> {
    if args.is_empty() {
        return Err(ListDbError::wrong_args(cmd));
    }
    args.iter().map(extract_bytes).collect()
}
