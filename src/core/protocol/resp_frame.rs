// src/core/protocol/resp_frame.rs

//! The RESP frame structure handed to the engine by the wire layer.
//!
//! Decoding bytes into frames and encoding replies back happens outside this
//! crate; a command invocation arrives here as a `RespFrame::Array` whose
//! first element is the command name.

use bytes::Bytes;

/// An enum representing a single frame in the RESP protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    SimpleString(String),
    Error(String),
    Integer(i64),
    BulkString(Bytes),
    Null,
    NullArray,
    Array(Vec<RespFrame>),
}

impl RespFrame {
    /// Builds a command invocation frame from its name and raw arguments.
    pub fn command<I, T>(name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        let mut frames = vec![RespFrame::BulkString(Bytes::copy_from_slice(
            name.as_bytes(),
        ))];
        frames.extend(args.into_iter().map(|a| RespFrame::BulkString(a.into())));
        RespFrame::Array(frames)
    }
}
