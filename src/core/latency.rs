// src/core/latency.rs

//! Implements the slow log: a bounded history of commands whose execution
//! time crossed the configured threshold. Backs the `SLOWLOG` command.

use crate::core::RespValue;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The maximum length of a single command argument to be stored in the slow log.
const SLOWLOG_MAX_ARG_LEN: usize = 128;

/// Number of entries `SLOWLOG GET` returns when no count is given.
pub const SLOWLOG_DEFAULT_GET_COUNT: usize = 10;

/// A single slow-log entry.
#[derive(Debug, Clone)]
pub struct LatencySample {
    pub id: u64,
    /// Wall-clock time the command finished.
    pub timestamp: SystemTime,
    pub latency: Duration,
    pub command_name: &'static str,
    /// Arguments after the command name, truncated to `SLOWLOG_MAX_ARG_LEN` bytes each.
    pub command_args: Vec<Bytes>,
}

#[derive(Debug)]
struct SlowLogInner {
    samples: VecDeque<LatencySample>,
    next_id: u64,
}

/// Records slow commands in a ring buffer of at most `max_len` entries.
#[derive(Debug)]
pub struct LatencyMonitor {
    inner: Mutex<SlowLogInner>,
    max_len: usize,
}

impl LatencyMonitor {
    pub fn new(max_len: usize) -> Self {
        Self {
            inner: Mutex::new(SlowLogInner {
                samples: VecDeque::with_capacity(max_len),
                next_id: 0,
            }),
            max_len,
        }
    }

    /// Adds a new sample, evicting the oldest one when the buffer is full.
    pub fn add_sample(
        &self,
        command_name: &'static str,
        command_args: Vec<Bytes>,
        latency: Duration,
    ) {
        if self.max_len == 0 {
            return;
        }

        let truncated_args: Vec<Bytes> = command_args
            .into_iter()
            .map(|arg| {
                if arg.len() > SLOWLOG_MAX_ARG_LEN {
                    let mut truncated = arg.slice(..SLOWLOG_MAX_ARG_LEN).to_vec();
                    truncated.extend_from_slice(b"... (truncated)");
                    Bytes::from(truncated)
                } else {
                    arg
                }
            })
            .collect();

        let mut inner = self.inner.lock();
        while inner.samples.len() >= self.max_len {
            inner.samples.pop_front();
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.samples.push_back(LatencySample {
            id,
            timestamp: SystemTime::now(),
            latency,
            command_name,
            command_args: truncated_args,
        });
    }

    /// `SLOWLOG GET [count]`: the newest entries first.
    pub fn get_slow_log(&self, count: Option<usize>) -> RespValue {
        let inner = self.inner.lock();
        let count = count.unwrap_or(SLOWLOG_DEFAULT_GET_COUNT);

        let logs: Vec<RespValue> = inner
            .samples
            .iter()
            .rev()
            .take(count)
            .map(|sample| {
                let mut full_command_array = Vec::with_capacity(sample.command_args.len() + 1);
                full_command_array.push(RespValue::BulkString(sample.command_name.into()));
                full_command_array.extend(
                    sample
                        .command_args
                        .iter()
                        .cloned()
                        .map(RespValue::BulkString),
                );

                RespValue::Array(vec![
                    RespValue::Integer(sample.id as i64),
                    RespValue::Integer(
                        sample
                            .timestamp
                            .duration_since(UNIX_EPOCH)
                            .unwrap_or_default()
                            .as_secs() as i64,
                    ),
                    RespValue::Integer(sample.latency.as_micros() as i64),
                    RespValue::Array(full_command_array),
                ])
            })
            .collect();

        RespValue::Array(logs)
    }

    /// `SLOWLOG LEN`.
    pub fn get_slow_log_len(&self) -> RespValue {
        RespValue::Integer(self.inner.lock().samples.len() as i64)
    }

    /// `SLOWLOG RESET`. Entry ids keep increasing across resets.
    pub fn reset_slow_log(&self) -> RespValue {
        self.inner.lock().samples.clear();
        RespValue::ok()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
