// src/core/storage/data_types.rs

//! Defines the core data structures for storing values in the keyspace,
//! such as `StoredValue` and the `DataValue` enum.

use super::list::ListValue;
use bytes::Bytes;

/// A wrapper for all values stored in the keyspace, containing the data and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredValue {
    pub data: DataValue,
    /// Bumped on every write to the entry.
    pub version: u64,
    /// The calculated size of the `data` field in bytes.
    pub size: usize,
}

impl StoredValue {
    /// Creates a new `StoredValue` with default metadata.
    pub fn new(data: DataValue) -> Self {
        let size = data.memory_usage();
        Self {
            data,
            version: 1,
            size,
        }
    }

    /// Returns the total memory usage of this stored value in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.size
    }

    /// Records a write: bumps the version and re-reads the payload size.
    /// Returns the signed size delta so the caller can adjust shard accounting.
    pub fn touch(&mut self) -> isize {
        self.version = self.version.wrapping_add(1);
        let new_size = self.data.memory_usage();
        let diff = new_size as isize - self.size as isize;
        self.size = new_size;
        diff
    }
}

/// The payload of a key.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    String(Bytes),
    List(ListValue),
}

impl DataValue {
    /// Calculates the approximate memory usage of the data payload in bytes.
    pub fn memory_usage(&self) -> usize {
        match self {
            DataValue::String(b) => b.len(),
            DataValue::List(l) => l.byte_size(),
        }
    }

    /// The name `TYPE` reports for this payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::String(_) => "string",
            DataValue::List(_) => "list",
        }
    }
}
