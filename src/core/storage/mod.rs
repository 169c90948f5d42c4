// src/core/storage/mod.rs

pub mod data_types;
pub mod list;

pub use data_types::{DataValue, StoredValue};
pub use list::ListValue;
