// src/core/storage/list.rs

//! Defines `ListValue`, the in-memory representation of a list key.

use bytes::Bytes;
use std::collections::VecDeque;

/// An ordered sequence of byte strings.
///
/// The element count is always derived from the sequence. The payload byte
/// total is maintained incrementally so that memory accounting stays O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListValue {
    elements: VecDeque<Bytes>,
    byte_size: usize,
}

impl ListValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total number of payload bytes held by the elements.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Bytes> {
        self.elements.iter()
    }

    pub fn front(&self) -> Option<&Bytes> {
        self.elements.front()
    }

    pub fn back(&self) -> Option<&Bytes> {
        self.elements.back()
    }

    pub fn get(&self, pos: usize) -> Option<&Bytes> {
        self.elements.get(pos)
    }

    pub fn push_front(&mut self, value: Bytes) {
        self.byte_size += value.len();
        self.elements.push_front(value);
    }

    pub fn push_back(&mut self, value: Bytes) {
        self.byte_size += value.len();
        self.elements.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<Bytes> {
        let value = self.elements.pop_front()?;
        self.byte_size -= value.len();
        Some(value)
    }

    pub fn pop_back(&mut self) -> Option<Bytes> {
        let value = self.elements.pop_back()?;
        self.byte_size -= value.len();
        Some(value)
    }

    /// Replaces the element at `pos`, returning the previous one.
    /// Returns `None` and leaves the list untouched if `pos` is out of bounds.
    pub fn replace(&mut self, pos: usize, value: Bytes) -> Option<Bytes> {
        let slot = self.elements.get_mut(pos)?;
        self.byte_size = self.byte_size - slot.len() + value.len();
        Some(std::mem::replace(slot, value))
    }

    /// Inserts `value` so that it ends up at index `pos`. `pos == len()` appends.
    pub fn insert(&mut self, pos: usize, value: Bytes) {
        self.byte_size += value.len();
        self.elements.insert(pos, value);
    }

    /// Index of the first element equal to `needle`, scanning from the head.
    pub fn position(&self, needle: &[u8]) -> Option<usize> {
        self.elements.iter().position(|e| e.as_ref() == needle)
    }

    /// Iterates the inclusive range `[from, to]`. Callers resolve bounds first.
    pub fn range(&self, from: usize, to: usize) -> impl Iterator<Item = &Bytes> {
        self.elements.range(from..=to)
    }

    /// Keeps only the inclusive range `[from, to]` and drops everything else.
    pub fn retain_range(&mut self, from: usize, to: usize) {
        let keep = to + 1 - from;
        let mut freed: usize = self.elements.drain(..from).map(|e| e.len()).sum();
        if self.elements.len() > keep {
            freed += self.elements.drain(keep..).map(|e| e.len()).sum::<usize>();
        }
        self.byte_size -= freed;
    }

    /// Removes occurrences of `value` and returns how many were removed.
    ///
    /// - `count > 0`: at most `count`, scanning head to tail.
    /// - `count < 0`: at most `|count|`, scanning tail to head.
    /// - `count == 0`: every occurrence.
    pub fn remove_matching(&mut self, value: &[u8], count: i64) -> usize {
        let limit = if count == 0 {
            usize::MAX
        } else {
            usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX)
        };
        let mut removed = 0usize;

        if count >= 0 {
            self.elements.retain(|e| {
                if removed < limit && e.as_ref() == value {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        } else {
            // Single reverse pass; survivors keep their relative order.
            let mut kept = VecDeque::with_capacity(self.elements.len());
            for e in self.elements.drain(..).rev() {
                if removed < limit && e.as_ref() == value {
                    removed += 1;
                } else {
                    kept.push_front(e);
                }
            }
            self.elements = kept;
        }

        self.byte_size -= removed * value.len();
        removed
    }
}

impl FromIterator<Bytes> for ListValue {
    fn from_iter<I: IntoIterator<Item = Bytes>>(iter: I) -> Self {
        let mut list = ListValue::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}
