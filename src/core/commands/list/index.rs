// src/core/commands/list/index.rs

//! Converts Redis-style signed indices into positions within a list.
//!
//! Negative values count from the tail, `-1` being the last element. The two
//! entry points differ only in how they treat positions outside the list:
//! `resolve_index` rejects them, `resolve_range` clamps them.

/// Resolves a single index against a list of `len` elements.
/// Returns `None` when the index falls outside `[0, len)`.
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 {
        len.checked_add(index)?
    } else {
        index
    };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Resolves an inclusive `[start, stop]` range against a list of `len` elements.
///
/// A start before the head clamps to 0 and a stop past the tail clamps to the
/// last element. Returns `None` for an empty selection.
pub fn resolve_range(start: i64, stop: i64, len: usize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).ok()?;

    let normalize = |i: i64| if i < 0 { len.saturating_add(i) } else { i };
    let from = normalize(start).max(0);
    let to = normalize(stop).min(len - 1);

    if from > to || from >= len {
        return None;
    }
    Some((usize::try_from(from).ok()?, usize::try_from(to).ok()?))
}
