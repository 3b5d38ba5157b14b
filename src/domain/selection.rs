//! Choosing which entry to display

/// Resolve a requested entry index against the number of entries.
///
/// A missing or out-of-range request falls back to the first entry. An empty
/// diary has nothing to select.
pub fn resolve_requested(requested: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match requested {
        Some(index) if index < len => Some(index),
        _ => Some(0),
    }
}

/// Move `offset` entries away from `current`, wrapping at both ends
pub fn step(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let current = current as isize % len;
    (current + offset % len + len).rem_euclid(len) as usize
}
