use std::ops::Range;

/// Computes the range of line indices to emit for a match at `match_index`,
/// clamped to `[0, len)`. Windows for distinct matches are computed
/// independently; overlapping windows are never merged, so a line covered by
/// two matches is emitted twice.
pub fn context_window(match_index: usize, before: usize, after: usize, len: usize) -> Range<usize> {
    let start = match_index.saturating_sub(before);
    let end = match_index
        .saturating_add(after)
        .saturating_add(1)
        .min(len);
    start..end
}
