use std::ops::Range;

/// Default number of neighbors on each side of the search position
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Positions of the index scanned by one lookup.
///
/// The window is `[location - size, location + 1 + size)` clamped to the
/// index bounds, where `location` is the lower-bound search result. It is
/// positional: neighbors are whatever sorts next to the query, however far
/// away their signatures are, and it is lopsided at either end of the index.
/// Fuzzy results depend on this exact shape, so do not replace it with a
/// signature-distance cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: usize,
    pub end: usize,
}

impl ScanWindow {
    pub fn new(location: usize, size: usize, len: usize) -> Self {
        let start = location.saturating_sub(size).min(len);
        let end = location
            .saturating_add(1)
            .saturating_add(size)
            .min(len)
            .max(start);
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
