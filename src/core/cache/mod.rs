//! Set-Associative Cache Model.
//!
//! The model is a fixed array of `Line`s indexed by the decoded line index.
//! Every access touches exactly one line; lines never interact.
//!
//! The model only tracks occupancy. There are no dirty bits and no write
//! policy, and replacement is round-robin per line rather than
//! recency-based.

mod line;

pub use line::{Block, Line};

use super::geometry::CacheGeometry;

/// How an access was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The tag was resident in `way`.
    Hit { way: usize },
    /// Miss installed into the first invalid block, `way`.
    Fill { way: usize },
    /// Miss on a full line; `victim` was evicted from `way` (the cursor).
    Evict { way: usize, victim: u32 },
}

impl AccessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit { .. })
    }
}

/// Cache state for one trace run.
#[derive(Debug, Clone)]
pub struct CacheModel {
    lines: Box<[Line]>,
}

impl CacheModel {
    /// Creates an empty cache shaped by `geometry`.
    pub fn new(geometry: &CacheGeometry) -> Self {
        let lines = (0..geometry.line_count())
            .map(|_| Line::new(geometry.ways()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { lines }
    }

    /// Invalidates every block and zeroes every eviction cursor.
    pub fn reset(&mut self) {
        for line in self.lines.iter_mut() {
            line.reset();
        }
    }

    /// Looks up `tag` in line `line_index`, updating that line on a miss.
    ///
    /// # Panics
    ///
    /// Panics if `line_index` is out of range. Indices produced by
    /// [`decode`](crate::core::decode) under the same geometry never are.
    pub fn access(&mut self, line_index: usize, tag: u32) -> AccessOutcome {
        let lines = self.lines.len();
        match self.lines.get_mut(line_index) {
            Some(line) => line.access(tag),
            None => panic!("line index {} out of range ({} lines)", line_index, lines),
        }
    }

    /// Boolean view of [`access`](Self::access): `true` on a hit.
    pub fn lookup_and_update(&mut self, line_index: usize, tag: u32) -> bool {
        self.access(line_index, tag).is_hit()
    }

    /// Returns `true` if `tag` is resident in line `line_index`.
    pub fn contains(&self, line_index: usize, tag: u32) -> bool {
        self.lines
            .get(line_index)
            .is_some_and(|line| line.find(tag).is_some())
    }

    pub fn line(&self, line_index: usize) -> Option<&Line> {
        self.lines.get(line_index)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of valid blocks across all lines.
    pub fn occupancy(&self) -> usize {
        self.lines.iter().map(Line::occupancy).sum()
    }
}
