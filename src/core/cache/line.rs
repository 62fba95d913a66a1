//! Cache Line (Set).
//!
//! A line holds `ways` blocks and a round-robin eviction cursor. Misses fill
//! the lowest-numbered invalid block first; only once every block is valid
//! does the cursor choose a victim, advancing by one per eviction.

use super::AccessOutcome;

/// One block slot: a validity flag and the tag it holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Block {
    pub valid: bool,
    pub tag: u32,
}

/// A set of `ways` blocks sharing one line index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    blocks: Box<[Block]>,
    cursor: usize,
}

impl Line {
    /// Creates an empty line with `ways` invalid blocks.
    pub fn new(ways: usize) -> Self {
        Self {
            blocks: vec![Block::default(); ways].into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Invalidates every block and rewinds the eviction cursor.
    pub fn reset(&mut self) {
        self.blocks.fill(Block::default());
        self.cursor = 0;
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Way that will be evicted by the next miss on a full line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the way holding `tag`, if any.
    pub fn find(&self, tag: u32) -> Option<usize> {
        self.blocks.iter().position(|b| b.valid && b.tag == tag)
    }

    pub fn is_full(&self) -> bool {
        self.blocks.iter().all(|b| b.valid)
    }

    /// Number of valid blocks.
    pub fn occupancy(&self) -> usize {
        self.blocks.iter().filter(|b| b.valid).count()
    }

    /// Looks up `tag`, installing it on a miss.
    pub fn access(&mut self, tag: u32) -> AccessOutcome {
        if let Some(way) = self.find(tag) {
            return AccessOutcome::Hit { way };
        }

        if let Some(way) = self.blocks.iter().position(|b| !b.valid) {
            self.blocks[way] = Block { valid: true, tag };
            return AccessOutcome::Fill { way };
        }

        let way = self.cursor;
        let victim = std::mem::replace(&mut self.blocks[way].tag, tag);
        self.cursor = (self.cursor + 1) % self.blocks.len();
        AccessOutcome::Evict { way, victim }
    }
}
