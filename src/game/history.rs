//! Undo/redo history
//!
//! A flat log of snapshots with a cursor. The entry under the cursor always
//! mirrors the live game; entries after it form the redo branch, which is
//! dropped as soon as a new move or pass is committed.

use std::collections::VecDeque;

use crate::board::{Board, Pos};

/// Maximum number of snapshots kept. The oldest one is evicted beyond this.
pub const HISTORY_CAPACITY: usize = 256;

/// Immutable record of the game after a committed move or pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Board contents and side to move
    pub board: Board,
    pub black_score: u32,
    pub white_score: u32,
    /// Square played to reach this state (`None` for the start and passes)
    pub last_move: Option<Pos>,
}

/// Snapshot log with a cursor.
///
/// Never empty: it is created with the starting snapshot and only grows.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Create a history holding only `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self::with_capacity(initial, HISTORY_CAPACITY)
    }

    /// Create a history that keeps at most `capacity` snapshots (minimum 1)
    pub fn with_capacity(initial: Snapshot, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY));
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            capacity,
        }
    }

    /// Append a snapshot after the cursor, discarding any redo branch.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back. Returns the snapshot now under the cursor.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step the cursor forward. Returns the snapshot now under the cursor.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot under the cursor
    #[inline]
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
