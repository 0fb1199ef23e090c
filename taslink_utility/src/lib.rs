// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// This crate contains useful utility functions that can be used throughout the codebase.

/// This struct models a cursor over a fixed-capacity ring of slots. The
/// cursor is compared against the final slot before moving, so the wrap
/// back to the first slot happens after the last valid slot has been used,
/// never before.
pub struct RingCursor {

    // Current slot index.
    index: usize,

    // Index of the last valid slot.
    last: usize,
}

impl RingCursor {

    /// Creates a new RingCursor over the given number of slots, positioned on
    /// the first slot. The capacity must be at least one.
    pub fn new(capacity: usize) -> Self {
        RingCursor {

            // Start on the first slot.
            index: 0,

            // Remember where the ring ends.
            last: capacity - 1,
        }
    }

    /// This function returns the slot index the cursor currently rests on.
    pub fn index(&self) -> usize {
        self.index
    }

    /// This function advances the cursor by one slot, wrapping back to the
    /// first slot once the last one has been consumed.
    pub fn advance(&mut self) {

        if self.index != self.last {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }

    /// This function rewinds the cursor back to the first slot.
    pub fn rewind(&mut self) {
        self.index = 0;
    }
}

/// Re-exported stdlib `min` function, to keep all our utility functions
/// together here in the same place.
pub use std::cmp::min;
