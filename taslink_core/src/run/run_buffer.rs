// SPDX-License-Identifier: GPL-3.0
// run_buffer.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::frame::Frame;
use taslink_utility::RingCursor;

/// The fixed capacity of every run's frame buffer, in frames.
pub const MAX_SIZE: usize = 16;

/// This struct models the circular frame queue of one run. The loader
/// pushes decoded frames in at the write cursor and the playback interrupt
/// pops them out at the read cursor, strictly first-in first-out. Storage
/// is preallocated once and never grows.
pub struct RunBuffer {

    // Preallocated frame storage.
    frames: Vec<Frame>,

    // Producer and consumer cursors over the storage.
    write_cursor: RingCursor,
    read_cursor: RingCursor,

    // Number of frames currently queued.
    size: usize,
}

impl RunBuffer {

    /// Creates a new RunBuffer object with zeroed storage and both cursors
    /// on the first slot.
    pub fn new() -> Self {
        RunBuffer {

            // Preallocate every slot up front.
            frames: vec![Frame::zeroed(); MAX_SIZE],

            // Both cursors start at the first slot.
            write_cursor: RingCursor::new(MAX_SIZE),
            read_cursor: RingCursor::new(MAX_SIZE),

            // Empty to begin with.
            size: 0,
        }
    }

    /// This function copies a frame into the current write slot and then
    /// publishes it. It fails and leaves all state unchanged when the
    /// buffer is full; the oldest frame is never evicted.
    pub fn push(&mut self, frame: &Frame) -> bool {

        if self.size == MAX_SIZE {
            return false;
        }

        // The copy must land in the slot before the commit below makes it
        // visible to the consumer.
        self.frames[self.write_cursor.index()] = *frame;

        // Cursor advance and size increment form a single commit step: the
        // consumer must never observe one without the other. Exclusive
        // access through `&mut self` keeps the pair indivisible here.
        self.write_cursor.advance();
        self.size += 1;

        true
    }

    /// This function pops the next frame, returning a borrow of its slot
    /// rather than a copy. It fails and leaves all state unchanged when the
    /// buffer is empty. The borrow is only valid until the slot is
    /// overwritten, which cannot happen before `MAX_SIZE` further pushes.
    pub fn pop(&mut self) -> Option<&Frame> {

        if self.size == 0 {
            return None;
        }

        let slot = self.read_cursor.index();

        // Same commit discipline as push, on the consumer side.
        self.read_cursor.advance();
        self.size -= 1;

        Some(&self.frames[slot])
    }

    /// This function returns the number of frames currently queued.
    pub fn len(&self) -> usize {
        self.size
    }

    /// This function reports whether the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// This function reports whether the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.size == MAX_SIZE
    }

    /// Resets the buffer to its initial state: zeroed storage, both cursors
    /// rewound to the first slot, nothing queued.
    pub fn reset(&mut self) {

        for frame in &mut self.frames {
            *frame = Frame::zeroed();
        }

        self.write_cursor.rewind();
        self.read_cursor.rewind();
        self.size = 0;
    }
}

#[cfg(test)]
mod tests;
