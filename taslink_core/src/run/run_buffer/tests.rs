// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::{MAX_SIZE, RunBuffer};
use crate::console::Console;
use crate::frame::Frame;

// Tests for the circular frame buffer.

/// Builds an N64 frame whose first sample byte carries the given tag, so
/// frames pushed in order can be told apart when they come back out.
fn tagged_frame(tag: u8) -> Frame {
    Frame::decode(&[tag, 0, 0, 0], Some(Console::N64), 1, 1)
}

#[test]
fn test_pop_on_empty_buffer_fails() {

    let mut buffer = RunBuffer::new();

    // Nothing queued yet, so the pop must signal underflow.
    assert!(buffer.pop().is_none());
    assert_eq!(buffer.len(), 0);
}

#[test]
fn test_frames_come_back_in_push_order() {

    let mut buffer = RunBuffer::new();

    // Given three distinct frames pushed in order,
    for tag in 1..=3 {
        assert!(buffer.push(&tagged_frame(tag)));
    }

    // popping must return them byte-for-byte in the same order.
    for tag in 1..=3 {
        let frame = buffer.pop().expect("frame should be queued");
        assert_eq!(*frame, tagged_frame(tag));
    }

    // And a further pop must signal underflow.
    assert!(buffer.pop().is_none());
}

#[test]
fn test_push_on_full_buffer_fails_and_changes_nothing() {

    let mut buffer = RunBuffer::new();

    // Fill the buffer completely.
    for tag in 0..MAX_SIZE as u8 {
        assert!(buffer.push(&tagged_frame(tag)));
    }

    // One more push must be rejected outright.
    assert!(!buffer.push(&tagged_frame(0xFF)));
    assert_eq!(buffer.len(), MAX_SIZE);
    assert_eq!(buffer.write_cursor.index(), 0);

    // The queued contents must be untouched by the failed push.
    for tag in 0..MAX_SIZE as u8 {
        let frame = buffer.pop().expect("frame should be queued");
        assert_eq!(*frame, tagged_frame(tag));
    }
}

#[test]
fn test_cursors_wrap_after_the_last_slot() {

    let mut buffer = RunBuffer::new();

    // Fill and drain once, leaving both cursors back on the first slot.
    for tag in 0..MAX_SIZE as u8 {
        assert!(buffer.push(&tagged_frame(tag)));
    }
    for _ in 0..MAX_SIZE {
        assert!(buffer.pop().is_some());
    }

    assert_eq!(buffer.write_cursor.index(), 0);
    assert_eq!(buffer.read_cursor.index(), 0);

    // A second pass over the ring must deliver in order again.
    for tag in 100..100 + MAX_SIZE as u8 {
        assert!(buffer.push(&tagged_frame(tag)));
    }
    for tag in 100..100 + MAX_SIZE as u8 {
        let frame = buffer.pop().expect("frame should be queued");
        assert_eq!(*frame, tagged_frame(tag));
    }
}

#[test]
fn test_interleaved_push_and_pop_keeps_fifo_order() {

    let mut buffer = RunBuffer::new();
    let mut next_push = 0u8;
    let mut next_pop = 0u8;

    // Push two frames for every one popped until the cursors have wrapped
    // a few times; order must hold throughout.
    while next_pop < 3 * MAX_SIZE as u8 {

        for _ in 0..2 {
            if buffer.push(&tagged_frame(next_push)) {
                next_push += 1;
            }
        }

        let frame = buffer.pop().expect("frame should be queued");
        assert_eq!(*frame, tagged_frame(next_pop));
        next_pop += 1;
    }
}

#[test]
fn test_reset_rewinds_cursors_and_empties_buffer() {

    let mut buffer = RunBuffer::new();

    for tag in 0..5 {
        assert!(buffer.push(&tagged_frame(tag)));
    }
    assert!(buffer.pop().is_some());

    buffer.reset();

    assert!(buffer.is_empty());
    assert_eq!(buffer.write_cursor.index(), 0);
    assert_eq!(buffer.read_cursor.index(), 0);
    assert!(buffer.pop().is_none());
}

#[test]
fn test_popped_slot_is_only_rewritten_after_a_full_lap() {

    let mut buffer = RunBuffer::new();

    assert!(buffer.push(&tagged_frame(7)));
    assert!(buffer.pop().is_some());

    // The vacated first slot must not be rewritten until the write cursor
    // has come all the way around, MAX_SIZE - 1 pushes later.
    for tag in 0..(MAX_SIZE - 1) as u8 {
        assert!(buffer.push(&tagged_frame(tag)));
    }
    assert_eq!(buffer.frames[0], tagged_frame(7));

    // The very next push lands back on it.
    assert!(buffer.push(&tagged_frame(0xEE)));
    assert_eq!(buffer.frames[0], tagged_frame(0xEE));
}
