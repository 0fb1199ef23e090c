// SPDX-License-Identifier: GPL-3.0
// transition_schedule.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

/// The maximum number of transitions one run can schedule.
pub const MAX_TRANSITIONS: usize = 8;

/// This enum represents the kinds of scripted transition a run can fire at
/// an exact frame number.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TransitionKind {

    // Arbitrary-code-execution payload takes over polling.
    Ace,

    // Return to normal polled playback.
    Normal,

    // Console reset line events, acted on by the external driver.
    ResetSoft,
    ResetHard,
}

/// One scheduled transition. A frame number of 0 marks an empty slot, so no
/// transition can ever target frame 0.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transition {
    pub frame_number: u32,
    pub kind: TransitionKind,
}

/// This struct holds the bounded, append-only schedule of transitions for
/// one run. Slots fill contiguously from the front and entries are never
/// reordered or removed short of a full clear.
pub struct TransitionSchedule {

    // Fixed slot table; frame number 0 means the slot is empty.
    slots: [Transition; MAX_TRANSITIONS],
}

impl TransitionSchedule {

    /// Creates a new TransitionSchedule object with every slot empty.
    pub fn new() -> Self {
        TransitionSchedule {
            slots: [Transition { frame_number: 0, kind: TransitionKind::Normal }; MAX_TRANSITIONS],
        }
    }

    /// This function appends a transition into the first empty slot found by
    /// linear scan. It fails when every slot is occupied, and also rejects
    /// frame number 0, which is reserved as the empty-slot marker.
    pub fn add(&mut self, frame_number: u32, kind: TransitionKind) -> bool {

        if frame_number == 0 {
            return false;
        }

        for slot in self.slots.iter_mut() {
            if slot.frame_number == 0 {
                *slot = Transition { frame_number, kind };
                return true;
            }
        }

        // No room left to add the transition.
        false
    }

    /// This function finds the transition scheduled for the given frame
    /// count, if any. The scan runs in insertion order and stops at the
    /// first empty slot, since slots fill contiguously; when two entries
    /// target the same frame, the earliest-inserted one wins.
    pub fn evaluate(&self, new_frame_count: u32) -> Option<TransitionKind> {

        for slot in self.slots.iter() {
            if slot.frame_number == 0 {
                break;
            }

            if slot.frame_number == new_frame_count {
                return Some(slot.kind);
            }
        }

        None
    }

    /// Clears the schedule back to all-empty slots.
    pub fn clear(&mut self) {
        self.slots =
            [Transition { frame_number: 0, kind: TransitionKind::Normal }; MAX_TRANSITIONS];
    }
}
