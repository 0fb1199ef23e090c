// SPDX-License-Identifier: GPL-3.0
// run.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::console::Console;
use crate::frame::{Frame, frame_stride};
use log::warn;
use run_buffer::RunBuffer;
use transition_schedule::{TransitionKind, TransitionSchedule};

/// This module contains the circular frame buffer shared between the loader
/// and the playback interrupt.
pub mod run_buffer;

/// This module contains the bounded schedule of frame-exact transitions.
pub mod transition_schedule;

/// This enum represents what the caller must do after a frame count
/// increment: nothing matched, a transition fired and playback continues,
/// or a console reset line must be pulsed by the external driver.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum FrameEvent {
    None,
    Continue,
    ResetSoft,
    ResetHard,
}

/// This struct holds the state of one independent playback session: its
/// configuration, its frame buffer and its transition schedule.
pub struct Run {

    // Whether the run has been fully configured by the loader.
    pub(crate) initialized: bool,

    // Console this run drives, unset until configured.
    pub(crate) console: Option<Console>,

    // Configured controller and data lane counts. Decode clamps them to
    // the compile-time frame grid bounds.
    pub(crate) num_controllers: u8,
    pub(crate) num_data_lanes: u8,

    // Frames retired so far. Monotonic; only a full engine reset clears it.
    pub(crate) frame_count: u32,

    // Advisory flag: respond to controller polls past the end of a frame.
    pub(crate) overread: bool,

    // Compensation flag for NES DPCM audio interference with polling.
    pub(crate) dpcm_fix: bool,

    // Last programmed timer divisor, 0 when disabled.
    pub(crate) clock_fix: u8,

    // Frame buffer and transition schedule.
    pub(crate) buffer: RunBuffer,
    pub(crate) schedule: TransitionSchedule,
}

impl Run {

    /// Creates a new Run object in its zeroed reset state.
    pub fn new() -> Self {
        Run {

            // Setup configuration fields.
            initialized: false,
            console: None,
            num_controllers: 0,
            num_data_lanes: 0,

            // Setup playback progress and flags.
            frame_count: 0,
            overread: false,
            dpcm_fix: false,
            clock_fix: 0,

            // Setup buffer and schedule.
            buffer: RunBuffer::new(),
            schedule: TransitionSchedule::new(),
        }
    }

    /// Resets a Run object to its zeroed state, rewinding both buffer
    /// cursors to the first storage slot and clearing the schedule.
    pub fn reset(&mut self) {

        self.initialized = false;
        self.console = None;
        self.num_controllers = 0;
        self.num_data_lanes = 0;
        self.frame_count = 0;
        self.overread = false;
        self.dpcm_fix = false;
        self.clock_fix = 0;
        self.buffer.reset();
        self.schedule.clear();
    }

    /// This function decodes one frame's worth of loader bytes using the
    /// run's current configuration and appends it to the buffer. It fails
    /// only when the buffer is full, leaving all state unchanged.
    pub fn add_frame_from_bytes(&mut self, data: &[u8]) -> bool {

        if self.buffer.is_full() {
            return false;
        }

        if frame_stride(self.console, self.num_controllers, self.num_data_lanes) == 0 {
            warn!("frame decoded with a zero stride; run has no usable console configured");
        }

        let frame = Frame::decode(
            data,
            self.console,
            self.num_controllers,
            self.num_data_lanes
        );

        self.buffer.push(&frame)
    }

    /// This function retires one frame: it advances the frame count,
    /// wrapping at the top of its range, and consults the transition
    /// schedule exactly once against the new value.
    /// An ACE transition clears the DPCM fix, a normal transition sets it,
    /// and reset transitions leave it untouched for the external driver
    /// to act on.
    pub fn increment_frame_count(&mut self) -> FrameEvent {

        self.frame_count = self.frame_count.wrapping_add(1);

        match self.schedule.evaluate(self.frame_count) {
            Some(TransitionKind::Ace) => {
                self.dpcm_fix = false;
                FrameEvent::Continue
            },
            Some(TransitionKind::Normal) => {
                self.dpcm_fix = true;
                FrameEvent::Continue
            },
            Some(TransitionKind::ResetSoft) => FrameEvent::ResetSoft,
            Some(TransitionKind::ResetHard) => FrameEvent::ResetHard,
            None => FrameEvent::None,
        }
    }
}
