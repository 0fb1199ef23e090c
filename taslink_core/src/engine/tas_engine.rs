// SPDX-License-Identifier: GPL-3.0
// tas_engine.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::{Engine, TimingBridge};
use crate::console::Console;
use crate::frame::Frame;
use crate::run::transition_schedule::TransitionKind;
use crate::run::{FrameEvent, Run};
use log::debug;

/// The fixed number of runs the engine can host concurrently.
pub const MAX_NUM_RUNS: usize = 2;

/// This struct is the composition root of the replay core: it owns the
/// fixed set of run records and routes every configuration, loader and
/// playback call to the right one.
pub struct TasEngine {

    // Every run record, preallocated in reset state.
    runs: [Run; MAX_NUM_RUNS],
}

/// Implementation functions for the engine itself.
impl TasEngine {

    /// Creates a new TasEngine object with every run in its zeroed
    /// reset state.
    pub fn new() -> Self {
        TasEngine {

            // Build each run already reset.
            runs: core::array::from_fn(|_| Run::new()),
        }
    }
}

/// Implementation functions to be called from anything that understands
/// what an Engine object is.
impl Engine for TasEngine {

    /// Sets the console a run drives.
    fn set_console(&mut self, run: usize, console: Console) {
        self.runs[run].console = Some(console);
    }

    /// Returns the console a run drives, if configured.
    fn console(&self, run: usize) -> Option<Console> {
        self.runs[run].console
    }

    /// Sets a run's controller count.
    fn set_num_controllers(&mut self, run: usize, count: u8) {
        self.runs[run].num_controllers = count;
    }

    /// Returns a run's controller count.
    fn num_controllers(&self, run: usize) -> u8 {
        self.runs[run].num_controllers
    }

    /// Sets a run's data lane count.
    fn set_num_data_lanes(&mut self, run: usize, count: u8) {
        self.runs[run].num_data_lanes = count;
    }

    /// Returns a run's data lane count.
    fn num_data_lanes(&self, run: usize) -> u8 {
        self.runs[run].num_data_lanes
    }

    /// Sets a run's advisory overread flag.
    fn set_overread(&mut self, run: usize, overread: bool) {
        self.runs[run].overread = overread;
    }

    /// Returns a run's advisory overread flag.
    fn overread(&self, run: usize) -> bool {
        self.runs[run].overread
    }

    /// Sets a run's DPCM fix flag.
    fn set_dpcm_fix(&mut self, run: usize, dpcm: bool) {
        self.runs[run].dpcm_fix = dpcm;
    }

    /// Returns a run's DPCM fix flag.
    fn dpcm_fix(&self, run: usize) -> bool {
        self.runs[run].dpcm_fix
    }

    /// Marks a run as fully configured.
    fn set_initialized(&mut self, run: usize, initialized: bool) {
        self.runs[run].initialized = initialized;
    }

    /// Returns whether a run is fully configured.
    fn initialized(&self, run: usize) -> bool {
        self.runs[run].initialized
    }

    /// Returns a run's retired frame count.
    fn frame_count(&self, run: usize) -> u32 {
        self.runs[run].frame_count
    }

    /// Returns how many frames a run currently has queued.
    fn buffered_frames(&self, run: usize) -> usize {
        self.runs[run].buffer.len()
    }

    /// Sets a run's clock fix, programming the shared timer period through
    /// the bridge when the value enables one.
    fn set_clock_fix(&mut self, run: usize, value: u8, timers: &mut dyn TimingBridge) {

        if value > 1 {
            self.runs[run].clock_fix = value;

            // The timers are shared: this changes cadence for every
            // active run, not just this one.
            timers.set_timer_period(value - 1);
            debug!("run {} clock fix {}; shared timer period set to {}", run, value, value - 1);
        } else {

            // Disabling only clears the stored value; the timer period
            // stays at whatever was last programmed.
            self.runs[run].clock_fix = 0;
        }
    }

    /// Returns whether a run has a clock fix stored.
    fn clock_fix_enabled(&self, run: usize) -> bool {
        self.runs[run].clock_fix != 0
    }

    /// Decodes one frame of raw loader bytes against the run's current
    /// configuration and queues it, rejecting it only on a full buffer.
    fn extract_data_and_add_frame(&mut self, run: usize, data: &[u8], _length: u32) -> bool {
        self.runs[run].add_frame_from_bytes(data)
    }

    /// Takes the next queued frame for a run, or signals underflow.
    fn get_next_frame(&mut self, run: usize) -> Option<&Frame> {
        self.runs[run].buffer.pop()
    }

    /// Advances a run's frame count and reports any transition event that
    /// fired on the new value.
    fn increment_frame_count(&mut self, run: usize) -> FrameEvent {
        self.runs[run].increment_frame_count()
    }

    /// Schedules a transition for a run at an exact frame number.
    fn add_transition(&mut self, run: usize, kind: TransitionKind, frame_number: u32) -> bool {
        self.runs[run].schedule.add(frame_number, kind)
    }

    /// Resets every run to its zeroed state, rewinding every buffer's
    /// cursors to the start of storage.
    fn reset_all(&mut self) {

        for run in &mut self.runs {
            run.reset();
        }

        debug!("all {} runs reset", MAX_NUM_RUNS);
    }
}
