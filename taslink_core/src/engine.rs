// SPDX-License-Identifier: GPL-3.0
// engine.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::console::Console;
use crate::frame::Frame;
use crate::run::FrameEvent;
use crate::run::transition_schedule::TransitionKind;

/// This module contains the default engine implementation. There
/// may be others in future.
pub mod tas_engine;

/// This trait provides an implementation-opaque way of calling engine
/// methods from elsewhere in the system. The engine owns every run record
/// and exposes the whole configuration, loader, playback and lifecycle
/// surface against run ids. Run ids out of range are a caller error.
pub trait Engine {

    /// This must be called to set the console a run drives.
    fn set_console(&mut self, run: usize, console: Console);

    /// This must be called to read back the console a run drives, if any
    /// has been configured yet.
    fn console(&self, run: usize) -> Option<Console>;

    /// This must be called to set a run's controller count.
    fn set_num_controllers(&mut self, run: usize, count: u8);

    /// This must be called to read back a run's controller count.
    fn num_controllers(&self, run: usize) -> u8;

    /// This must be called to set a run's data lane count.
    fn set_num_data_lanes(&mut self, run: usize, count: u8);

    /// This must be called to read back a run's data lane count.
    fn num_data_lanes(&self, run: usize) -> u8;

    /// This must be called to set a run's advisory overread flag.
    fn set_overread(&mut self, run: usize, overread: bool);

    /// This must be called to read back a run's advisory overread flag.
    fn overread(&self, run: usize) -> bool;

    /// This must be called to set a run's DPCM fix flag directly,
    /// independent of any schedule-driven change.
    fn set_dpcm_fix(&mut self, run: usize, dpcm: bool);

    /// This must be called to read back a run's DPCM fix flag.
    fn dpcm_fix(&self, run: usize) -> bool;

    /// This must be called to mark a run as fully configured.
    fn set_initialized(&mut self, run: usize, initialized: bool);

    /// This must be called to query whether a run is fully configured.
    fn initialized(&self, run: usize) -> bool;

    /// This must be called to read a run's retired frame count.
    fn frame_count(&self, run: usize) -> u32;

    /// This must be called to read how many frames a run has queued,
    /// letting the loader observe backpressure.
    fn buffered_frames(&self, run: usize) -> usize;

    /// This must be called to set a run's clock fix. A value above 1 is
    /// stored and programs `value - 1` into the shared timer period via
    /// the bridge, which affects cadence for every active run; any other
    /// value disables the stored fix and leaves the timers untouched.
    fn set_clock_fix(&mut self, run: usize, value: u8, timers: &mut dyn TimingBridge);

    /// This must be called to query whether a run has a clock fix stored.
    /// Only the presence is reported, not the magnitude.
    fn clock_fix_enabled(&self, run: usize) -> bool;

    /// This must be called by the loader to decode one frame of raw bytes
    /// and queue it. The frame layout is derived entirely from the run's
    /// current configuration; `length` is advisory and not validated
    /// against the computed stride. Fails only when the buffer is full.
    fn extract_data_and_add_frame(&mut self, run: usize, data: &[u8], length: u32) -> bool;

    /// This must be called by the playback consumer to take the next
    /// queued frame, or observe that none is available.
    fn get_next_frame(&mut self, run: usize) -> Option<&Frame>;

    /// This must be called exactly once per retired frame. It advances the
    /// run's frame count and reports the transition event, if any, that
    /// fired on the new value.
    fn increment_frame_count(&mut self, run: usize) -> FrameEvent;

    /// This must be called to schedule a transition at an exact frame
    /// number. Fails when the run's schedule is full or the frame number
    /// is 0.
    fn add_transition(&mut self, run: usize, kind: TransitionKind, frame_number: u32) -> bool;

    /// This must be called to reset every run to its zeroed state, with
    /// every buffer cursor rewound to the first storage slot. It must not
    /// be called while any run is actively being consumed.
    fn reset_all(&mut self);
}

/// This trait provides an implementation-opaque way of the engine calling
/// out to the shared hardware timers that pace playback. On the device
/// these are real timer peripherals; hosted implementations can log or
/// record the programmed period instead.
pub trait TimingBridge {

    /// The engine must call this to program the shared timer period. The
    /// timers are shared between runs, so the last write wins for all of
    /// them.
    fn set_timer_period(&mut self, period: u8);
}
