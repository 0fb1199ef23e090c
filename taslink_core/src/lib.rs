// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// Crate-wide lines to disable specific lints:

// Given the code mirrors the zeroed reset state of the replay device very
// closely, objects are built through explicit constructors and reset paths,
// so there will be no derived Default implementations unless needed.
#![allow(clippy::new_without_default)]

// We use upper-case acronyms for console names and similar enums, in order
// to match the conventional names of the hardware more closely.
#![allow(clippy::upper_case_acronyms)]

/// This module contains the console capability table used to size
/// controller samples.
pub mod console;

/// This module contains the frame grid type and the codec that slices raw
/// loader bytes into it.
pub mod frame;

/// This module contains the per-run state: configuration, the circular
/// frame buffer and the transition schedule.
pub mod run;

/// This module contains the run engine, the composition root that owns
/// every run record.
pub mod engine;
