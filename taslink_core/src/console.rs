// SPDX-License-Identifier: GPL-3.0
// console.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

/// This enum represents all consoles the device can replay inputs for.
/// The discriminants index into the capability table below.
#[derive(Copy, Clone, PartialEq, Debug)]
#[repr(usize)]
pub enum Console {
    N64 = 0,
    SNES = 1,
    NES = 2,
    GC = 3,
}

/// This struct describes the fixed capabilities of one console type.
pub struct ConsoleSpec {

    // Human-readable console name.
    pub name: &'static str,

    // Size in bytes of one controller's sample for a single poll.
    pub sample_bytes: usize,
}

/// Capability table for every supported console. Resolved once when a run
/// is configured rather than on every decode.
const CONSOLE_SPECS: [ConsoleSpec; 4] = [
    ConsoleSpec { name: "N64", sample_bytes: 4 },
    ConsoleSpec { name: "SNES", sample_bytes: 2 },
    ConsoleSpec { name: "NES", sample_bytes: 1 },
    ConsoleSpec { name: "GC", sample_bytes: 8 },
];

impl Console {

    /// This function returns the capability entry for this console.
    pub fn spec(self) -> &'static ConsoleSpec {
        &CONSOLE_SPECS[self as usize]
    }

    /// This function returns the human-readable name of this console.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// This function returns the size in bytes of one controller's sample
    /// for this console.
    pub fn sample_bytes(self) -> usize {
        self.spec().sample_bytes
    }
}

/// This function returns the per-controller sample size for an optionally
/// configured console. An unconfigured console yields 0, which callers must
/// treat as "unsupported" rather than a valid zero-length sample.
pub fn sample_bytes(console: Option<Console>) -> usize {

    match console {
        Some(console) => console.sample_bytes(),
        None => 0,
    }
}
