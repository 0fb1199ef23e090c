// SPDX-License-Identifier: GPL-3.0
// frame.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::console::{self, Console};
use taslink_utility::min;

/// The maximum number of controllers one run can drive.
pub const MAX_CONTROLLERS: usize = 2;

/// The maximum number of data lanes per controller slot. A data lane is a
/// parallel input channel for one controller slot, such as a multitap or
/// link-cable path.
pub const MAX_DATA_LANES: usize = 2;

/// The size in bytes of the largest per-controller sample of any supported
/// console (GameCube).
pub const MAX_SAMPLE_BYTES: usize = 8;

/// One controller's worth of input data for a single poll. Consoles with
/// smaller samples leave the tail bytes zero.
pub type ControllerSample = [u8; MAX_SAMPLE_BYTES];

/// This struct holds one time-step's worth of controller input across all
/// controllers and data lanes of a run. The grid always has its full
/// compile-time shape; slots beyond the configured controller and lane
/// counts stay zero-filled.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Frame {

    // Sample grid, controller-major.
    samples: [[ControllerSample; MAX_DATA_LANES]; MAX_CONTROLLERS],
}

impl Frame {

    /// Creates a new Frame object with every slot zero-filled.
    pub fn zeroed() -> Self {
        Frame {
            samples: [[[0; MAX_SAMPLE_BYTES]; MAX_DATA_LANES]; MAX_CONTROLLERS],
        }
    }

    /// This function returns the sample for the given controller and lane.
    pub fn sample(&self, controller: usize, lane: usize) -> &ControllerSample {
        &self.samples[controller][lane]
    }

    /// This function slices raw loader bytes into a frame, in controller-major,
    /// lane-minor order, copying exactly one console sample per slot. Only the
    /// computed stride worth of bytes is consumed; anything beyond it in `raw`
    /// is ignored, and if `raw` runs short the remaining slot bytes stay zero.
    /// Counts beyond the compile-time grid bounds are clamped to them.
    pub fn decode(
        raw: &[u8],
        console: Option<Console>,
        num_controllers: u8,
        num_data_lanes: u8
    ) -> Self {

        let sample_bytes = console::sample_bytes(console);
        let mut frame = Frame::zeroed();

        // The grid never grows to meet a misconfigured count; slots past
        // its bounds simply do not exist to fill.
        let controllers = min(num_controllers as usize, MAX_CONTROLLERS);
        let lanes = min(num_data_lanes as usize, MAX_DATA_LANES);

        // Walk the configured portion of the grid, consuming one sample
        // per slot.
        let mut offset = 0;
        for controller in 0..controllers {
            for lane in 0..lanes {

                let end = min(offset + sample_bytes, raw.len());
                if offset < end {
                    let taken = end - offset;
                    frame.samples[controller][lane][..taken]
                        .copy_from_slice(&raw[offset..end]);
                }

                offset += sample_bytes;
            }
        }

        frame
    }
}

/// This function returns the exact number of bytes a loader must supply for
/// one frame of the given configuration. An unconfigured console yields a
/// stride of 0, which callers must treat as "unsupported".
pub fn frame_stride(
    console: Option<Console>,
    num_controllers: u8,
    num_data_lanes: u8
) -> usize {
    num_controllers as usize * num_data_lanes as usize * console::sample_bytes(console)
}
