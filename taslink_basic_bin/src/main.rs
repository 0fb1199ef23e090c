// SPDX-License-Identifier: GPL-3.0
// main.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::ffi::OsString;

// This file is the core of the basic client - it exists merely as a CLI-based
// program to load a recorded movie file and replay it through the engine,
// standing in for the loader and the polling interrupt that drive the core
// on the real device.

use clap::{Parser, ValueEnum};
use log::{debug, error, info, warn};
use taslink_core::console::Console;
use taslink_core::engine::tas_engine::TasEngine;
use taslink_core::engine::{Engine, TimingBridge};
use taslink_core::frame::{MAX_CONTROLLERS, MAX_DATA_LANES, frame_stride};
use taslink_core::run::FrameEvent;
use taslink_core::run::transition_schedule::TransitionKind;

/// CLI spelling of the console types the engine supports.
#[derive(Copy, Clone, ValueEnum)]
enum ConsoleArg {
    N64,
    Snes,
    Nes,
    Gc,
}

impl ConsoleArg {

    /// Maps the CLI spelling onto the engine's console type.
    fn to_console(self) -> Console {
        match self {
            ConsoleArg::N64 => Console::N64,
            ConsoleArg::Snes => Console::SNES,
            ConsoleArg::Nes => Console::NES,
            ConsoleArg::Gc => Console::GC,
        }
    }
}

#[derive(Parser)]
#[command(
    version,
    about = "A basic barebones replay harness for the taslink engine",
    long_about = None
)]
struct TaslinkArgs {
    #[arg(
        long = "movie",
        help = "A recorded movie file of raw frame data",
        id = "Movie file"
    )]
    movie: OsString,

    #[arg(
        long = "console",
        value_enum,
        help = "The console the movie was recorded for",
        id = "Console"
    )]
    console: ConsoleArg,

    #[arg(
        long = "controllers",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=MAX_CONTROLLERS as i64),
        help = "Number of controllers in each frame",
        id = "Controllers"
    )]
    controllers: u8,

    #[arg(
        long = "lanes",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=MAX_DATA_LANES as i64),
        help = "Number of data lanes per controller",
        id = "Lanes"
    )]
    lanes: u8,

    #[arg(
        long = "dpcm",
        help = "Start with the NES DPCM fix enabled"
    )]
    dpcm: bool,

    #[arg(
        long = "overread",
        help = "Set the advisory overread flag"
    )]
    overread: bool,

    #[arg(
        long = "clock-fix",
        default_value_t = 0,
        help = "Clock fix divisor, 0 or 1 to disable",
        id = "Clock fix"
    )]
    clock_fix: u8,

    #[arg(
        long = "soft-reset-at",
        help = "Schedule a soft reset at the given frame number",
        id = "Frame number"
    )]
    soft_reset_at: Vec<u32>,
}

/// A timing bridge that logs the programmed period in place of the shared
/// timer peripherals of the real device.
struct LoggedTimers;

impl TimingBridge for LoggedTimers {

    /// Logs the period the engine asked for.
    fn set_timer_period(&mut self, period: u8) {
        info!("shared timer period register set to {}", period);
    }
}

fn main() {
    colog::init();

    let taslink_args = TaslinkArgs::parse();
    let console = taslink_args.console.to_console();

    // Build the engine and configure run 0 from the CLI.
    let mut engine = TasEngine::new();
    let mut timers = LoggedTimers;
    engine.set_console(0, console);
    engine.set_num_controllers(0, taslink_args.controllers);
    engine.set_num_data_lanes(0, taslink_args.lanes);
    engine.set_dpcm_fix(0, taslink_args.dpcm);
    engine.set_overread(0, taslink_args.overread);
    engine.set_clock_fix(0, taslink_args.clock_fix, &mut timers);
    engine.set_initialized(0, true);

    for frame_number in &taslink_args.soft_reset_at {
        if !engine.add_transition(0, TransitionKind::ResetSoft, *frame_number) {
            warn!("could not schedule soft reset at frame {}", frame_number);
        }
    }

    // The loader must supply exactly one stride of bytes per frame.
    let stride = frame_stride(engine.console(0), taslink_args.controllers, taslink_args.lanes);
    if stride == 0 {
        error!("configuration yields a zero frame stride, nothing to replay");
        std::process::exit(1);
    }

    let movie = match std::fs::read(&taslink_args.movie) {
        Ok(movie) => movie,
        Err(err) => {
            error!("could not read movie file: {}", err);
            std::process::exit(1);
        }
    };

    if movie.len() % stride != 0 {
        warn!("movie length is not a whole number of {} byte frames; trailing bytes are dropped", stride);
    }

    info!(
        "replaying {} frames for {} ({} controllers, {} lanes)",
        movie.len() / stride,
        console.name(),
        taslink_args.controllers,
        taslink_args.lanes
    );

    // Alternate between topping the buffer up as the loader would and
    // draining one frame per simulated poll.
    let mut chunks = movie.chunks_exact(stride).peekable();
    let mut replayed = 0u32;

    while chunks.peek().is_some() || engine.buffered_frames(0) > 0 {

        // Loader side: push until the buffer rejects or the movie ends.
        while let Some(chunk) = chunks.peek() {
            if engine.extract_data_and_add_frame(0, chunk, stride as u32) {
                chunks.next();
            } else {
                break;
            }
        }

        // Polling side: retire exactly one frame per pass.
        if let Some(frame) = engine.get_next_frame(0) {
            debug!("frame {}: first sample {:02X?}", replayed + 1, frame.sample(0, 0));
            replayed += 1;

            match engine.increment_frame_count(0) {
                FrameEvent::ResetSoft => info!("soft reset event at frame {}", engine.frame_count(0)),
                FrameEvent::ResetHard => info!("hard reset event at frame {}", engine.frame_count(0)),
                FrameEvent::Continue => info!("transition fired at frame {}", engine.frame_count(0)),
                FrameEvent::None => (),
            }
        }
    }

    info!("replay finished after {} frames", replayed);
}
