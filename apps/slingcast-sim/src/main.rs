//! Slingcast Throwing Range Demo
//!
//! Headless, scripted simulation of a throwable ball on a small range: the
//! ball sits on its tee, a scripted key press launches it, and every frame a
//! bundle of probe rays reports the obstacles and targets ahead of it.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p slingcast-sim -- [OPTIONS]
//! ```
//!
//! ## Options
//! - `--frames <N>`: Frame budget for the run (default: 600)
//! - `--launch-frame <N>`: Frame at which the launch key is tapped (default: 30)
//! - `--tuning <PATH>`: RON file with ray length and impulse tuning
//! - `--realtime`: Pace frames against the wall clock
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;

use slingcast_app::{run_app, AppConfig};

use crate::app::ThrowSim;

const DEFAULT_MAX_FRAMES: u64 = 600;

fn main() -> anyhow::Result<()> {
    // Check for help flag before starting the app
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    let mut max_frames = DEFAULT_MAX_FRAMES;
    let mut realtime = false;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                if i + 1 < args.len() {
                    if let Ok(v) = args[i + 1].parse() {
                        max_frames = v;
                        i += 1;
                    }
                }
            }
            "--realtime" => realtime = true,
            _ => {}
        }
        i += 1;
    }

    run_app::<ThrowSim>(
        AppConfig::new("Slingcast Throwing Range")
            .with_max_frames(max_frames)
            .with_realtime(realtime),
    )
}

fn print_help() {
    eprintln!(
        "Slingcast Throwing Range Demo

USAGE:
    cargo run -p slingcast-sim -- [OPTIONS]

OPTIONS:
    --frames <N>        Frame budget for the run (default: 600)
    --launch-frame <N>  Frame at which the launch key is tapped (default: 30)
    --tuning <PATH>     RON file with ray length and impulse tuning
    --realtime          Pace frames against the wall clock
    -h, --help          Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Set log level (e.g., info, debug, trace)"
    );
}
