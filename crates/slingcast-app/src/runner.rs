//! Application runner and frame loop.

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::SimApp;
use crate::config::AppConfig;
use crate::context::AppContext;

/// Run a [`SimApp`] with the given configuration.
///
/// Initializes logging, constructs the app, and steps it at the configured
/// tick rate until the frame budget is exhausted or the app requests exit.
pub fn run_app<A: SimApp>(config: AppConfig) -> anyhow::Result<()> {
    // Initialize logging; a second runner in the same process keeps the
    // existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    info!(
        title = %config.title,
        tick_rate = config.tick_rate,
        "starting application"
    );

    let dt = 1.0 / config.tick_rate as f32;
    let tick = Duration::from_secs_f64(1.0 / f64::from(config.tick_rate));

    let mut ctx = AppContext::new();
    let mut app = A::init(&mut ctx)?;

    while !ctx.exit_requested() && config.max_frames.map_or(true, |m| ctx.frame_number() < m) {
        let frame_start = Instant::now();

        app.update(&mut ctx, dt)?;
        ctx.advance(dt);

        if config.realtime {
            let spent = frame_start.elapsed();
            if spent < tick {
                thread::sleep(tick - spent);
            }
        }
    }

    app.cleanup(&mut ctx);
    info!(frames = ctx.frame_number(), "application finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        frames_seen: u64,
    }

    impl SimApp for Counter {
        fn init(_ctx: &mut AppContext) -> anyhow::Result<Self> {
            Ok(Self { frames_seen: 0 })
        }

        fn update(&mut self, ctx: &mut AppContext, _dt: f32) -> anyhow::Result<()> {
            self.frames_seen += 1;
            if self.frames_seen == 3 && ctx.frame_number() != 2 {
                anyhow::bail!("frame numbering out of step");
            }
            Ok(())
        }
    }

    struct EarlyExit;

    impl SimApp for EarlyExit {
        fn init(_ctx: &mut AppContext) -> anyhow::Result<Self> {
            Ok(Self)
        }

        fn update(&mut self, ctx: &mut AppContext, _dt: f32) -> anyhow::Result<()> {
            if ctx.frame_number() == 4 {
                ctx.request_exit();
            }
            Ok(())
        }
    }

    #[test]
    fn frame_budget_bounds_the_run() {
        let config = AppConfig::new("counter-test").with_max_frames(5);
        run_app::<Counter>(config).unwrap();
    }

    #[test]
    fn exit_request_stops_the_loop() {
        let config = AppConfig::new("exit-test").with_max_frames(1000);
        run_app::<EarlyExit>(config).unwrap();
    }
}
