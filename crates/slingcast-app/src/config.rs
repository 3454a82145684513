//! Application configuration.

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Application name, used for logging.
    pub title: String,
    /// Fixed simulation tick rate in Hz.
    pub tick_rate: u32,
    /// Number of frames to run, or `None` to run until the app requests exit.
    pub max_frames: Option<u64>,
    /// Pace frames against the wall clock instead of free-running.
    pub realtime: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Slingcast".to_string(),
            tick_rate: 60,
            max_frames: None,
            realtime: false,
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the simulation tick rate.
    #[must_use]
    pub const fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Set the frame budget.
    #[must_use]
    pub const fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Enable or disable wall-clock pacing.
    #[must_use]
    pub const fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }
}
