//! Headless application framework for the slingcast toolkit.
//!
//! Provides the fixed-timestep frame loop the simulation runs in: a config
//! builder, the [`SimApp`] trait applications implement, and a runner that
//! initializes logging and steps the app until its frame budget runs out or
//! it requests exit.

pub mod app;
pub mod config;
pub mod context;
pub mod runner;

pub use app::SimApp;
pub use config::AppConfig;
pub use context::AppContext;
pub use runner::run_app;
