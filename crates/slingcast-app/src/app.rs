//! `SimApp` trait definition.

use crate::context::AppContext;

/// Trait for slingcast applications.
///
/// Implement this trait to create an application driven by the framework's
/// fixed-timestep frame loop. The framework handles logging setup, frame
/// pacing and the frame budget.
pub trait SimApp: Sized {
    /// Initialize the application.
    ///
    /// Called once before the first frame.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Advance the simulation by one fixed timestep.
    ///
    /// # Arguments
    /// * `ctx` - Run context; call [`AppContext::request_exit`] to stop
    /// * `dt` - Fixed delta time in seconds
    fn update(&mut self, ctx: &mut AppContext, dt: f32) -> anyhow::Result<()>;

    /// Cleanup before shutdown.
    ///
    /// Called once after the last frame. Default implementation does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}
