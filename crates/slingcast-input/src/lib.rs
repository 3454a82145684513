//! Input handling for the slingcast toolkit.
//!
//! Tracks keyboard state with per-frame edge detection and maps named
//! actions to key bindings. Events arrive either from winit (windowed
//! hosts) or through synthetic press/release calls (scripted headless
//! runs and tests).

pub mod action;
pub mod button;
pub mod keyboard;
pub mod manager;

pub use action::{ActionMap, ActionMapBuilder};
pub use button::ButtonState;
pub use keyboard::KeyboardState;
pub use manager::InputManager;

pub use winit::keyboard::KeyCode;
