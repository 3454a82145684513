//! Input manager combining keyboard state and action mapping.

use winit::event::WindowEvent;
use winit::keyboard::KeyCode;

use crate::action::ActionMap;
use crate::keyboard::KeyboardState;

/// Input manager combining keyboard state and action mapping.
///
/// # Usage
///
/// ```
/// use slingcast_input::{ActionMap, InputManager, KeyCode};
///
/// let mut input = InputManager::with_actions(
///     ActionMap::builder().bind("launch", KeyCode::Space).build(),
/// );
///
/// // Each frame: feed events (or synthetic key presses), then:
/// input.update();
/// if input.is_action_just_pressed("launch") {
///     // fire
/// }
/// input.end_frame();
/// ```
#[derive(Debug, Default)]
pub struct InputManager {
    /// Keyboard input state.
    keyboard: KeyboardState,
    /// Action mappings.
    actions: ActionMap,
}

impl InputManager {
    /// Create a new input manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input manager with pre-configured actions.
    #[must_use]
    pub fn with_actions(actions: ActionMap) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            actions,
        }
    }

    /// Get a reference to the keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            self.keyboard.process_key_event(event);
            true
        } else {
            false
        }
    }

    /// Press a key directly, bypassing the event pipeline. Used by scripted
    /// hosts and tests.
    pub fn press_key(&mut self, key: KeyCode) {
        self.keyboard.press(key);
    }

    /// Release a key directly, bypassing the event pipeline.
    pub fn release_key(&mut self, key: KeyCode) {
        self.keyboard.release(key);
    }

    /// Update action states from the current keyboard state.
    ///
    /// Call at the start of every update, before querying actions.
    pub fn update(&mut self) {
        self.actions.update(&self.keyboard);
    }

    /// Called at the end of each frame to decay press edges.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
        self.actions.end_frame();
    }

    /// Returns `true` if the key is currently pressed.
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }

    /// Returns `true` if the key was just pressed this frame.
    #[must_use]
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_just_pressed(key)
    }

    /// Bind a key to an action.
    pub fn bind_action(&mut self, action: impl Into<String>, key: KeyCode) {
        self.actions.bind(action, key);
    }

    /// Returns `true` if the action is currently pressed.
    #[must_use]
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.actions.is_pressed(action)
    }

    /// Returns `true` if the action was just pressed this frame.
    #[must_use]
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.actions.is_just_pressed(action)
    }

    /// Clear all input state.
    pub fn clear(&mut self) {
        self.keyboard.clear();
    }
}
