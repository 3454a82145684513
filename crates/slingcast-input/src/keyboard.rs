//! Keyboard input state tracking.

use hashbrown::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::button::ButtonState;

/// Keyboard input state.
///
/// Tracks the state of all keyboard keys. Keys change state through winit
/// events or through the synthetic [`press`](Self::press) and
/// [`release`](Self::release) calls used by scripted hosts.
#[derive(Debug, Default)]
pub struct KeyboardState {
    /// State of individual keys by key code.
    keys: HashMap<KeyCode, ButtonState>,
}

impl KeyboardState {
    /// Create a new keyboard state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit key event.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => self.press(key_code),
            ElementState::Released => self.release(key_code),
        }
    }

    /// Press a key directly, bypassing the event pipeline.
    pub fn press(&mut self, key: KeyCode) {
        self.keys.entry(key).or_default().press();
    }

    /// Release a key directly, bypassing the event pipeline.
    pub fn release(&mut self, key: KeyCode) {
        self.keys.entry(key).or_default().release();
    }

    /// Returns `true` if the key is currently pressed.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_pressed())
    }

    /// Returns `true` if the key was just pressed this frame.
    #[must_use]
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_just_pressed())
    }

    /// Called at end of frame to decay press edges.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.end_frame();
        }
    }

    /// Clear all key states.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
