//! Action mapping: named gameplay actions bound to key codes.

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

use crate::button::ButtonState;
use crate::keyboard::KeyboardState;

/// An action that can be triggered by one or more keys.
#[derive(Debug)]
struct Action {
    /// Key bindings for this action.
    bindings: Vec<KeyCode>,
    /// Computed state based on bindings.
    state: ButtonState,
}

impl Action {
    const fn new() -> Self {
        Self {
            bindings: Vec::new(),
            state: ButtonState::Released,
        }
    }
}

/// Action mapping system.
///
/// Maps named actions to key bindings, allowing multiple keys per action.
#[derive(Debug, Default)]
pub struct ActionMap {
    /// Actions by name.
    actions: HashMap<String, Action>,
}

impl ActionMap {
    /// Create a new action map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new action map with a builder pattern.
    #[must_use]
    pub fn builder() -> ActionMapBuilder {
        ActionMapBuilder::new()
    }

    /// Add a binding to an action, creating the action if it doesn't exist.
    pub fn bind(&mut self, action: impl Into<String>, key: KeyCode) {
        let name = action.into();
        tracing::debug!(action = %name, ?key, "binding input");
        let entry = self.actions.entry(name).or_insert_with(Action::new);
        if !entry.bindings.contains(&key) {
            entry.bindings.push(key);
        }
    }

    /// Get the bindings for an action.
    #[must_use]
    pub fn get_bindings(&self, action: &str) -> Option<&[KeyCode]> {
        self.actions.get(action).map(|a| a.bindings.as_slice())
    }

    /// Update action states from the current keyboard state.
    ///
    /// Call once per frame, after events are processed and before actions
    /// are queried.
    pub fn update(&mut self, keyboard: &KeyboardState) {
        for action in self.actions.values_mut() {
            let any_pressed = action.bindings.iter().any(|k| keyboard.is_pressed(*k));
            let any_just_pressed = action.bindings.iter().any(|k| keyboard.is_just_pressed(*k));

            if any_just_pressed && !action.state.is_pressed() {
                action.state = ButtonState::JustPressed;
            } else if !any_pressed {
                action.state = ButtonState::Released;
            }
        }
    }

    /// Returns `true` if the action is currently pressed.
    #[must_use]
    pub fn is_pressed(&self, action: &str) -> bool {
        self.actions.get(action).is_some_and(|a| a.state.is_pressed())
    }

    /// Returns `true` if the action was just pressed this frame.
    #[must_use]
    pub fn is_just_pressed(&self, action: &str) -> bool {
        self.actions
            .get(action)
            .is_some_and(|a| a.state.is_just_pressed())
    }

    /// Called at end of frame to decay action press edges.
    pub fn end_frame(&mut self) {
        for action in self.actions.values_mut() {
            action.state.end_frame();
        }
    }
}

/// Builder for creating an action map with a fluent API.
#[derive(Debug, Default)]
pub struct ActionMapBuilder {
    actions: ActionMap,
}

impl ActionMapBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding to an action.
    #[must_use]
    pub fn bind(mut self, action: impl Into<String>, key: KeyCode) -> Self {
        self.actions.bind(action, key);
        self
    }

    /// Build the action map.
    #[must_use]
    pub fn build(self) -> ActionMap {
        self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_binding() {
        let mut actions = ActionMap::new();
        actions.bind("launch", KeyCode::Space);
        actions.bind("launch", KeyCode::Enter);
        actions.bind("launch", KeyCode::Space);

        assert_eq!(actions.get_bindings("launch").unwrap().len(), 2);
    }

    #[test]
    fn action_builder() {
        let actions = ActionMap::builder()
            .bind("launch", KeyCode::Space)
            .bind("reset", KeyCode::KeyR)
            .build();

        assert_eq!(actions.get_bindings("launch").unwrap().len(), 1);
        assert_eq!(actions.get_bindings("reset").unwrap().len(), 1);
    }

    #[test]
    fn action_edge_follows_key_edge() {
        let mut keyboard = KeyboardState::new();
        let mut actions = ActionMap::builder().bind("launch", KeyCode::Space).build();

        keyboard.press(KeyCode::Space);
        actions.update(&keyboard);
        assert!(actions.is_just_pressed("launch"));

        keyboard.end_frame();
        actions.end_frame();
        actions.update(&keyboard);
        assert!(actions.is_pressed("launch"));
        assert!(!actions.is_just_pressed("launch"));

        keyboard.release(KeyCode::Space);
        actions.update(&keyboard);
        assert!(!actions.is_pressed("launch"));
    }
}
