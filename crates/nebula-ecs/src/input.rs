//! Action-based input state for the current frame.

use bevy_ecs::prelude::*;
use std::collections::{HashMap, HashSet};

/// Maps key names to action names.
///
/// Built from configuration, which stores bindings as action -> key.
#[derive(Resource, Clone, Debug, Default)]
pub struct ActionBindings {
    key_to_action: HashMap<String, String>,
}

impl ActionBindings {
    /// Builds bindings from `(action, key)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let key_to_action = pairs
            .into_iter()
            .map(|(action, key)| (key.to_string(), action.to_string()))
            .collect();
        Self { key_to_action }
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: &str) -> Option<&str> {
        self.key_to_action.get(key).map(String::as_str)
    }
}

/// Aggregated input state for the current frame.
///
/// `just_pressed` and `just_released` are edges: they hold only for the frame
/// in which the transition happened and are cleared at the end of the frame.
#[derive(Resource, Clone, Debug, Default)]
pub struct InputState {
    held: HashSet<String>,
    just_pressed: HashSet<String>,
    just_released: HashSet<String>,
}

impl InputState {
    /// Records a press of `action`. Repeats while held are not new edges.
    pub fn press(&mut self, action: &str) {
        if self.held.insert(action.to_string()) {
            self.just_pressed.insert(action.to_string());
        }
    }

    /// Records a release of `action`.
    pub fn release(&mut self, action: &str) {
        if self.held.remove(action) {
            self.just_released.insert(action.to_string());
        }
    }

    /// Presses the action bound to `key`. Returns `false` if the key is unbound.
    pub fn press_key(&mut self, key: &str, bindings: &ActionBindings) -> bool {
        match bindings.action_for(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Releases the action bound to `key`. Returns `false` if the key is unbound.
    pub fn release_key(&mut self, key: &str, bindings: &ActionBindings) -> bool {
        match bindings.action_for(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Returns true if the named action is currently held down.
    pub fn is_active(&self, action: &str) -> bool {
        self.held.contains(action)
    }

    /// Returns true if the named action was first pressed this frame.
    pub fn just_pressed(&self, action: &str) -> bool {
        self.just_pressed.contains(action)
    }

    /// Returns true if the named action was released this frame.
    pub fn just_released(&self, action: &str) -> bool {
        self.just_released.contains(action)
    }

    /// Clear per-frame edges. Called after the last stage of every frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> ActionBindings {
        ActionBindings::from_pairs([("time_scale_up", "E"), ("time_scale_down", "Q")])
    }

    #[test]
    fn test_press_is_an_edge_for_one_frame() {
        let mut input = InputState::default();
        input.press("fire");
        assert!(input.just_pressed("fire"));
        assert!(input.is_active("fire"));

        input.clear_transients();
        assert!(!input.just_pressed("fire"));
        assert!(input.is_active("fire"));
    }

    #[test]
    fn test_held_key_does_not_repeat_edge() {
        let mut input = InputState::default();
        input.press("fire");
        input.clear_transients();
        input.press("fire");
        assert!(!input.just_pressed("fire"));
    }

    #[test]
    fn test_release_edge() {
        let mut input = InputState::default();
        input.release("fire");
        assert!(!input.just_released("fire"));

        input.press("fire");
        input.clear_transients();
        input.release("fire");
        assert!(input.just_released("fire"));
        assert!(!input.is_active("fire"));
    }

    #[test]
    fn test_keys_resolve_through_bindings() {
        let bindings = bindings();
        let mut input = InputState::default();

        assert!(input.press_key("E", &bindings));
        assert!(!input.press_key("W", &bindings));
        assert!(input.just_pressed("time_scale_up"));
        assert!(!input.just_pressed("time_scale_down"));

        assert!(input.release_key("E", &bindings));
        assert!(input.just_released("time_scale_up"));
    }
}
