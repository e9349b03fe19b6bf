//! Scripted key presses standing in for a keyboard in headless runs.

use nebula_ecs::{ActionBindings, InputState};

/// A key going down or up on a given frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub frame: u32,
    pub key: String,
    pub pressed: bool,
}

/// Frame-ordered list of key events.
#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    events: Vec<KeyEvent>,
}

impl KeyScript {
    /// Tap `key` on `frame`: down that frame, up the next.
    pub fn tap(mut self, frame: u32, key: &str) -> Self {
        self.events.push(KeyEvent {
            frame,
            key: key.to_string(),
            pressed: true,
        });
        self.events.push(KeyEvent {
            frame: frame + 1,
            key: key.to_string(),
            pressed: false,
        });
        self.events.sort_by_key(|e| e.frame);
        self
    }

    /// Slow down twice a quarter of the way in, then speed back up at the
    /// halfway mark.
    pub fn slow_down_and_recover(frames: u32, slower: &str, faster: &str) -> Self {
        let quarter = frames / 4;
        let half = frames / 2;
        Self::default()
            .tap(quarter, slower)
            .tap(quarter + 2, slower)
            .tap(half, faster)
            .tap(half + 2, faster)
    }

    /// Feed this frame's events into `input`. Returns how many keys mapped to
    /// a bound action.
    pub fn apply(&self, frame: u32, input: &mut InputState, bindings: &ActionBindings) -> usize {
        let mut mapped = 0;
        for event in self.events.iter().filter(|e| e.frame == frame) {
            let hit = if event.pressed {
                input.press_key(&event.key, bindings)
            } else {
                input.release_key(&event.key, bindings)
            };
            if hit {
                mapped += 1;
            } else {
                tracing::debug!(key = %event.key, "scripted key has no binding");
            }
        }
        mapped
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
