//! Zero-argument, multi-subscriber strike notification.

use std::fmt;

/// Handle returned by [`StrikeListeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut() + Send + Sync>;

/// Callbacks invoked synchronously, in subscription order, when a bolt strikes.
#[derive(Default)]
pub struct StrikeListeners {
    next_id: u64,
    callbacks: Vec<(ListenerId, Callback)>,
}

impl StrikeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it stays subscribed until [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, callback: impl FnMut() + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Invoke every subscriber once.
    pub fn notify(&mut self) {
        for (_, callback) in &mut self.callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for StrikeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrikeListeners")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
