//! Single-threaded change-notification channels.
//!
//! A [`Signal`] is a multi-subscriber, payload-free notification stream.
//! The box annotation entity carries two of them: `change` for ordinary
//! attribute mutation and `data_update` for silent geometry updates, so the
//! two propagation paths stay observable in isolation instead of being a
//! boolean threaded through a generic setter.

use std::fmt;

/// A multi-subscriber notification channel.
///
/// Subscribers are invoked in connection order. There is no disconnection:
/// subscriber lifetime matches the owning entity, which matches how views
/// wire themselves to the models they render.
pub struct Signal {
    slots: Vec<Box<dyn Fn()>>,
}

impl Signal {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Register a subscriber.
    pub fn connect<F>(&mut self, f: F)
    where
        F: Fn() + 'static,
    {
        self.slots.push(Box::new(f));
    }

    /// Notify every subscriber, in connection order.
    pub fn emit(&self) {
        for slot in &self.slots {
            slot();
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.slots.len()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Signal {
    fn clone(&self) -> Self {
        // Boxed closures can't be cloned; a cloned entity starts with an
        // empty subscriber set and gets wired up by its own view.
        Self::new()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}
