//! Listener registry
//!
//! Holds the observers of an alarm engine and fans events out to them.
//! Listeners are notified synchronously, in registration order.

use std::sync::Arc;

use crate::core::models::AlarmStatus;
use crate::core::ports::StatusListener;

/// Ordered set of status listeners, compared by handle identity
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl ListenerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    ///
    /// Returns false if this exact handle was already registered.
    pub fn add(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Deregister a listener
    ///
    /// Returns false if the handle was not registered.
    pub fn remove(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
        self.listeners.len() < before
    }

    /// Whether this exact handle is registered
    #[must_use]
    pub fn contains(&self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners.iter().any(|l| Arc::ptr_eq(l, listener))
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn alarm_status_changed(&self, status: AlarmStatus) {
        for listener in &self.listeners {
            listener.alarm_status_changed(status);
        }
    }

    pub(crate) fn sensor_status_changed(&self) {
        for listener in &self.listeners {
            listener.sensor_status_changed();
        }
    }

    pub(crate) fn cat_detected(&self, detected: bool) {
        for listener in &self.listeners {
            listener.cat_detected(detected);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry").field("len", &self.listeners.len()).finish()
    }
}
