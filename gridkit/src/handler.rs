//! Handler registry: maps `(element id, gesture)` to a callback.
//!
//! Widgets register handlers while building elements. The host hit-tests a
//! gesture down to an element id and calls [`HandlerRegistry::dispatch`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Tap,
    DoubleTap,
    LongPress,
    SecondaryTap,
    /// Secondary button pressed; carries the pointer position.
    SecondaryTapDown,
    /// Value change on a toggle control (checkbox).
    Toggle,
}

/// A gesture delivered to an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub gesture: Gesture,
    pub position: Option<Point>,
}

impl Interaction {
    pub fn new(gesture: Gesture) -> Self {
        Self {
            gesture,
            position: None,
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }
}

pub type Handler = Arc<dyn Fn(&Interaction) + Send + Sync>;

#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, Gesture), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element gesture, replacing any previous one.
    pub fn register(&self, element_id: &str, gesture: Gesture, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), gesture), handler);
        }
    }

    /// Get a handler for an element gesture.
    pub fn get(&self, element_id: &str, gesture: Gesture) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), gesture))
            .cloned()
    }

    /// Whether a handler exists for an element gesture.
    pub fn has(&self, element_id: &str, gesture: Gesture) -> bool {
        self.get(element_id, gesture).is_some()
    }

    /// Invoke the handler for `element_id`. Returns false when none is registered.
    ///
    /// The lock is released before the handler runs, so handlers may register.
    pub fn dispatch(&self, element_id: &str, interaction: &Interaction) -> bool {
        let Some(handler) = self.get(element_id, interaction.gesture) else {
            log::warn!(
                "no {:?} handler registered for element '{}'",
                interaction.gesture,
                element_id
            );
            return false;
        };
        log::trace!("dispatch {:?} to '{}'", interaction.gesture, element_id);
        handler(interaction);
        true
    }

    /// Clear all handlers.
    ///
    /// Called at the start of a build to remove handlers from previous renders.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Remove every handler whose element id starts with `prefix`.
    ///
    /// Lets one widget drop its own handlers before rebuilding without
    /// touching the rest of the registry. Returns how many were removed.
    pub fn remove_prefix(&self, prefix: &str) -> usize {
        let Ok(mut handlers) = self.handlers.write() else {
            return 0;
        };
        let before = handlers.len();
        handlers.retain(|(id, _), _| !id.starts_with(prefix));
        before - handlers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}
