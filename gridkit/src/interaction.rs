//! Interaction states and state-dependent properties.
//!
//! Widgets describe the condition a control is in as a small set of
//! [`InteractionState`] flags. Colors (and anything else that depends on that
//! condition) are supplied as a [`StateProperty`], which the widget resolves
//! against the current set while building elements.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Hovered,
    Focused,
    Pressed,
    Dragged,
    Selected,
    Disabled,
}

impl InteractionState {
    const ALL: [InteractionState; 6] = [
        InteractionState::Hovered,
        InteractionState::Focused,
        InteractionState::Pressed,
        InteractionState::Dragged,
        InteractionState::Selected,
        InteractionState::Disabled,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [`InteractionState`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InteractionStates(u8);

impl InteractionStates {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn with(self, state: InteractionState) -> Self {
        Self(self.0 | state.bit())
    }

    pub fn insert(&mut self, state: InteractionState) {
        self.0 |= state.bit();
    }

    pub fn remove(&mut self, state: InteractionState) {
        self.0 &= !state.bit();
    }

    pub const fn contains(&self, state: InteractionState) -> bool {
        self.0 & state.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = InteractionState> + '_ {
        InteractionState::ALL
            .into_iter()
            .filter(move |state| self.contains(*state))
    }
}

impl FromIterator<InteractionState> for InteractionStates {
    fn from_iter<I: IntoIterator<Item = InteractionState>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |states, state| states.with(state))
    }
}

impl fmt::Debug for InteractionStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A value that depends on the interaction state of a control.
///
/// Resolving may yield `None`, meaning "no opinion": the caller falls back to
/// its next source for the value.
pub struct StateProperty<T> {
    resolver: Arc<dyn Fn(InteractionStates) -> Option<T> + Send + Sync>,
}

impl<T> StateProperty<T> {
    pub fn new(resolver: impl Fn(InteractionStates) -> Option<T> + Send + Sync + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub fn resolve(&self, states: InteractionStates) -> Option<T> {
        (self.resolver)(states)
    }
}

impl<T: Clone + Send + Sync + 'static> StateProperty<T> {
    /// The same value in every state.
    pub fn all(value: T) -> Self {
        Self::new(move |_| Some(value.clone()))
    }
}

impl<T> Clone for StateProperty<T> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<T> fmt::Debug for StateProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateProperty(..)")
    }
}
