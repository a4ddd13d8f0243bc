pub mod element;
pub mod handler;
pub mod interaction;
pub mod table;
pub mod theme;
pub mod transition;
pub mod types;

pub use element::{find_element, Content, Element, Icon};
pub use handler::{Gesture, Handler, HandlerRegistry, Interaction};
pub use interaction::{InteractionState, InteractionStates, StateProperty};
pub use table::{LayoutError, Table, TableRow};
pub use theme::{ColorContext, DefaultTheme, Theme};
pub use transition::{Easing, TimedTransition, Transition, TransitionConfig, TransitionStatus};
pub use types::*;
