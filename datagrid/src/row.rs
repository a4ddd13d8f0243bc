//! Row and cell descriptors.

use std::fmt;
use std::sync::Arc;

use gridkit::{Color, Element, Point, StateProperty};

use crate::callback::{PositionCallback, SelectCallback, TapCallback};

/// One cell of a row.
#[derive(Clone)]
pub struct CellSpec {
    pub content: Element,
    /// Placeholder content is rendered dimmed.
    pub placeholder: bool,
    pub show_edit_icon: bool,
    pub on_tap: Option<TapCallback>,
    pub on_double_tap: Option<TapCallback>,
    pub on_long_press: Option<TapCallback>,
}

impl CellSpec {
    pub fn new(content: Element) -> Self {
        Self {
            content,
            placeholder: false,
            show_edit_icon: false,
            on_tap: None,
            on_double_tap: None,
            on_long_press: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Element::text(content))
    }

    pub fn placeholder(mut self) -> Self {
        self.placeholder = true;
        self
    }

    pub fn show_edit_icon(mut self) -> Self {
        self.show_edit_icon = true;
        self
    }

    pub fn on_tap(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_tap = Some(Arc::new(f));
        self
    }

    pub fn on_double_tap(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_double_tap = Some(Arc::new(f));
        self
    }

    pub fn on_long_press(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_long_press = Some(Arc::new(f));
        self
    }
}

impl From<&str> for CellSpec {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for CellSpec {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl fmt::Debug for CellSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellSpec")
            .field("content", &self.content.text_content())
            .field("placeholder", &self.placeholder)
            .field("show_edit_icon", &self.show_edit_icon)
            .field("tappable", &self.on_tap.is_some())
            .finish()
    }
}

/// One row of data. Must have exactly one cell per column.
#[derive(Clone, Default)]
pub struct RowSpec {
    pub key: Option<String>,
    pub selected: bool,
    pub on_select_changed: Option<SelectCallback>,
    /// Background by interaction state. Takes precedence over the grid-wide resolver.
    pub color: Option<StateProperty<Color>>,
    pub cells: Vec<CellSpec>,
    pub on_tap: Option<TapCallback>,
    pub on_double_tap: Option<TapCallback>,
    pub on_long_press: Option<TapCallback>,
    pub on_secondary_tap: Option<TapCallback>,
    pub on_secondary_tap_down: Option<PositionCallback>,
}

impl RowSpec {
    pub fn new(cells: Vec<CellSpec>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Make the row selectable. Called with the requested selection.
    pub fn on_select_changed(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_select_changed = Some(Arc::new(f));
        self
    }

    pub fn color(mut self, color: StateProperty<Color>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn on_tap(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_tap = Some(Arc::new(f));
        self
    }

    pub fn on_double_tap(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_double_tap = Some(Arc::new(f));
        self
    }

    pub fn on_long_press(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_long_press = Some(Arc::new(f));
        self
    }

    pub fn on_secondary_tap(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_secondary_tap = Some(Arc::new(f));
        self
    }

    pub fn on_secondary_tap_down(mut self, f: impl Fn(Point) + Send + Sync + 'static) -> Self {
        self.on_secondary_tap_down = Some(Arc::new(f));
        self
    }

    /// Rows without a selection callback are excluded from select-all.
    pub fn is_selectable(&self) -> bool {
        self.on_select_changed.is_some()
    }

    pub fn supports_tap(&self) -> bool {
        self.on_tap.is_some()
    }
}

impl fmt::Debug for RowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSpec")
            .field("key", &self.key)
            .field("selected", &self.selected)
            .field("selectable", &self.is_selectable())
            .field("cells", &self.cells)
            .finish()
    }
}
