//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use gridkit::Element;

use crate::callback::SortCallback;

/// Coarse width hint, turned into a ratio of an equal share of the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ColumnSize {
    /// Width relative to an equal share.
    pub const fn ratio(self) -> f32 {
        match self {
            ColumnSize::Small => 0.67,
            ColumnSize::Medium => 1.0,
            ColumnSize::Large => 1.2,
        }
    }
}

/// A displayed column.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnSpec::text("Dessert").size(ColumnSize::Large),
///     ColumnSpec::text("Calories").numeric().on_sort(|index, ascending| sort(index, ascending)),
///     ColumnSpec::text("Notes").tooltip("Free-form notes").fixed_width(120.0),
/// ];
/// ```
#[derive(Clone)]
pub struct ColumnSpec {
    /// Stable identity for state kept across rebuilds. Position is used when unset.
    pub id: Option<String>,
    /// Header content.
    pub label: Element,
    pub tooltip: Option<String>,
    /// Numeric columns align to the end and put the sort arrow before the label.
    pub numeric: bool,
    pub size: ColumnSize,
    /// Exact width, exempt from size-class distribution.
    pub fixed_width: Option<f32>,
    pub on_sort: Option<SortCallback>,
}

impl ColumnSpec {
    pub fn new(label: Element) -> Self {
        Self {
            id: None,
            label,
            tooltip: None,
            numeric: false,
            size: ColumnSize::default(),
            fixed_width: None,
            on_sort: None,
        }
    }

    /// A column with a plain text label.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(Element::text(label))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn size(mut self, size: ColumnSize) -> Self {
        self.size = size;
        self
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Make the column sortable. Called with `(column_index, ascending)`.
    pub fn on_sort(mut self, f: impl Fn(usize, bool) + Send + Sync + 'static) -> Self {
        self.on_sort = Some(Arc::new(f));
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.on_sort.is_some()
    }

    /// Key of per-column state: the explicit id, or the position.
    pub fn state_key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("#{index}"),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("id", &self.id)
            .field("label", &self.label.text_content())
            .field("tooltip", &self.tooltip)
            .field("numeric", &self.numeric)
            .field("size", &self.size)
            .field("fixed_width", &self.fixed_width)
            .field("sortable", &self.is_sortable())
            .finish()
    }
}
