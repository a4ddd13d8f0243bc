use crate::table::Table;

/// Built-in glyphs the host knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Upward arrow; rotate by π to point down.
    ArrowUpward,
    Edit,
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    Table(Table),
    Icon { icon: Icon, size: f32 },
    /// `None` is the indeterminate state of a tri-state checkbox.
    Checkbox { value: Option<bool>, tristate: bool },
}
