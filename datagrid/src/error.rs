use thiserror::Error;

/// Invalid grid configuration.
///
/// Raised by [`GridConfigBuilder::build`](crate::GridConfigBuilder::build).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("a grid needs at least one column")]
    NoColumns,

    #[error("sort column {index} is out of range for {columns} columns")]
    SortColumnOutOfRange { index: usize, columns: usize },

    #[error("row {row} has {cells} cells but the grid has {columns} columns")]
    CellCountMismatch {
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("divider thickness must be a non-negative number, got {0}")]
    NegativeDividerThickness(f32),

    #[error("{name} must be a non-negative number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error(transparent)]
    Layout(#[from] gridkit::LayoutError),
}
