//! A data grid widget: sized columns, selectable rows, sortable headers with
//! an animated sort arrow, and a fixed header over a scrollable body.
//!
//! Descriptors ([`ColumnSpec`], [`RowSpec`], [`CellSpec`]) are rebuilt by the
//! application on every state change and validated into a [`GridConfig`]. A
//! mounted [`DataGrid`] turns a config into a `gridkit` element tree and keeps
//! the only state that outlives a rebuild: the sort arrows.
//!
//! # Example
//!
//! ```ignore
//! use datagrid::prelude::*;
//!
//! let config = GridConfig::builder()
//!     .column(ColumnSpec::text("Name").size(ColumnSize::Large).on_sort(|i, asc| sort_by(i, asc)))
//!     .column(ColumnSpec::text("Qty").numeric())
//!     .row(RowSpec::new(vec!["Apples".into(), "3".into()]).on_select_changed(|v| select(0, v)))
//!     .sort(0, true)
//!     .build()?;
//!
//! let mut grid = DataGrid::new("fruit", &config, Instant::now());
//! let element = grid.build(&config, 640.0, &registry)?;
//! ```

pub mod callback;
pub mod cells;
pub mod column;
pub mod config;
pub mod decoration;
pub mod error;
pub mod grid;
pub mod layout;
pub mod row;
pub mod selection;
pub mod sort_arrow;
pub mod style;
pub mod width;

pub use column::{ColumnSize, ColumnSpec};
pub use config::{GridConfig, GridConfigBuilder};
pub use error::GridError;
pub use grid::DataGrid;
pub use row::{CellSpec, RowSpec};
pub use selection::SelectionSummary;
pub use sort_arrow::SortArrow;
pub use style::{GridStyle, StyleError};
pub use width::{allocate_widths, ColumnLayout};

pub mod prelude {
    pub use crate::column::{ColumnSize, ColumnSpec};
    pub use crate::config::{GridConfig, GridConfigBuilder};
    pub use crate::error::GridError;
    pub use crate::grid::DataGrid;
    pub use crate::row::{CellSpec, RowSpec};
    pub use crate::style::GridStyle;

    pub use gridkit::{
        Color, Element, Gesture, HandlerRegistry, Interaction, InteractionState,
        InteractionStates, Point, StateProperty,
    };
}
