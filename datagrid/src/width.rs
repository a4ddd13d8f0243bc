//! Column width allocation.
//!
//! Each column gets a share of the available width weighted by its
//! [`ColumnSize`] ratio. Raw widths are computed against an equal share and
//! then rescaled, so the result always sums to the available width whatever
//! the mix of sizes.

use crate::column::{ColumnSize, ColumnSpec};
use crate::config::{CHECKBOX_SIZE, GridConfig};

/// Distribute `available` across columns of the given sizes.
///
/// The widths sum to `available` (within float rounding) and keep the
/// Small : Medium : Large = 0.67 : 1.0 : 1.2 proportions. Pure: the same
/// input always gives the same output.
pub fn allocate_widths(available: f32, sizes: &[ColumnSize]) -> Vec<f32> {
    if sizes.is_empty() {
        return Vec::new();
    }
    if available <= 0.0 {
        return vec![0.0; sizes.len()];
    }

    let column_width = available / sizes.len() as f32;
    let raw: Vec<f32> = sizes
        .iter()
        .map(|size| column_width * size.ratio())
        .collect();
    let total: f32 = raw.iter().sum();
    let scale = available / total;

    raw.into_iter().map(|width| width * scale).collect()
}

/// Allocate widths for column descriptors. Fixed-width columns keep their
/// width; the remainder is distributed over the others by size class.
pub fn allocate_column_widths(available: f32, columns: &[ColumnSpec]) -> Vec<f32> {
    let fixed_total: f32 = columns.iter().filter_map(|c| c.fixed_width).sum();
    let flexible: Vec<ColumnSize> = columns
        .iter()
        .filter(|c| c.fixed_width.is_none())
        .map(|c| c.size)
        .collect();

    let remaining = (available - fixed_total).max(0.0);
    let mut flexible_widths = allocate_widths(remaining, &flexible).into_iter();

    columns
        .iter()
        .map(|column| match column.fixed_width {
            Some(width) => width,
            None => flexible_widths.next().unwrap_or(0.0),
        })
        .collect()
}

/// Width reserved for the checkbox column: leading margin, the box, and half
/// a margin before the first data column.
pub fn checkbox_column_width(margin: f32) -> f32 {
    margin + CHECKBOX_SIZE + margin / 2.0
}

/// One width assignment shared by the header and body tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Total width the grid is laid out at.
    pub width: f32,
    /// Checkbox column width, when shown.
    pub checkbox: Option<f32>,
    /// One width per data column, in column order.
    pub columns: Vec<f32>,
}

impl ColumnLayout {
    /// Compute the layout of `config` for a viewport `viewport_width` wide.
    pub fn compute(config: &GridConfig, viewport_width: f32) -> Self {
        let width = match config.min_width() {
            Some(min) => viewport_width.max(min),
            None => viewport_width,
        }
        .max(0.0);

        let checkbox = config
            .displays_checkbox_column()
            .then(|| checkbox_column_width(config.checkbox_horizontal_margin()));
        let available = (width - checkbox.unwrap_or(0.0)).max(0.0);
        let columns = allocate_column_widths(available, config.columns());

        log::trace!(
            "column layout at {width}: checkbox={checkbox:?} columns={columns:?}"
        );

        Self {
            width,
            checkbox,
            columns,
        }
    }

    /// Column widths in table order, checkbox column first.
    pub fn table_columns(&self) -> Vec<f32> {
        self.checkbox
            .into_iter()
            .chain(self.columns.iter().copied())
            .collect()
    }

    pub fn total(&self) -> f32 {
        self.checkbox.unwrap_or(0.0) + self.columns.iter().sum::<f32>()
    }
}
