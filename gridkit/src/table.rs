//! Table primitive: rows of cells laid out against shared column widths.

use thiserror::Error;

use crate::element::Element;
use crate::types::Decoration;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("table row {row} has {found} cells, expected {expected}")]
    CellCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TableRow {
    pub key: Option<String>,
    pub decoration: Decoration,
    pub cells: Vec<Element>,
}

impl TableRow {
    pub fn new(cells: Vec<Element>) -> Self {
        Self {
            key: None,
            decoration: Decoration::default(),
            cells,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }
}

/// Rows of cells over shared column widths, in layout units.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<f32>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a table, checking that every row has one cell per column.
    pub fn new(columns: Vec<f32>, rows: Vec<TableRow>) -> Result<Self, LayoutError> {
        for (index, row) in rows.iter().enumerate() {
            if row.cells.len() != columns.len() {
                return Err(LayoutError::CellCount {
                    row: index,
                    expected: columns.len(),
                    found: row.cells.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn width(&self) -> f32 {
        self.columns.iter().sum()
    }
}
