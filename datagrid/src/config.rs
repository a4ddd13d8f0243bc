//! Validated grid configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use gridkit::{Color, Decoration, Element, StateProperty, Style};

use crate::callback::SelectCallback;
use crate::column::ColumnSpec;
use crate::error::GridError;
use crate::row::RowSpec;
use crate::selection::SelectionSummary;
use crate::style::GridStyle;

pub const DEFAULT_HORIZONTAL_MARGIN: f32 = 24.0;
pub const DEFAULT_COLUMN_SPACING: f32 = 56.0;
pub const DEFAULT_HEADING_ROW_HEIGHT: f32 = 56.0;
/// Minimum comfortable height for a touch target.
pub const DEFAULT_DATA_ROW_HEIGHT: f32 = 48.0;
pub const DEFAULT_DIVIDER_THICKNESS: f32 = 1.0;
pub const DEFAULT_SORT_ARROW_DURATION: Duration = Duration::from_millis(150);

pub const CHECKBOX_SIZE: f32 = 18.0;
pub const SORT_ARROW_SIZE: f32 = 16.0;
pub const SORT_ARROW_PADDING: f32 = 2.0;
pub const EDIT_ICON_SIZE: f32 = 18.0;
/// Alpha of the primary color used as the default selected-row tint.
pub const SELECTED_ROW_ALPHA: f32 = 0.08;

/// Everything a [`DataGrid`](crate::DataGrid) renders from.
///
/// Construct with [`GridConfig::builder`]. A built config always satisfies:
/// at least one column, every row has one cell per column, the sort column
/// (if any) exists, and all dimensions are finite and non-negative.
#[derive(Clone)]
pub struct GridConfig {
    pub(crate) columns: Vec<ColumnSpec>,
    pub(crate) rows: Vec<RowSpec>,
    pub(crate) sort_column_index: Option<usize>,
    pub(crate) sort_ascending: bool,
    pub(crate) on_select_all: Option<SelectCallback>,
    pub(crate) decoration: Option<Decoration>,
    pub(crate) data_row_color: Option<StateProperty<Color>>,
    pub(crate) heading_row_color: Option<StateProperty<Color>>,
    pub(crate) data_row_height: f32,
    pub(crate) heading_row_height: f32,
    pub(crate) data_text_style: Option<Style>,
    pub(crate) heading_text_style: Option<Style>,
    pub(crate) horizontal_margin: f32,
    pub(crate) column_spacing: f32,
    pub(crate) checkbox_horizontal_margin: Option<f32>,
    pub(crate) show_checkbox_column: bool,
    pub(crate) show_bottom_border: bool,
    pub(crate) divider_thickness: f32,
    pub(crate) divider_color: Option<Color>,
    pub(crate) sort_arrow_duration: Duration,
    pub(crate) min_width: Option<f32>,
    pub(crate) empty: Option<Element>,
}

impl GridConfig {
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder::new()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn rows(&self) -> &[RowSpec] {
        &self.rows
    }

    pub fn sort_column_index(&self) -> Option<usize> {
        self.sort_column_index
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin
    }

    pub fn column_spacing(&self) -> f32 {
        self.column_spacing
    }

    /// Margin around the checkbox column; falls back to the horizontal margin.
    pub fn checkbox_horizontal_margin(&self) -> f32 {
        self.checkbox_horizontal_margin
            .unwrap_or(self.horizontal_margin)
    }

    pub fn heading_row_height(&self) -> f32 {
        self.heading_row_height
    }

    pub fn data_row_height(&self) -> f32 {
        self.data_row_height
    }

    pub fn divider_thickness(&self) -> f32 {
        self.divider_thickness
    }

    pub fn show_bottom_border(&self) -> bool {
        self.show_bottom_border
    }

    pub fn sort_arrow_duration(&self) -> Duration {
        self.sort_arrow_duration
    }

    pub fn min_width(&self) -> Option<f32> {
        self.min_width
    }

    /// Whether the checkbox column is shown: requested and at least one row is selectable.
    pub fn displays_checkbox_column(&self) -> bool {
        self.show_checkbox_column && self.rows.iter().any(RowSpec::is_selectable)
    }

    pub fn selection(&self) -> SelectionSummary {
        SelectionSummary::from_rows(&self.rows)
    }

    /// Whether `index` is the column currently sorted on.
    pub fn is_sorted_on(&self, index: usize) -> bool {
        self.sort_column_index == Some(index)
    }
}

impl fmt::Debug for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConfig")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("sort_column_index", &self.sort_column_index)
            .field("sort_ascending", &self.sort_ascending)
            .field("show_checkbox_column", &self.show_checkbox_column)
            .field("divider_thickness", &self.divider_thickness)
            .finish_non_exhaustive()
    }
}

/// Builder for [`GridConfig`]. Validation happens in [`build`](Self::build).
#[derive(Clone)]
pub struct GridConfigBuilder {
    config: GridConfig,
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GridConfig {
                columns: Vec::new(),
                rows: Vec::new(),
                sort_column_index: None,
                sort_ascending: true,
                on_select_all: None,
                decoration: None,
                data_row_color: None,
                heading_row_color: None,
                data_row_height: DEFAULT_DATA_ROW_HEIGHT,
                heading_row_height: DEFAULT_HEADING_ROW_HEIGHT,
                data_text_style: None,
                heading_text_style: None,
                horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
                column_spacing: DEFAULT_COLUMN_SPACING,
                checkbox_horizontal_margin: None,
                show_checkbox_column: true,
                show_bottom_border: false,
                divider_thickness: DEFAULT_DIVIDER_THICKNESS,
                divider_color: None,
                sort_arrow_duration: DEFAULT_SORT_ARROW_DURATION,
                min_width: None,
                empty: None,
            },
        }
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.config.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.config.columns.extend(columns);
        self
    }

    pub fn row(mut self, row: RowSpec) -> Self {
        self.config.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = RowSpec>) -> Self {
        self.config.rows.extend(rows);
        self
    }

    /// Sort on `column`, ascending or descending.
    pub fn sort(mut self, column: usize, ascending: bool) -> Self {
        self.config.sort_column_index = Some(column);
        self.config.sort_ascending = ascending;
        self
    }

    pub fn sort_column_index(mut self, column: Option<usize>) -> Self {
        self.config.sort_column_index = column;
        self
    }

    pub fn sort_ascending(mut self, ascending: bool) -> Self {
        self.config.sort_ascending = ascending;
        self
    }

    /// Called once with the target state when the header checkbox is toggled.
    /// Without it, each selectable row's own callback is invoked instead.
    pub fn on_select_all(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.config.on_select_all = Some(Arc::new(f));
        self
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.config.decoration = Some(decoration);
        self
    }

    pub fn data_row_color(mut self, color: StateProperty<Color>) -> Self {
        self.config.data_row_color = Some(color);
        self
    }

    pub fn heading_row_color(mut self, color: StateProperty<Color>) -> Self {
        self.config.heading_row_color = Some(color);
        self
    }

    pub fn data_row_height(mut self, height: f32) -> Self {
        self.config.data_row_height = height;
        self
    }

    pub fn heading_row_height(mut self, height: f32) -> Self {
        self.config.heading_row_height = height;
        self
    }

    pub fn data_text_style(mut self, style: Style) -> Self {
        self.config.data_text_style = Some(style);
        self
    }

    pub fn heading_text_style(mut self, style: Style) -> Self {
        self.config.heading_text_style = Some(style);
        self
    }

    pub fn horizontal_margin(mut self, margin: f32) -> Self {
        self.config.horizontal_margin = margin;
        self
    }

    pub fn column_spacing(mut self, spacing: f32) -> Self {
        self.config.column_spacing = spacing;
        self
    }

    pub fn checkbox_horizontal_margin(mut self, margin: f32) -> Self {
        self.config.checkbox_horizontal_margin = Some(margin);
        self
    }

    pub fn show_checkbox_column(mut self, show: bool) -> Self {
        self.config.show_checkbox_column = show;
        self
    }

    pub fn show_bottom_border(mut self, show: bool) -> Self {
        self.config.show_bottom_border = show;
        self
    }

    pub fn divider_thickness(mut self, thickness: f32) -> Self {
        self.config.divider_thickness = thickness;
        self
    }

    pub fn divider_color(mut self, color: Color) -> Self {
        self.config.divider_color = Some(color);
        self
    }

    pub fn sort_arrow_duration(mut self, duration: Duration) -> Self {
        self.config.sort_arrow_duration = duration;
        self
    }

    /// Never lay out narrower than `width`; the host scrolls horizontally.
    pub fn min_width(mut self, width: f32) -> Self {
        self.config.min_width = Some(width);
        self
    }

    /// Shown in the body when there are no rows.
    pub fn empty(mut self, element: Element) -> Self {
        self.config.empty = Some(element);
        self
    }

    /// Apply file-backed overrides. Unset fields are left alone.
    pub fn style(mut self, style: GridStyle) -> Self {
        let c = &mut self.config;
        if let Some(v) = style.horizontal_margin {
            c.horizontal_margin = v;
        }
        if let Some(v) = style.column_spacing {
            c.column_spacing = v;
        }
        if let Some(v) = style.checkbox_horizontal_margin {
            c.checkbox_horizontal_margin = Some(v);
        }
        if let Some(v) = style.heading_row_height {
            c.heading_row_height = v;
        }
        if let Some(v) = style.data_row_height {
            c.data_row_height = v;
        }
        if let Some(v) = style.divider_thickness {
            c.divider_thickness = v;
        }
        if let Some(v) = style.show_bottom_border {
            c.show_bottom_border = v;
        }
        if let Some(v) = style.min_width {
            c.min_width = Some(v);
        }
        if let Some(duration) = style.sort_arrow_duration() {
            c.sort_arrow_duration = duration;
        }
        if style.divider_color.is_some() {
            c.divider_color = style.divider_color;
        }
        if style.heading_text.is_some() {
            c.heading_text_style = style.heading_text;
        }
        if style.data_text.is_some() {
            c.data_text_style = style.data_text;
        }
        self
    }

    /// Validate and produce the config.
    pub fn build(self) -> Result<GridConfig, GridError> {
        let c = self.config;
        let columns = c.columns.len();

        if columns == 0 {
            return Err(GridError::NoColumns);
        }

        if let Some(index) = c.sort_column_index {
            if index >= columns {
                return Err(GridError::SortColumnOutOfRange { index, columns });
            }
        }

        if let Some((row, cells)) = c
            .rows
            .iter()
            .map(|row| row.cells.len())
            .enumerate()
            .find(|(_, cells)| *cells != columns)
        {
            return Err(GridError::CellCountMismatch {
                row,
                cells,
                columns,
            });
        }

        if !(c.divider_thickness.is_finite() && c.divider_thickness >= 0.0) {
            return Err(GridError::NegativeDividerThickness(c.divider_thickness));
        }

        check_dimension("horizontal_margin", c.horizontal_margin)?;
        check_dimension("column_spacing", c.column_spacing)?;
        check_dimension("heading_row_height", c.heading_row_height)?;
        check_dimension("data_row_height", c.data_row_height)?;
        if let Some(margin) = c.checkbox_horizontal_margin {
            check_dimension("checkbox_horizontal_margin", margin)?;
        }
        if let Some(width) = c.min_width {
            check_dimension("min_width", width)?;
        }
        for column in &c.columns {
            if let Some(width) = column.fixed_width {
                check_dimension("fixed_width", width)?;
            }
        }

        Ok(c)
    }
}

fn check_dimension(name: &'static str, value: f32) -> Result<(), GridError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidDimension { name, value })
    }
}
