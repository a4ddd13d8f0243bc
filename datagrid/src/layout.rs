//! Grid composition: a fixed header table over a vertically scrolling body
//! table, both sized from one [`ColumnLayout`].

use gridkit::{Element, Overflow, Size, Table, TableRow};

use crate::cells::{
    ArrowPaint, BuildContext, build_data_cell, build_heading_cell, build_row_checkbox,
    build_select_all,
};
use crate::decoration::{data_row_decoration, divider, heading_decoration};
use crate::error::GridError;
use crate::width::ColumnLayout;

pub fn header_id(grid_id: &str) -> String {
    format!("{grid_id}-header")
}

pub fn body_id(grid_id: &str) -> String {
    format!("{grid_id}-body")
}

pub fn body_table_id(grid_id: &str) -> String {
    format!("{grid_id}-body-table")
}

/// Zero-sized body of a grid with no rows and no placeholder.
pub fn body_empty_id(grid_id: &str) -> String {
    format!("{grid_id}-body-empty")
}

/// Build the grid's element tree.
///
/// `arrows` holds one entry per data column: the arrow paint for sortable
/// columns, `None` for the rest.
pub fn compose(
    ctx: &BuildContext<'_>,
    layout: &ColumnLayout,
    arrows: &[Option<ArrowPaint>],
    viewport_width: f32,
) -> Result<Element, GridError> {
    let config = ctx.config;
    let divider = divider(config, ctx.colors);
    let columns = layout.table_columns();

    let mut heading_cells = Vec::with_capacity(columns.len());
    if ctx.checkbox_column {
        heading_cells.push(build_select_all(ctx, config.selection()));
    }
    for (index, column) in config.columns().iter().enumerate() {
        let arrow = arrows.get(index).copied().flatten();
        heading_cells.push(build_heading_cell(ctx, index, column, arrow));
    }
    let header_row = TableRow::new(heading_cells)
        .key("header")
        .decoration(heading_decoration(config, &divider, ctx.colors));
    let header = Element::table(Table::new(columns.clone(), vec![header_row])?)
        .id(header_id(ctx.grid_id))
        .width(Size::Fill);

    let body_content = match (&config.empty, config.rows().is_empty()) {
        (Some(empty), true) => empty.clone(),
        (None, true) => Element::empty().id(body_empty_id(ctx.grid_id)),
        (_, false) => {
            let mut rows = Vec::with_capacity(config.rows().len());
            for (row_index, row) in config.rows().iter().enumerate() {
                let mut cells = Vec::with_capacity(columns.len());
                if ctx.checkbox_column {
                    cells.push(build_row_checkbox(ctx, row_index, row));
                }
                for (column_index, (column, cell)) in
                    config.columns().iter().zip(&row.cells).enumerate()
                {
                    cells.push(build_data_cell(ctx, row_index, row, column_index, column, cell));
                }
                let key = row.key.clone().unwrap_or_else(|| row_index.to_string());
                rows.push(
                    TableRow::new(cells).key(key).decoration(data_row_decoration(
                        config,
                        row,
                        ctx.checkbox_column,
                        &divider,
                        ctx.colors,
                    )),
                );
            }
            Element::table(Table::new(columns, rows)?)
                .id(body_table_id(ctx.grid_id))
                .width(Size::Fill)
        }
    };

    let body = Element::col()
        .id(body_id(ctx.grid_id))
        .width(Size::Fill)
        .height(Size::Fill)
        .overflow_y(Overflow::Scroll)
        .child(body_content);

    let mut root = Element::col()
        .id(ctx.grid_id)
        .width(Size::Fixed(layout.width))
        .height(Size::Fill)
        .children([header, body]);
    if layout.width > viewport_width {
        root = root.overflow_x(Overflow::Scroll);
    }
    if let Some(decoration) = &config.decoration {
        root = root.decoration(decoration.clone());
    }
    Ok(root)
}
