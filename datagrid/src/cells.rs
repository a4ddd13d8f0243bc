//! Cell builders: heading cells, data cells and the checkbox column.
//!
//! Builders return plain elements and register their interaction handlers
//! under the element's id in the shared [`HandlerRegistry`].

use std::sync::Arc;

use gridkit::{
    Align, ColorContext, Edges, Element, Gesture, Handler, HandlerRegistry, Icon, Size, Style,
    TextAlign, TimedTransition,
};

use crate::callback::{SelectCallback, TapCallback};
use crate::column::ColumnSpec;
use crate::config::{EDIT_ICON_SIZE, GridConfig, SORT_ARROW_PADDING, SORT_ARROW_SIZE};
use crate::row::{CellSpec, RowSpec};
use crate::selection::{SelectionSummary, apply_toggle};
use crate::sort_arrow::SortArrow;
use crate::width::checkbox_column_width;

/// Shared inputs of one build pass.
pub struct BuildContext<'a> {
    pub grid_id: &'a str,
    pub config: &'a GridConfig,
    pub registry: &'a HandlerRegistry,
    pub colors: &'a ColorContext<'a>,
    pub checkbox_column: bool,
}

pub fn heading_id(grid_id: &str, column: usize) -> String {
    format!("{grid_id}-heading-{column}")
}

pub fn cell_id(grid_id: &str, row: usize, column: usize) -> String {
    format!("{grid_id}-row-{row}-cell-{column}")
}

pub fn checkbox_id(grid_id: &str, row: usize) -> String {
    format!("{grid_id}-row-{row}-checkbox")
}

pub fn select_all_id(grid_id: &str) -> String {
    format!("{grid_id}-select-all")
}

/// How a sort arrow is painted this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPaint {
    pub opacity: f32,
    pub rotation: f32,
}

impl ArrowPaint {
    /// An arrow with no animation history.
    pub fn resting(visible: bool, ascending: bool) -> Self {
        Self {
            opacity: if visible { 1.0 } else { 0.0 },
            rotation: if ascending { 0.0 } else { std::f32::consts::PI },
        }
    }
}

impl<T: TimedTransition> From<&SortArrow<T>> for ArrowPaint {
    fn from(arrow: &SortArrow<T>) -> Self {
        Self {
            opacity: arrow.opacity(),
            rotation: arrow.rotation(),
        }
    }
}

/// Horizontal padding of a data column's cells.
///
/// The outermost columns get the horizontal margin on their outer side (the
/// first column only half of it when the checkbox column precedes it).
/// Between columns each side gets half the column spacing.
pub fn cell_padding(
    index: usize,
    column_count: usize,
    checkbox_column: bool,
    margin: f32,
    spacing: f32,
) -> Edges {
    let start = match (index, checkbox_column) {
        (0, true) => margin / 2.0,
        (0, false) => margin,
        _ => spacing / 2.0,
    };
    let end = if index + 1 == column_count {
        margin
    } else {
        spacing / 2.0
    };
    Edges::start_end(start, end)
}

fn padding_for(ctx: &BuildContext<'_>, index: usize) -> Edges {
    cell_padding(
        index,
        ctx.config.columns().len(),
        ctx.checkbox_column,
        ctx.config.horizontal_margin(),
        ctx.config.column_spacing(),
    )
}

fn heading_style(ctx: &BuildContext<'_>) -> Style {
    let base = Style::new()
        .bold()
        .foreground(ctx.colors.named("on_surface"));
    match &ctx.config.heading_text_style {
        Some(style) => base.merge(style),
        None => base,
    }
}

fn data_style(ctx: &BuildContext<'_>, placeholder: bool) -> Style {
    let base = Style::new().foreground(ctx.colors.named("on_surface"));
    let style = match &ctx.config.data_text_style {
        Some(style) => base.merge(style),
        None => base,
    };
    if placeholder { style.dim() } else { style }
}

fn alignment(column: &ColumnSpec) -> (Align, TextAlign) {
    if column.numeric {
        (Align::End, TextAlign::Right)
    } else {
        (Align::Start, TextAlign::Left)
    }
}

fn tap(callback: TapCallback) -> Handler {
    Arc::new(move |_| callback())
}

fn select(callback: SelectCallback, value: bool) -> Handler {
    Arc::new(move |_| callback(value))
}

/// Header cell: label, optional tooltip, and a sort arrow for sortable columns.
pub fn build_heading_cell(
    ctx: &BuildContext<'_>,
    index: usize,
    column: &ColumnSpec,
    arrow: Option<ArrowPaint>,
) -> Element {
    let id = heading_id(ctx.grid_id, index);
    let (justify, text_align) = alignment(column);

    let mut label = column.label.clone();
    label.style = heading_style(ctx).merge(&label.style);
    label = label.text_align(text_align);

    let arrow = arrow.map(|paint| {
        let padding = if column.numeric {
            Edges::start_end(0.0, SORT_ARROW_PADDING)
        } else {
            Edges::start_end(SORT_ARROW_PADDING, 0.0)
        };
        Element::box_()
            .id(format!("{id}-arrow-slot"))
            .padding(padding)
            .child(
                Element::icon(Icon::ArrowUpward, SORT_ARROW_SIZE)
                    .id(format!("{id}-arrow"))
                    .opacity(paint.opacity)
                    .rotation(paint.rotation),
            )
    });

    let children: Vec<Element> = match (arrow, column.numeric) {
        (Some(arrow), true) => vec![arrow, label],
        (Some(arrow), false) => vec![label, arrow],
        (None, _) => vec![label],
    };

    let mut cell = Element::row()
        .id(&id)
        .width(Size::Fill)
        .height(Size::Fixed(ctx.config.heading_row_height()))
        .padding(padding_for(ctx, index))
        .justify(justify)
        .align(Align::Center)
        .children(children);

    if let Some(tooltip) = &column.tooltip {
        cell = cell.tooltip(tooltip);
    }

    if let Some(on_sort) = column.on_sort.clone() {
        let ascending = !ctx.config.is_sorted_on(index) || !ctx.config.sort_ascending();
        ctx.registry.register(
            &id,
            Gesture::Tap,
            Arc::new(move |_| on_sort(index, ascending)),
        );
        cell = cell.clickable(true).focusable(true);
    }

    cell
}

/// Data cell. Gestures the cell does not handle itself fall back to the row.
pub fn build_data_cell(
    ctx: &BuildContext<'_>,
    row_index: usize,
    row: &RowSpec,
    column_index: usize,
    column: &ColumnSpec,
    cell: &CellSpec,
) -> Element {
    let id = cell_id(ctx.grid_id, row_index, column_index);
    let (justify, text_align) = alignment(column);

    let mut content = cell.content.clone();
    content.style = data_style(ctx, cell.placeholder).merge(&content.style);
    content = content.text_align(text_align);

    let mut children = vec![content];
    if cell.show_edit_icon {
        children.push(Element::icon(Icon::Edit, EDIT_ICON_SIZE).id(format!("{id}-edit")));
    }

    let registry = ctx.registry;
    let mut handled = false;

    let on_tap = cell
        .on_tap
        .clone()
        .or_else(|| row.on_tap.clone())
        .map(tap)
        .or_else(|| {
            row.on_select_changed
                .clone()
                .map(|callback| select(callback, !row.selected))
        });
    if let Some(handler) = on_tap {
        registry.register(&id, Gesture::Tap, handler);
        handled = true;
    }
    if let Some(callback) = cell.on_double_tap.clone().or_else(|| row.on_double_tap.clone()) {
        registry.register(&id, Gesture::DoubleTap, tap(callback));
        handled = true;
    }
    if let Some(callback) = cell.on_long_press.clone().or_else(|| row.on_long_press.clone()) {
        registry.register(&id, Gesture::LongPress, tap(callback));
        handled = true;
    }
    if let Some(callback) = row.on_secondary_tap.clone() {
        registry.register(&id, Gesture::SecondaryTap, tap(callback));
        handled = true;
    }
    if let Some(callback) = row.on_secondary_tap_down.clone() {
        registry.register(
            &id,
            Gesture::SecondaryTapDown,
            Arc::new(move |interaction| callback(interaction.position.unwrap_or_default())),
        );
        handled = true;
    }

    Element::row()
        .id(id)
        .width(Size::Fill)
        .height(Size::Fixed(ctx.config.data_row_height()))
        .padding(padding_for(ctx, column_index))
        .justify(justify)
        .align(Align::Center)
        .gap(if cell.show_edit_icon { SORT_ARROW_PADDING } else { 0.0 })
        .clickable(handled)
        .children(children)
}

fn checkbox_slot(ctx: &BuildContext<'_>, id: &str, height: f32) -> Element {
    let margin = ctx.config.checkbox_horizontal_margin();
    Element::row()
        .id(id)
        .width(Size::Fixed(checkbox_column_width(margin)))
        .height(Size::Fixed(height))
        .padding(Edges::start_end(margin, margin / 2.0))
        .align(Align::Center)
}

/// Row checkbox. Disabled when the row has no selection callback.
pub fn build_row_checkbox(ctx: &BuildContext<'_>, row_index: usize, row: &RowSpec) -> Element {
    let id = checkbox_id(ctx.grid_id, row_index);
    let selectable = row.is_selectable();

    if let Some(callback) = row.on_select_changed.clone() {
        let handler = select(callback, !row.selected);
        ctx.registry.register(&id, Gesture::Toggle, Arc::clone(&handler));
        ctx.registry.register(&id, Gesture::Tap, handler);
    }

    checkbox_slot(ctx, &id, ctx.config.data_row_height())
        .clickable(selectable)
        .disabled(!selectable)
        .child(
            Element::checkbox(Some(row.selected), false)
                .id(format!("{id}-box"))
                .disabled(!selectable),
        )
}

/// Tri-state header checkbox.
pub fn build_select_all(ctx: &BuildContext<'_>, summary: SelectionSummary) -> Element {
    let id = select_all_id(ctx.grid_id);
    let enabled = summary.selectable > 0;

    if enabled {
        let target = summary.toggle_target();
        let on_select_all = ctx.config.on_select_all.clone();
        let rows: Vec<(bool, SelectCallback)> = ctx
            .config
            .rows()
            .iter()
            .filter_map(|row| Some((row.selected, row.on_select_changed.clone()?)))
            .collect();
        let handler: Handler =
            Arc::new(move |_| apply_toggle(target, on_select_all.as_ref(), &rows));
        ctx.registry.register(&id, Gesture::Toggle, Arc::clone(&handler));
        ctx.registry.register(&id, Gesture::Tap, handler);
    }

    checkbox_slot(ctx, &id, ctx.config.heading_row_height())
        .clickable(enabled)
        .disabled(!enabled)
        .child(
            Element::checkbox(summary.checkbox_value(), true)
                .id(format!("{id}-box"))
                .disabled(!enabled),
        )
}
