//! Row backgrounds and dividers.

use gridkit::{
    BorderSide, Borders, Color, ColorContext, Decoration, InteractionState, InteractionStates,
    StateProperty,
};

use crate::config::{GridConfig, SELECTED_ROW_ALPHA};
use crate::row::RowSpec;

/// Interaction states of a data row as far as the grid knows them.
pub fn row_states(row: &RowSpec, checkbox_column: bool) -> InteractionStates {
    let mut states = InteractionStates::empty();
    if row.selected {
        states.insert(InteractionState::Selected);
    }
    if checkbox_column && !row.is_selectable() {
        states.insert(InteractionState::Disabled);
    }
    states
}

/// Resolve a data row's background.
///
/// The row's own resolver wins, then the grid-wide one, then the default:
/// a faint primary tint when selected, transparent otherwise. A resolver
/// answering `None` defers to the next source.
pub fn resolve_row_color(
    row: &RowSpec,
    grid_color: Option<&StateProperty<Color>>,
    states: InteractionStates,
    colors: &ColorContext<'_>,
) -> Color {
    row.color
        .as_ref()
        .and_then(|color| color.resolve(states))
        .or_else(|| grid_color.and_then(|color| color.resolve(states)))
        .map(|color| colors.resolve(&color))
        .unwrap_or_else(|| default_row_color(states, colors))
}

fn default_row_color(states: InteractionStates, colors: &ColorContext<'_>) -> Color {
    if states.contains(InteractionState::Selected) {
        colors.named("primary").with_alpha(SELECTED_ROW_ALPHA)
    } else {
        Color::TRANSPARENT
    }
}

/// The divider between rows.
pub fn divider(config: &GridConfig, colors: &ColorContext<'_>) -> BorderSide {
    let color = match &config.divider_color {
        Some(color) => colors.resolve(color),
        None => colors.named("divider"),
    };
    BorderSide::new(color, config.divider_thickness())
}

/// Divider placement: under every row in bottom-border mode, otherwise above
/// every body row and nowhere on the header.
pub fn row_borders(config: &GridConfig, header: bool, divider: &BorderSide) -> Borders {
    if config.show_bottom_border() {
        Borders::bottom(divider.clone())
    } else if header {
        Borders::default()
    } else {
        Borders::top(divider.clone())
    }
}

pub fn heading_decoration(
    config: &GridConfig,
    divider: &BorderSide,
    colors: &ColorContext<'_>,
) -> Decoration {
    let mut decoration = Decoration::new().borders(row_borders(config, true, divider));
    if let Some(color) = config
        .heading_row_color
        .as_ref()
        .and_then(|color| color.resolve(InteractionStates::empty()))
    {
        decoration = decoration.color(colors.resolve(&color));
    }
    decoration
}

pub fn data_row_decoration(
    config: &GridConfig,
    row: &RowSpec,
    checkbox_column: bool,
    divider: &BorderSide,
    colors: &ColorContext<'_>,
) -> Decoration {
    let states = row_states(row, checkbox_column);
    let color = resolve_row_color(row, config.data_row_color.as_ref(), states, colors);
    Decoration::new()
        .color(color)
        .borders(row_borders(config, false, divider))
}
