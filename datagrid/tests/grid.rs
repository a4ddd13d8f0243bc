use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use datagrid::cells::cell_padding;
use datagrid::prelude::*;
use gridkit::{find_element, Content, Overflow, Size, Table};

const VIEWPORT: f32 = 654.0;

#[derive(Default)]
struct Events {
    sorts: Mutex<Vec<(usize, bool)>>,
    selects: Mutex<Vec<(usize, bool)>>,
    select_all: Mutex<Vec<bool>>,
    taps: Mutex<Vec<String>>,
}

impl Events {
    fn tap(self: &Arc<Self>, name: &str) -> impl Fn() + Send + Sync + 'static {
        let events = Arc::clone(self);
        let name = name.to_string();
        move || events.taps.lock().unwrap().push(name.clone())
    }
}

fn columns(events: &Arc<Events>) -> Vec<ColumnSpec> {
    let sorts = Arc::clone(events);
    let numeric_sorts = Arc::clone(events);
    vec![
        ColumnSpec::text("Name")
            .id("name")
            .on_sort(move |i, asc| sorts.sorts.lock().unwrap().push((i, asc))),
        ColumnSpec::text("Qty")
            .id("qty")
            .numeric()
            .tooltip("Units in stock")
            .on_sort(move |i, asc| numeric_sorts.sorts.lock().unwrap().push((i, asc))),
    ]
}

fn row(events: &Arc<Events>, index: usize, selected: bool) -> RowSpec {
    let selects = Arc::clone(events);
    RowSpec::new(vec![format!("item {index}").into(), index.to_string().into()])
        .selected(selected)
        .on_select_changed(move |v| selects.selects.lock().unwrap().push((index, v)))
}

fn base(events: &Arc<Events>) -> GridConfigBuilder {
    GridConfig::builder()
        .columns(columns(events))
        .row(row(events, 0, true))
        .row(row(events, 1, false))
        .sort(0, true)
}

fn render(config: &GridConfig) -> (Element, HandlerRegistry) {
    let registry = HandlerRegistry::new();
    let grid = DataGrid::new("g", config, Instant::now());
    let element = grid.build(config, VIEWPORT, &registry).unwrap();
    (element, registry)
}

fn table<'a>(root: &'a Element, id: &str) -> &'a Table {
    match &find_element(root, id).unwrap().content {
        Content::Table(table) => table,
        other => panic!("{id} is not a table: {other:?}"),
    }
}

fn tap(registry: &HandlerRegistry, id: &str) -> bool {
    registry.dispatch(id, &Interaction::new(Gesture::Tap))
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_header_and_body_share_column_widths() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).build().unwrap());

    let header = table(&root, "g-header");
    let body = table(&root, "g-body-table");
    assert_eq!(header.columns, body.columns);
    assert_eq!(header.columns, vec![54.0, 300.0, 300.0]);
    assert_eq!(header.rows.len(), 1);
    assert_eq!(body.rows.len(), 2);
}

#[test]
fn test_root_is_sized_to_the_layout() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).build().unwrap());
    assert_eq!(root.id, "g");
    assert_eq!(root.width, Size::Fixed(VIEWPORT));
    assert_eq!(root.overflow_x, Overflow::Visible);

    let body = find_element(&root, "g-body").unwrap();
    assert_eq!(body.overflow_y, Overflow::Scroll);
}

#[test]
fn test_min_width_scrolls_horizontally() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).min_width(1000.0).build().unwrap());
    assert_eq!(root.width, Size::Fixed(1000.0));
    assert_eq!(root.overflow_x, Overflow::Scroll);
}

#[test]
fn test_checkbox_column_can_be_hidden() {
    let events = Arc::new(Events::default());
    let (root, registry) = render(&base(&events).show_checkbox_column(false).build().unwrap());

    assert!(find_element(&root, "g-select-all").is_none());
    assert!(find_element(&root, "g-row-0-checkbox").is_none());
    assert_eq!(table(&root, "g-header").columns.len(), 2);
    assert!(!registry.has("g-select-all", Gesture::Toggle));
}

#[test]
fn test_empty_placeholder_replaces_body() {
    let events = Arc::new(Events::default());
    let config = GridConfig::builder()
        .columns(columns(&events))
        .empty(Element::text("Nothing here").id("empty"))
        .build()
        .unwrap();
    let (root, _) = render(&config);

    assert!(find_element(&root, "empty").is_some());
    assert!(find_element(&root, "g-body-table").is_none());
    assert!(find_element(&root, "g-header").is_some());
}

#[test]
fn test_no_rows_without_placeholder_leaves_empty_slot() {
    let events = Arc::new(Events::default());
    let config = GridConfig::builder()
        .columns(columns(&events))
        .build()
        .unwrap();
    let (root, _) = render(&config);

    let slot = find_element(&root, "g-body-empty").unwrap();
    assert_eq!(slot.width, Size::Fixed(0.0));
    assert!(find_element(&root, "g-body-table").is_none());
    assert_eq!(table(&root, "g-header").rows.len(), 1);
}

#[test]
fn test_rows_are_keyed() {
    let events = Arc::new(Events::default());
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(row(&events, 0, false).key("apples"))
        .row(row(&events, 1, false))
        .build()
        .unwrap();
    let (root, _) = render(&config);

    let body = table(&root, "g-body-table");
    assert_eq!(body.rows[0].key.as_deref(), Some("apples"));
    assert_eq!(body.rows[1].key.as_deref(), Some("1"));
}

// ============================================================================
// Headings and Sorting
// ============================================================================

#[test]
fn test_tapping_sorted_heading_flips_direction() {
    let events = Arc::new(Events::default());
    let (_, registry) = render(&base(&events).build().unwrap());

    assert!(tap(&registry, "g-heading-0"));
    assert!(tap(&registry, "g-heading-1"));
    assert_eq!(*events.sorts.lock().unwrap(), vec![(0, false), (1, true)]);
}

#[test]
fn test_tapping_descending_heading_sorts_ascending() {
    let events = Arc::new(Events::default());
    let (_, registry) = render(&base(&events).sort(0, false).build().unwrap());

    tap(&registry, "g-heading-0");
    assert_eq!(*events.sorts.lock().unwrap(), vec![(0, true)]);
}

#[test]
fn test_unsortable_heading_has_no_handler_or_arrow() {
    let config = GridConfig::builder()
        .column(ColumnSpec::text("Plain"))
        .build()
        .unwrap();
    let (root, registry) = render(&config);

    assert!(!registry.has("g-heading-0", Gesture::Tap));
    assert!(find_element(&root, "g-heading-0-arrow").is_none());
}

#[test]
fn test_arrow_placement_follows_alignment() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).build().unwrap());

    let text_heading = find_element(&root, "g-heading-0").unwrap();
    let numeric_heading = find_element(&root, "g-heading-1").unwrap();
    let first_child = |element: &Element| match &element.content {
        Content::Children(children) => children[0].id.clone(),
        _ => String::new(),
    };

    assert_ne!(first_child(text_heading), "g-heading-0-arrow-slot");
    assert_eq!(first_child(numeric_heading), "g-heading-1-arrow-slot");
    assert_eq!(numeric_heading.tooltip.as_deref(), Some("Units in stock"));
}

#[test]
fn test_only_sorted_column_shows_its_arrow() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).build().unwrap());

    assert_eq!(find_element(&root, "g-heading-0-arrow").unwrap().opacity, 1.0);
    assert_eq!(find_element(&root, "g-heading-1-arrow").unwrap().opacity, 0.0);
}

#[test]
fn test_changing_sort_column_animates_both_arrows() {
    let events = Arc::new(Events::default());
    let start = Instant::now();
    let registry = HandlerRegistry::new();
    let first = base(&events).build().unwrap();
    let mut grid = DataGrid::new("g", &first, start);

    let second = base(&events).sort(1, true).build().unwrap();
    grid.update(&second, start);
    assert!(grid.is_animating());

    grid.tick(start + Duration::from_millis(75));
    let root = grid.build(&second, VIEWPORT, &registry).unwrap();
    let fading_out = find_element(&root, "g-heading-0-arrow").unwrap().opacity;
    let fading_in = find_element(&root, "g-heading-1-arrow").unwrap().opacity;
    assert!(fading_out > 0.0 && fading_out < 1.0);
    assert!(fading_in > 0.0 && fading_in < 1.0);

    assert!(!grid.tick(start + Duration::from_secs(1)));
    assert_eq!(grid.sort_arrow("name").unwrap().opacity(), 0.0);
    assert_eq!(grid.sort_arrow("qty").unwrap().opacity(), 1.0);
}

#[test]
fn test_removed_column_drops_its_arrow() {
    let events = Arc::new(Events::default());
    let start = Instant::now();
    let mut grid = DataGrid::new("g", &base(&events).build().unwrap(), start);
    assert!(grid.sort_arrow("qty").is_some());

    let fewer = GridConfig::builder()
        .column(columns(&events).remove(0))
        .build()
        .unwrap();
    grid.update(&fewer, start);
    assert!(grid.sort_arrow("name").is_some());
    assert!(grid.sort_arrow("qty").is_none());
}

#[test]
fn test_dispose_releases_arrows() {
    let events = Arc::new(Events::default());
    let config = base(&events).build().unwrap();
    let mut grid = DataGrid::new("g", &config, Instant::now());

    grid.dispose();
    assert!(grid.is_disposed());
    assert!(grid.sort_arrow_for(&config, 0).is_none());
    grid.dispose();
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_row_checkbox_toggles_row() {
    let events = Arc::new(Events::default());
    let (_, registry) = render(&base(&events).build().unwrap());

    registry.dispatch("g-row-0-checkbox", &Interaction::new(Gesture::Toggle));
    registry.dispatch("g-row-1-checkbox", &Interaction::new(Gesture::Toggle));
    assert_eq!(*events.selects.lock().unwrap(), vec![(0, false), (1, true)]);
}

#[test]
fn test_select_all_is_indeterminate_and_selects_the_rest() {
    let events = Arc::new(Events::default());
    let (root, registry) = render(&base(&events).build().unwrap());

    match &find_element(&root, "g-select-all-box").unwrap().content {
        Content::Checkbox { value, tristate } => {
            assert_eq!(*value, None);
            assert!(*tristate);
        }
        other => panic!("unexpected content {other:?}"),
    }

    registry.dispatch("g-select-all", &Interaction::new(Gesture::Toggle));
    assert_eq!(*events.selects.lock().unwrap(), vec![(1, true)]);
}

#[test]
fn test_select_all_uses_aggregate_callback() {
    let events = Arc::new(Events::default());
    let all = Arc::clone(&events);
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(row(&events, 0, true))
        .row(row(&events, 1, true))
        .on_select_all(move |v| all.select_all.lock().unwrap().push(v))
        .build()
        .unwrap();
    let (_, registry) = render(&config);

    tap(&registry, "g-select-all");
    assert_eq!(*events.select_all.lock().unwrap(), vec![false]);
    assert!(events.selects.lock().unwrap().is_empty());
}

#[test]
fn test_unselectable_row_checkbox_is_disabled() {
    let events = Arc::new(Events::default());
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(row(&events, 0, false))
        .row(RowSpec::new(vec!["fixed".into(), "1".into()]))
        .build()
        .unwrap();
    let (root, registry) = render(&config);

    assert!(find_element(&root, "g-row-1-checkbox").unwrap().disabled);
    assert!(!registry.dispatch("g-row-1-checkbox", &Interaction::new(Gesture::Toggle)));
}

#[test]
fn test_rebuild_drops_handlers_of_the_previous_build() {
    let events = Arc::new(Events::default());
    let registry = HandlerRegistry::new();
    registry.register("toolbar-save", Gesture::Tap, Arc::new(|_| {}));

    let first = base(&events).build().unwrap();
    let mut grid = DataGrid::new("g", &first, Instant::now());
    grid.build(&first, VIEWPORT, &registry).unwrap();
    assert!(registry.has("g-row-0-checkbox", Gesture::Toggle));

    // Row 0 loses its selection callback, row 1 disappears
    let second = GridConfig::builder()
        .columns(columns(&events))
        .row(RowSpec::new(vec!["fixed".into(), "0".into()]))
        .row(row(&events, 2, false))
        .sort(0, true)
        .build()
        .unwrap();
    let root = grid
        .render(&second, VIEWPORT, &registry, Instant::now())
        .unwrap();

    assert!(find_element(&root, "g-row-0-checkbox").unwrap().disabled);
    assert!(!registry.dispatch("g-row-0-checkbox", &Interaction::new(Gesture::Toggle)));
    assert!(!tap(&registry, "g-row-0-cell-0"));
    assert!(events.selects.lock().unwrap().is_empty());

    assert!(registry.has("g-row-1-checkbox", Gesture::Toggle));
    assert!(registry.has("toolbar-save", Gesture::Tap));
}

#[test]
fn test_rebuild_leaves_other_grids_alone() {
    let events = Arc::new(Events::default());
    let registry = HandlerRegistry::new();
    let config = base(&events).build().unwrap();
    let left = DataGrid::new("left", &config, Instant::now());
    let right = DataGrid::new("right", &config, Instant::now());

    left.build(&config, VIEWPORT, &registry).unwrap();
    right.build(&config, VIEWPORT, &registry).unwrap();
    left.build(&config, VIEWPORT, &registry).unwrap();

    assert!(tap(&registry, "right-heading-0"));
    assert!(tap(&registry, "left-heading-0"));
}

// ============================================================================
// Cell Gestures
// ============================================================================

#[test]
fn test_cell_tap_falls_back_to_selection() {
    let events = Arc::new(Events::default());
    let (_, registry) = render(&base(&events).build().unwrap());

    tap(&registry, "g-row-1-cell-0");
    assert_eq!(*events.selects.lock().unwrap(), vec![(1, true)]);
}

#[test]
fn test_cell_tap_prefers_cell_then_row() {
    let events = Arc::new(Events::default());
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(
            RowSpec::new(vec![
                CellSpec::text("a").on_tap(events.tap("cell")),
                CellSpec::text("b"),
            ])
            .on_tap(events.tap("row"))
            .on_select_changed(|_| panic!("selection must not change")),
        )
        .build()
        .unwrap();
    let (_, registry) = render(&config);

    tap(&registry, "g-row-0-cell-0");
    tap(&registry, "g-row-0-cell-1");
    assert_eq!(*events.taps.lock().unwrap(), vec!["cell", "row"]);
}

#[test]
fn test_row_gestures_reach_every_cell() {
    let events = Arc::new(Events::default());
    let position = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&position);
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(
            RowSpec::new(vec!["a".into(), "b".into()])
                .on_double_tap(events.tap("double"))
                .on_long_press(events.tap("long"))
                .on_secondary_tap(events.tap("secondary"))
                .on_secondary_tap_down(move |p| *seen.lock().unwrap() = Some(p)),
        )
        .build()
        .unwrap();
    let (_, registry) = render(&config);

    registry.dispatch("g-row-0-cell-1", &Interaction::new(Gesture::DoubleTap));
    registry.dispatch("g-row-0-cell-0", &Interaction::new(Gesture::LongPress));
    registry.dispatch("g-row-0-cell-1", &Interaction::new(Gesture::SecondaryTap));
    registry.dispatch(
        "g-row-0-cell-0",
        &Interaction::new(Gesture::SecondaryTapDown).at(Point::new(5.0, 6.0)),
    );

    assert_eq!(*events.taps.lock().unwrap(), vec!["double", "long", "secondary"]);
    assert_eq!(*position.lock().unwrap(), Some(Point::new(5.0, 6.0)));
    assert!(!registry.has("g-row-0-cell-0", Gesture::Tap));
}

#[test]
fn test_placeholder_and_edit_icon() {
    let events = Arc::new(Events::default());
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(RowSpec::new(vec![
            CellSpec::text("Name?").placeholder().show_edit_icon(),
            CellSpec::text("0"),
        ]))
        .build()
        .unwrap();
    let (root, _) = render(&config);

    let cell = find_element(&root, "g-row-0-cell-0").unwrap();
    let Content::Children(children) = &cell.content else {
        panic!("cell has no children");
    };
    assert!(children[0].style.text_style.dim);
    assert!(find_element(&root, "g-row-0-cell-0-edit").is_some());
    assert!(find_element(&root, "g-row-0-cell-1-edit").is_none());
}

// ============================================================================
// Decoration and Padding
// ============================================================================

#[test]
fn test_selected_row_gets_primary_tint() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).build().unwrap());
    let body = table(&root, "g-body-table");

    assert_eq!(
        body.rows[0].decoration.color,
        Some(Color::rgb(0x62, 0x00, 0xee).with_alpha(0.08))
    );
    assert_eq!(body.rows[1].decoration.color, Some(Color::TRANSPARENT));
}

#[test]
fn test_row_color_precedence() {
    let events = Arc::new(Events::default());
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    let config = GridConfig::builder()
        .columns(columns(&events))
        .row(row(&events, 0, false).color(StateProperty::all(red.clone())))
        .row(row(&events, 1, true))
        .row(row(&events, 2, false))
        .data_row_color(StateProperty::new(move |states: InteractionStates| {
            states
                .contains(InteractionState::Selected)
                .then(|| blue.clone())
        }))
        .build()
        .unwrap();
    let (root, _) = render(&config);
    let body = table(&root, "g-body-table");

    assert_eq!(body.rows[0].decoration.color, Some(red));
    assert_eq!(body.rows[1].decoration.color, Some(Color::rgb(0, 0, 255)));
    // Grid resolver declined: default applies
    assert_eq!(body.rows[2].decoration.color, Some(Color::TRANSPARENT));
}

#[test]
fn test_dividers_sit_between_rows() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).build().unwrap());

    let header = table(&root, "g-header");
    let body = table(&root, "g-body-table");
    assert!(header.rows[0].decoration.borders.is_empty());
    for row in &body.rows {
        let top = row.decoration.borders.top.as_ref().unwrap();
        assert_eq!(top.width, 1.0);
        assert!(row.decoration.borders.bottom.is_none());
    }
}

#[test]
fn test_bottom_border_mode() {
    let events = Arc::new(Events::default());
    let (root, _) = render(&base(&events).show_bottom_border(true).build().unwrap());

    let header = table(&root, "g-header");
    let body = table(&root, "g-body-table");
    assert!(header.rows[0].decoration.borders.bottom.is_some());
    assert!(body.rows.iter().all(|r| r.decoration.borders.bottom.is_some()));
    assert!(body.rows.iter().all(|r| r.decoration.borders.top.is_none()));
}

#[test]
fn test_cell_padding() {
    // First column after the checkbox column gets half a margin
    let first = cell_padding(0, 3, true, 24.0, 56.0);
    assert_eq!((first.left, first.right), (12.0, 28.0));

    let first = cell_padding(0, 3, false, 24.0, 56.0);
    assert_eq!((first.left, first.right), (24.0, 28.0));

    let middle = cell_padding(1, 3, false, 24.0, 56.0);
    assert_eq!((middle.left, middle.right), (28.0, 28.0));

    let last = cell_padding(2, 3, false, 24.0, 56.0);
    assert_eq!((last.left, last.right), (28.0, 24.0));

    let only = cell_padding(0, 1, false, 24.0, 56.0);
    assert_eq!((only.left, only.right), (24.0, 24.0));
}
