use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gridkit::{
    find_element, Color, ColorContext, Content, DefaultTheme, Element, Gesture, HandlerRegistry,
    Interaction, InteractionState, InteractionStates, LayoutError, ParseColorError, Point, Rgb,
    StateProperty, Style, Table, TableRow, TextStyle, Theme,
};

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_color_parse_hex() {
    assert_eq!("#6200ee".parse::<Color>(), Ok(Color::rgb(0x62, 0x00, 0xee)));
    let with_alpha: Color = "#00000080".parse().unwrap();
    assert!((with_alpha.alpha() - 128.0 / 255.0).abs() < 0.001);
}

#[test]
fn test_color_parse_functions() {
    assert_eq!("rgb(1, 2, 3)".parse::<Color>(), Ok(Color::rgb(1, 2, 3)));
    assert_eq!(
        "rgba(1, 2, 3, 0.5)".parse::<Color>(),
        Ok(Color::rgba(1, 2, 3, 0.5))
    );
    assert_eq!(
        "oklch(0.5, 0.1, 120)".parse::<Color>(),
        Ok(Color::oklch(0.5, 0.1, 120.0))
    );
}

#[test]
fn test_color_parse_var_and_transparent() {
    assert_eq!("primary".parse::<Color>(), Ok(Color::var("primary")));
    assert_eq!("transparent".parse::<Color>(), Ok(Color::TRANSPARENT));
    assert!(Color::TRANSPARENT.is_transparent());
}

#[test]
fn test_color_parse_errors() {
    assert_eq!("".parse::<Color>(), Err(ParseColorError::Empty));
    assert!(matches!("#12".parse::<Color>(), Err(ParseColorError::Hex(_))));
    assert!(matches!(
        "rgb(300, 0, 0)".parse::<Color>(),
        Err(ParseColorError::Function(_))
    ));
}

#[test]
fn test_color_deserialize_from_string() {
    let color: Color = serde_json::from_str("\"#ff0000\"").unwrap();
    assert_eq!(color, Color::rgb(255, 0, 0));
    assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
}

#[test]
fn test_color_context_resolves_theme_vars() {
    let theme = DefaultTheme::new();
    let colors = ColorContext::new(&theme);

    assert_eq!(colors.named("primary"), theme.primary);
    assert_eq!(colors.resolve(&Color::rgb(1, 2, 3)), Color::rgb(1, 2, 3));
    assert_eq!(colors.named("no-such-color"), Color::TRANSPARENT);
}

#[test]
fn test_color_to_rgb() {
    assert_eq!(Color::rgb(1, 2, 3).to_rgb(), Rgb::new(1, 2, 3));
    // Oklch white and black land on the sRGB extremes
    assert_eq!(Color::oklch(1.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 255, 255));
    assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
}

#[test]
fn test_color_display_round_trips_through_parse() {
    let color = Color::rgba(10, 20, 30, 0.5);
    assert_eq!(color.to_string().parse::<Color>(), Ok(color));
}

struct AliasTheme(HashMap<&'static str, Color>);

impl Theme for AliasTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.0.get(name)
    }
}

#[test]
fn test_color_context_follows_alias_chains() {
    let theme = AliasTheme(HashMap::from([
        ("accent", Color::var("brand")),
        ("brand", Color::rgb(9, 8, 7)),
    ]));
    let colors = ColorContext::new(&theme);
    assert_eq!(colors.named("accent"), Color::rgb(9, 8, 7));
}

#[test]
fn test_color_context_alias_cycle_is_transparent() {
    let theme = AliasTheme(HashMap::from([
        ("a", Color::var("b")),
        ("b", Color::var("a")),
        ("self", Color::var("self")),
    ]));
    let colors = ColorContext::new(&theme);
    assert_eq!(colors.named("a"), Color::TRANSPARENT);
    assert_eq!(colors.named("self"), Color::TRANSPARENT);
}

#[test]
fn test_with_alpha_keeps_channels() {
    let color = Color::rgb(10, 20, 30).with_alpha(0.08);
    assert_eq!(color, Color::rgba(10, 20, 30, 0.08));
}

// ============================================================================
// Styles
// ============================================================================

#[test]
fn test_style_merge_prefers_other() {
    let base = Style::new().bold().foreground(Color::rgb(0, 0, 0));
    let over = Style::new().foreground(Color::rgb(255, 255, 255));
    let merged = base.merge(&over);

    assert_eq!(merged.foreground, Some(Color::rgb(255, 255, 255)));
    assert!(merged.text_style.bold);
}

#[test]
fn test_style_deserialize_rejects_unknown_fields() {
    let style: TextStyle = serde_json::from_str(r#"{"bold": true}"#).unwrap();
    assert!(style.bold);
    assert!(serde_json::from_str::<TextStyle>(r#"{"blink": true}"#).is_err());
}

// ============================================================================
// Interaction States
// ============================================================================

#[test]
fn test_interaction_states_set() {
    let mut states = InteractionStates::empty();
    assert!(states.is_empty());

    states.insert(InteractionState::Selected);
    states.insert(InteractionState::Hovered);
    assert!(states.contains(InteractionState::Selected));
    assert!(!states.contains(InteractionState::Disabled));
    assert_eq!(states.iter().count(), 2);

    states.remove(InteractionState::Selected);
    assert!(!states.contains(InteractionState::Selected));
}

#[test]
fn test_state_property_resolves_per_state() {
    let property = StateProperty::new(|states: InteractionStates| {
        states
            .contains(InteractionState::Selected)
            .then(|| Color::rgb(1, 1, 1))
    });

    let selected = InteractionStates::empty().with(InteractionState::Selected);
    assert_eq!(property.resolve(selected), Some(Color::rgb(1, 1, 1)));
    assert_eq!(property.resolve(InteractionStates::empty()), None);

    let constant = StateProperty::all(3);
    assert_eq!(constant.resolve(InteractionStates::empty()), Some(3));
}

// ============================================================================
// Handler Registry
// ============================================================================

#[test]
fn test_registry_dispatches_by_gesture() {
    let registry = HandlerRegistry::new();
    let taps = Arc::new(AtomicUsize::new(0));
    {
        let taps = Arc::clone(&taps);
        registry.register(
            "btn",
            Gesture::Tap,
            Arc::new(move |_| {
                taps.fetch_add(1, Ordering::SeqCst);
            }),
        );
    }

    assert!(registry.has("btn", Gesture::Tap));
    assert!(registry.dispatch("btn", &Interaction::new(Gesture::Tap)));
    assert!(!registry.dispatch("btn", &Interaction::new(Gesture::LongPress)));
    assert!(!registry.dispatch("other", &Interaction::new(Gesture::Tap)));
    assert_eq!(taps.load(Ordering::SeqCst), 1);
}

#[test]
fn test_registry_passes_position() {
    let registry = HandlerRegistry::new();
    let seen = Arc::new(std::sync::Mutex::new(None));
    {
        let seen = Arc::clone(&seen);
        registry.register(
            "cell",
            Gesture::SecondaryTapDown,
            Arc::new(move |i| *seen.lock().unwrap() = i.position),
        );
    }

    registry.dispatch(
        "cell",
        &Interaction::new(Gesture::SecondaryTapDown).at(Point::new(3.0, 4.0)),
    );
    assert_eq!(*seen.lock().unwrap(), Some(Point::new(3.0, 4.0)));
}

#[test]
fn test_registry_remove_prefix_keeps_other_widgets() {
    let registry = HandlerRegistry::new();
    registry.register("grid-heading-0", Gesture::Tap, Arc::new(|_| {}));
    registry.register("grid-row-0-checkbox", Gesture::Toggle, Arc::new(|_| {}));
    registry.register("grid-row-0-checkbox", Gesture::Tap, Arc::new(|_| {}));
    registry.register("gridlines", Gesture::Tap, Arc::new(|_| {}));
    registry.register("toolbar-save", Gesture::Tap, Arc::new(|_| {}));

    assert_eq!(registry.remove_prefix("grid-"), 3);
    assert_eq!(registry.len(), 2);
    assert!(registry.has("gridlines", Gesture::Tap));
    assert!(registry.has("toolbar-save", Gesture::Tap));
    assert!(!registry.has("grid-row-0-checkbox", Gesture::Toggle));

    assert_eq!(registry.remove_prefix("grid-"), 0);
}

#[test]
fn test_registry_clear() {
    let registry = HandlerRegistry::new();
    registry.register("a", Gesture::Tap, Arc::new(|_| {}));
    registry.register("a", Gesture::Tap, Arc::new(|_| {}));
    registry.register("b", Gesture::Toggle, Arc::new(|_| {}));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
}

// ============================================================================
// Tables and Tree Lookup
// ============================================================================

#[test]
fn test_table_rejects_cell_count_mismatch() {
    let columns = vec![10.0, 20.0];
    let rows = vec![
        TableRow::new(vec![Element::text("a"), Element::text("b")]),
        TableRow::new(vec![Element::text("c")]),
    ];

    let err = Table::new(columns, rows).unwrap_err();
    assert_eq!(
        err,
        LayoutError::CellCount {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_table_width() {
    let table = Table::new(vec![10.0, 20.5], vec![]).unwrap();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.width(), 30.5);
}

#[test]
fn test_empty_element_is_zero_sized() {
    let empty = Element::empty();
    assert_eq!(empty.width, gridkit::Size::Fixed(0.0));
    assert_eq!(empty.height, gridkit::Size::Fixed(0.0));
    assert!(matches!(empty.content, Content::None));
}

#[test]
fn test_find_element_descends_into_tables() {
    let table = Table::new(
        vec![40.0],
        vec![TableRow::new(vec![Element::text("x").id("cell")]).key("r0")],
    )
    .unwrap();
    let root = Element::col()
        .id("root")
        .child(Element::table(table).id("table"));

    let cell = find_element(&root, "cell").unwrap();
    assert!(matches!(&cell.content, Content::Text(t) if t == "x"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_text_content_collects_children() {
    let element = Element::row()
        .child(Element::text("Hello "))
        .child(Element::text("world"));
    assert_eq!(element.text_content(), "Hello world");
}
