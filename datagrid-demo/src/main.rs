//! Headless walkthrough of the data grid: builds a small inventory table,
//! feeds it simulated gestures and prints the resulting element tree.

mod paths;

use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use datagrid::prelude::*;
use datagrid::{ColumnSize, GridStyle};
use gridkit::element::outline;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

const GRID_ID: &str = "inventory";
const VIEWPORT_WIDTH: f32 = 720.0;

#[derive(Debug, Clone)]
struct Item {
    name: &'static str,
    category: &'static str,
    quantity: u32,
    selected: bool,
}

#[derive(Debug)]
struct State {
    items: Vec<Item>,
    sort_column: usize,
    ascending: bool,
}

impl State {
    fn sort(&mut self) {
        let column = self.sort_column;
        self.items.sort_by(|a, b| match column {
            0 => a.name.cmp(b.name),
            1 => a.category.cmp(b.category),
            _ => a.quantity.cmp(&b.quantity),
        });
        if !self.ascending {
            self.items.reverse();
        }
    }
}

type Shared = Arc<Mutex<State>>;

fn with_state(state: &Shared, f: impl FnOnce(&mut State)) {
    match state.lock() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => warn!("state lock poisoned"),
    }
}

fn sort_handler(state: &Shared) -> impl Fn(usize, bool) + Send + Sync + 'static {
    let state = Arc::clone(state);
    move |column, ascending| {
        info!("sort by column {column}, ascending={ascending}");
        with_state(&state, |s| {
            s.sort_column = column;
            s.ascending = ascending;
            s.sort();
        });
    }
}

fn config_for(state: &Shared, style: &GridStyle) -> Result<GridConfig, GridError> {
    let snapshot = match state.lock() {
        Ok(guard) => (guard.items.clone(), guard.sort_column, guard.ascending),
        Err(_) => return GridConfig::builder().build(),
    };
    let (items, sort_column, ascending) = snapshot;

    let rows = items.iter().enumerate().map(|(index, item)| {
        let select_state = Arc::clone(state);
        RowSpec::new(vec![
            item.name.into(),
            item.category.into(),
            item.quantity.to_string().into(),
        ])
        .key(item.name)
        .selected(item.selected)
        .on_select_changed(move |value| {
            with_state(&select_state, |s| {
                if let Some(item) = s.items.get_mut(index) {
                    item.selected = value;
                }
            })
        })
    });

    GridConfig::builder()
        .style(style.clone())
        .column(
            ColumnSpec::text("Name")
                .id("name")
                .size(ColumnSize::Large)
                .on_sort(sort_handler(state)),
        )
        .column(
            ColumnSpec::text("Category")
                .id("category")
                .size(ColumnSize::Small)
                .on_sort(sort_handler(state)),
        )
        .column(
            ColumnSpec::text("Qty")
                .id("quantity")
                .numeric()
                .tooltip("Units in stock")
                .on_sort(sort_handler(state)),
        )
        .rows(rows)
        .sort(sort_column, ascending)
        .empty(Element::text("Nothing in stock"))
        .build()
}

fn load_style() -> GridStyle {
    let Some(path) = paths::style_file() else {
        return GridStyle::default();
    };
    if !path.exists() {
        return GridStyle::default();
    }
    match GridStyle::load(&path) {
        Ok(style) => style,
        Err(e) => {
            warn!("ignoring style file: {e}");
            GridStyle::default()
        }
    }
}

/// Run frames until the arrows settle.
fn settle(grid: &mut DataGrid, start: Instant) -> Instant {
    let mut now = start;
    let frame = Duration::from_millis(16);
    while grid.tick(now) {
        now += frame;
    }
    now
}

fn run() -> Result<(), GridError> {
    let state: Shared = Arc::new(Mutex::new(State {
        items: vec![
            Item { name: "Apples", category: "Fruit", quantity: 12, selected: false },
            Item { name: "Carrots", category: "Vegetable", quantity: 40, selected: true },
            Item { name: "Bananas", category: "Fruit", quantity: 7, selected: false },
        ],
        sort_column: 0,
        ascending: true,
    }));
    with_state(&state, State::sort);

    let style = load_style();
    let registry = HandlerRegistry::new();
    let mut now = Instant::now();

    let config = config_for(&state, &style)?;
    let mut grid = DataGrid::new(GRID_ID, &config, now);
    let element = grid.build(&config, VIEWPORT_WIDTH, &registry)?;
    println!("{}", outline(&element));

    let gestures = [
        ("inventory-heading-0", Gesture::Tap),
        ("inventory-heading-2", Gesture::Tap),
        ("inventory-select-all", Gesture::Toggle),
        ("inventory-row-1-checkbox", Gesture::Toggle),
    ];

    for (target, gesture) in gestures {
        info!("dispatch {gesture:?} to {target}");
        registry.dispatch(target, &Interaction::new(gesture));

        let config = config_for(&state, &style)?;
        grid.update(&config, now);
        now = settle(&mut grid, now);
        let element = grid.build(&config, VIEWPORT_WIDTH, &registry)?;
        println!("after {gesture:?} on {target}:\n{}", outline(&element));
    }

    grid.dispose();
    Ok(())
}

fn main() {
    paths::rotate_logs();
    let log_path = paths::log_file();
    match File::create(&log_path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {e}");
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {e}", log_path.display()),
    }

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
