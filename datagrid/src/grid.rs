//! The mounted grid.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Instant;

use gridkit::{ColorContext, DefaultTheme, Element, HandlerRegistry, Theme};
use log::{debug, trace, warn};

use crate::cells::{ArrowPaint, BuildContext};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::layout;
use crate::sort_arrow::SortArrow;
use crate::width::ColumnLayout;

/// A data grid bound to a host.
///
/// Descriptors are rebuilt by the application for every state change; the
/// grid itself only owns the sort arrows, keyed by column id (or position
/// for columns without one), so their animations survive rebuilds.
pub struct DataGrid {
    id: String,
    theme: Box<dyn Theme>,
    arrows: HashMap<String, SortArrow>,
    disposed: bool,
}

impl DataGrid {
    /// Mount a grid. Arrows start at rest in their configured state.
    pub fn new(id: impl Into<String>, config: &GridConfig, now: Instant) -> Self {
        let mut grid = Self {
            id: id.into(),
            theme: Box::new(DefaultTheme::new()),
            arrows: HashMap::new(),
            disposed: false,
        };
        grid.update(config, now);
        debug!("grid '{}' mounted with {} sort arrows", grid.id, grid.arrows.len());
        grid
    }

    pub fn with_theme(mut self, theme: impl Theme + 'static) -> Self {
        self.theme = Box::new(theme);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reconcile sort arrows with a new config.
    ///
    /// Existing arrows animate towards the new sort state. Arrows for newly
    /// sortable columns are created at rest; arrows whose column went away
    /// or lost its sort callback are disposed.
    pub fn update(&mut self, config: &GridConfig, now: Instant) {
        if self.disposed {
            warn!("update on disposed grid '{}'", self.id);
            return;
        }

        let duration = config.sort_arrow_duration();
        let mut live = HashSet::new();

        for (index, column) in config.columns().iter().enumerate() {
            if !column.is_sortable() {
                continue;
            }
            let key = column.state_key(index);
            let sorted = config.is_sorted_on(index);

            match self.arrows.get_mut(&key) {
                Some(arrow) => {
                    arrow.set_duration(duration);
                    arrow.update(sorted, sorted.then_some(config.sort_ascending()), now);
                }
                None => {
                    let ascending = !sorted || config.sort_ascending();
                    trace!("grid '{}': new sort arrow '{key}'", self.id);
                    self.arrows
                        .insert(key.clone(), SortArrow::new(sorted, ascending, duration));
                }
            }
            live.insert(key);
        }

        self.arrows.retain(|key, arrow| {
            let keep = live.contains(key);
            if !keep {
                debug!("grid '{}': dropping sort arrow '{key}'", self.id);
                arrow.dispose();
            }
            keep
        });
    }

    /// Build the element tree for `config` at `viewport_width`, registering
    /// handlers in `registry`.
    ///
    /// Handlers left in `registry` by this grid's previous build are removed
    /// first; handlers of other elements are kept.
    pub fn build(
        &self,
        config: &GridConfig,
        viewport_width: f32,
        registry: &HandlerRegistry,
    ) -> Result<Element, GridError> {
        let stale = registry.remove_prefix(&format!("{}-", self.id));
        trace!("grid '{}': dropped {stale} stale handlers", self.id);

        let colors = ColorContext::new(self.theme.as_ref());
        let layout = ColumnLayout::compute(config, viewport_width);

        let arrows: Vec<Option<ArrowPaint>> = config
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                column.is_sortable().then(|| {
                    self.arrows
                        .get(&column.state_key(index))
                        .map(ArrowPaint::from)
                        .unwrap_or_else(|| {
                            let sorted = config.is_sorted_on(index);
                            ArrowPaint::resting(sorted, !sorted || config.sort_ascending())
                        })
                })
            })
            .collect();

        let ctx = BuildContext {
            grid_id: &self.id,
            config,
            registry,
            colors: &colors,
            checkbox_column: config.displays_checkbox_column(),
        };
        let element = layout::compose(&ctx, &layout, &arrows, viewport_width)?;

        debug!(
            "grid '{}' built: {} columns, {} rows, width {}",
            self.id,
            config.columns().len(),
            config.rows().len(),
            layout.width
        );
        Ok(element)
    }

    /// [`update`](Self::update) then [`build`](Self::build).
    pub fn render(
        &mut self,
        config: &GridConfig,
        viewport_width: f32,
        registry: &HandlerRegistry,
        now: Instant,
    ) -> Result<Element, GridError> {
        self.update(config, now);
        self.build(config, viewport_width, registry)
    }

    /// Advance the arrow animations. Returns true while any is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut running = false;
        for arrow in self.arrows.values_mut() {
            running |= arrow.tick(now);
        }
        trace!("grid '{}' tick, animating={running}", self.id);
        running
    }

    pub fn is_animating(&self) -> bool {
        self.arrows.values().any(|arrow| arrow.is_animating())
    }

    /// The arrow of the column with the given state key.
    pub fn sort_arrow(&self, key: &str) -> Option<&SortArrow> {
        self.arrows.get(key)
    }

    /// The arrow of the column at `index` in `config`.
    pub fn sort_arrow_for(&self, config: &GridConfig, index: usize) -> Option<&SortArrow> {
        let column = config.columns().get(index)?;
        self.arrows.get(&column.state_key(index))
    }

    /// Release the arrow animations. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for arrow in self.arrows.values_mut() {
            arrow.dispose();
        }
        self.arrows.clear();
        self.disposed = true;
        debug!("grid '{}' disposed", self.id);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for DataGrid {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("id", &self.id)
            .field("arrows", &self.arrows.keys().collect::<Vec<_>>())
            .field("disposed", &self.disposed)
            .finish()
    }
}
