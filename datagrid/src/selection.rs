//! Selection state derived from the rows on each render.

use crate::callback::SelectCallback;
use crate::row::RowSpec;

/// Counts over the selectable rows (those with a selection callback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    pub selectable: usize,
    pub selected: usize,
}

impl SelectionSummary {
    pub fn from_rows(rows: &[RowSpec]) -> Self {
        rows.iter()
            .filter(|row| row.is_selectable())
            .fold(Self::default(), |mut summary, row| {
                summary.selectable += 1;
                if row.selected {
                    summary.selected += 1;
                }
                summary
            })
    }

    /// Every selectable row is selected. False when nothing is selectable.
    pub fn all_selected(&self) -> bool {
        self.selectable > 0 && self.selected == self.selectable
    }

    pub fn any_selected(&self) -> bool {
        self.selected > 0
    }

    pub fn indeterminate(&self) -> bool {
        self.any_selected() && !self.all_selected()
    }

    /// Tri-state header value: `Some(true)` all, `Some(false)` none, `None` some.
    pub fn checkbox_value(&self) -> Option<bool> {
        if self.indeterminate() {
            None
        } else {
            Some(self.all_selected())
        }
    }

    /// What toggling the header checkbox selects: everything, unless
    /// everything already is.
    pub fn toggle_target(&self) -> bool {
        !self.all_selected()
    }
}

/// Apply a header checkbox toggle.
///
/// With an aggregate callback it is called once with the target. Otherwise
/// each selectable row whose selection differs from the target is told to
/// change, in row order. Returns the target.
pub fn toggle_all(rows: &[RowSpec], on_select_all: Option<&SelectCallback>) -> bool {
    let target = SelectionSummary::from_rows(rows).toggle_target();
    let pending: Vec<(bool, SelectCallback)> = rows
        .iter()
        .filter_map(|row| Some((row.selected, row.on_select_changed.clone()?)))
        .collect();
    apply_toggle(target, on_select_all, &pending);
    target
}

/// Deliver a resolved select-all `target` to the aggregate callback or to
/// each `(selected, callback)` pair that needs to change.
pub(crate) fn apply_toggle(
    target: bool,
    on_select_all: Option<&SelectCallback>,
    rows: &[(bool, SelectCallback)],
) {
    if let Some(on_select_all) = on_select_all {
        log::debug!("select all -> {target}");
        on_select_all(target);
        return;
    }

    let mut changed = 0;
    for (selected, callback) in rows {
        if *selected != target {
            callback(target);
            changed += 1;
        }
    }
    log::debug!("select all -> {target}, {changed} rows changed");
}
