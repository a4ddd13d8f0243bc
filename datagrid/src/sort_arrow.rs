//! Sort arrow animation.
//!
//! Each sortable column owns an arrow with two independent transitions:
//! opacity (shown on the sorted column) and orientation (up for ascending).
//! A direction change plays a half-turn; once complete the half-turn is
//! folded into a cumulative offset and the transition reset to 0, so the arrow
//! can keep spinning the same way without the animated range growing.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

use gridkit::{Easing, TimedTransition, Transition, TransitionConfig, TransitionStatus};

pub const SORT_ARROW_EASING: Easing = Easing::FastOutSlowIn;

#[derive(Debug)]
pub struct SortArrow<T: TimedTransition = Transition> {
    opacity: T,
    orientation: T,
    /// Completed half-turns, in radians.
    orientation_offset: f32,
    visible: bool,
    ascending: bool,
}

impl SortArrow<Transition> {
    pub fn new(visible: bool, ascending: bool, duration: Duration) -> Self {
        let config = TransitionConfig::new(duration, SORT_ARROW_EASING);
        Self::with_transitions(
            Transition::new(config),
            Transition::new(config),
            visible,
            ascending,
        )
    }
}

impl<T: TimedTransition> SortArrow<T> {
    /// Build an arrow on top of caller-supplied transitions.
    pub fn with_transitions(
        mut opacity: T,
        mut orientation: T,
        visible: bool,
        ascending: bool,
    ) -> Self {
        opacity.set_value(if visible { 1.0 } else { 0.0 });
        orientation.set_value(0.0);

        Self {
            opacity,
            orientation,
            orientation_offset: if ascending { 0.0 } else { PI },
            visible,
            ascending,
        }
    }

    /// React to a rebuild.
    ///
    /// `ascending` is `None` when the column is not sorted; the arrow then
    /// keeps pointing where it last did.
    pub fn update(&mut self, visible: bool, ascending: Option<bool>, now: Instant) {
        let ascending = ascending.unwrap_or(self.ascending);
        let mut snapped = false;

        if visible != self.visible {
            if visible && self.opacity.status() == TransitionStatus::Dismissed {
                // Fully hidden: point the right way before fading in
                self.orientation.stop();
                self.orientation.set_value(0.0);
                self.orientation_offset = if ascending { 0.0 } else { PI };
                snapped = true;
            }
            if visible {
                self.opacity.forward(now);
            } else {
                self.opacity.reverse(now);
            }
        }

        if ascending != self.ascending && !snapped {
            if self.orientation.status() == TransitionStatus::Dismissed {
                self.orientation.forward(now);
            } else {
                self.orientation.reverse(now);
            }
        }

        self.visible = visible;
        self.ascending = ascending;
        self.fold_completed_turn();
    }

    /// Advance both transitions. Returns true while either is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fading = self.opacity.tick(now);
        let turning = self.orientation.tick(now);
        self.fold_completed_turn();
        fading || turning
    }

    fn fold_completed_turn(&mut self) {
        if self.orientation.status() == TransitionStatus::Completed {
            self.orientation_offset += PI;
            self.orientation.set_value(0.0);
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        let config = TransitionConfig::new(duration, SORT_ARROW_EASING);
        self.opacity.configure(config);
        self.orientation.configure(config);
    }

    /// Paint opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity.eased()
    }

    /// Rotation in radians; 0 points up.
    pub fn rotation(&self) -> f32 {
        self.orientation_offset + PI * self.orientation.eased()
    }

    pub fn orientation_offset(&self) -> f32 {
        self.orientation_offset
    }

    /// Raw half-turn progress in `[0, 1]`.
    pub fn orientation_progress(&self) -> f32 {
        self.orientation.value()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.orientation.is_animating()
    }

    pub fn dispose(&mut self) {
        self.opacity.dispose();
        self.orientation.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.opacity.is_disposed() && self.orientation.is_disposed()
    }
}
