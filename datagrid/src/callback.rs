//! Callback types carried by descriptors.
//!
//! Each capability (sorting, selecting, tapping) is an optional field holding
//! one of these. A descriptor supports the capability exactly when the field
//! is set.

use std::sync::Arc;

use gridkit::Point;

/// Sort request: `(column_index, ascending)`.
pub type SortCallback = Arc<dyn Fn(usize, bool) + Send + Sync>;

/// Selection change with the requested new value.
pub type SelectCallback = Arc<dyn Fn(bool) + Send + Sync>;

pub type TapCallback = Arc<dyn Fn() + Send + Sync>;

/// Tap that needs the pointer position, in the coordinates of the tapped cell.
pub type PositionCallback = Arc<dyn Fn(Point) + Send + Sync>;
