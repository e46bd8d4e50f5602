//! The core `Grid` trait and `dyn Grid` downcast support.

use crate::axis::Axis;
use std::any::Any;
use std::fmt;
use thermocline_core::{GridInstanceId, LocationKind, Shape};

/// Common interface of staggered grids.
///
/// Fields, field collections and diagnostics only need this trait; the
/// concrete [`Grid1D`](crate::Grid1D) and [`Grid2D`](crate::Grid2D) add
/// named per-axis accessors on top.
///
/// # Object Safety
///
/// Designed for use as `dyn Grid`. Use `downcast_ref` on `dyn Grid` to
/// recover the concrete type.
///
/// # Thread Safety
///
/// Grids are immutable after construction, so `Send + Sync` is required
/// and many fields may share one grid through an `Arc`.
pub trait Grid: Any + Send + Sync + fmt::Debug + 'static {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Axis `dim` (0 = x, 1 = y), or `None` if `dim >= ndim()`.
    fn axis(&self, dim: usize) -> Option<&Axis>;

    /// Unique instance identifier for this grid object.
    ///
    /// Allocated at construction time. Field collections use it to check
    /// that all their fields live on the same grid.
    fn instance_id(&self) -> GridInstanceId;

    /// Number of interior cells, halos excluded.
    fn cell_count(&self) -> usize {
        (0..self.ndim())
            .filter_map(|d| self.axis(d))
            .map(Axis::n)
            .product()
    }

    /// Samples per axis for a field with the given per-axis locations.
    ///
    /// Returns `None` when `locations.len() != ndim()`.
    fn point_count(&self, locations: &[LocationKind]) -> Option<Shape> {
        if locations.len() != self.ndim() {
            return None;
        }
        locations
            .iter()
            .enumerate()
            .map(|(d, &kind)| self.axis(d).map(|a| a.count(kind)))
            .collect()
    }

    /// Returns `true` if `self` and `other` describe the same coordinates:
    /// same dimensionality and identical axes. Instance ids are ignored.
    fn layout_eq(&self, other: &dyn Grid) -> bool {
        self.ndim() == other.ndim() && (0..self.ndim()).all(|d| self.axis(d) == other.axis(d))
    }
}

impl dyn Grid {
    /// Attempt to downcast a trait object to a concrete grid type.
    pub fn downcast_ref<T: Grid>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
