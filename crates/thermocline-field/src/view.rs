//! The object-safe `FieldView` trait and `dyn FieldView` downcast support.

use smallvec::SmallVec;
use std::any::Any;
use std::fmt;
use thermocline_core::{GridInstanceId, LocationKind, Shape};
use thermocline_grid::Grid;

/// Read-only view of a field, independent of its dimensionality and
/// location types.
///
/// Lets heterogeneous fields (a centre-located layer thickness next to
/// face-located velocities) be stored together, e.g. in a
/// [`FieldRegistry`](crate::FieldRegistry).
pub trait FieldView: Any + Send + Sync + fmt::Debug + 'static {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Location of the samples along each axis, x first.
    fn locations(&self) -> SmallVec<[LocationKind; 2]>;

    /// Samples per axis, x first.
    fn shape(&self) -> Shape;

    /// All samples, halos included, in storage order.
    fn data(&self) -> &[f64];

    /// The grid this field lives on.
    fn grid(&self) -> &dyn Grid;

    /// Instance id of the grid this field lives on.
    fn grid_id(&self) -> GridInstanceId {
        self.grid().instance_id()
    }
}

impl dyn FieldView {
    /// Attempt to downcast to a concrete field type.
    pub fn downcast_ref<T: FieldView>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Attempt to downcast to a mutable concrete field type.
    pub fn downcast_mut<T: FieldView>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
