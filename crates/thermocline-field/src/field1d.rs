//! Fields on a one-dimensional grid.

use crate::view::FieldView;
use smallvec::{smallvec, SmallVec};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};
use std::sync::Arc;
use thermocline_core::{FieldError, Location, LocationKind, Shape};
use thermocline_grid::{Grid, Grid1D};

/// Samples at location `LX` on a [`Grid1D`].
///
/// Owns its data and shares the grid. Sample `i` lives at coordinate
/// `coords()[i]`, halo samples included.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use thermocline_core::{Centre, FieldError, Topology};
/// use thermocline_field::Field1D;
/// use thermocline_grid::Grid1D;
///
/// let grid = Arc::new(Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0).unwrap());
/// let h = Field1D::new(Centre, vec![1.0; 4], Arc::clone(&grid)).unwrap();
/// assert_eq!(h.len(), 4);
///
/// let err = Field1D::new(Centre, vec![1.0; 5], grid).unwrap_err();
/// assert!(matches!(err, FieldError::ShapeMismatch { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct Field1D<LX: Location> {
    data: Vec<f64>,
    grid: Arc<Grid1D>,
    _lx: PhantomData<LX>,
}

impl<LX: Location> Field1D<LX> {
    /// Bind `data` to `grid` at location `LX`.
    ///
    /// Returns `Err(FieldError::ShapeMismatch)` if `data.len()` differs from
    /// the number of grid points at `LX`, halos included.
    pub fn new(_lx: LX, data: Vec<f64>, grid: Arc<Grid1D>) -> Result<Self, FieldError> {
        let expected = grid.x().count(LX::KIND);
        if data.len() != expected {
            return Err(FieldError::ShapeMismatch {
                expected: smallvec![expected],
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            grid,
            _lx: PhantomData,
        })
    }

    /// A field of zeros.
    pub fn zeros(lx: LX, grid: Arc<Grid1D>) -> Self {
        Self::from_fn(lx, grid, |_| 0.0)
    }

    /// A field whose sample at coordinate `x` is `f(x)`.
    pub fn from_fn(_lx: LX, grid: Arc<Grid1D>, f: impl FnMut(f64) -> f64) -> Self {
        let data = grid.x().points(LX::KIND).iter().copied().map(f).collect();
        Self {
            data,
            grid,
            _lx: PhantomData,
        }
    }

    /// Runtime location tag.
    pub fn location(&self) -> LocationKind {
        LX::KIND
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> &Arc<Grid1D> {
        &self.grid
    }

    /// Number of samples, halos included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the field has no samples (never the case for a valid grid).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples per axis.
    pub fn shape(&self) -> Shape {
        smallvec![self.data.len()]
    }

    /// All samples, halos included.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// All samples, mutably.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the field and return its samples.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Sample `i`, or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }

    /// Mutable reference to sample `i`, or `None` if out of range.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut f64> {
        self.data.get_mut(i)
    }

    /// Set every sample, halos included, to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Coordinates of the samples.
    pub fn coords(&self) -> &[f64] {
        self.grid.x().points(LX::KIND)
    }

    /// Index range of the non-halo samples.
    pub fn interior_range(&self) -> Range<usize> {
        self.grid.x().interior(LX::KIND)
    }

    /// The non-halo samples.
    pub fn interior(&self) -> &[f64] {
        &self.data[self.interior_range()]
    }

    /// The non-halo samples, mutably.
    pub fn interior_mut(&mut self) -> &mut [f64] {
        let range = self.interior_range();
        &mut self.data[range]
    }
}

impl<LX: Location> Index<usize> for Field1D<LX> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl<LX: Location> IndexMut<usize> for Field1D<LX> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl<LX: Location> FieldView for Field1D<LX> {
    fn ndim(&self) -> usize {
        1
    }

    fn locations(&self) -> SmallVec<[LocationKind; 2]> {
        smallvec![LX::KIND]
    }

    fn shape(&self) -> Shape {
        smallvec![self.data.len()]
    }

    fn data(&self) -> &[f64] {
        &self.data
    }

    fn grid(&self) -> &dyn Grid {
        &*self.grid
    }
}
