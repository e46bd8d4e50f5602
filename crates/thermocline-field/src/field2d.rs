//! Fields on a two-dimensional grid.

use crate::view::FieldView;
use smallvec::{smallvec, SmallVec};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};
use std::sync::Arc;
use thermocline_core::{FieldError, Location, LocationKind, Shape};
use thermocline_grid::{Grid, Grid2D};

/// Samples at location `(LX, LY)` on a [`Grid2D`].
///
/// Data is stored flat with the x index fastest: sample `(i, j)` is
/// `data[j * nx + i]`, where `nx` is the number of x points at `LX`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use thermocline_core::{Centre, Face, Topology};
/// use thermocline_field::Field2D;
/// use thermocline_grid::Grid2D;
///
/// let grid = Arc::new(
///     Grid2D::new(Topology::Bounded, Topology::Bounded, 4, 2, 0.0, 1.0, 0.0, 1.0, 0, 0)
///         .unwrap(),
/// );
/// // u lives on x faces and y centres: 5 x 2 samples.
/// let u = Field2D::from_fn(Face, Centre, Arc::clone(&grid), |x, _y| x);
/// assert_eq!(u.shape().as_slice(), &[5, 2]);
/// assert_eq!(u[(4, 1)], 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Field2D<LX: Location, LY: Location> {
    data: Vec<f64>,
    nx: usize,
    ny: usize,
    grid: Arc<Grid2D>,
    _loc: PhantomData<(LX, LY)>,
}

impl<LX: Location, LY: Location> Field2D<LX, LY> {
    /// Bind `data` to `grid` at location `(LX, LY)`.
    ///
    /// Returns `Err(FieldError::ShapeMismatch)` if `data.len()` differs from
    /// the product of the x points at `LX` and the y points at `LY`.
    pub fn new(
        _lx: LX,
        _ly: LY,
        data: Vec<f64>,
        grid: Arc<Grid2D>,
    ) -> Result<Self, FieldError> {
        let (nx, ny) = Self::counts(&grid);
        if data.len() != nx * ny {
            return Err(FieldError::ShapeMismatch {
                expected: smallvec![nx, ny],
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            nx,
            ny,
            grid,
            _loc: PhantomData,
        })
    }

    /// A field of zeros.
    pub fn zeros(lx: LX, ly: LY, grid: Arc<Grid2D>) -> Self {
        Self::from_fn(lx, ly, grid, |_, _| 0.0)
    }

    /// A field whose sample at `(x, y)` is `f(x, y)`.
    pub fn from_fn(
        _lx: LX,
        _ly: LY,
        grid: Arc<Grid2D>,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Self {
        let (nx, ny) = Self::counts(&grid);
        let xs = grid.x().points(LX::KIND);
        let ys = grid.y().points(LY::KIND);
        let mut data = Vec::with_capacity(nx * ny);
        for &y in ys {
            for &x in xs {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            nx,
            ny,
            grid,
            _loc: PhantomData,
        }
    }

    fn counts(grid: &Grid2D) -> (usize, usize) {
        (grid.x().count(LX::KIND), grid.y().count(LY::KIND))
    }

    /// Runtime location tags, x first.
    pub fn locations(&self) -> (LocationKind, LocationKind) {
        (LX::KIND, LY::KIND)
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> &Arc<Grid2D> {
        &self.grid
    }

    /// Samples per axis, `[nx, ny]`.
    pub fn shape(&self) -> Shape {
        smallvec![self.nx, self.ny]
    }

    /// Total number of samples, halos included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the field has no samples (never the case for a valid grid).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All samples in storage order (x fastest).
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

    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.nx && j < self.ny).then(|| j * self.nx + i)
    }

    /// Sample `(i, j)`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.offset(i, j).map(|k| self.data[k])
    }

    /// Mutable reference to sample `(i, j)`, or `None` if out of range.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f64> {
        self.offset(i, j).map(move |k| &mut self.data[k])
    }

    /// The x samples at y index `j`, or `None` if out of range.
    pub fn row(&self, j: usize) -> Option<&[f64]> {
        (j < self.ny).then(|| &self.data[j * self.nx..(j + 1) * self.nx])
    }

    /// Set every sample, halos included, to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// x coordinates of the samples.
    pub fn x_coords(&self) -> &[f64] {
        self.grid.x().points(LX::KIND)
    }

    /// y coordinates of the samples.
    pub fn y_coords(&self) -> &[f64] {
        self.grid.y().points(LY::KIND)
    }

    /// Index range in x of the non-halo samples.
    pub fn interior_range_x(&self) -> Range<usize> {
        self.grid.x().interior(LX::KIND)
    }

    /// Index range in y of the non-halo samples.
    pub fn interior_range_y(&self) -> Range<usize> {
        self.grid.y().interior(LY::KIND)
    }

    /// The non-halo samples in storage order.
    pub fn interior_values(&self) -> impl Iterator<Item = f64> + '_ {
        let xr = self.interior_range_x();
        self.interior_range_y()
            .flat_map(move |j| {
                let row = j * self.nx;
                self.data[row + xr.start..row + xr.end].iter()
            })
            .copied()
    }
}

impl<LX: Location, LY: Location> Index<(usize, usize)> for Field2D<LX, LY> {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        match self.offset(i, j) {
            Some(k) => &self.data[k],
            None => panic!(
                "index ({i}, {j}) out of bounds for field of shape [{}, {}]",
                self.nx, self.ny
            ),
        }
    }
}

impl<LX: Location, LY: Location> IndexMut<(usize, usize)> for Field2D<LX, LY> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        match self.offset(i, j) {
            Some(k) => &mut self.data[k],
            None => panic!(
                "index ({i}, {j}) out of bounds for field of shape [{}, {}]",
                self.nx, self.ny
            ),
        }
    }
}

impl<LX: Location, LY: Location> FieldView for Field2D<LX, LY> {
    fn ndim(&self) -> usize {
        2
    }

    fn locations(&self) -> SmallVec<[LocationKind; 2]> {
        smallvec![LX::KIND, LY::KIND]
    }

    fn shape(&self) -> Shape {
        smallvec![self.nx, self.ny]
    }

    fn data(&self) -> &[f64] {
        &self.data
    }

    fn grid(&self) -> &dyn Grid {
        &*self.grid
    }
}
