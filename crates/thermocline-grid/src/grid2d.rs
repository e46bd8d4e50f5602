//! Two-dimensional staggered grid.

use crate::axis::{Axis, AxisConfig};
use crate::grid::Grid;
use log::debug;
use std::fmt;
use thermocline_core::{GridError, GridInstanceId, Topology};

/// A two-dimensional staggered grid with independent x and y axes.
///
/// Each axis has its own topology, point count, halo and spacing; no
/// coordinate on one axis depends on the other.
///
/// # Examples
///
/// ```
/// use thermocline_core::Topology;
/// use thermocline_grid::Grid2D;
///
/// let grid = Grid2D::new(
///     Topology::Periodic, Topology::Bounded,
///     8, 4,
///     0.0, 1.0,
///     -1.0, 1.0,
///     1, 0,
/// )
/// .unwrap();
/// assert_eq!(grid.x_faces().len(), 10);
/// assert_eq!(grid.y_faces().len(), 5);
/// assert_eq!(grid.dy(), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct Grid2D {
    x: Axis,
    y: Axis,
    instance_id: GridInstanceId,
}

impl Grid2D {
    /// Construct a grid on `[x_start, x_end] x [y_start, y_end]` with
    /// topologies `(tx, ty)`, `(nx, ny)` interior points and `(hx, hy)` halo
    /// points.
    ///
    /// Returns `Err(GridError::InvalidDomain)` naming the first invalid axis.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tx: Topology,
        ty: Topology,
        nx: usize,
        ny: usize,
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
        hx: usize,
        hy: usize,
    ) -> Result<Self, GridError> {
        Self::from_configs(
            &AxisConfig::new(tx, nx, x_start, x_end).with_halo(hx),
            &AxisConfig::new(ty, ny, y_start, y_end).with_halo(hy),
        )
    }

    /// Construct a grid from one configuration per axis.
    pub fn from_configs(x: &AxisConfig, y: &AxisConfig) -> Result<Self, GridError> {
        let x = Axis::new("x", x)?;
        let y = Axis::new("y", y)?;
        let grid = Self {
            x,
            y,
            instance_id: GridInstanceId::next(),
        };
        debug!(
            "built Grid2D #{}: ({}, {}) nx={} ny={} hx={} hy={} dx={} dy={}",
            grid.instance_id,
            grid.x.topology(),
            grid.y.topology(),
            grid.nx(),
            grid.ny(),
            grid.hx(),
            grid.hy(),
            grid.dx(),
            grid.dy()
        );
        Ok(grid)
    }

    /// The x axis.
    pub fn x(&self) -> &Axis {
        &self.x
    }

    /// The y axis.
    pub fn y(&self) -> &Axis {
        &self.y
    }

    /// Topology of the x axis.
    pub fn topology_x(&self) -> Topology {
        self.x.topology()
    }

    /// Topology of the y axis.
    pub fn topology_y(&self) -> Topology {
        self.y.topology()
    }

    /// Number of interior points in x.
    pub fn nx(&self) -> usize {
        self.x.n()
    }

    /// Number of interior points in y.
    pub fn ny(&self) -> usize {
        self.y.n()
    }

    /// Number of halo points in x on each side.
    pub fn hx(&self) -> usize {
        self.x.halo()
    }

    /// Number of halo points in y on each side.
    pub fn hy(&self) -> usize {
        self.y.halo()
    }

    /// Grid spacing in x.
    pub fn dx(&self) -> f64 {
        self.x.spacing()
    }

    /// Grid spacing in y.
    pub fn dy(&self) -> f64 {
        self.y.spacing()
    }

    /// Domain extent in x.
    pub fn lx(&self) -> f64 {
        self.x.extent()
    }

    /// Domain extent in y.
    pub fn ly(&self) -> f64 {
        self.y.extent()
    }

    /// Cell faces in x, halos included.
    pub fn x_faces(&self) -> &[f64] {
        self.x.faces()
    }

    /// Cell centres in x, halos included.
    pub fn x_centres(&self) -> &[f64] {
        self.x.centres()
    }

    /// Cell faces in y, halos included.
    pub fn y_faces(&self) -> &[f64] {
        self.y.faces()
    }

    /// Cell centres in y, halos included.
    pub fn y_centres(&self) -> &[f64] {
        self.y.centres()
    }
}

impl Grid for Grid2D {
    fn ndim(&self) -> usize {
        2
    }

    fn axis(&self, dim: usize) -> Option<&Axis> {
        match dim {
            0 => Some(&self.x),
            1 => Some(&self.y),
            _ => None,
        }
    }

    fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }
}

impl fmt::Display for Grid2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid2D {{{}, {}}}", self.topology_x(), self.topology_y())?;
        writeln!(f, "  nx: {}, ny: {}", self.nx(), self.ny())?;
        writeln!(f, "  hx: {}, hy: {}", self.hx(), self.hy())?;
        writeln!(f, "  dx: {}, dy: {}", self.dx(), self.dy())?;
        writeln!(f, "  x:  [{}, {}] (Lx = {})", self.x.start(), self.x.end(), self.lx())?;
        write!(f, "  y:  [{}, {}] (Ly = {})", self.y.start(), self.y.end(), self.ly())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::Grid1D;
    use thermocline_core::LocationKind;

    fn channel() -> Grid2D {
        Grid2D::new(
            Topology::Periodic,
            Topology::Bounded,
            8,
            4,
            0.0,
            2.0,
            0.0,
            1.0,
            2,
            1,
        )
        .unwrap()
    }

    #[test]
    fn axes_are_independent() {
        let g = channel();
        let gx = Grid1D::new(Topology::Periodic, 8, 0.0, 2.0, 2).unwrap();
        let gy = Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 1).unwrap();
        assert_eq!(g.x(), gx.x());
        assert_eq!(g.y(), gy.x());
    }

    #[test]
    fn counts_per_axis() {
        let g = channel();
        assert_eq!(g.x_faces().len(), 12);
        assert_eq!(g.x_centres().len(), 12);
        assert_eq!(g.y_faces().len(), 7);
        assert_eq!(g.y_centres().len(), 6);
        assert_eq!(g.cell_count(), 32);
        let shape = g
            .point_count(&[LocationKind::Centre, LocationKind::Face])
            .unwrap();
        assert_eq!(shape.as_slice(), &[12, 7]);
    }

    #[test]
    fn invalid_y_axis_is_named() {
        let err = Grid2D::new(
            Topology::Bounded,
            Topology::Bounded,
            4,
            4,
            0.0,
            1.0,
            2.0,
            -2.0,
            0,
            0,
        )
        .unwrap_err();
        assert!(matches!(err, GridError::InvalidDomain { axis: "y", .. }));
    }

    #[test]
    fn layout_eq_distinguishes_dimensionality() {
        let g2 = channel();
        let g1 = Grid1D::new(Topology::Periodic, 8, 0.0, 2.0, 2).unwrap();
        assert!(!g2.layout_eq(&g1));
        assert!(!g1.layout_eq(&g2));
        assert!(g2.layout_eq(&channel()));
    }

    #[test]
    fn display_lists_both_topologies() {
        let s = channel().to_string();
        assert!(s.starts_with("Grid2D {periodic, bounded}"));
        assert!(s.contains("hx: 2, hy: 1"));
    }

    #[test]
    fn compliance_full() {
        for tx in Topology::ALL {
            for ty in Topology::ALL {
                let g = Grid2D::new(tx, ty, 6, 5, 0.0, 3.0, -1.0, 4.0, 1, 2).unwrap();
                compliance::run_full_compliance(&g);
            }
        }
    }
}
