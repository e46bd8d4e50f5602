//! One-dimensional staggered grid.

use crate::axis::{Axis, AxisConfig};
use crate::grid::Grid;
use log::debug;
use std::fmt;
use thermocline_core::{GridError, GridInstanceId, Topology};

/// A one-dimensional staggered grid with topology on its x axis.
///
/// # Examples
///
/// ```
/// use thermocline_core::Topology;
/// use thermocline_grid::Grid1D;
///
/// let grid = Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0).unwrap();
/// assert_eq!(grid.dx(), 0.25);
/// assert_eq!(grid.x_faces(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.x_centres(), &[0.125, 0.375, 0.625, 0.875]);
///
/// assert!(Grid1D::new(Topology::Bounded, 4, 1.0, 0.0, 0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Grid1D {
    x: Axis,
    instance_id: GridInstanceId,
}

impl Grid1D {
    /// Construct a grid on `[x_start, x_end]` with `nx` interior points and
    /// `hx` halo points on each side.
    ///
    /// Returns `Err(GridError::InvalidDomain)` if `nx == 0`,
    /// `x_end <= x_start`, or a bound is not finite.
    pub fn new(
        topology: Topology,
        nx: usize,
        x_start: f64,
        x_end: f64,
        hx: usize,
    ) -> Result<Self, GridError> {
        Self::from_config(&AxisConfig::new(topology, nx, x_start, x_end).with_halo(hx))
    }

    /// Construct a grid from an axis configuration.
    pub fn from_config(x: &AxisConfig) -> Result<Self, GridError> {
        let x = Axis::new("x", x)?;
        let grid = Self {
            x,
            instance_id: GridInstanceId::next(),
        };
        debug!(
            "built Grid1D #{}: {} nx={} hx={} dx={} on [{}, {}]",
            grid.instance_id,
            grid.x.topology(),
            grid.nx(),
            grid.hx(),
            grid.dx(),
            grid.x.start(),
            grid.x.end()
        );
        Ok(grid)
    }

    /// The x axis.
    pub fn x(&self) -> &Axis {
        &self.x
    }

    /// Topology of the x axis.
    pub fn topology_x(&self) -> Topology {
        self.x.topology()
    }

    /// Number of interior points in x.
    pub fn nx(&self) -> usize {
        self.x.n()
    }

    /// Number of halo points in x on each side.
    pub fn hx(&self) -> usize {
        self.x.halo()
    }

    /// Grid spacing in x.
    pub fn dx(&self) -> f64 {
        self.x.spacing()
    }

    /// Domain extent in x.
    pub fn lx(&self) -> f64 {
        self.x.extent()
    }

    /// Cell faces in x, halos included.
    pub fn x_faces(&self) -> &[f64] {
        self.x.faces()
    }

    /// Cell centres in x, halos included.
    pub fn x_centres(&self) -> &[f64] {
        self.x.centres()
    }
}

impl Grid for Grid1D {
    fn ndim(&self) -> usize {
        1
    }

    fn axis(&self, dim: usize) -> Option<&Axis> {
        match dim {
            0 => Some(&self.x),
            _ => None,
        }
    }

    fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }
}

impl fmt::Display for Grid1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid1D {{{}}}", self.topology_x())?;
        writeln!(f, "  nx: {}, hx: {}", self.nx(), self.hx())?;
        writeln!(f, "  dx: {}", self.dx())?;
        write!(f, "  x:  [{}, {}] (Lx = {})", self.x.start(), self.x.end(), self.lx())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use thermocline_core::LocationKind;

    #[test]
    fn worked_example() {
        let g = Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0).unwrap();
        assert_eq!(g.nx(), 4);
        assert_eq!(g.hx(), 0);
        assert_eq!(g.dx(), 0.25);
        assert_eq!(g.lx(), 1.0);
        assert_eq!(g.x_faces(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(g.x_centres(), &[0.125, 0.375, 0.625, 0.875]);
    }

    #[test]
    fn periodic_with_halo_lengths() {
        let g = Grid1D::new(Topology::Periodic, 10, 0.0, 1.0, 3).unwrap();
        assert_eq!(g.x_centres().len(), 16);
        assert_eq!(g.x_faces().len(), 16);
    }

    #[test]
    fn invalid_domain() {
        assert!(matches!(
            Grid1D::new(Topology::Bounded, 4, 1.0, 1.0, 0),
            Err(GridError::InvalidDomain { axis: "x", .. })
        ));
        assert!(matches!(
            Grid1D::new(Topology::Periodic, 0, 0.0, 1.0, 0),
            Err(GridError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn point_count_by_location() {
        let g = Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 1).unwrap();
        let centre = g.point_count(&[LocationKind::Centre]).unwrap();
        let face = g.point_count(&[LocationKind::Face]).unwrap();
        assert_eq!(centre.as_slice(), &[6]);
        assert_eq!(face.as_slice(), &[7]);
        assert!(g
            .point_count(&[LocationKind::Face, LocationKind::Face])
            .is_none());
    }

    #[test]
    fn instance_ids_differ_but_layout_matches() {
        let a = Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0).unwrap();
        let b = Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0).unwrap();
        assert_ne!(a.instance_id(), b.instance_id());
        assert!(a.layout_eq(&b));
        assert_eq!(a.clone().instance_id(), a.instance_id());

        let c = Grid1D::new(Topology::Periodic, 4, 0.0, 1.0, 0).unwrap();
        assert!(!a.layout_eq(&c));
    }

    #[test]
    fn display_summarises_axis() {
        let g = Grid1D::new(Topology::Periodic, 8, 0.0, 2.0, 1).unwrap();
        let s = g.to_string();
        assert!(s.starts_with("Grid1D {periodic}"));
        assert!(s.contains("nx: 8, hx: 1"));
        assert!(s.contains("dx: 0.25"));
    }

    #[test]
    fn downcast_ref_grid1d() {
        let g: Box<dyn Grid> =
            Box::new(Grid1D::new(Topology::Bounded, 3, 0.0, 1.0, 0).unwrap());
        assert!(g.downcast_ref::<Grid1D>().is_some());
        assert!(g.downcast_ref::<crate::Grid2D>().is_none());
    }

    #[test]
    fn compliance_full() {
        for topology in Topology::ALL {
            for hx in [0, 1, 3] {
                let g = Grid1D::new(topology, 12, -5.0, 7.0, hx).unwrap();
                compliance::run_full_compliance(&g);
            }
        }
    }
}
