//! Benchmark profiles for thermocline grids and fields.
//!
//! - [`basin_grid`]: bounded square basin
//! - [`channel_grid`]: periodic-in-x channel with halos
//! - [`gaussian_bump`]: a smooth initial condition for field benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;
use thermocline_core::{Centre, GridError, Topology};
use thermocline_field::Field2D;
use thermocline_grid::{AxisConfig, Grid2D};

/// Bounded `n x n` basin on `[0, 1] x [0, 1]`.
pub fn basin_grid(n: usize) -> Result<Grid2D, GridError> {
    let axis = AxisConfig::new(Topology::Bounded, n, 0.0, 1.0);
    Grid2D::from_configs(&axis, &axis)
}

/// Channel periodic in x, bounded in y, `nx x ny` points and `halo` halos.
pub fn channel_grid(nx: usize, ny: usize, halo: usize) -> Result<Grid2D, GridError> {
    Grid2D::from_configs(
        &AxisConfig::new(Topology::Periodic, nx, 0.0, 2.0e6).with_halo(halo),
        &AxisConfig::new(Topology::Bounded, ny, -5.0e5, 5.0e5).with_halo(halo),
    )
}

/// Layer thickness with a Gaussian bump centred in the domain.
pub fn gaussian_bump(grid: Arc<Grid2D>) -> Field2D<Centre, Centre> {
    let (x0, y0) = (
        grid.x().start() + 0.5 * grid.lx(),
        grid.y().start() + 0.5 * grid.ly(),
    );
    let r2 = (0.1 * grid.lx().min(grid.ly())).powi(2);
    Field2D::from_fn(Centre, Centre, grid, move |x, y| {
        let d2 = (x - x0).powi(2) + (y - y0).powi(2);
        1.0 + (-d2 / r2).exp()
    })
}
