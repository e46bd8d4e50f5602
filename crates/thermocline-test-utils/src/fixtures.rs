//! Standard grids used across tests and benchmarks.
//!
//! - [`unit_interval`]: bounded `[0, 1]` with 4 points, the worked example
//! - [`periodic_ring`]: periodic `[0, 2π)` with halos
//! - [`channel_2d`]: periodic in x, bounded in y
//! - [`basin_2d`]: bounded on both axes

use std::f64::consts::PI;
use std::sync::Arc;
use thermocline_core::Topology;
use thermocline_grid::{AxisConfig, Grid1D, Grid2D};

/// Bounded `[0, 1]`, `nx = 4`, no halo: `xF = [0, .25, .5, .75, 1]`.
pub fn unit_interval() -> Arc<Grid1D> {
    Arc::new(Grid1D::new(Topology::Bounded, 4, 0.0, 1.0, 0).unwrap())
}

/// Periodic `[0, 2π)` with `nx` points and `hx` halo points.
pub fn periodic_ring(nx: usize, hx: usize) -> Arc<Grid1D> {
    Arc::new(Grid1D::new(Topology::Periodic, nx, 0.0, 2.0 * PI, hx).unwrap())
}

/// Zonal channel: periodic x on `[0, 2000 km]`, bounded y on `[-500 km, 500 km]`.
pub fn channel_2d(nx: usize, ny: usize, halo: usize) -> Arc<Grid2D> {
    let x = AxisConfig::new(Topology::Periodic, nx, 0.0, 2.0e6).with_halo(halo);
    let y = AxisConfig::new(Topology::Bounded, ny, -5.0e5, 5.0e5).with_halo(halo);
    Arc::new(Grid2D::from_configs(&x, &y).unwrap())
}

/// Closed basin: bounded on `[0, 1] x [0, 2]`.
pub fn basin_2d(nx: usize, ny: usize) -> Arc<Grid2D> {
    Arc::new(
        Grid2D::new(
            Topology::Bounded,
            Topology::Bounded,
            nx,
            ny,
            0.0,
            1.0,
            0.0,
            2.0,
            0,
            0,
        )
        .unwrap(),
    )
}
