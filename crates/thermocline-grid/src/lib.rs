//! Staggered grids for thermocline models.
//!
//! A staggered grid stores some variables at cell centres and others at
//! cell faces, half a spacing apart. Each axis carries its own
//! [`Topology`](thermocline_core::Topology) and a number of halo points
//! that extend the coordinate arrays outside the physical domain.
//!
//! # Grids
//!
//! - [`Grid1D`]: one axis
//! - [`Grid2D`]: two independent axes (x, y)
//!
//! Both implement the object-safe [`Grid`] trait and are built from
//! [`AxisConfig`] values, which is where all domain validation happens.
//! Coordinates come from the pure functions [`construct_faces`] and
//! [`construct_centres`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod coords;
pub mod grid;
pub mod grid1d;
pub mod grid2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use axis::{Axis, AxisConfig};
pub use coords::{construct_centres, construct_faces};
pub use grid::Grid;
pub use grid1d::Grid1D;
pub use grid2d::Grid2D;
