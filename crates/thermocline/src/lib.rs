//! Thermocline: a staggered-grid data model for mixed-layer and
//! thermocline ocean dynamics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the thermocline sub-crates. For most users, adding `thermocline` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use thermocline::prelude::*;
//!
//! // A zonally periodic channel, bounded in y, with one halo point.
//! let grid = Arc::new(
//!     Grid2D::new(
//!         Topology::Periodic, Topology::Bounded,
//!         32, 16,
//!         0.0, 2.0e6,
//!         -5.0e5, 5.0e5,
//!         1, 1,
//!     )
//!     .unwrap(),
//! );
//!
//! // Thickness at centres, velocities on the faces normal to them.
//! let h = Field2D::from_fn(Centre, Centre, grid.clone(), |_, y| 100.0 + 1.0e-4 * y);
//! let u = Field2D::zeros(Face, Centre, grid.clone());
//! let v = Field2D::zeros(Centre, Face, grid.clone());
//! assert_eq!(v.shape().as_slice(), &[34, 19]);
//!
//! let mut state = FieldRegistry::new(grid);
//! state.insert("h", h).unwrap();
//! state.insert("u", u).unwrap();
//! state.insert("v", v).unwrap();
//! assert_eq!(state.len(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `thermocline-core` | Topology and location tags, ids, error types |
//! | [`grid`] | `thermocline-grid` | Coordinate derivation, axes, 1D and 2D grids |
//! | [`field`] | `thermocline-field` | Located fields and field registries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core tags, ids and errors (`thermocline-core`).
///
/// Contains [`types::Topology`], [`types::LocationKind`], the location
/// markers [`types::Centre`] and [`types::Face`], and the error enums
/// [`types::GridError`] and [`types::FieldError`].
pub use thermocline_core as types;

/// Staggered grids (`thermocline-grid`).
///
/// Provides the [`grid::Grid`] trait, [`grid::Grid1D`], [`grid::Grid2D`],
/// [`grid::AxisConfig`] and the coordinate functions
/// [`grid::construct_faces`] and [`grid::construct_centres`].
pub use thermocline_grid as grid;

/// Located fields (`thermocline-field`).
///
/// [`field::Field1D`], [`field::Field2D`], the [`field::FieldView`] trait
/// and [`field::FieldRegistry`].
pub use thermocline_field as field;

/// Common imports for typical thermocline usage.
///
/// ```rust
/// use thermocline::prelude::*;
/// ```
pub mod prelude {
    // Tags
    pub use thermocline_core::{Centre, Face, Location, LocationKind, Topology};

    // Errors
    pub use thermocline_core::{FieldError, GridError};

    // Grids
    pub use thermocline_grid::{
        construct_centres, construct_faces, AxisConfig, Grid, Grid1D, Grid2D,
    };

    // Fields
    pub use thermocline_field::{Field1D, Field2D, FieldRegistry, FieldView};
}
