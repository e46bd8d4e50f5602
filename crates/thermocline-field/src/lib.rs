//! Fields on thermocline staggered grids.
//!
//! A field binds an owned array of samples to a shared grid and to a
//! location per axis. The location is part of the type:
//! `Field1D<Centre>` and `Field1D<Face>` are different types, and the
//! constructor checks that the data length matches the grid at that
//! location.
//!
//! - [`Field1D`]: samples along one axis
//! - [`Field2D`]: samples on a 2D grid, x index fastest
//! - [`FieldView`]: object-safe view over either
//! - [`FieldRegistry`]: named fields sharing one grid instance

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field1d;
pub mod field2d;
pub mod registry;
pub mod view;

pub use field1d::Field1D;
pub use field2d::Field2D;
pub use registry::FieldRegistry;
pub use view::FieldView;
