//! Core types for the thermocline staggered-grid workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the tags every grid and field is described with: axis [`Topology`],
//! variable [`Location`], grid instance identifiers, and the error types
//! shared by the grid and field crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod location;
pub mod topology;

pub use error::{FieldError, GridError};
pub use id::{GridInstanceId, Shape};
pub use location::{Centre, Face, Location, LocationKind};
pub use topology::Topology;
