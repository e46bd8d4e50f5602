//! Error types for grid and field construction.
//!
//! Every failure in this workspace happens at construction time and is
//! returned to the caller; nothing is retried.

use crate::id::{GridInstanceId, Shape};
use std::error::Error;
use std::fmt;

/// Errors from grid construction and topology parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis has no interior points, a non-positive extent, or a
    /// non-finite bound.
    InvalidDomain {
        /// Name of the offending axis (`"x"` or `"y"`).
        axis: &'static str,
        /// What went wrong.
        reason: String,
    },
    /// A topology name did not match any known topology.
    UnsupportedTopology {
        /// The name that failed to parse.
        name: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { axis, reason } => {
                write!(f, "invalid domain on {axis} axis: {reason}")
            }
            Self::UnsupportedTopology { name } => {
                write!(
                    f,
                    "unsupported topology '{name}' (expected 'periodic' or 'bounded')"
                )
            }
        }
    }
}

impl Error for GridError {}

/// Errors from field construction and field collections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The data length does not match the grid's point count at the
    /// field's location.
    ShapeMismatch {
        /// Sample counts per axis implied by the grid and location.
        expected: Shape,
        /// Number of samples actually supplied.
        actual: usize,
    },
    /// A location name did not match any known location.
    UnsupportedLocation {
        /// The name that failed to parse.
        name: String,
    },
    /// A field lives on a different grid instance than the collection.
    GridMismatch {
        /// Grid instance the collection is bound to.
        expected: GridInstanceId,
        /// Grid instance of the rejected field.
        actual: GridInstanceId,
    },
    /// A field with this name is already registered.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                let total: usize = expected.iter().product();
                write!(
                    f,
                    "shape mismatch: expected {total} samples for shape {:?}, got {actual}",
                    expected.as_slice()
                )
            }
            Self::UnsupportedLocation { name } => {
                write!(
                    f,
                    "unsupported location '{name}' (expected 'centre' or 'face')"
                )
            }
            Self::GridMismatch { expected, actual } => {
                write!(f, "field lives on grid {actual}, expected grid {expected}")
            }
            Self::DuplicateName { name } => {
                write!(f, "field '{name}' is already registered")
            }
        }
    }
}

impl Error for FieldError {}
