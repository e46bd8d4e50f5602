//! Where within a grid cell a variable is stored.
//!
//! At runtime a location is a [`LocationKind`]. Fields carry their location
//! in the type instead, through the zero-sized markers [`Centre`] and
//! [`Face`], so that a centre field and a face field cannot be mixed up.

use crate::error::FieldError;
use std::fmt;
use std::str::FromStr;

/// Runtime location tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// Cell centres.
    Centre,
    /// Cell faces, offset from the centres by half a grid spacing.
    Face,
}

impl LocationKind {
    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Centre => "centre",
            Self::Face => "face",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LocationKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centre" | "center" => Ok(Self::Centre),
            "face" => Ok(Self::Face),
            _ => Err(FieldError::UnsupportedLocation {
                name: s.to_string(),
            }),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Centre {}
    impl Sealed for super::Face {}
}

/// Compile-time location of a field along one axis.
///
/// Sealed: only [`Centre`] and [`Face`] implement it.
pub trait Location:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// The runtime tag for this location.
    const KIND: LocationKind;
}

/// Marker for values stored at cell centres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Centre;

/// Marker for values stored at cell faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Face;

impl Location for Centre {
    const KIND: LocationKind = LocationKind::Centre;
}

impl Location for Face {
    const KIND: LocationKind = LocationKind::Face;
}
