//! Axis topology: whether an axis wraps around or has fixed endpoints.

use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// How an axis of a staggered grid treats its endpoints.
///
/// The topology only changes how face coordinates are counted: a bounded
/// axis of `n` cells has `n + 1` faces, a periodic axis has `n` because the
/// last face coincides with the first after wrap-around.
///
/// # Examples
///
/// ```
/// use thermocline_core::Topology;
///
/// let t: Topology = "periodic".parse().unwrap();
/// assert_eq!(t, Topology::Periodic);
/// assert_eq!(t.face_count(4, 1), 6);
/// assert_eq!(Topology::Bounded.face_count(4, 1), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// The axis wraps around; the domain end is identified with its start.
    Periodic,
    /// The axis has two distinct endpoints.
    Bounded,
}

impl Topology {
    /// All topologies, in declaration order.
    pub const ALL: [Topology; 2] = [Topology::Periodic, Topology::Bounded];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Bounded => "bounded",
        }
    }

    /// Returns `true` for [`Topology::Periodic`].
    pub fn is_periodic(self) -> bool {
        matches!(self, Self::Periodic)
    }

    /// Number of face coordinates for `n` interior cells and `h` halo cells
    /// on each side.
    pub fn face_count(self, n: usize, h: usize) -> usize {
        match self {
            Self::Periodic => n + 2 * h,
            Self::Bounded => n + 2 * h + 1,
        }
    }

    /// Number of centre coordinates for `n` interior cells and `h` halo cells
    /// on each side. Independent of the topology; takes `self` so call sites
    /// read the same as [`Topology::face_count`].
    pub fn centre_count(self, n: usize, h: usize) -> usize {
        n + 2 * h
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" => Ok(Self::Periodic),
            "bounded" => Ok(Self::Bounded),
            _ => Err(GridError::UnsupportedTopology {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Periodic".parse::<Topology>(), Ok(Topology::Periodic));
        assert_eq!(" BOUNDED ".parse::<Topology>(), Ok(Topology::Bounded));
    }

    #[test]
    fn parse_unknown_is_unsupported() {
        let err = "flat".parse::<Topology>().unwrap_err();
        assert_eq!(
            err,
            GridError::UnsupportedTopology {
                name: "flat".into()
            }
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for t in Topology::ALL {
            assert_eq!(t.to_string().parse::<Topology>(), Ok(t));
        }
    }

    #[test]
    fn counts() {
        assert_eq!(Topology::Bounded.face_count(4, 0), 5);
        assert_eq!(Topology::Periodic.face_count(4, 0), 4);
        assert_eq!(Topology::Bounded.centre_count(4, 2), 8);
        assert_eq!(Topology::Periodic.centre_count(4, 2), 8);
    }

    proptest! {
        #[test]
        fn only_bounded_axes_have_an_extra_face(n in 1usize..10_000, h in 0usize..16) {
            for t in Topology::ALL {
                let extra = t.face_count(n, h) - t.centre_count(n, h);
                prop_assert_eq!(extra, usize::from(!t.is_periodic()));
            }
        }
    }
}
