//! One axis of a staggered grid and the configuration it is built from.

use crate::coords::{construct_centres, construct_faces};
use std::ops::Range;
use thermocline_core::{GridError, LocationKind, Topology};

/// Configuration for one grid axis.
///
/// Describes the physical domain `[start, end]`, its number of interior
/// points `n`, and the number of halo points `halo` added on each side.
///
/// # Examples
///
/// ```
/// use thermocline_core::Topology;
/// use thermocline_grid::AxisConfig;
///
/// let cfg = AxisConfig::new(Topology::Periodic, 64, 0.0, 2.0e6).with_halo(2);
/// assert!(cfg.validate("x").is_ok());
/// assert!(AxisConfig::new(Topology::Bounded, 4, 1.0, 1.0).validate("x").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Periodic or bounded.
    pub topology: Topology,
    /// Number of interior points. Must be at least 1.
    pub n: usize,
    /// Start of the physical domain.
    pub start: f64,
    /// End of the physical domain. Must exceed `start`.
    pub end: f64,
    /// Halo points on each side. Default: 0.
    pub halo: usize,
}

impl AxisConfig {
    /// Axis over `[start, end]` with `n` interior points and no halo.
    pub fn new(topology: Topology, n: usize, start: f64, end: f64) -> Self {
        Self {
            topology,
            n,
            start,
            end,
            halo: 0,
        }
    }

    /// Set the number of halo points on each side.
    pub fn with_halo(mut self, halo: usize) -> Self {
        self.halo = halo;
        self
    }

    /// Domain extent, `end - start`.
    pub fn extent(&self) -> f64 {
        self.end - self.start
    }

    /// Grid spacing, `(end - start) / n`. Only meaningful for a valid config.
    pub fn spacing(&self) -> f64 {
        self.extent() / self.n as f64
    }

    /// Check the axis invariants.
    ///
    /// `axis` names the axis in the returned [`GridError::InvalidDomain`].
    pub fn validate(&self, axis: &'static str) -> Result<(), GridError> {
        if self.n == 0 {
            return Err(GridError::InvalidDomain {
                axis,
                reason: "at least one interior point is required".into(),
            });
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GridError::InvalidDomain {
                axis,
                reason: format!("bounds must be finite, got [{}, {}]", self.start, self.end),
            });
        }
        if self.end <= self.start {
            return Err(GridError::InvalidDomain {
                axis,
                reason: format!("end ({}) must exceed start ({})", self.end, self.start),
            });
        }
        let fits = self
            .halo
            .checked_mul(2)
            .and_then(|t| t.checked_add(self.n))
            .and_then(|t| t.checked_add(1));
        if fits.is_none() {
            return Err(GridError::InvalidDomain {
                axis,
                reason: format!("halo too large: {} points on each side", self.halo),
            });
        }
        let d = self.spacing();
        if !(d.is_finite() && d > 0.0) {
            return Err(GridError::InvalidDomain {
                axis,
                reason: format!("spacing {d} is not a positive finite number"),
            });
        }
        // Faces are derived as offset + k*d; each value carries at most one
        // ulp of rounding from the product and one from the sum.
        let reach = (self.halo as f64 + 1.0) * d;
        let magnitude = (self.start - reach).abs().max((self.end + reach).abs());
        if d <= 4.0 * f64::EPSILON * magnitude {
            return Err(GridError::InvalidDomain {
                axis,
                reason: format!(
                    "spacing {d} not resolvable at this offset (|x| up to {magnitude})"
                ),
            });
        }
        Ok(())
    }
}

/// One axis of a staggered grid, with its precomputed coordinates.
///
/// Immutable once built. Invariants:
/// - `centres().len() == n + 2h`
/// - `faces().len() == n + 2h + 1` when bounded, `n + 2h` when periodic
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    topology: Topology,
    n: usize,
    h: usize,
    d: f64,
    start: f64,
    end: f64,
    faces: Vec<f64>,
    centres: Vec<f64>,
}

impl Axis {
    /// Validate `config` and derive the axis coordinates.
    pub fn new(axis: &'static str, config: &AxisConfig) -> Result<Self, GridError> {
        config.validate(axis)?;
        let d = config.spacing();
        let faces = construct_faces(config.topology, config.n, config.halo, d, config.start);
        let centres = construct_centres(config.topology, config.n, config.halo, d, config.start);
        Ok(Self {
            topology: config.topology,
            n: config.n,
            h: config.halo,
            d,
            start: config.start,
            end: config.end,
            faces,
            centres,
        })
    }

    /// Topology of this axis.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of interior points.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of halo points on each side.
    pub fn halo(&self) -> usize {
        self.h
    }

    /// Grid spacing.
    pub fn spacing(&self) -> f64 {
        self.d
    }

    /// Domain extent (`end - start`).
    pub fn extent(&self) -> f64 {
        self.end - self.start
    }

    /// Start of the physical domain.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the physical domain.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Face coordinates, halos included.
    pub fn faces(&self) -> &[f64] {
        &self.faces
    }

    /// Centre coordinates, halos included.
    pub fn centres(&self) -> &[f64] {
        &self.centres
    }

    /// Coordinates at the given location.
    pub fn points(&self, kind: LocationKind) -> &[f64] {
        match kind {
            LocationKind::Centre => &self.centres,
            LocationKind::Face => &self.faces,
        }
    }

    /// Number of samples at the given location, halos included.
    pub fn count(&self, kind: LocationKind) -> usize {
        self.points(kind).len()
    }

    /// Index range of the non-halo samples at the given location.
    ///
    /// For faces on a bounded axis this includes both boundary faces.
    pub fn interior(&self, kind: LocationKind) -> Range<usize> {
        let len = match kind {
            LocationKind::Centre => self.n,
            LocationKind::Face => match self.topology {
                Topology::Bounded => self.n + 1,
                Topology::Periodic => self.n,
            },
        };
        self.h..self.h + len
    }
}
