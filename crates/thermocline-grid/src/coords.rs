//! Coordinate derivation for one axis of a staggered grid.
//!
//! Both functions compute every coordinate directly from its index, so
//! round-off does not accumulate along long axes.

use log::trace;
use thermocline_core::Topology;

/// Face coordinates for one axis.
///
/// Returns `n + 2h + 1` faces for [`Topology::Bounded`] and `n + 2h` for
/// [`Topology::Periodic`] (the wrap-around face equal to the first one is
/// not repeated). Faces are spaced by `d`, the first at `start - h*d`.
/// The axis extent is `n * d`.
///
/// # Examples
///
/// ```
/// use thermocline_core::Topology;
/// use thermocline_grid::construct_faces;
///
/// let xf = construct_faces(Topology::Bounded, 4, 0, 0.25, 0.0);
/// assert_eq!(xf, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// let xf = construct_faces(Topology::Periodic, 4, 0, 0.25, 0.0);
/// assert_eq!(xf, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn construct_faces(topology: Topology, n: usize, h: usize, d: f64, start: f64) -> Vec<f64> {
    let count = topology.face_count(n, h);
    trace!("construct_faces: {topology} n={n} h={h} d={d} start={start} -> {count} faces");
    (0..count).map(|i| offset(start, i, h, d, 0.0)).collect()
}

/// Centre coordinates for one axis.
///
/// Returns the `n + 2h` midpoints between consecutive faces. On a bounded
/// axis that is one fewer than the faces; on a periodic axis it is the same
/// number, the last centre lying between the last face and the wrapped
/// first face.
///
/// # Examples
///
/// ```
/// use thermocline_core::Topology;
/// use thermocline_grid::construct_centres;
///
/// let xc = construct_centres(Topology::Bounded, 4, 0, 0.25, 0.0);
/// assert_eq!(xc, vec![0.125, 0.375, 0.625, 0.875]);
/// ```
pub fn construct_centres(topology: Topology, n: usize, h: usize, d: f64, start: f64) -> Vec<f64> {
    let count = topology.centre_count(n, h);
    trace!("construct_centres: {topology} n={n} h={h} d={d} start={start} -> {count} centres");
    (0..count).map(|i| offset(start, i, h, d, 0.5)).collect()
}

/// Coordinate of sample `i`, shifted by `shift` spacings from its face.
fn offset(start: f64, i: usize, h: usize, d: f64, shift: f64) -> f64 {
    start + ((i as f64 - h as f64) + shift) * d
}
