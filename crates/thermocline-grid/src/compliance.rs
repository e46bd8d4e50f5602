//! Grid trait compliance test helpers.
//!
//! These functions verify that a grid satisfies the staggering invariants
//! every axis must uphold. Reused by the Grid1D and Grid2D test modules.

use crate::grid::Grid;
use thermocline_core::{LocationKind, Topology};

fn tolerance(grid: &dyn Grid, dim: usize) -> f64 {
    let axis = grid.axis(dim).expect("axis in range");
    1e-12 * (axis.start().abs() + axis.end().abs() + axis.extent())
}

/// Assert that face and centre coordinates are strictly increasing.
pub fn assert_strictly_increasing(grid: &dyn Grid) {
    for dim in 0..grid.ndim() {
        let axis = grid.axis(dim).expect("axis in range");
        for kind in [LocationKind::Face, LocationKind::Centre] {
            for w in axis.points(kind).windows(2) {
                assert!(
                    w[1] > w[0],
                    "axis {dim} {kind} coordinates not increasing: {} then {}",
                    w[0],
                    w[1]
                );
            }
        }
    }
}

/// Assert the face/centre counts implied by topology, interior points and halo.
pub fn assert_counts_match_topology(grid: &dyn Grid) {
    for dim in 0..grid.ndim() {
        let axis = grid.axis(dim).expect("axis in range");
        let (n, h) = (axis.n(), axis.halo());
        assert_eq!(axis.centres().len(), n + 2 * h, "axis {dim} centre count");
        let faces = match axis.topology() {
            Topology::Bounded => n + 2 * h + 1,
            Topology::Periodic => n + 2 * h,
        };
        assert_eq!(axis.faces().len(), faces, "axis {dim} face count");
    }
}

/// Assert that every centre is the midpoint of its two neighbouring faces,
/// wrapping to the first face plus the extent on periodic axes.
pub fn assert_centres_are_face_midpoints(grid: &dyn Grid) {
    for dim in 0..grid.ndim() {
        let axis = grid.axis(dim).expect("axis in range");
        let faces = axis.faces();
        let tol = tolerance(grid, dim);
        for (i, &c) in axis.centres().iter().enumerate() {
            let right = match faces.get(i + 1) {
                Some(&f) => f,
                None => faces[i] + axis.spacing(),
            };
            let mid = 0.5 * (faces[i] + right);
            assert!(
                (mid - c).abs() <= tol,
                "axis {dim} centre {i} = {c}, midpoint = {mid}"
            );
        }
    }
}

/// Assert that the spacing is uniform and equal to `extent / n`.
pub fn assert_uniform_spacing(grid: &dyn Grid) {
    for dim in 0..grid.ndim() {
        let axis = grid.axis(dim).expect("axis in range");
        let tol = tolerance(grid, dim);
        assert!(
            (axis.spacing() * axis.n() as f64 - axis.extent()).abs() <= tol,
            "axis {dim} spacing inconsistent with extent"
        );
        for w in axis.faces().windows(2) {
            assert!(
                (w[1] - w[0] - axis.spacing()).abs() <= tol,
                "axis {dim} face gap {} != spacing {}",
                w[1] - w[0],
                axis.spacing()
            );
        }
    }
}

/// Assert that the interior faces start at the domain start and, on a
/// bounded axis, end at the domain end.
pub fn assert_interior_spans_domain(grid: &dyn Grid) {
    for dim in 0..grid.ndim() {
        let axis = grid.axis(dim).expect("axis in range");
        let tol = tolerance(grid, dim);
        let interior = axis.interior(LocationKind::Face);
        let faces = &axis.faces()[interior];
        let first = faces[0];
        let last = faces[faces.len() - 1];
        assert!((first - axis.start()).abs() <= tol, "axis {dim} starts at {first}");
        let expected_last = match axis.topology() {
            Topology::Bounded => axis.end(),
            Topology::Periodic => axis.end() - axis.spacing(),
        };
        assert!(
            (last - expected_last).abs() <= tol,
            "axis {dim} interior ends at {last}, expected {expected_last}"
        );
    }
}

/// Assert that point counts per location agree with the axis arrays.
pub fn assert_point_count_consistent(grid: &dyn Grid) {
    let kinds = [LocationKind::Centre, LocationKind::Face];
    if grid.ndim() == 1 {
        for kind in kinds {
            let shape = grid.point_count(&[kind]).expect("1D point count");
            assert_eq!(shape[0], grid.axis(0).expect("x axis").count(kind));
        }
    } else {
        for kx in kinds {
            for ky in kinds {
                let shape = grid.point_count(&[kx, ky]).expect("2D point count");
                assert_eq!(shape[0], grid.axis(0).expect("x axis").count(kx));
                assert_eq!(shape[1], grid.axis(1).expect("y axis").count(ky));
            }
        }
    }
}

/// Assert that a grid is layout-equal to itself.
pub fn assert_layout_eq_reflexive(grid: &dyn Grid) {
    assert!(grid.layout_eq(grid), "layout_eq is not reflexive");
}

/// Run all compliance checks.
pub fn run_full_compliance(grid: &dyn Grid) {
    assert_strictly_increasing(grid);
    assert_counts_match_topology(grid);
    assert_centres_are_face_midpoints(grid);
    assert_uniform_spacing(grid);
    assert_interior_spans_domain(grid);
    assert_point_count_consistent(grid);
    assert_layout_eq_reflexive(grid);
}
