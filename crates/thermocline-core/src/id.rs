//! Grid instance identifiers and the [`Shape`] type alias.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sample counts per axis of a field, x first.
///
/// Uses `SmallVec<[usize; 2]>` so 1D and 2D shapes never allocate.
pub type Shape = SmallVec<[usize; 2]>;

/// Counter for unique [`GridInstanceId`] allocation.
static GRID_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a grid.
///
/// Allocated from a monotonic atomic counter via [`GridInstanceId::next`].
/// Two separately constructed grids always have different IDs, even when
/// their coordinates are identical. Cloning a grid preserves its ID, which
/// is correct because grids are immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridInstanceId(u64);

impl GridInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
