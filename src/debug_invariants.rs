//! Self-checks for finished mesh records.
//!
//! [`PointSet`](crate::topology::point::PointSet),
//! [`BoundaryLoop`](crate::algs::boundary::BoundaryLoop) and
//! [`TriMesh`](crate::pipeline::TriMesh) can re-derive their structural
//! guarantees from their own data. Debug builds assert them after every
//! pipeline run; release builds do so only with `check-invariants` or
//! `strict-invariants`.

use crate::mesh_error::MeshError;

pub trait DebugInvariants {
    /// Panic with the record name if [`validate_invariants`](Self::validate_invariants)
    /// fails and checking is compiled in; no-op otherwise.
    fn debug_assert_invariants(&self);

    /// First violated invariant, as [`MeshError::InvariantViolation`] or the
    /// stage error that would have rejected the record.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// `debug_invariants!(record, "Name")` validates `record` and panics on
/// failure when checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($record:expr, $name:literal) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(err) = $crate::DebugInvariants::validate_invariants($record) {
            panic!(concat!("[invariants] ", $name, ": {}"), err);
        }
    };
}
