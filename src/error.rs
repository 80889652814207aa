use thiserror::Error;

/// Rejected point-list edits.
///
/// Queries never fail; only edits addressing a point by index can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("point index {index} out of range for spline with {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}
