use thiserror::Error;

use crate::geom::Point;

/// Errors raised while searching for an uncovered cell.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("bound {bound} out of range, expected 0..={max}")]
    BoundOutOfRange { bound: i64, max: i64 },
    #[error("no uncovered cell in [0, {bound}] x [0, {bound}]")]
    NoGap { bound: i64 },
    #[error("row {y} has {missing} uncovered cells, expected exactly one")]
    AmbiguousRow { y: i64, missing: u64 },
    #[error("found uncovered cell {second} after {first}, expected exactly one")]
    AmbiguousGap { first: Point, second: Point },
}
