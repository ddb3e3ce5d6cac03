//! Encoding a found cell as its tuning frequency.

use crate::geom::Point;

/// Multiplier applied to the column of a cell.
pub const MULTIPLIER: i64 = 4_000_000;

/// Compute the tuning frequency `x * 4_000_000 + y` of a cell.
///
/// Cells found by the scanner lie inside of a [`Bound`], which caps both
/// coordinates at [`Bound::MAX`] so the result always fits.
///
/// [`Bound`]: crate::scan::Bound
/// [`Bound::MAX`]: crate::scan::Bound::MAX
///
/// # Examples
///
/// ```
/// use gap::freq::tuning_frequency;
/// use gap::geom::Point;
///
/// assert_eq!(tuning_frequency(Point::new(14, 11)), 56_000_011);
/// assert_eq!(tuning_frequency(Point::new(4_000_000, 4_000_000)), 16_000_004_000_000);
/// ```
#[inline]
pub fn tuning_frequency(p: Point) -> i64 {
    p.x * MULTIPLIER + p.y
}
