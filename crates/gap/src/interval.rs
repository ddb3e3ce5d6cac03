//! Closed integer ranges on a single row.

use core::fmt;

/// A closed range `[lo, hi]` on one row, where `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub lo: i64,
    pub hi: i64,
}

impl Interval {
    /// Construct a new interval.
    ///
    /// The bounds are swapped if given in the wrong order so that `lo <= hi`
    /// always holds.
    #[inline]
    pub const fn new(lo: i64, hi: i64) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    /// An interval covering the single cell `x`.
    #[inline]
    pub const fn cell(x: i64) -> Self {
        Self { lo: x, hi: x }
    }

    /// Number of cells covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::interval::Interval;
    ///
    /// assert_eq!(Interval::new(-1, 17).len(), 19);
    /// assert_eq!(Interval::cell(4).len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> u64 {
        self.hi.abs_diff(self.lo) + 1
    }

    /// Test if `x` lies inside of the interval.
    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Test if `other` lies entirely inside of this interval.
    #[inline]
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Test if the two intervals can be merged into one, which is the case
    /// when they overlap or are directly adjacent.
    #[inline]
    pub fn touches(&self, other: &Interval) -> bool {
        self.lo <= other.hi.saturating_add(1) && other.lo <= self.hi.saturating_add(1)
    }

    /// Truncate the interval to `[lo, hi]`, returning `None` if nothing
    /// remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::interval::Interval;
    ///
    /// let i = Interval::new(-4, 7);
    /// assert_eq!(i.clip(0, 20), Some(Interval::new(0, 7)));
    /// assert_eq!(i.clip(8, 20), None);
    /// ```
    #[inline]
    pub fn clip(self, lo: i64, hi: i64) -> Option<Self> {
        let lo = self.lo.max(lo);
        let hi = self.hi.min(hi);

        if lo > hi {
            return None;
        }

        Some(Self { lo, hi })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
