//! Merging intervals into a minimal disjoint cover of a row.

#[cfg(test)]
mod tests;

use core::slice;

use crate::interval::Interval;

/// A sorted set of disjoint intervals summarizing everything covered on one
/// row.
///
/// Consecutive members always satisfy `next.lo > current.hi + 1`, so no two
/// members could be merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cover {
    spans: Vec<Interval>,
}

impl Cover {
    /// Construct a new empty cover.
    #[inline]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Replace the contents of this cover with the merge of `intervals`.
    ///
    /// The input is sorted in place, which lets callers reuse both buffers
    /// from row to row.
    pub fn merge_from(&mut self, intervals: &mut [Interval]) {
        self.spans.clear();

        // Widest first at equal starts so that the first interval of a run
        // already carries the furthest end it can.
        intervals.sort_unstable_by(|a, b| a.lo.cmp(&b.lo).then(b.hi.cmp(&a.hi)));

        let mut it = intervals.iter();

        let Some(&first) = it.next() else {
            return;
        };

        let mut current = first;

        for next in it {
            if next.lo <= current.hi.saturating_add(1) {
                current.hi = current.hi.max(next.hi);
            } else {
                self.spans.push(current);
                current = *next;
            }
        }

        self.spans.push(current);
    }

    /// Number of disjoint members.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Test if nothing is covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of cells covered.
    #[inline]
    pub fn covered(&self) -> u64 {
        self.spans.iter().map(Interval::len).sum()
    }

    /// Test if cell `x` is covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::cover::merge_row;
    /// use gap::interval::Interval;
    ///
    /// let cover = merge_row([Interval::new(0, 5), Interval::new(7, 12)]);
    /// assert!(cover.contains(5));
    /// assert!(!cover.contains(6));
    /// assert!(cover.contains(7));
    /// assert!(!cover.contains(13));
    /// ```
    pub fn contains(&self, x: i64) -> bool {
        let n = self.spans.partition_point(|s| s.hi < x);

        match self.spans.get(n) {
            Some(s) => s.lo <= x,
            None => false,
        }
    }

    /// Access the members of the cover.
    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.spans
    }

    /// Iterate over the members of the cover.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.spans.iter()
    }

    /// Iterate over the uncovered ranges inside of the window `[lo, hi]`,
    /// including any open stretch at either edge of the window.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::cover::merge_row;
    /// use gap::interval::Interval;
    ///
    /// let cover = merge_row([Interval::new(2, 5), Interval::new(7, 12)]);
    /// let gaps = cover.gaps(0, 20).collect::<Vec<_>>();
    /// assert_eq!(gaps, [Interval::new(0, 1), Interval::new(6, 6), Interval::new(13, 20)]);
    /// ```
    #[inline]
    pub fn gaps(&self, lo: i64, hi: i64) -> Gaps<'_> {
        Gaps {
            spans: self.spans.iter(),
            x: Some(lo),
            hi,
        }
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Merge a collection of intervals into a [Cover].
///
/// The input may be empty, contain duplicates, or contain intervals which
/// overlap, nest or merely touch.
///
/// # Examples
///
/// ```
/// use gap::cover::merge_row;
/// use gap::interval::Interval;
///
/// let cover = merge_row([Interval::new(10, 20), Interval::new(-1, 17)]);
/// assert_eq!(cover.as_slice(), &[Interval::new(-1, 20)]);
///
/// let cover = merge_row([Interval::new(0, 3), Interval::new(4, 6)]);
/// assert_eq!(cover.as_slice(), &[Interval::new(0, 6)]);
///
/// let cover = merge_row(std::iter::empty());
/// assert!(cover.is_empty());
/// ```
pub fn merge_row<I>(intervals: I) -> Cover
where
    I: IntoIterator<Item = Interval>,
{
    let mut intervals = intervals.into_iter().collect::<Vec<_>>();
    let mut cover = Cover::new();
    cover.merge_from(&mut intervals);
    cover
}

/// Iterator over uncovered ranges, see [Cover::gaps].
pub struct Gaps<'a> {
    spans: slice::Iter<'a, Interval>,
    /// Next cell not yet accounted for, `None` once the window is exhausted.
    x: Option<i64>,
    hi: i64,
}

impl Iterator for Gaps<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(x) = self.x.filter(|x| *x <= self.hi) {
            let Some(span) = self.spans.next() else {
                self.x = None;
                return Some(Interval::new(x, self.hi));
            };

            if span.hi < x {
                continue;
            }

            self.x = span.hi.checked_add(1);

            if span.lo > x {
                return Some(Interval::new(x, (span.lo - 1).min(self.hi)));
            }
        }

        None
    }
}
