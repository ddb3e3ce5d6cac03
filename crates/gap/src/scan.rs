//! Row by row search for cells not covered by any sensor.


use crate::cover::{merge_row, Cover};
use crate::geom::{Point, Sensor};
use crate::interval::Interval;
use crate::source::{exclusions, Exclusion};
use crate::ScanError;

/// Rows between progress messages.
const PROGRESS: i64 = 1_000_000;

/// The inclusive upper bound of the square `[0, bound] x [0, bound]` being
/// searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound(i64);

impl Bound {
    /// The largest supported bound.
    ///
    /// Keeps every tuning frequency computed for a point inside of the bound
    /// well within the range of an `i64`.
    pub const MAX: i64 = 1_000_000_000;

    /// Construct a new bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::scan::Bound;
    ///
    /// assert!(Bound::new(4_000_000).is_ok());
    /// assert!(Bound::new(-1).is_err());
    /// assert!(Bound::new(Bound::MAX + 1).is_err());
    /// ```
    pub fn new(bound: i64) -> Result<Self, ScanError> {
        if !(0..=Self::MAX).contains(&bound) {
            return Err(ScanError::BoundOutOfRange {
                bound,
                max: Self::MAX,
            });
        }

        Ok(Self(bound))
    }

    /// Get the inclusive bound.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }

    /// Number of cells on a single row of the square.
    #[inline]
    pub fn width(self) -> u64 {
        self.0.unsigned_abs() + 1
    }
}

/// The coverage verdict for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerdict {
    /// Every cell in the bound is covered.
    Covered,
    /// At least one cell is uncovered.
    Open {
        /// The first uncovered cell.
        gap: Point,
        /// The number of uncovered cells on the row.
        missing: u64,
    },
}

/// Scans rows of a bounded square for uncovered cells.
///
/// Scratch buffers are kept between rows so that a scan over millions of rows
/// doesn't allocate once it has warmed up.
pub struct Scanner {
    sources: Vec<Exclusion>,
    bound: Bound,
    buf: Vec<Interval>,
    cover: Cover,
}

impl Scanner {
    /// Construct a scanner over the diamonds of the given sensors and the
    /// cells occupied by their beacons.
    pub fn new(sensors: &[Sensor], bound: Bound) -> Self {
        Self::with_sources(exclusions(sensors), bound)
    }

    /// Construct a scanner over an arbitrary set of exclusion sources.
    ///
    /// Sources which can never touch a row inside of the bound are dropped up
    /// front.
    pub fn with_sources(mut sources: Vec<Exclusion>, bound: Bound) -> Self {
        sources.retain(|s| {
            let (lo, hi) = s.rows();
            hi >= 0 && lo <= bound.get()
        });

        let buf = Vec::with_capacity(sources.len());

        Self {
            sources,
            bound,
            buf,
            cover: Cover::new(),
        }
    }

    /// The bound being searched.
    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Number of sources which can touch the bound.
    #[inline]
    pub fn sources(&self) -> usize {
        self.sources.len()
    }

    /// The cover computed for the most recently scanned row.
    #[inline]
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Compute the coverage verdict of row `y`.
    ///
    /// Intervals are clipped to the bound only after being intersected, so the
    /// shape of each diamond is never altered before it's cut.
    pub fn row(&mut self, y: i64) -> RowVerdict {
        let hi = self.bound.get();

        self.buf.clear();

        for source in &self.sources {
            if let Some(interval) = source.row_interval(y).and_then(|i| i.clip(0, hi)) {
                self.buf.push(interval);
            }
        }

        self.cover.merge_from(&mut self.buf);

        let width = self.bound.width();
        let covered = self.cover.covered();

        if covered >= width {
            return RowVerdict::Covered;
        }

        let Some(gap) = self.cover.gaps(0, hi).next() else {
            return RowVerdict::Covered;
        };

        RowVerdict::Open {
            gap: Point::new(gap.lo, y),
            missing: width - covered,
        }
    }

    /// Find the first uncovered cell on row `y`, if any.
    #[inline]
    pub fn find_gap_row(&mut self, y: i64) -> Option<Point> {
        match self.row(y) {
            RowVerdict::Covered => None,
            RowVerdict::Open { gap, .. } => Some(gap),
        }
    }

    /// Scan rows from the top and return the first uncovered cell.
    pub fn find_gap(&mut self) -> Result<Point, ScanError> {
        let bound = self.bound.get();

        log::debug!(
            "scanning {} rows against {} sources",
            self.bound.width(),
            self.sources.len()
        );

        for y in 0..=bound {
            if let Some(gap) = self.find_gap_row(y) {
                log::debug!("found gap at {gap}");
                return Ok(gap);
            }

            if y > 0 && y % PROGRESS == 0 {
                log::debug!("scanned {y} rows");
            }
        }

        Err(ScanError::NoGap { bound })
    }

    /// Scan every row and require that exactly one cell is uncovered in the
    /// whole square.
    pub fn find_unique_gap(&mut self) -> Result<Point, ScanError> {
        let bound = self.bound.get();
        let mut found = None;

        for y in 0..=bound {
            let RowVerdict::Open { gap, missing } = self.row(y) else {
                continue;
            };

            if missing > 1 {
                return Err(ScanError::AmbiguousRow { y, missing });
            }

            if let Some(first) = found {
                return Err(ScanError::AmbiguousGap { first, second: gap });
            }

            log::debug!("found gap at {gap}, verifying remaining rows");
            found = Some(gap);
        }

        found.ok_or(ScanError::NoGap { bound })
    }
}

/// Count the cells on row `y` which cannot contain a beacon.
///
/// The row is not bounded. Beacons known to sit on the row are subtracted,
/// since those cells evidently can contain one.
///
/// # Examples
///
/// ```
/// use gap::geom::{Point, Sensor};
/// use gap::scan::count_row;
///
/// let sensors = [Sensor::new(Point::new(8, 7), Point::new(2, 10))];
/// assert_eq!(count_row(&sensors, 7), 19);
/// assert_eq!(count_row(&sensors, 10), 12);
/// ```
pub fn count_row(sensors: &[Sensor], y: i64) -> u64 {
    let cover = merge_row(sensors.iter().filter_map(|s| s.row_intersection(y)));

    let mut beacons = sensors
        .iter()
        .map(Sensor::beacon)
        .filter(|b| b.y == y && cover.contains(b.x))
        .map(|b| b.x)
        .collect::<Vec<_>>();

    beacons.sort_unstable();
    beacons.dedup();

    log::debug!(
        "row {y}: {} spans, {} beacons",
        cover.len(),
        beacons.len()
    );

    cover.covered() - beacons.len() as u64
}
