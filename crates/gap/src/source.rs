//! Anything which excludes cells on a row.

use crate::geom::{Point, Sensor};
use crate::interval::Interval;

/// A source of exclusion which can be intersected with a row.
///
/// The scanner treats all sources uniformly: each one either contributes a
/// single interval to a row or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The diamond surrounding a sensor.
    Diamond(Sensor),
    /// A single occupied cell, such as a known beacon.
    Cell(Point),
}

impl Exclusion {
    /// The interval this source occupies on row `y`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::geom::{Point, Sensor};
    /// use gap::interval::Interval;
    /// use gap::source::Exclusion;
    ///
    /// let cell = Exclusion::Cell(Point::new(2, 10));
    /// assert_eq!(cell.row_interval(10), Some(Interval::cell(2)));
    /// assert_eq!(cell.row_interval(11), None);
    ///
    /// let diamond = Exclusion::Diamond(Sensor::new(Point::new(8, 7), Point::new(2, 10)));
    /// assert_eq!(diamond.row_interval(7), Some(Interval::new(-1, 17)));
    /// ```
    #[inline]
    pub fn row_interval(&self, y: i64) -> Option<Interval> {
        match self {
            Exclusion::Diamond(sensor) => sensor.row_intersection(y),
            Exclusion::Cell(p) if p.y == y => Some(Interval::cell(p.x)),
            Exclusion::Cell(..) => None,
        }
    }

    /// The rows this source can possibly touch, as `(min, max)`.
    #[inline]
    pub fn rows(&self) -> (i64, i64) {
        match self {
            Exclusion::Diamond(sensor) => {
                let y = sensor.pos().y;
                (y - sensor.radius(), y + sensor.radius())
            }
            Exclusion::Cell(p) => (p.y, p.y),
        }
    }
}

impl From<Sensor> for Exclusion {
    #[inline]
    fn from(sensor: Sensor) -> Self {
        Exclusion::Diamond(sensor)
    }
}

impl From<Point> for Exclusion {
    #[inline]
    fn from(point: Point) -> Self {
        Exclusion::Cell(point)
    }
}

/// Build the full set of exclusion sources for a collection of sensors: one
/// diamond per sensor and one cell per distinct beacon.
pub fn exclusions(sensors: &[Sensor]) -> Vec<Exclusion> {
    let mut beacons = sensors.iter().map(Sensor::beacon).collect::<Vec<_>>();
    beacons.sort_unstable();
    beacons.dedup();

    let mut out = Vec::with_capacity(sensors.len() + beacons.len());
    out.extend(sensors.iter().copied().map(Exclusion::Diamond));
    out.extend(beacons.into_iter().map(Exclusion::Cell));
    out
}
