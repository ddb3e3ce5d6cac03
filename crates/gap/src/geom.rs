//! Points, sensors and the diamonds they exclude.

#[cfg(test)]
mod tests;

use core::fmt;

use crate::interval::Interval;

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Construct a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::geom::Point;
    ///
    /// let a = Point::new(8, 7);
    /// let b = Point::new(2, 10);
    /// assert_eq!(a.manhattan(b), 9);
    /// assert_eq!(b.manhattan(a), 9);
    /// ```
    #[inline]
    pub fn manhattan(self, other: Point) -> i64 {
        manhattan(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A sensor together with the nearest beacon it reported.
///
/// Every cell within [`Sensor::radius`] of the sensor, measured in Manhattan
/// distance, is known not to contain a beacon other than the reported one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    pos: Point,
    beacon: Point,
    radius: i64,
}

impl Sensor {
    /// Construct a new sensor, computing its radius from the beacon.
    #[inline]
    pub fn new(pos: Point, beacon: Point) -> Self {
        Self {
            pos,
            beacon,
            radius: manhattan(pos, beacon),
        }
    }

    /// Position of the sensor.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Position of the nearest beacon.
    #[inline]
    pub fn beacon(&self) -> Point {
        self.beacon
    }

    /// The exclusion radius.
    #[inline]
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Intersect the exclusion diamond with row `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::geom::{Point, Sensor};
    /// use gap::interval::Interval;
    ///
    /// let s = Sensor::new(Point::new(8, 7), Point::new(2, 10));
    /// assert_eq!(s.row_intersection(7), Some(Interval::new(-1, 17)));
    /// assert_eq!(s.row_intersection(16), Some(Interval::new(8, 8)));
    /// assert_eq!(s.row_intersection(17), None);
    /// assert_eq!(s.row_intersection(-3), None);
    /// ```
    #[inline]
    pub fn row_intersection(&self, y: i64) -> Option<Interval> {
        let dx = self.radius - (y - self.pos.y).abs();

        if dx < 0 {
            return None;
        }

        Some(Interval::new(self.pos.x - dx, self.pos.x + dx))
    }
}
