use proptest::prelude::*;

use super::{manhattan, Point, Sensor};
use crate::interval::Interval;

#[test]
fn test_radius_from_beacon() {
    let s = Sensor::new(Point::new(8, 7), Point::new(2, 10));
    assert_eq!(s.radius(), 9);

    let s = Sensor::new(Point::new(0, 0), Point::new(0, 0));
    assert_eq!(s.radius(), 0);
}

#[test]
fn test_row_through_center() {
    let s = Sensor::new(Point::new(8, 7), Point::new(2, 10));
    let i = s.row_intersection(7).unwrap();
    assert_eq!(i, Interval::new(-1, 17));
    assert_eq!(i.len(), 19);
}

#[test]
fn test_zero_radius() {
    let s = Sensor::new(Point::new(3, -2), Point::new(3, -2));
    assert_eq!(s.row_intersection(-2), Some(Interval::cell(3)));
    assert_eq!(s.row_intersection(-1), None);
    assert_eq!(s.row_intersection(-3), None);
}

#[test]
fn test_beacon_on_boundary() {
    let s = Sensor::new(Point::new(8, 7), Point::new(2, 10));
    let i = s.row_intersection(10).unwrap();
    assert!(i.contains(2));
    assert!(!i.contains(1));
}

proptest! {
    #[test]
    fn row_intersection_is_exact(
        cx in -1000i64..1000,
        cy in -1000i64..1000,
        bx in -1000i64..1000,
        by in -1000i64..1000,
        y in -3000i64..3000,
    ) {
        let s = Sensor::new(Point::new(cx, cy), Point::new(bx, by));
        let dy = (y - cy).abs();

        match s.row_intersection(y) {
            None => prop_assert!(dy > s.radius()),
            Some(i) => {
                prop_assert!(dy <= s.radius());
                prop_assert_eq!(i.lo + i.hi, 2 * cx);
                prop_assert_eq!(i.hi - cx, s.radius() - dy);
            }
        }
    }

    #[test]
    fn manhattan_is_symmetric(
        ax in -1000i64..1000,
        ay in -1000i64..1000,
        bx in -1000i64..1000,
        by in -1000i64..1000,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(manhattan(a, b), manhattan(b, a));
        prop_assert!(manhattan(a, b) >= 0);
        prop_assert_eq!(manhattan(a, a), 0);
    }
}
