use super::{sensors, ErrorKind, IStr, Record, Split, Word};
use crate::geom::Point;

#[test]
fn test_record() {
    let mut input = IStr::new(b"Sensor at x=2, y=18: closest beacon is at x=-2, y=15");
    let record = input.line::<Record>().unwrap();

    assert_eq!(
        record,
        Record {
            sensor: Point::new(2, 18),
            beacon: Point::new(-2, 15),
        }
    );

    assert_eq!(record.into_sensor().radius(), 7);
}

#[test]
fn test_lines_skip_blank() {
    let data = b"\nSensor at x=8, y=7: closest beacon is at x=2, y=10\n   \r\nSensor at x=-3, y=0: closest beacon is at x=0, y=-1\n\n";
    let mut input = IStr::new(data);
    let sensors = sensors(&mut input).unwrap();

    assert_eq!(sensors.len(), 2);
    assert_eq!(sensors[0].radius(), 9);
    assert_eq!(sensors[1].pos(), Point::new(-3, 0));
    assert_eq!(sensors[1].beacon(), Point::new(0, -1));
    assert!(input.is_empty());
}

#[test]
fn test_missing_separator() {
    let mut input = IStr::new(b"Sensor at x=8, y=7\n");
    let error = sensors(&mut input).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedSplit(':')));
    assert_eq!(error.span(), 0..18);
}

#[test]
fn test_not_an_integer() {
    let data = b"Sensor at x=8, y=7: closest beacon is at x=2, y=10\nSensor at x=1, y=zz: closest beacon is at x=0, y=0\n";
    let mut input = IStr::new(data);
    let error = sensors(&mut input).unwrap_err();

    let ErrorKind::NotInteger(word) = error.kind() else {
        panic!("unexpected {error}");
    };

    assert_eq!(word, "zz");
    assert_eq!(&data[error.span()], b"zz");
}

#[test]
fn test_overflowing_coordinate() {
    let mut input = IStr::new(b"Sensor at x=3000000000, y=7: closest beacon is at x=2, y=10");
    let error = input.line::<Record>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger(..)));
}

#[test]
fn test_split_rejects_extra_parts() {
    let mut input = IStr::new(b"1, -2");
    let Split((a, b)) = input.next::<Split<',', (i32, i32)>>().unwrap();
    assert_eq!((a, b), (1, -2));

    let mut input = IStr::new(b"1,2,3");
    let error = input.next::<Split<',', (i32, i32)>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput(rest) if rest == "3"));
    assert_eq!(error.span(), 4..5);
}

#[test]
fn test_words() {
    let mut input = IStr::new(b"  hello  42 ");
    let (word, n) = input.next::<(Word, i32)>().unwrap();
    assert!(word.expect("hello").is_ok());
    assert_eq!(n, 42);
    assert!(input.try_next::<Word>().unwrap().is_none());

    let error = word.expect("bye").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedLiteral("bye", actual) if actual == "hello"));
    assert_eq!(error.span(), 2..7);
}

#[test]
fn test_swapped_labels() {
    let data = b"Sensor at x=2, y=18: closest beacon is at y=-2, x=15";
    let error = IStr::new(data).line::<Record>().unwrap_err();
    let error = error.innermost();

    assert!(matches!(error.kind(), ErrorKind::ExpectedLiteral("x", actual) if actual == "y"));
    assert_eq!(error.span(), 42..43);
}

#[test]
fn test_wrong_words() {
    let data = b"Foo bar x=2, y=18: a b c d x=-2, y=15";
    let error = IStr::new(data).line::<Record>().unwrap_err();
    let error = error.innermost();

    assert!(matches!(error.kind(), ErrorKind::ExpectedLiteral("Sensor", actual) if actual == "Foo"));
    assert_eq!(&data[error.span()], b"Foo");

    let data = b"Sensor at x=2, y=18: closest beacon was at x=-2, y=15";
    let error = IStr::new(data).line::<Record>().unwrap_err();
    assert!(matches!(error.innermost().kind(), ErrorKind::ExpectedLiteral("is", _)));
}

#[test]
fn test_trailing_text() {
    let data = b"Sensor at x=2, y=18: closest beacon is at x=-2, y=15 bogus";
    let error = IStr::new(data).line::<Record>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput(rest) if rest == "bogus"));
    assert_eq!(&data[error.span()], b"bogus");

    let data = b"Sensor at x=2, y=18: closest beacon is at x=-2, y=15, z=4";
    let error = IStr::new(data).line::<Record>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput(rest) if rest == "z=4"));

    let data = b"Sensor at x=2, y=18: closest beacon is at x=-2, y=15: again";
    let error = IStr::new(data).line::<Record>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput(..)));
}

#[test]
fn test_trailing_whitespace_is_fine() {
    let mut input = IStr::new(b"Sensor at x=2, y=18: closest beacon is at x=-2, y=15  \r\n");
    let sensors = sensors(&mut input).unwrap();
    assert_eq!(sensors.len(), 1);
}
