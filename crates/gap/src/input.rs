//! Input parser.

mod error;
mod iter;

#[cfg(test)]
mod tests;

use core::ops;
use std::str::from_utf8;

use bstr::{BString, ByteSlice};

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Lines;

use crate::geom::{Point, Sensor};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Byte offset of `data` in the original input.
    index: usize,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Construct an iterator over the remaining lines, parsing each as `T`.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, 'a, T> {
        Lines::new(self)
    }

    /// Split on `byte` until the input is exhausted.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator<'a> + '_ {
        return Iterator { input: self, byte };

        struct Iterator<'p, 'a> {
            input: &'p mut IStr<'a>,
            byte: u8,
        }

        impl<'a> InputIterator<'a> for Iterator<'_, 'a> {
            #[inline]
            fn index(&self) -> usize {
                self.input.index
            }

            #[inline]
            fn next(&mut self) -> Option<IStr<'a>> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next non-blank line as `T`, errors with `Err(IStrError)` if
    /// there is no such line.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next non-blank line as `T`, returns `Ok(None)` once the
    /// input is exhausted.
    ///
    /// A line which is present but isn't a valid `T` is an error.
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        loop {
            let Some(mut line) = self.split_once(NL) else {
                return Ok(None);
            };

            if line.data.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let value = line.next()?;
            line.finish()?;
            return Ok(Some(value));
        }
    }

    /// Error unless only whitespace is left.
    fn finish(&self) -> Result<()> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());

        if s == self.data.len() {
            return Ok(());
        }

        let span = self.index + s..self.index + self.data.len();
        let rest = BString::from(self.data[s..].trim_end());
        Err(IStrError::new(span, ErrorKind::TrailingInput(rest)))
    }

    /// Take the next whitespace-delimited word.
    fn word(&mut self) -> Option<IStr<'a>> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return None;
        }

        let word = self.slice(s..n)?;
        self.advance(n);
        Some(word)
    }

    /// Split once at the given byte or until the end of input, returning the
    /// part before the byte.
    fn split_once(&mut self, b: u8) -> Option<IStr<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let rest = *self;
            self.advance(self.data.len());
            return Some(rest);
        };

        let head = self.slice(0..at)?;
        self.advance(at + 1);
        Some(head)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr<'a>> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind reported when a value is required but missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input doesn't hold
    /// one.
    fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'_>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over inputs.
pub trait InputIterator<'a> {
    /// Current index of the input iterator.
    fn index(&self) -> usize;

    /// Get the next chunk.
    fn next(&mut self) -> Option<IStr<'a>>;
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter: Sized {
    /// Parse one value out of each input in order.
    fn from_input_iter<'a, I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator<'a>;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<'a, I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator<'a>
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };
                )*

                if let Some(extra) = inputs.next() {
                    let span = extra.index..extra.index + extra.len();
                    let rest = BString::from(extra.data.trim());
                    return Err(IStrError::new(span, ErrorKind::TrailingInput(rest)));
                }

                let $first_id = {
                    let Some(value) = <$first>::try_from_input(&mut $first_id)? else {
                        return Ok(None);
                    };

                    $first_id.finish()?;
                    value
                };

                $(
                    let $rest_id = {
                        let Some(value) = <$rest>::try_from_input(&mut $rest_id)? else {
                            return Ok(None);
                        };

                        $rest_id.finish()?;
                        value
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
                let Some(word) = p.word() else {
                    return Ok(None);
                };

                let span = word.index..word.index + word.len();

                let Some(n) = from_utf8(word.data).ok().and_then(|s| str::parse(s).ok()) else {
                    return Err(IStrError::new(span, ErrorKind::NotInteger(BString::from(word.data))));
                };

                Ok(Some(n))
            }
        }
    };
}

tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(5 => A a, B b, C c, D d, E e);

integer!(i32);

/// Split on the delimiter `D`, parsing each part as an element of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedSplit(D)
    }

    #[inline]
    fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

/// A whitespace-delimited word, remembering where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    span: ops::Range<usize>,
    text: BString,
}

impl Word {
    /// Require the word to read exactly `expected`.
    pub fn expect(&self, expected: &'static str) -> Result<()> {
        if self.text.as_slice() != expected.as_bytes() {
            return Err(IStrError::new(
                self.span.clone(),
                ErrorKind::ExpectedLiteral(expected, self.text.clone()),
            ));
        }

        Ok(())
    }
}

impl FromInput for Word {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedWord
    }

    #[inline]
    fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
        let Some(word) = p.word() else {
            return Ok(None);
        };

        Ok(Some(Self {
            span: word.index..word.index + word.len(),
            text: BString::from(word.data),
        }))
    }
}

/// A labelled coordinate such as `x=-2`.
type Coord = Split<'=', (Word, i32)>;

crate::from_input! {
    |(Split((Split((x_label, x)), Split((y_label, y))))): Split<',', (Coord, Coord)>| -> Point {
        x_label.expect("x")?;
        y_label.expect("y")?;
        Ok(Point::new(i64::from(x), i64::from(y)))
    }
}

/// A single sensor report.
///
/// Parsed from lines such as:
///
/// ```text
/// Sensor at x=2, y=18: closest beacon is at x=-2, y=15
/// ```
///
/// Coordinates are read as `i32`, which leaves every distance and length
/// computed from them plenty of room in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub sensor: Point,
    pub beacon: Point,
}

impl Record {
    /// Convert into a sensor with a computed radius.
    #[inline]
    pub fn into_sensor(self) -> Sensor {
        Sensor::new(self.sensor, self.beacon)
    }
}

type RecordLine = Split<':', ((Word, Word, Point), (Word, Word, Word, Word, Point))>;

crate::from_input! {
    |(Split(((s0, s1, sensor), (b0, b1, b2, b3, beacon)))): RecordLine| -> Record {
        for (word, expected) in [(s0, "Sensor"), (s1, "at")] {
            word.expect(expected)?;
        }

        for (word, expected) in [(b0, "closest"), (b1, "beacon"), (b2, "is"), (b3, "at")] {
            word.expect(expected)?;
        }

        Ok(Record { sensor, beacon })
    }
}

/// Parse every sensor report in the input.
///
/// # Examples
///
/// ```
/// use gap::geom::Point;
/// use gap::input::{self, IStr};
///
/// let mut input = IStr::new(b"Sensor at x=2, y=18: closest beacon is at x=-2, y=15\n\n");
/// let sensors = input::sensors(&mut input)?;
///
/// assert_eq!(sensors.len(), 1);
/// assert_eq!(sensors[0].pos(), Point::new(2, 18));
/// assert_eq!(sensors[0].radius(), 7);
/// # Ok::<_, gap::input::IStrError>(())
/// ```
pub fn sensors(input: &mut IStr<'_>) -> Result<Vec<Sensor>> {
    let mut out = Vec::new();

    for record in input.lines::<Record>() {
        out.push(record?.into_sensor());
    }

    Ok(out)
}
