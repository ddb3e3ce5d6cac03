use core::fmt;
use core::ops::Range;

use crate::input::{IStrError, NL};

/// Associate the location in `data` at which an input error occurred with the
/// error.
pub fn error_context<E>(path: &str, data: &[u8], error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_range(&error);
    let pos = LineCol::from_span(data, span);

    error.context(ErrorContext {
        path: path.to_owned(),
        pos,
    })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the zero-based line and column at the start of `span`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gap::cli::LineCol;
    ///
    /// let pos = LineCol::from_span(b"first\nsecond\n", 9..12);
    /// assert_eq!(pos.to_string(), "2:3");
    /// ```
    pub fn from_span(data: &[u8], span: Range<usize>) -> Self {
        let Some(d) = data.get(..span.start) else {
            return Self::default();
        };

        let (line, column) = match memchr::memrchr(NL, d) {
            Some(n) => (memchr::memchr_iter(NL, d).count(), span.start - n - 1),
            None => (0, span.start),
        };

        Self::new(line, column)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<IStrError>() {
        Some(e) => e.innermost().span(),
        None => 0..0,
    }
}

/// The file and position an error occurred at.
#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
