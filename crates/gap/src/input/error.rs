use core::fmt;
use core::ops::Range;

use bstr::BString;

/// The reason why parsing failed.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(BString),
    ExpectedLiteral(&'static str, BString),
    TrailingInput(BString),
    ExpectedLine,
    ExpectedWord,
    ExpectedTuple(usize),
    ExpectedSplit(char),
    UnexpectedEof,
    Boxed(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::ExpectedLiteral(expected, actual) => {
                write!(f, "expected `{expected}`, but got `{actual}`")
            }
            ErrorKind::TrailingInput(rest) => write!(f, "unexpected trailing input `{rest}`"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedWord => write!(f, "expected word"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::ExpectedSplit(d) => write!(f, "expected values separated by `{d}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Boxed(error) => fmt::Display::fmt(error, f),
        }
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Byte span of the input which caused the error.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Access the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Follow errors raised while converting a parsed value down to the input
    /// error which caused them.
    pub fn innermost(&self) -> &IStrError {
        if let ErrorKind::Boxed(error) = &self.kind {
            if let Some(error) = error.downcast_ref::<IStrError>() {
                return error.innermost();
            }
        }

        self
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {}
