use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over the non-blank lines of an [IStr].
pub struct Lines<'p, 'a, T> {
    input: &'p mut IStr<'a>,
    _marker: PhantomData<T>,
}

impl<'p, 'a, T> Lines<'p, 'a, T> {
    pub(crate) fn new(input: &'p mut IStr<'a>) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Lines<'_, '_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_line().transpose()
    }
}
