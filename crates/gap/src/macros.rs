/// Helper macro to build an input processor.
///
/// Parses the input as the combinator type on the left and converts it into
/// the type on the right. An error returned from the block is reported at the
/// position of the value being converted.
#[macro_export]
macro_rules! from_input {
    (|($pat:pat): $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn error_kind() -> $crate::input::ErrorKind {
                <$ty as $crate::input::FromInput>::error_kind()
            }

            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr<'_>,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$pat: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, $crate::input::ErrorKind::Boxed(e)))
                    }
                }
            }
        }
    };
}
