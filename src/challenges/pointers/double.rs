#[doc(inline)]
pub use crate::util::error::DoubleOverflow;
use crate::util::result::ResultExtension;

/// Doubles every element of `arr` in place, panicking on a failure.
///
/// # Panics
/// Panics if doubling any element would overflow an `i64`. The array is left unmodified.
pub fn double_array<const N: usize>(arr: &mut [i64; N]) {
    try_double_array(arr).throw()
}

/// Doubles every element of `arr` in place, returning an [`Err`] on a failure rather than
/// panicking.
///
/// The length is part of the type, so there's no way to pass an array of the wrong size. Every
/// element is checked before any are written, so on an [`Err`] the array is unmodified and the
/// error holds the first element that would have overflowed.
pub fn try_double_array<const N: usize>(arr: &mut [i64; N]) -> Result<(), DoubleOverflow> {
    if let Some((index, &value)) = arr
        .iter()
        .enumerate()
        .find(|(_, value)| value.checked_mul(2).is_none())
    {
        return Err(DoubleOverflow { index, value });
    }

    for value in arr.iter_mut() {
        *value *= 2;
    }
    Ok(())
}
