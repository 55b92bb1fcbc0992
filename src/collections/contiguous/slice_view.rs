use std::fmt::{self, Display, Formatter};
use std::ops::{Bound, Deref, RangeBounds};

#[doc(inline)]
pub use crate::util::error::SliceBoundsOutOfRange;
use crate::util::result::ResultExtension;

/// A window over part of a borrowed buffer, which remembers how much of the buffer lies beyond its
/// end.
///
/// A regular Rust slice forgets everything outside of its bounds, so `&s[..0]` can never be grown
/// back into `&s[..4]`. A SliceView keeps the rest of the buffer (from its start onwards) as its
/// capacity, and a reslice may extend up to that capacity rather than just the current length.
/// Moving the start forward gives up the capacity before it for good.
///
/// ```
/// # use study_collection::collections::contiguous::SliceView;
/// let primes = [2, 3, 5, 7, 11, 13];
/// let s = SliceView::new(&primes);
/// let s = s.reslice(..0);
/// assert_eq!(s.describe(), "len=0 cap=6 []");
/// let s = s.reslice(..4);
/// assert_eq!(s.describe(), "len=4 cap=6 [2 3 5 7]");
/// let s = s.reslice(2..);
/// assert_eq!(s.describe(), "len=2 cap=4 [5 7]");
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SliceView<'a, T> {
    backing: &'a [T],
    start: usize,
    len: usize,
}

impl<'a, T> SliceView<'a, T> {
    /// Creates a view over all of `backing`, so that both the length and capacity are
    /// `backing.len()`.
    pub const fn new(backing: &'a [T]) -> SliceView<'a, T> {
        SliceView {
            backing,
            start: 0,
            len: backing.len(),
        }
    }

    /// Returns the number of elements visible through the view.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view contains no elements. It may still have capacity.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements between the start of the view and the end of the backing
    /// buffer.
    pub const fn cap(&self) -> usize {
        self.backing.len() - self.start
    }

    /// Returns the visible elements as a regular slice, with the lifetime of the backing buffer.
    pub fn as_slice(&self) -> &'a [T] {
        &self.backing[self.start..self.start + self.len]
    }

    /// Creates a new view from `range`, relative to this one, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the range doesn't satisfy `low <= high <= cap`.
    pub fn reslice<R: RangeBounds<usize>>(&self, range: R) -> SliceView<'a, T> {
        self.try_reslice(range).throw()
    }

    /// Creates a new view from `range`, relative to this one, returning an [`Err`] on a failure
    /// rather than panicking.
    ///
    /// An unbounded start is `0` and an unbounded end is the current length (not the capacity), so
    /// `view.try_reslice(..)` is always a copy of the view. The end may exceed the current length
    /// as long as it stays within the capacity.
    pub fn try_reslice<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<SliceView<'a, T>, SliceBoundsOutOfRange> {
        let low = match range.start_bound() {
            Bound::Included(&index) => index,
            Bound::Excluded(&index) => index.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let high = match range.end_bound() {
            Bound::Included(&index) => index.saturating_add(1),
            Bound::Excluded(&index) => index,
            Bound::Unbounded => self.len,
        };

        let cap = self.cap();
        if low > high || high > cap {
            return Err(SliceBoundsOutOfRange { low, high, cap });
        }

        Ok(SliceView {
            backing: self.backing,
            start: self.start + low,
            len: high - low,
        })
    }

    /// Renders the view along with its length and capacity, as `len=<len> cap=<cap> [a b c]`.
    pub fn describe(&self) -> String
    where
        T: Display,
    {
        format!("len={} cap={} {}", self.len(), self.cap(), self)
    }
}

impl<'a, T> Deref for SliceView<'a, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a, T> Clone for SliceView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceView<'a, T> {}

impl<'a, T> From<&'a [T]> for SliceView<'a, T> {
    fn from(value: &'a [T]) -> Self {
        SliceView::new(value)
    }
}

impl<'a, T: Display> Display for SliceView<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
