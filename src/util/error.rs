use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Produced when a slice range doesn't satisfy `low <= high <= cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Slice bounds [{low}:{high}] out of range with capacity {cap}!")]
pub struct SliceBoundsOutOfRange {
    pub low: usize,
    pub high: usize,
    pub cap: usize,
}

/// Produced when doubling an element would overflow. `index` is the first element that would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Doubling element {index} ({value}) overflows!")]
pub struct DoubleOverflow {
    pub index: usize,
    pub value: i64,
}

/// Every error the exercises can produce, for callers that run more than one of them.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ExerciseError {
    IndexOutOfBounds(IndexOutOfBounds),
    SliceBoundsOutOfRange(SliceBoundsOutOfRange),
    DoubleOverflow(DoubleOverflow),
}
