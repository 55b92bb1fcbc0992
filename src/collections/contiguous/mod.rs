//! Contiguous collection types. Currently just [`SliceView`], for exploring how length and
//! capacity behave when reslicing a shared buffer.
#![warn(missing_docs)]

mod slice_view;

#[doc(inline)]
pub use slice_view::*;
