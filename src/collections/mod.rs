//! Collection types.
//!
//! # Purpose
//! These are the exercises that are actually data structures: a singly linked list and a view
//! type that mimics how length and capacity behave for a slice of a larger buffer.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
