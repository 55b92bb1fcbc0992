//! Linked collection types. Revolves around [`LinkedList`] and its integer instantiation,
//! [`IntLinkedList`].

pub mod list;

#[doc(inline)]
pub use list::{IntLinkedList, LinkedList};
