//! This crate is where I keep the exercises I write while learning a new language's syntax and
//! semantics, redone in Rust.
//!
//! # Purpose
//! Nothing in here is meant to be used for anything. Each module is a small, self-contained
//! demonstration of one feature or one textbook exercise, and none of them depend on each other.
//! Writing them in Rust is mostly a way of finding out which parts of the original exercise
//! survive contact with the borrow checker.
//!
//! # Contents
//! - [`collections`]: the only thing here with any real shape, a singly linked list
//!   ([`IntLinkedList`](collections::linked::IntLinkedList)) plus a length / capacity
//!   [`SliceView`](collections::contiguous::SliceView).
//! - [`challenges`]: the "pointer" exercises, which in Rust become exercises in `&mut`.
//! - [`tour`]: struct literals and dynamic dispatch through a trait.
//!
//! # Error Handling
//! Like the collections I've written before, anything that can fail has a `try_*` variant that
//! returns a [`Result`] and a plain variant that panics with the error's message. The errors
//! themselves are small structs that implement [`Error`](std::error::Error), most of them derived
//! with `derive_more`.
//!
//! Deleting something that isn't in a list or printing an empty one aren't errors though, they're
//! just lists.
//!
//! # Features
//! Every module sits behind a Cargo feature (`linked`, `contiguous`, `challenges`, `tour`) and the
//! demo binary needs `cli`. All of them are on by default.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

#[cfg(feature = "challenges")]
pub mod challenges;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "tour")]
pub mod tour;

pub mod util;
