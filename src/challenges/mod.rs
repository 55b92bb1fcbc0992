//! Small "code challenge" exercises.
//!
//! The originals were about passing pointers into functions so that the caller's values change.
//! In Rust that's just `&mut`, so most of the challenge left is in what happens when something
//! goes wrong part way through.

pub mod pointers;
