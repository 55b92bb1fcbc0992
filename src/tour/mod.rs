//! Tour-style examples of the language's type system: struct literals and dispatch through a
//! trait object.

pub mod interfaces;
pub mod structs;

mod tests;
