mod double;
mod swap;
mod tests;

pub use double::*;
pub use swap::*;
