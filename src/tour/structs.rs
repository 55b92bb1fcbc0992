use std::fmt::{self, Display, Formatter};

/// A point on an integer grid.
///
/// Struct literals have to name every field, so the "only set some of them" form is written with
/// struct update syntax instead:
///
/// ```
/// # use study_collection::tour::structs::Vertex;
/// let v = Vertex { x: 1, ..Default::default() };
/// assert_eq!(v.to_string(), "{1 0}");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub const fn new(x: i64, y: i64) -> Vertex {
        Vertex { x, y }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.x, self.y)
    }
}
