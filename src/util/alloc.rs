#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value which counts how many times it (or any clone of it) has been dropped, so tests can
/// check that nodes are released exactly once.
#[derive(Debug, Clone)]
pub(crate) struct CountedDrop {
    pub id: usize,
    pub drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(id: usize, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
