use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in one direction only, from the head towards the end of the chain.
///
/// Each node owns the node after it, so the list itself only holds the head. Rendering the list
/// (via [`Display`] or [`print`](LinkedList::print)) produces the values joined by `" -> "` and
/// terminated with `"nil"`:
///
/// ```
/// # use study_collection::collections::linked::IntLinkedList;
/// let mut list = IntLinkedList::new();
/// list.add(10);
/// list.add(20);
/// list.add(30);
/// assert_eq!(list.to_string(), "10 -> 20 -> 30 -> nil");
///
/// list.delete(&20);
/// assert_eq!(list.to_string(), "10 -> 30 -> nil");
/// ```
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `add` | `O(n)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `delete` | `O(i)` |
/// | `delete_all` | `O(n)` |
/// | `get` | `O(i)` |
/// | `contains` | `O(n)` |
///
/// There's no tail pointer (nothing but the previous node may refer to a node), so appending walks
/// the whole chain.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

/// The list from the original exercise, which only ever held integers.
pub type IntLinkedList = LinkedList<i64>;

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element in the list, if it exists. This has to walk the
    /// entire list to get there.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Appends the provided value to the end of the list, after walking from the head to the last
    /// node.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn add(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
        *tail_of(&mut self.head) = Some(Node::boxed(value, None));
    }

    /// Adds the provided value to the front of the list, making it the new head.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
        self.head = Some(Node::boxed(value, self.head.take()));
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let (value, next) = self.head.take()?.into_parts();
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.iter_mut().nth(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first element (from head to tail) that is equal to `value` and returns it.
    ///
    /// If the head matches, the second node becomes the new head, otherwise the node before the
    /// match is relinked to the node after it. When nothing matches, the list is left exactly as
    /// it was and [`None`] is returned. Only one element is ever removed, see
    /// [`delete_all`](LinkedList::delete_all) for removing duplicates.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let mut link = &mut self.head;

        // Nodes are taken out of their link to be compared and put back when they don't match, so
        // no borrow of `link` lives past an iteration.
        while let Some(node) = link.take() {
            if node.value == *value {
                let (removed, next) = node.into_parts();
                *link = next;
                self.len -= 1;
                return Some(removed);
            }
            link = &mut link.insert(node).next;
        }

        None
    }

    /// Removes every element equal to `value`, returning the number of elements removed.
    pub fn delete_all(&mut self, value: &T) -> usize {
        let mut removed = 0;
        let mut link = &mut self.head;

        while let Some(node) = link.take() {
            if node.value == *value {
                *link = node.into_parts().1;
                removed += 1;
            } else {
                link = &mut link.insert(node).next;
            }
        }

        self.len -= removed;
        removed
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T: Display> LinkedList<T> {
    /// Writes the rendered list to stdout, followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }
}

/// Follows `next` links from `link` until reaching the terminal one.
fn tail_of<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Only walk to the tail once, rather than once per item like repeated calls to add would.
        let mut link = tail_of(&mut self.head);
        for value in iter {
            self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
            link = &mut link.insert(Node::boxed(value, None)).next;
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink each node before it's dropped, otherwise dropping the head would recurse through
        // every Box in the chain.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "nil")
    }
}
