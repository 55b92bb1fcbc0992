// NOTE: Every link owns the node after it, so Box<T> is all that's needed here. There's no tail
// pointer and no back links, which means there's nothing for a cycle to be made out of.

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }

    /// Consumes the node, returning its value and severing it from the rest of the chain.
    pub fn into_parts(self: Box<Self>) -> (T, Link<T>) {
        let Node { value, next } = *self;
        (value, next)
    }
}
