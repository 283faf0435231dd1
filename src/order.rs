//! The ordering a tree sorts its elements by.
//!
//! A tree is parameterised over a [`TotalOrder`]. By default that is [`Natural`], which defers to
//! the element's [`Ord`] implementation, but any closure of the form `Fn(&T, &T) -> Ordering`
//! works too:
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! // Longest words first.
//! let mut tree = OrderedTree::with_order(|a: &&str, b: &&str| b.len().cmp(&a.len()));
//! tree.add("fig");
//! tree.add("banana");
//! tree.add("kiwi");
//!
//! assert_eq!(tree.to_string(), "[banana, kiwi, fig]");
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
///
/// It is a logic error for the order to be inconsistent (for example, not transitive) or to change
/// while elements are stored in a tree. The tree won't misbehave in a memory-unsafe way but
/// lookups may miss elements that are present.
pub trait TotalOrder<T: ?Sized> {
    /// Compares `this` to `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;
}

/// The ordering given by `T`'s [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> TotalOrder<T> for Natural {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}
