//! The owned nodes of an [`OrderedTree`][crate::OrderedTree] and the recursive algorithms that
//! walk them.
//!
//! Every node owns both of its children outright, so a subtree is just an `Option<Box<Node>>`.
//! Operations that restructure a subtree consume it and hand back the (possibly different) root
//! for the parent to reattach.

use std::cmp::{self, Ordering};
use std::fmt;

use crate::order::TotalOrder;
use crate::util::Removal;

/// A possibly empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// The number of edges on the longest path from this node down to a leaf, so a leaf has a
    /// height of 0. Only used for [`Node::balance_factor`]; nothing rebalances on it.
    height: usize,
}

/// The auxiliary height of a subtree, with an empty subtree one below a leaf.
fn aux_height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height as isize)
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    fn with_children(value: T, left: Link<T>, right: Link<T>) -> Box<Self> {
        let mut node = Node {
            value,
            left,
            right,
            height: 0,
        };
        node.fix_height();
        Box::new(node)
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adjusts the auxiliary height of `self` to be one more than its tallest child's.
    fn fix_height(&mut self) {
        let tallest = aux_height(&self.left).max(aux_height(&self.right));
        self.height = (tallest + 1) as usize;
    }

    /// The difference in auxiliary height between the right and left subtrees.
    pub(crate) fn balance_factor(&self) -> isize {
        aux_height(&self.right) - aux_height(&self.left)
    }

    /// Builds a tree of minimal height from the first `len` elements of `sorted`, which must
    /// yield them in ascending order. The lower median of each range becomes the subtree root.
    pub(crate) fn from_sorted<I>(sorted: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let mid = (len - 1) / 2;
        let left = Self::from_sorted(sorted, mid);
        let value = sorted.next()?;
        let right = Self::from_sorted(sorted, len - mid - 1);
        Some(Self::with_children(value, left, right))
    }

    /// Inserts `value` into this subtree unless an equal element is already present. Returns
    /// whether anything was inserted.
    pub(crate) fn insert<O>(&mut self, value: T, order: &O) -> bool
    where
        O: TotalOrder<T>,
    {
        let inserted = match order.cmp(&value, &self.value) {
            Ordering::Equal => false,
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(value, order),
                None => {
                    self.left = Some(Self::new_boxed(value));
                    true
                }
            },
            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(value, order),
                None => {
                    self.right = Some(Self::new_boxed(value));
                    true
                }
            },
        };

        if inserted {
            self.fix_height();
        }
        inserted
    }

    /// Finds the node holding an element equal to `value` along with its depth, where `depth`
    /// is the depth of `self`.
    pub(crate) fn locate<O>(&self, value: &T, order: &O, depth: usize) -> Option<(&Self, usize)>
    where
        O: TotalOrder<T>,
    {
        match order.cmp(value, &self.value) {
            Ordering::Less => self.left()?.locate(value, order, depth + 1),
            Ordering::Equal => Some((self, depth)),
            Ordering::Greater => self.right()?.locate(value, order, depth + 1),
        }
    }

    /// Removes the element equal to `value` from the subtree rooted at `link`.
    pub(crate) fn remove_from<O>(link: Link<T>, value: &T, order: &O) -> Removal<T>
    where
        O: TotalOrder<T>,
    {
        match link {
            Some(node) => node.remove(value, order),
            None => Removal::not_found(None),
        }
    }

    fn remove<O>(mut self: Box<Self>, value: &T, order: &O) -> Removal<T>
    where
        O: TotalOrder<T>,
    {
        match order.cmp(value, &self.value) {
            Ordering::Less => {
                let removal = Self::remove_from(self.left.take(), value, order);
                self.left = removal.subtree;
                self.reattached(removal.removed)
            }
            Ordering::Greater => {
                let removal = Self::remove_from(self.right.take(), value, order);
                self.right = removal.subtree;
                self.reattached(removal.removed)
            }
            Ordering::Equal => {
                let Node {
                    value: removed,
                    left,
                    right,
                    ..
                } = *self;
                let subtree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    // Two children: the in-order successor takes this node's place. It's the
                    // leftmost node of the right subtree so it never has a left child itself.
                    (Some(left), Some(right)) => {
                        let (successor, right) = right.remove_min();
                        Some(Self::with_children(successor, Some(left), right))
                    }
                };
                Removal::found(subtree, removed)
            }
        }
    }

    /// Wraps `self` back up after one of its children has been replaced.
    fn reattached(mut self: Box<Self>, removed: Option<T>) -> Removal<T> {
        match removed {
            Some(removed) => {
                self.fix_height();
                Removal::found(Some(self), removed)
            }
            None => Removal::not_found(Some(self)),
        }
    }

    /// Detaches the smallest element of this subtree, returning it and what remains.
    fn remove_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            Some(left) => {
                let (min, left) = left.remove_min();
                self.left = left;
                self.fix_height();
                (min, Some(self))
            }
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
        }
    }

    /// The least element greater than or equal to `value`.
    pub(crate) fn ceiling<O>(&self, value: &T, order: &O) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        match order.cmp(&self.value, value) {
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self
                .left()
                .and_then(|n| n.ceiling(value, order))
                .or(Some(&self.value)),
            Ordering::Less => self.right().and_then(|n| n.ceiling(value, order)),
        }
    }

    /// The greatest element less than or equal to `value`.
    pub(crate) fn floor<O>(&self, value: &T, order: &O) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        match order.cmp(&self.value, value) {
            Ordering::Equal => Some(&self.value),
            Ordering::Less => self
                .right()
                .and_then(|n| n.floor(value, order))
                .or(Some(&self.value)),
            Ordering::Greater => self.left().and_then(|n| n.floor(value, order)),
        }
    }

    /// The least element strictly greater than `value`.
    pub(crate) fn higher<O>(&self, value: &T, order: &O) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        match order.cmp(&self.value, value) {
            Ordering::Greater => self
                .left()
                .and_then(|n| n.higher(value, order))
                .or(Some(&self.value)),
            Ordering::Equal | Ordering::Less => {
                self.right().and_then(|n| n.higher(value, order))
            }
        }
    }

    /// The greatest element strictly less than `value`.
    pub(crate) fn lower<O>(&self, value: &T, order: &O) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        match order.cmp(&self.value, value) {
            Ordering::Less => self
                .right()
                .and_then(|n| n.lower(value, order))
                .or(Some(&self.value)),
            Ordering::Equal | Ordering::Greater => {
                self.left().and_then(|n| n.lower(value, order))
            }
        }
    }

    /// Finds the element of rank `index` in this subtree. `visited` counts the elements already
    /// passed over in in-order position, both in earlier subtrees and in this one; when nothing
    /// is found it has grown by the size of this subtree.
    pub(crate) fn select(&self, index: usize, visited: &mut usize) -> Option<&T> {
        if let Some(found) = self.left().and_then(|n| n.select(index, visited)) {
            return Some(found);
        }
        if *visited == index {
            return Some(&self.value);
        }
        *visited += 1;
        self.right().and_then(|n| n.select(index, visited))
    }

    /// Counts the elements of this subtree.
    pub(crate) fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }

    /// Counts the nodes on the longest path down from this node, itself included.
    pub(crate) fn levels(&self) -> usize {
        1 + cmp::max(
            self.left().map_or(0, Self::levels),
            self.right().map_or(0, Self::levels),
        )
    }

    /// Writes one line per node in pre-order, with missing children written as `null`.
    pub(crate) fn write_tree<W>(out: &mut W, node: Option<&Self>, level: usize) -> fmt::Result
    where
        W: fmt::Write,
        T: fmt::Display,
    {
        if level > 0 {
            for _ in 1..level {
                out.write_str("   ")?;
            }
            out.write_str("|--")?;
        }
        match node {
            None => writeln!(out, "null"),
            Some(n) => {
                writeln!(out, "{}", n.value)?;
                Self::write_tree(out, n.left(), level + 1)?;
                Self::write_tree(out, n.right(), level + 1)
            }
        }
    }
}

/// Whether two subtrees have the same shape and equal elements at every position.
pub(crate) fn structurally_eq<T>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool
where
    T: PartialEq,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value
                && structurally_eq(a.left(), b.left())
                && structurally_eq(a.right(), b.right())
        }
        _ => false,
    }
}
