//! The public ordered-set API.

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{InOrder, PostOrder, PreOrder};
use crate::node::{self, Link, Node};
use crate::order::{Natural, TotalOrder};

/// An ordered set of distinct elements stored in an unbalanced Binary Search Tree.
///
/// Elements are arranged by the tree's [`TotalOrder`], which is the element type's [`Ord`]
/// implementation unless another one is supplied with [`OrderedTree::with_order`]. Two elements
/// that compare [`Equal`][Ordering::Equal] are considered the same element and only the first one
/// added is kept.
///
/// No rebalancing is ever done, so the shape of the tree (and therefore the cost of point
/// queries) depends on insertion order. [`OrderedTree::from_collection`] builds a tree of minimal
/// height.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let mut tree = OrderedTree::from_collection(vec![9, 1, 7, 3, 11, 5, 6]).unwrap();
/// assert_eq!(tree.to_string(), "[1, 3, 5, 6, 7, 9, 11]");
///
/// assert!(tree.add(12));
/// assert_eq!(tree.len(), 8);
///
/// assert!(!tree.remove(&4));
/// assert_eq!(tree.get(3), Ok(&6));
///
/// assert_eq!(tree.ceiling(&4), Some(&5));
/// assert_eq!(tree.lower(&1), None);
/// ```
pub struct OrderedTree<T, O = Natural> {
    root: Link<T>,
    order: O,
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty tree ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_order(Natural)
    }

    /// Builds a tree of minimal height holding the distinct elements of `items`, ordered by `T`'s
    /// [`Ord`] implementation.
    ///
    /// Returns [`Error::EmptyInput`] when `items` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let tree = OrderedTree::from_collection(1..=7).unwrap();
    /// assert_eq!(tree.height(), 3);
    ///
    /// assert_eq!(OrderedTree::<i32>::from_collection(vec![]), Err(Error::EmptyInput));
    /// ```
    pub fn from_collection<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        Self::from_collection_with_order(items, Natural)
    }
}

impl<T, O> OrderedTree<T, O> {
    /// Generates a new, empty tree ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self { root: None, order }
    }

    /// Builds a tree of minimal height holding the distinct elements of `items`, ordered by
    /// `order`. When several elements compare equal, the first of them is kept.
    ///
    /// Returns [`Error::EmptyInput`] when `items` is empty.
    pub fn from_collection_with_order<I>(items: I, order: O) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        O: TotalOrder<T>,
    {
        let mut items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(Error::EmptyInput);
        }
        let received = items.len();

        items.sort_by(|a, b| order.cmp(a, b));
        // The sort is stable so of each run of equal elements, the first one received survives.
        items.dedup_by(|later, earlier| order.cmp(earlier, later) == Ordering::Equal);

        let len = items.len();
        let root = Node::from_sorted(&mut items.into_iter(), len);
        let tree = Self { root, order };
        debug!(
            "built tree of {} elements ({} received) with height {}",
            len,
            received,
            tree.height()
        );
        Ok(tree)
    }

    /// Adds `value` to the tree unless an equal element is already present. Returns whether the
    /// tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool
    where
        O: TotalOrder<T>,
    {
        let added = match self.root.as_deref_mut() {
            Some(root) => root.insert(value, &self.order),
            None => {
                self.root = Some(Node::new_boxed(value));
                true
            }
        };
        trace!("add: added = {}", added);
        added
    }

    /// Whether the tree holds an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        O: TotalOrder<T>,
    {
        self.locate(value).is_some()
    }

    /// Removes the element equal to `value`. Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(5);
    ///
    /// assert!(!tree.remove(&4));
    /// assert!(tree.remove(&5));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        O: TotalOrder<T>,
    {
        self.take(value).is_some()
    }

    /// Removes the element equal to `value` and returns it, if there was one.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest element of
    /// its right subtree.
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        O: TotalOrder<T>,
    {
        let removal = Node::remove_from(self.root.take(), value, &self.order);
        self.root = removal.subtree;
        trace!("remove: found = {}", removal.removed.is_some());
        removal.removed
    }

    /// The smallest element.
    ///
    /// Returns [`Error::EmptyCollection`] when the tree is empty.
    pub fn first(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyCollection)?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest element.
    ///
    /// Returns [`Error::EmptyCollection`] when the tree is empty.
    pub fn last(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyCollection)?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.value)
    }

    /// The element of rank `index`, i.e. the `index`-th smallest element counting from 0.
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index` is not less than [`OrderedTree::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let tree = OrderedTree::from_collection(vec![30, 10, 20]).unwrap();
    /// assert_eq!(tree.get(0), Ok(&10));
    /// assert_eq!(tree.get(2), Ok(&30));
    /// assert_eq!(tree.get(3), Err(Error::IndexOutOfRange { index: 3, size: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let mut visited = 0;
        self.root
            .as_deref()
            .and_then(|root| root.select(index, &mut visited))
            // Nothing found means every element was counted.
            .ok_or(Error::IndexOutOfRange {
                index,
                size: visited,
            })
    }

    /// The least element greater than or equal to `value`.
    pub fn ceiling(&self, value: &T) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        self.root().and_then(|n| n.ceiling(value, &self.order))
    }

    /// The greatest element less than or equal to `value`.
    pub fn floor(&self, value: &T) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        self.root().and_then(|n| n.floor(value, &self.order))
    }

    /// The least element strictly greater than `value`.
    pub fn higher(&self, value: &T) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        self.root().and_then(|n| n.higher(value, &self.order))
    }

    /// The greatest element strictly less than `value`.
    pub fn lower(&self, value: &T) -> Option<&T>
    where
        O: TotalOrder<T>,
    {
        self.root().and_then(|n| n.lower(value, &self.order))
    }

    /// How many elements are in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::levels)
    }

    /// How far below the root the element equal to `value` sits. The root is at depth 0.
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        O: TotalOrder<T>,
    {
        self.locate(value).map(|(_, depth)| depth)
    }

    /// The balance factor of the node holding the element equal to `value`: the height of its
    /// right subtree minus the height of its left subtree.
    ///
    /// This is purely diagnostic. The tree never rebalances.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in [1, 2, 3] {
    ///     tree.add(x);
    /// }
    ///
    /// assert_eq!(tree.balance_factor(&1), Some(2));
    /// assert_eq!(tree.balance_factor(&3), Some(0));
    /// assert_eq!(tree.balance_factor(&4), None);
    /// ```
    pub fn balance_factor(&self, value: &T) -> Option<isize>
    where
        O: TotalOrder<T>,
    {
        self.locate(value).map(|(node, _)| node.balance_factor())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        debug!("clearing tree");
        self.dismantle();
    }

    /// An iterator over the elements in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// An iterator over the elements in pre-order.
    pub fn preorder_iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// An iterator over the elements in post-order.
    pub fn postorder_iter(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Renders the shape of the tree, one node per line in pre-order. A child of a node at depth
    /// `d` is indented by `d` blocks of three spaces and prefixed with `|--`. Missing children are
    /// rendered as `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(2);
    /// tree.add(1);
    ///
    /// assert_eq!(
    ///     tree.to_tree_string(),
    ///     "2\n|--1\n   |--null\n   |--null\n|--null\n"
    /// );
    /// ```
    pub fn to_tree_string(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        // Writing to a `String` can't fail.
        let _ = Node::write_tree(&mut out, self.root(), 0);
        out
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn locate(&self, value: &T) -> Option<(&Node<T>, usize)>
    where
        O: TotalOrder<T>,
    {
        self.root()?.locate(value, &self.order, 0)
    }

    /// Drops every node using an explicit stack so that no tree is too tall to drop.
    fn dismantle(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T, O> Drop for OrderedTree<T, O> {
    fn drop(&mut self) {
        self.dismantle();
    }
}

impl<T, O: Default> Default for OrderedTree<T, O> {
    fn default() -> Self {
        Self::with_order(O::default())
    }
}

impl<T: Clone, O: Clone> Clone for OrderedTree<T, O> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            order: self.order.clone(),
        }
    }
}

/// Trees are equal when they have the same shape and equal elements in the same positions. Two
/// trees holding the same elements in different shapes are not equal.
impl<T: PartialEq, O> PartialEq for OrderedTree<T, O> {
    fn eq(&self, other: &Self) -> bool {
        node::structurally_eq(self.root(), other.root())
    }
}

impl<T: Eq, O> Eq for OrderedTree<T, O> {}

/// Lists the elements in ascending order as `[e1, e2, ..., en]`.
impl<T: fmt::Display, O> fmt::Display for OrderedTree<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug, O> fmt::Debug for OrderedTree<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, O> IntoIterator for &'a OrderedTree<T, O> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for OrderedTree<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
