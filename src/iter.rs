//! Lazy traversals of an [`OrderedTree`][crate::OrderedTree].
//!
//! Each iterator keeps an explicit stack of the nodes it still has to come back to, so a step
//! never recurses and never re-walks the tree from the root. The stack holds at most one entry
//! per level of the tree.
//!
//! All three are single pass. Once one returns `None` it keeps returning `None`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for x in [4, 2, 6, 1, 3] {
//!     tree.add(x);
//! }
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 6]);
//! assert_eq!(tree.preorder_iter().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6]);
//! assert_eq!(tree.postorder_iter().copied().collect::<Vec<_>>(), [1, 3, 2, 6, 4]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::node::Node;

/// An iterator over the elements of a tree in ascending order.
///
/// Created by [`OrderedTree::iter`][crate::OrderedTree::iter].
pub struct InOrder<'a, T> {
    /// Ancestors whose element and right subtree are still pending. The top of the stack is the
    /// smallest element not yet yielded.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// An iterator over the elements of a tree in pre-order: each node before its left subtree,
/// then its right subtree.
///
/// Created by [`OrderedTree::preorder_iter`][crate::OrderedTree::preorder_iter].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// An iterator over the elements of a tree in post-order: both subtrees of a node, left first,
/// before the node itself.
///
/// Created by [`OrderedTree::postorder_iter`][crate::OrderedTree::postorder_iter].
pub struct PostOrder<'a, T> {
    /// The path from the root to the next node to yield.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend(root);
        iter
    }

    /// Pushes the path from `node` down to the first node post-order would visit in its
    /// subtree, preferring left children and taking a right child only when there's no left.
    fn descend(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left().or_else(|| n.right());
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(&parent) = self.stack.last() {
            // Finishing a left subtree means the parent's right subtree comes next. Finishing a
            // right subtree means the parent itself is next and it's already on top.
            if parent.left().map_or(false, |left| ptr::eq(left, node)) {
                self.descend(parent.right());
            }
        }
        Some(&node.value)
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

macro_rules! debug_pending {
    ($($iter:ident),*) => {$(
        impl<T: fmt::Debug> fmt::Debug for $iter<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($iter))
                    .field("pending", &self.stack.iter().map(|n| &n.value).collect::<Vec<_>>())
                    .finish()
            }
        }
    )*};
}

debug_pending!(InOrder, PreOrder, PostOrder);
