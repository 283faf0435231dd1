use crate::node::Link;

/// What a subtree hands back to its parent after a removal.
pub(crate) struct Removal<T> {
    /// The subtree the parent should reattach in place of the one it recursed into. This may be
    /// the same root, one of its children, or nothing at all.
    pub(crate) subtree: Link<T>,
    /// The element that was removed, if one compared equal to the target.
    pub(crate) removed: Option<T>,
}

impl<T> Removal<T> {
    pub(crate) fn not_found(subtree: Link<T>) -> Self {
        Self {
            subtree,
            removed: None,
        }
    }

    pub(crate) fn found(subtree: Link<T>, removed: T) -> Self {
        Self {
            subtree,
            removed: Some(removed),
        }
    }
}
