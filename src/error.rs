//! Errors reported by [`OrderedTree`][crate::OrderedTree] operations.
//!
//! Every error here is a caller mistake rather than a transient condition, so nothing in the
//! crate retries or suppresses them.

use std::error;
use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The ways a tree operation can be misused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `first` or `last` was called on a tree with no elements.
    EmptyCollection,
    /// `get` was called with an index that is not below the tree's size.
    IndexOutOfRange {
        /// The rank that was asked for.
        index: usize,
        /// How many elements the tree held at the time.
        size: usize,
    },
    /// A bulk constructor was handed an empty collection.
    EmptyInput,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            EmptyCollection => write!(fmt, "the tree is empty"),
            IndexOutOfRange { index, size } => {
                write!(fmt, "index {} is out of range for a tree of size {}", index, size)
            }
            EmptyInput => write!(fmt, "cannot build a tree from an empty collection"),
        }
    }
}

impl error::Error for Error {}
