//! Errors reported by `RingList` and `Cursor`.

use core::fmt;

/// Error returned by the fallible operations of `RingList` and `Cursor`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// The index lies outside the range accepted by the operation.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },
    /// The list was structurally modified behind an in-progress traversal.
    ConcurrentModification {
        /// Modification count the traversal was synchronised with.
        expected: usize,
        /// Modification count observed at the failing step.
        found: usize,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange { index, len } => {
                write!(f, "index out of range: the len is {} but the index is {}", len, index)
            }
            Error::ConcurrentModification { .. } => {
                write!(f, "list was modified during traversal")
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange { index, len } => {
                write!(f, "OutOfRange: index {} with len {}", index, len)
            }
            Error::ConcurrentModification { expected, found } => write!(
                f,
                "ConcurrentModification: expected {} modifications, found {}",
                expected, found
            ),
        }
    }
}
