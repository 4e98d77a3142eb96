use std::error::Error as StdError;
use std::fmt;

/// Errors returned by the strict (non-idempotent) variants of `insert`/`remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `insert_strict` was called with a value that is already present.
    AlreadySet(u32),
    /// `remove_strict` was called with a value that is not present.
    NotSet(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadySet(value) => write!(f, "value {} is already set", value),
            Error::NotSet(value) => write!(f, "value {} is not set", value),
        }
    }
}

impl StdError for Error {}

/// The result of calling [`RoaringBitmap::append`] or [`RoaringBitmap::from_sorted_iter`]
/// with a non-sorted (or non-strictly-increasing) iterator.
///
/// [`RoaringBitmap::append`]: crate::RoaringBitmap::append
/// [`RoaringBitmap::from_sorted_iter`]: crate::RoaringBitmap::from_sorted_iter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonSortedIntegers {
    pub(crate) valid_until: u64,
}

impl NonSortedIntegers {
    /// Returns the number of elements that were successfully appended before the
    /// out-of-order (or duplicate) element was encountered.
    pub fn valid_until(&self) -> u64 {
        self.valid_until
    }
}

impl fmt::Display for NonSortedIntegers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elements were either not sorted or not unique, only first {} elements are valid",
            self.valid_until
        )
    }
}

impl StdError for NonSortedIntegers {}
