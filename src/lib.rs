//! This crate provides a compressed bitset for `u32` built on the
//! [Roaring bitmap compression scheme](https://roaringbitmap.org/).
//!
//! A `RoaringBitmap` partitions each 32-bit value into a 16-bit high key and a
//! 16-bit low key. Every distinct high key owns one container holding the low
//! keys that share it; each container adaptively picks the cheapest of three
//! representations (a sorted array, a flat 8 KiB bitmap, or a list of runs) for
//! the values it currently holds.
//!
//! # Examples
//!
//! ```rust
//! use roaring::RoaringBitmap;
//!
//! let mut rb = RoaringBitmap::new();
//!
//! rb.insert(2);
//! rb.insert(3);
//! rb.insert(5);
//! rb.insert(7);
//!
//! assert_eq!(rb.len(), 4);
//! ```

mod bitmap;
mod error;
mod util;

pub use bitmap::{IntoIter, Iter, RoaringBitmap};
pub use error::{Error, NonSortedIntegers};
