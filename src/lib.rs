//! A growable list backed by a circular buffer.
//!
//! `RingList` offers the usual list contract (indexed get and set,
//! insertion and removal at any position, append) while keeping its
//! elements in a ring buffer instead of a linearly shifted array. Insertion
//! and removal at the front cost as little as at the back, and an insertion
//! in the middle may move the elements before the insertion point instead
//! of the ones after it.
//!
//! # Feature Flags
//! The **ringlist** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringlist = "0.1"
//! ```
//!
//! # Capacity
//!
//! A full list grows to `(capacity + 1) * 3 / 2` slots on the next
//! insertion. Growing copies the elements in logical order to the start of
//! the new buffer; it is the only operation that touches every element.
//!
//! # Examples
//! ```
//! use ringlist::RingList;
//!
//! let mut list = RingList::new();
//! assert_eq!(list.capacity(), 10);
//!
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//! assert_eq!(list.len(), 3);
//!
//! assert_eq!(list.pop_front(), Some(0));
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_front(), Some(2));
//! assert_eq!(list.pop_front(), None);
//! ```
//!
//! # Insert & Remove
//! ```
//! use ringlist::{Error, RingList};
//!
//! let mut list = RingList::with_capacity(4);
//!
//! list.push_back(11);
//! list.push_back(13);
//! list.insert(1, 12)?;
//! list.remove(0)?;
//!
//! assert_eq!(list[0], 12);
//! assert_eq!(list[1], 13);
//! assert_eq!(list.remove(2), Err(Error::OutOfRange { index: 2, len: 2 }));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Traversal
//! Borrowing iterators cannot observe a modification. A `Cursor` does not
//! borrow the list and instead checks the modification count on every step.
//!
//! ```
//! use ringlist::RingList;
//!
//! let mut list: RingList<_> = (0..5).collect();
//! let doubled: Vec<_> = list.iter().map(|n| n * 2).collect();
//! assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
//!
//! let mut cursor = list.cursor();
//! cursor.next(&list).unwrap();
//! list.push_front(-1);
//! assert!(cursor.next(&list).is_err());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

/// Range argument accepted by `RingList::drain`.
pub use odds::IndexRange as RangeArgument;

mod cursor;
pub mod error;
mod logic;
mod ringlist;
mod utils;

pub use crate::cursor::Cursor;
pub use crate::error::Error;
pub use crate::ringlist::{Drain, IntoIter, Iter, IterMut, RingList, DEFAULT_CAPACITY};
