//! Zero-copy filtered views over borrowed byte strings.
//!
//! A [`View`] pairs a borrowed buffer with a [`Predicate`] and presents only
//! the bytes the predicate accepts. Nothing is copied and nothing is cached:
//! size, indexing, iteration, and comparison all re-run the predicate over
//! the raw buffer. [`compose`], [`split`], and [`substr`] derive new views
//! over the same storage.
//!
//! ```rust
//! use fsview::{split, View};
//!
//! let hex = |c: &u8| b"abcdefABCDEF /".contains(c);
//! let v = View::with_predicate("0xDEADBEEF / 0xdeadbeef", hex);
//! let parts = split(&v, &View::new(" / "));
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0], "DEADBEEF");
//! assert_eq!(parts[1], "deadbeef");
//! ```
//!
//! Bytes are raw 8-bit code units; no Unicode decoding is performed.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod derive;
mod error;
mod predicate;
mod trace;
mod view;

#[cfg(any(test, feature = "serde"))]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, Iter, RevCursor};
pub use derive::{compose, split, substr};
pub use error::{ErrorKind, ViewError};
pub use predicate::Predicate;
pub use view::View;
