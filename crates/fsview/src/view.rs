use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
};

use bstr::{BString, ByteSlice};

use crate::{error::ViewError, predicate::Predicate};

/// A non-owning view over a byte buffer that presents only the bytes its
/// [`Predicate`] accepts.
///
/// Nothing is copied or cached. Every read (`size`, indexing, iteration,
/// comparison, materialization) walks the raw buffer and re-evaluates the
/// predicate, so a side-effecting predicate observes every call.
///
/// Cloning shares the buffer and the predicate handle. [`View::take`] moves
/// the view out and leaves the empty default view in its place.
#[derive(Clone, Default)]
pub struct View<'a> {
    data: &'a [u8],
    predicate: Predicate<'a>,
}

impl<'a> View<'a> {
    /// Views `buf` with the default accept-all predicate.
    pub fn new<B>(buf: &'a B) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
    {
        View {
            data: buf.as_ref(),
            predicate: Predicate::accept_all(),
        }
    }

    /// Views `buf` through `predicate`.
    ///
    /// ```rust
    /// # use fsview::View;
    /// let v = View::with_predicate("hello", |c: &u8| *c != b'l');
    /// assert_eq!(v, "heo");
    /// ```
    pub fn with_predicate<B, P>(buf: &'a B, predicate: P) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
        P: Into<Predicate<'a>>,
    {
        View {
            data: buf.as_ref(),
            predicate: predicate.into(),
        }
    }

    /// Moves the view out, leaving an empty view with the default predicate.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Number of bytes in the raw buffer that the predicate accepts.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.iter().filter(|&c| self.predicate.test(c)).count()
    }

    /// `true` when no byte of the buffer is accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Raw (unfiltered) length of the viewed buffer.
    #[must_use]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// The raw, unfiltered buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The predicate deciding which bytes are visible.
    #[must_use]
    pub fn predicate(&self) -> &Predicate<'a> {
        &self.predicate
    }

    /// Checked indexing into the logical content.
    ///
    /// # Errors
    ///
    /// [`ViewError::NegativeIndex`] for a negative `index`, and
    /// [`ViewError::IndexOutOfRange`] when `index >= self.size()`.
    pub fn at(&self, index: isize) -> Result<u8, ViewError> {
        let Ok(logical) = usize::try_from(index) else {
            return Err(ViewError::NegativeIndex { index });
        };
        self.nth_accepted(logical)
            .copied()
            .ok_or_else(|| ViewError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Copies the logical content into a new owned byte string.
    #[must_use]
    pub fn to_bstring(&self) -> BString {
        BString::from(self.iter().collect::<Vec<u8>>())
    }

    /// Writes the logical content to `out`, with no framing.
    ///
    /// Bytes that are not valid UTF-8 are written as U+FFFD, following the
    /// `bstr` display convention.
    ///
    /// # Errors
    ///
    /// Propagates errors from `out`.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.to_bstring())
    }

    pub(crate) fn nth_accepted(&self, index: usize) -> Option<&'a u8> {
        let data = self.data;
        data.iter().filter(|&c| self.predicate.test(c)).nth(index)
    }
}

impl Index<usize> for View<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        match self.nth_accepted(index) {
            Some(c) => c,
            None => panic!(
                "index out of bounds: the size is {} but the index is {index}",
                self.size()
            ),
        }
    }
}

impl PartialEq for View<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for View<'_> {}

impl PartialEq<[u8]> for View<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<str> for View<'_> {
    fn eq(&self, other: &str) -> bool {
        *self == *other.as_bytes()
    }
}

impl PartialEq<&str> for View<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == *other.as_bytes()
    }
}

impl PartialOrd for View<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for View<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for View<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut size = 0;
        for c in self {
            state.write_u8(c);
            size += 1;
        }
        state.write_usize(size);
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("View")
            .field(&self.to_bstring().as_bstr())
            .finish()
    }
}

impl From<&View<'_>> for BString {
    fn from(view: &View<'_>) -> Self {
        view.to_bstring()
    }
}

impl From<&View<'_>> for Vec<u8> {
    fn from(view: &View<'_>) -> Self {
        view.iter().collect()
    }
}
