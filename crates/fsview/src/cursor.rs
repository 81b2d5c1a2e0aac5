//! Bidirectional traversal of a view's logical content.
//!
//! [`Cursor`] is the positional protocol: it rests on a raw buffer offset
//! and can be moved in both directions, skipping bytes the view's predicate
//! rejects. [`RevCursor`] adapts a cursor to run backwards. [`Iter`] is the
//! ordinary Rust iterator for the same content and is what the comparison
//! operators and `for` loops use.

use core::{fmt, iter::FusedIterator};

use crate::view::View;

/// A bidirectional cursor over the logical content of a [`View`].
///
/// Outside of the end position a cursor only ever rests on a byte the
/// predicate accepts. Two cursors are equal when they rest on the same raw
/// byte of the same storage, regardless of which view they came from.
#[derive(Clone, Copy)]
pub struct Cursor<'v, 'a> {
    view: &'v View<'a>,
    pos: usize,
}

impl<'v, 'a> Cursor<'v, 'a> {
    /// Places a cursor at raw offset `pos`, moving forward to the next
    /// accepted byte (or the end) if `pos` itself is rejected. Offsets past
    /// the buffer are clamped to the end.
    #[must_use]
    pub fn new(view: &'v View<'a>, pos: usize) -> Self {
        let mut cursor = Cursor {
            view,
            pos: pos.min(view.length()),
        };
        cursor.skip_rejected();
        cursor
    }

    fn end_of(view: &'v View<'a>) -> Self {
        Cursor {
            view,
            pos: view.length(),
        }
    }

    /// The view this cursor walks.
    #[must_use]
    pub fn view(&self) -> &'v View<'a> {
        self.view
    }

    /// Raw offset into the view's buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// `true` at the one-past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.pos == self.view.length()
    }

    /// The byte under the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<u8> {
        self.view.data().get(self.pos).copied()
    }

    /// Steps to the next accepted byte, or to the end. Does nothing at the
    /// end.
    pub fn advance(&mut self) -> &mut Self {
        if !self.is_end() {
            self.pos += 1;
            self.skip_rejected();
        }
        self
    }

    /// Steps back to the previous accepted byte.
    ///
    /// Retreating from the first accepted byte is a caller error: the cursor
    /// is left where it is (and debug builds assert).
    pub fn retreat(&mut self) -> &mut Self {
        let prev = self.prev_accepted();
        debug_assert!(prev.is_some(), "retreated past the first accepted byte");
        if let Some(pos) = prev {
            self.pos = pos;
        }
        self
    }

    fn accepts(&self, pos: usize) -> bool {
        self.view.predicate().test(&self.view.data()[pos])
    }

    fn skip_rejected(&mut self) {
        while !self.is_end() && !self.accepts(self.pos) {
            self.pos += 1;
        }
    }

    fn prev_accepted(&self) -> Option<usize> {
        (0..self.pos).rev().find(|&pos| self.accepts(pos))
    }

    fn address(&self) -> usize {
        self.view.data().as_ptr().addr() + self.pos
    }
}

impl PartialEq for Cursor<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for Cursor<'_, '_> {}

impl fmt::Debug for Cursor<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("byte", &self.get().map(char::from))
            .finish()
    }
}

/// Reverse adaptor over a [`Cursor`].
///
/// A reverse cursor reads the accepted byte just before its base, so
/// `rbegin` wraps `end` and `rend` wraps `begin`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RevCursor<'v, 'a> {
    base: Cursor<'v, 'a>,
}

impl<'v, 'a> RevCursor<'v, 'a> {
    /// Wraps a forward cursor.
    #[must_use]
    pub fn new(base: Cursor<'v, 'a>) -> Self {
        RevCursor { base }
    }

    /// The adapted forward cursor.
    #[must_use]
    pub fn base(&self) -> Cursor<'v, 'a> {
        self.base
    }

    /// The accepted byte just before the base, or `None` at `rend`.
    #[must_use]
    pub fn get(&self) -> Option<u8> {
        self.base
            .prev_accepted()
            .map(|pos| self.base.view.data()[pos])
    }

    /// Moves towards the front of the buffer.
    pub fn advance(&mut self) -> &mut Self {
        self.base.retreat();
        self
    }

    /// Moves towards the back of the buffer.
    pub fn retreat(&mut self) -> &mut Self {
        self.base.advance();
        self
    }
}

impl fmt::Debug for RevCursor<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.base).finish()
    }
}

/// Double-ended iterator over the logical bytes of a [`View`].
#[derive(Clone)]
pub struct Iter<'v, 'a> {
    view: &'v View<'a>,
    front: usize,
    back: usize,
}

impl<'v, 'a> Iter<'v, 'a> {
    fn new(view: &'v View<'a>) -> Self {
        Iter {
            view,
            front: 0,
            back: view.length(),
        }
    }
}

impl Iterator for Iter<'_, '_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let data = self.view.data();
        while self.front < self.back {
            let c = &data[self.front];
            self.front += 1;
            if self.view.predicate().test(c) {
                return Some(*c);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl DoubleEndedIterator for Iter<'_, '_> {
    fn next_back(&mut self) -> Option<u8> {
        let data = self.view.data();
        while self.front < self.back {
            self.back -= 1;
            let c = &data[self.back];
            if self.view.predicate().test(c) {
                return Some(*c);
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_, '_> {}

impl fmt::Debug for Iter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<'a> View<'a> {
    /// Iterates over the logical bytes.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter::new(self)
    }

    /// Cursor on the first accepted byte, or [`View::end`] if there is none.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last raw byte.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, 'a> {
        Cursor::end_of(self)
    }

    /// Same as [`View::begin`]; views are always read-only.
    #[must_use]
    pub fn cbegin(&self) -> Cursor<'_, 'a> {
        self.begin()
    }

    /// Same as [`View::end`]; views are always read-only.
    #[must_use]
    pub fn cend(&self) -> Cursor<'_, 'a> {
        self.end()
    }

    /// Reverse cursor on the last accepted byte.
    #[must_use]
    pub fn rbegin(&self) -> RevCursor<'_, 'a> {
        RevCursor::new(self.end())
    }

    /// Reverse cursor one before the first accepted byte.
    #[must_use]
    pub fn rend(&self) -> RevCursor<'_, 'a> {
        RevCursor::new(self.begin())
    }

    /// Same as [`View::rbegin`].
    #[must_use]
    pub fn crbegin(&self) -> RevCursor<'_, 'a> {
        self.rbegin()
    }

    /// Same as [`View::rend`].
    #[must_use]
    pub fn crend(&self) -> RevCursor<'_, 'a> {
        self.rend()
    }
}

impl<'v, 'a> IntoIterator for &'v View<'a> {
    type Item = u8;
    type IntoIter = Iter<'v, 'a>;

    fn into_iter(self) -> Iter<'v, 'a> {
        self.iter()
    }
}
