//! Operations that build new views out of existing ones.
//!
//! None of them copy bytes. A derived view borrows the same storage as its
//! source and narrows what is visible by wrapping the source predicate.

use alloc::{vec, vec::Vec};
use core::ops::Range;

use bstr::ByteSlice;

use crate::{error::ViewError, predicate::Predicate, trace::trace, view::View};

/// Views the same buffer as `view` through the conjunction of `filters`.
///
/// Filters run in the order given and stop at the first rejection. The
/// source view's own predicate is replaced, not combined. An empty list
/// accepts every byte.
///
/// ```rust
/// # use fsview::{compose, Predicate, View};
/// let v = View::new("c / c++");
/// let symbols = Predicate::new(|c: &u8| matches!(c, b'c' | b'+' | b'/' | b' '));
/// let no_space = Predicate::new(|c: &u8| *c != b' ');
/// assert_eq!(compose(&v, [symbols, no_space]), "c/c++");
/// ```
pub fn compose<'a, I>(view: &View<'a>, filters: I) -> View<'a>
where
    I: IntoIterator<Item = Predicate<'a>>,
{
    View::with_predicate(view.data(), Predicate::all(filters))
}

/// Splits `view` on every non-overlapping occurrence of the logical content
/// of `token`.
///
/// Delimiters are searched for in the raw buffer, left to right, so a
/// delimiter made partly of bytes the view rejects still splits it. Each
/// segment keeps the source predicate and is additionally bounded to its raw
/// span. A buffer that ends in a delimiter yields a trailing empty segment.
///
/// A logically empty `view`, or an empty delimiter, yields `view` itself as
/// the only element.
pub fn split<'a>(view: &View<'a>, token: &View<'_>) -> Vec<View<'a>> {
    if view.is_empty() {
        return vec![view.clone()];
    }
    let delimiter = token.to_bstring();
    if delimiter.is_empty() {
        return vec![view.clone()];
    }

    let data = view.data();
    let mut segments = Vec::new();
    let mut scan = 0;
    while let Some(offset) = data[scan..].find(&delimiter) {
        let found = scan + offset;
        segments.push(bounded(view, scan..found));
        scan = found + delimiter.len();
    }
    segments.push(bounded(view, scan..data.len()));

    trace!(
        segments = segments.len(),
        delimiter_len = delimiter.len(),
        "split view"
    );
    segments
}

/// Views up to `count` logical bytes of `view`, starting at logical `pos`.
///
/// A `count` of zero or less takes everything from `pos` to the end; a
/// `count` reaching past the end is clamped. The result's raw buffer runs
/// from the byte holding logical position `pos` to the last byte taken.
///
/// ```rust
/// # use fsview::{substr, View};
/// let v = View::new("Full Substring Test");
/// assert_eq!(substr(&v, 5, -1).unwrap(), "Substring Test");
/// assert_eq!(substr(&v, 5, 9).unwrap(), "Substring");
/// ```
///
/// # Errors
///
/// [`ViewError::PositionOutOfRange`] unless `0 <= pos <= view.size()`.
pub fn substr<'a>(view: &View<'a>, pos: isize, count: isize) -> Result<View<'a>, ViewError> {
    let size = view.size();
    let start = usize::try_from(pos)
        .ok()
        .filter(|&start| start <= size)
        .ok_or(ViewError::PositionOutOfRange { pos, size })?;

    let remaining = size - start;
    let len = match usize::try_from(count) {
        Ok(0) | Err(_) => remaining,
        Ok(count) => count.min(remaining),
    };

    let data = view.data();
    let predicate = view.predicate();
    let mut accepted = data
        .iter()
        .enumerate()
        .filter(|&(_, c)| predicate.test(c))
        .map(|(i, _)| i);
    let raw_start = accepted.nth(start).unwrap_or(data.len());
    let raw_end = match len {
        0 => raw_start,
        1 => (raw_start + 1).min(data.len()),
        n => accepted.nth(n - 2).map_or(data.len(), |last| last + 1),
    };

    trace!(pos = start, len, raw_start, raw_end, "substr view");
    Ok(bounded(view, raw_start..raw_end))
}

/// `view` restricted to the raw byte range `raw`. The result borrows exactly
/// that range, so later derivations never see bytes past it.
fn bounded<'a>(view: &View<'a>, raw: Range<usize>) -> View<'a> {
    let span = &view.data()[raw];
    View::with_predicate(span, view.predicate().clone().within(span))
}
