use alloc::{rc::Rc, vec::Vec};
use core::{fmt, ptr};

/// A boolean test over one byte, deciding whether it belongs to a view's
/// logical content.
///
/// Predicates are shared handles: cloning one clones the handle, not the
/// closure, so every clone observes the same captured state. They may close
/// over external state (including interior-mutable counters) and are invoked
/// again at every observation point; results are never memoized.
///
/// The byte is passed by reference into the viewed buffer. Positional
/// predicates such as [`Predicate::within`] rely on that reference pointing
/// into the buffer, so calling a predicate with a copied byte only gives a
/// meaningful answer for predicates that look at the value.
#[derive(Clone, Default)]
pub struct Predicate<'a>(Inner<'a>);

#[derive(Clone, Default)]
enum Inner<'a> {
    #[default]
    AcceptAll,
    Custom(Rc<dyn Fn(&u8) -> bool + 'a>),
}

impl<'a> Predicate<'a> {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&u8) -> bool + 'a,
    {
        Predicate(Inner::Custom(Rc::new(f)))
    }

    /// The default predicate: every byte is accepted.
    #[must_use]
    pub fn accept_all() -> Self {
        Predicate(Inner::AcceptAll)
    }

    /// `true` for the default predicate built by [`Predicate::accept_all`] or
    /// [`Default`]. A custom closure that happens to accept everything is not
    /// recognized.
    #[must_use]
    pub fn is_accept_all(&self) -> bool {
        matches!(self.0, Inner::AcceptAll)
    }

    /// Evaluates the predicate.
    #[inline]
    #[must_use]
    pub fn test(&self, c: &u8) -> bool {
        match &self.0 {
            Inner::AcceptAll => true,
            Inner::Custom(f) => f(c),
        }
    }

    /// Logical AND of `predicates`, evaluated in order and stopping at the
    /// first rejection. An empty sequence accepts everything.
    pub fn all<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<'a>>,
    {
        let predicates: Vec<_> = predicates
            .into_iter()
            .filter(|p| !p.is_accept_all())
            .collect();
        match predicates.len() {
            0 => Predicate::accept_all(),
            1 => predicates.into_iter().next().unwrap_or_default(),
            _ => Predicate::new(move |c| predicates.iter().all(|p| p.test(c))),
        }
    }

    /// Restricts `self` to bytes stored inside `span`.
    ///
    /// The bounds are captured as addresses when this is called, so the
    /// result accepts a byte only if the reference it is given points into
    /// `span` and `self` accepts it. The position check runs first; `self` is
    /// never invoked for bytes outside the span.
    #[must_use]
    pub fn within(self, span: &[u8]) -> Self {
        let bounds = span.as_ptr_range();
        let (start, end) = (bounds.start.addr(), bounds.end.addr());
        Predicate::new(move |c| {
            let at = ptr::from_ref(c).addr();
            start <= at && at < end && self.test(c)
        })
    }
}

impl<'a, F> From<F> for Predicate<'a>
where
    F: Fn(&u8) -> bool + 'a,
{
    fn from(f: F) -> Self {
        Predicate::new(f)
    }
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Inner::AcceptAll => f.write_str("Predicate(AcceptAll)"),
            Inner::Custom(_) => f.write_str("Predicate(<closure>)"),
        }
    }
}
