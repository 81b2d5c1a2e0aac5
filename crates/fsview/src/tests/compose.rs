use alloc::{rc::Rc, vec::Vec};
use core::cell::RefCell;

use crate::{Predicate, View, compose};

#[test]
fn compose_replaces_predicate_with_conjunction() {
    let v = View::with_predicate("c / c++", |c: &u8| *c == b'c');
    let symbols = Predicate::new(|c: &u8| matches!(c, b'c' | b'/' | b'+' | b' '));
    let not_space = Predicate::new(|c: &u8| *c != b' ');
    let composed = compose(&v, [symbols, not_space]);
    assert_eq!(composed, "c/c++");
    assert_eq!(composed.data(), v.data());
}

#[test]
fn compose_with_no_filters_accepts_everything() {
    let v = View::with_predicate("abc", |_: &u8| false);
    let composed = compose(&v, Vec::new());
    assert_eq!(composed, "abc");
    assert!(composed.predicate().is_accept_all());
}

#[test]
fn compose_matches_single_conjunction() {
    let text = "The quick brown fox, 1234!";
    let alpha = |c: &u8| c.is_ascii_alphanumeric();
    let lower = |c: &u8| !c.is_ascii_uppercase();
    let composed = compose(&View::new(text), [Predicate::new(alpha), Predicate::new(lower)]);
    let single = View::with_predicate(text, move |c: &u8| alpha(c) && lower(c));
    assert_eq!(composed.to_bstring(), single.to_bstring());
}

#[test]
fn compose_short_circuits_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = {
        let log = Rc::clone(&log);
        Predicate::new(move |c: &u8| {
            log.borrow_mut().push((1, *c));
            *c != b'x'
        })
    };
    let second = {
        let log = Rc::clone(&log);
        Predicate::new(move |c: &u8| {
            log.borrow_mut().push((2, *c));
            true
        })
    };

    let composed = compose(&View::new("ax"), [first, second]);
    assert_eq!(composed.size(), 1);
    assert_eq!(*log.borrow(), [(1, b'a'), (2, b'a'), (1, b'x')]);
}
