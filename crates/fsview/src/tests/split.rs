use alloc::{string::String, vec::Vec};

use rstest::rstest;

use crate::{Predicate, View, compose, split, substr};

fn render(parts: &[View<'_>]) -> Vec<String> {
    parts.iter().map(alloc::string::ToString::to_string).collect()
}

#[test]
fn split_hex_words() {
    let interest = |c: &u8| b"abcdefABCDEF /".contains(c);
    let v = View::with_predicate("0xDEADBEEF / 0xdeadbeef", interest);
    let parts = split(&v, &View::new(" / "));
    assert_eq!(render(&parts), ["DEADBEEF", "deadbeef"]);
}

#[rstest]
#[case("xx", "x", &["", "", ""])]
#[case("xax", "x", &["", "a", ""])]
#[case("a,b,c", ",", &["a", "b", "c"])]
#[case("a,b,", ",", &["a", "b", ""])]
#[case("abc", ",", &["abc"])]
#[case("a::b:::c", "::", &["a", "b", ":c"])]
#[case("aaaa", "aa", &["", "", ""])]
fn split_cases(#[case] text: &str, #[case] token: &str, #[case] expected: &[&str]) {
    let parts = split(&View::new(text), &View::new(token));
    assert_eq!(render(&parts), expected);
}

#[test]
fn split_of_empty_view_returns_the_view() {
    let v = View::with_predicate("x,x", |c: &u8| *c == b'y');
    let parts = split(&v, &View::new(","));
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].data(), v.data());
    assert!(parts[0].is_empty());

    let parts = split(&View::new(""), &View::new(","));
    assert_eq!(parts.len(), 1);
}

#[test]
fn split_on_empty_token_returns_the_view() {
    let v = View::new("abc");
    let parts = split(&v, &View::new(""));
    assert_eq!(render(&parts), ["abc"]);
}

#[test]
fn delimiter_in_rejected_bytes_still_splits() {
    // The view hides every comma, but splitting scans the raw buffer.
    let v = View::with_predicate("a,b,c", |c: &u8| *c != b',');
    assert_eq!(v, "abc");
    let parts = split(&v, &View::new(","));
    assert_eq!(render(&parts), ["a", "b", "c"]);
}

#[test]
fn segments_keep_the_source_predicate() {
    let v = View::with_predicate("a1b2|c3d4", |c: &u8| c.is_ascii_alphabetic() || *c == b'|');
    let parts = split(&v, &View::new("|"));
    assert_eq!(render(&parts), ["ab", "cd"]);
}

#[test]
fn token_uses_its_logical_content() {
    let token = View::with_predicate("-+-", |c: &u8| *c == b'+');
    let parts = split(&View::new("1+2-3"), &token);
    assert_eq!(render(&parts), ["1", "2-3"]);
}

#[test]
fn segments_start_at_their_raw_span() {
    let text = "ab|cd";
    let v = View::new(text);
    let parts = split(&v, &View::new("|"));
    assert_eq!(parts[1].data(), &text.as_bytes()[3..]);
    assert_eq!(parts[1].size(), 2);
}

#[test]
fn segments_can_be_derived_further() {
    let v = View::new("alpha beta,gamma");
    let parts = split(&v, &View::new(","));
    let words = split(&parts[0], &View::new(" "));
    assert_eq!(render(&words), ["alpha", "beta"]);
    assert_eq!(substr(&words[1], 1, 2).unwrap(), "et");
}

#[test]
fn segments_do_not_reach_past_their_span() {
    let v = View::new("a,b,c");
    let token = View::new(",");
    let parts = split(&v, &token);
    assert_eq!(parts[0].length(), 1);
    assert_eq!(parts[1].data(), b"b");

    for part in &parts {
        let again = split(part, &token);
        assert_eq!(again.len(), 1);
        assert_eq!(again[0], *part);
    }
    assert_eq!(compose(&parts[0], [Predicate::accept_all()]), "a");
}
