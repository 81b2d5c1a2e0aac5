#![no_main]

use arbitrary::Arbitrary;
use fsview::{Predicate, View, compose, split, substr};
use libfuzzer_sys::fuzz_target;

/// One fuzz case: a buffer, a 256-bit keep mask, a delimiter, and substr
/// arguments.
#[derive(Arbitrary, Debug)]
struct Case {
    bytes: Vec<u8>,
    keep: [u64; 4],
    token: Vec<u8>,
    pos: i16,
    count: i16,
}

fn keeps(mask: [u64; 4], c: u8) -> bool {
    mask[usize::from(c / 64)] & (1 << (c % 64)) != 0
}

fuzz_target!(|case: Case| {
    let Case { bytes, keep, token, pos, count } = case;
    let v = View::with_predicate(&bytes, move |c: &u8| keeps(keep, *c));
    let expected: Vec<u8> = bytes.iter().copied().filter(|&c| keeps(keep, c)).collect();

    // Logical size and content.
    assert_eq!(v.size(), expected.len());
    assert_eq!(v.to_bstring().as_slice(), expected.as_slice());
    assert!(v.iter().rev().eq(expected.iter().rev().copied()));
    assert!(v == v.clone());

    // substr agrees with slicing.
    let (pos, count) = (isize::from(pos), isize::from(count));
    match usize::try_from(pos) {
        Ok(start) if start <= expected.len() => {
            let rest = &expected[start..];
            let want = match usize::try_from(count) {
                Ok(0) | Err(_) => rest,
                Ok(n) => &rest[..n.min(rest.len())],
            };
            let sub = substr(&v, pos, count).expect("position is in range");
            assert!(sub == *want);
        }
        _ => assert!(substr(&v, pos, count).is_err()),
    }

    // split never loses visible bytes outside delimiters, and rejoins when
    // every byte is visible.
    let plain = View::new(&bytes);
    let parts = split(&plain, &View::new(&token));
    if !token.is_empty() {
        let rejoined = parts
            .iter()
            .map(Vec::from)
            .collect::<Vec<Vec<u8>>>()
            .join(token.as_slice());
        assert_eq!(rejoined, bytes);
    } else {
        assert_eq!(parts.len(), 1);
    }
    let filtered_parts = split(&v, &View::new(&token));
    let visible: usize = filtered_parts.iter().map(View::size).sum();
    assert!(visible <= v.size());

    // compose with the same mask twice is the mask.
    let mask = Predicate::new(move |c: &u8| keeps(keep, *c));
    assert!(compose(&plain, [mask.clone(), mask]) == v);
});
