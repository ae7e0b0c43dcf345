// Randomised cross-check against a naive scan
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::*;

fn naive<S: PartialEq>(text: &[S], pattern: &[S]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn random_bytes(rng: &mut StdRng, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn test_random_small_alphabets() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let alphabets: [&[u8]; 3] = [b"AB", b"ABC", b"abcd"];
    for alphabet in alphabets {
        for _ in 0..2000 {
            let text_len = rng.gen_range(0..48);
            let pattern_len = rng.gen_range(0..7);
            let text = random_bytes(&mut rng, alphabet, text_len);
            let pattern = random_bytes(&mut rng, alphabet, pattern_len);
            assert_eq!(
                search(&text, &pattern),
                naive(&text, &pattern),
                "text={:?} pattern={:?}",
                String::from_utf8_lossy(&text),
                String::from_utf8_lossy(&pattern)
            );
        }
    }
}

#[test]
fn test_random_pattern_cut_from_text() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let text = random_bytes(&mut rng, b"AB", 64);
        let start = rng.gen_range(0..60);
        let len = rng.gen_range(1..=64 - start);
        let pattern = &text[start..start + len];
        let found = search(&text, pattern);
        assert!(found.contains(&start));
        assert_eq!(found, naive(&text, pattern));
    }
}

#[test]
fn test_random_offsets_are_occurrences() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let text = random_bytes(&mut rng, b"ABC", 100);
        let pattern = random_bytes(&mut rng, b"ABC", 3);
        let found = search(&text, &pattern);
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        for &o in &found {
            assert_eq!(&text[o..o + pattern.len()], pattern.as_slice());
        }
    }
}

#[test]
fn test_random_good_suffix_entries_positive() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1000 {
        let len = rng.gen_range(0..16);
        let pattern = random_bytes(&mut rng, b"AB", len);
        let table = GoodSuffixTable::build(&pattern);
        assert!(table.as_slice().iter().all(|&s| s >= 1));
        assert!(table.period() <= pattern.len().max(1));
    }
}

#[test]
fn test_random_chars_agree_with_bytes() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let text = random_bytes(&mut rng, b"xyz", 40);
        let pattern = random_bytes(&mut rng, b"xyz", 3);
        let text_s = String::from_utf8_lossy(&text).into_owned();
        let pattern_s = String::from_utf8_lossy(&pattern).into_owned();
        assert_eq!(search_chars(&text_s, &pattern_s), search_str(&text_s, &pattern_s));
    }
}
