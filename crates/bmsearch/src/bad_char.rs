// Bad-character rule tables
//
// Maps every symbol to the index of its last occurrence in the pattern.
// Two representations, picked statically by the symbol type:
// - ByteTable: dense array over all 256 byte values (O(1), no hashing)
// - MappedTable: hash map for wide alphabets (char, u16, u32)

use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;

use crate::limits::{ABSENT, ALPHABET_SIZE};

/// A symbol type the matcher can search over.
///
/// The associated table decides how symbols are mapped to last-occurrence
/// slots, so a dense table is never indexed outside its domain.
pub trait Symbol: Copy + Eq + Hash + Debug {
    type Table: BadCharTable<Self> + Clone + Debug;
}

impl Symbol for u8 {
    type Table = ByteTable;
}

impl Symbol for char {
    type Table = MappedTable<char>;
}

impl Symbol for u16 {
    type Table = MappedTable<u16>;
}

impl Symbol for u32 {
    type Table = MappedTable<u32>;
}

/// Last-occurrence lookup used by the bad-character rule.
pub trait BadCharTable<S> {
    /// Build the table from the pattern. Later occurrences overwrite earlier ones.
    fn build(pattern: &[S]) -> Self
    where
        Self: Sized;

    /// Index of the last occurrence of `symbol` in the pattern, or `ABSENT` (-1).
    fn last_occurrence(&self, symbol: S) -> isize;

    /// Shift that aligns the mismatching text symbol at pattern index `j`
    /// with its last occurrence in the pattern. May be zero or negative when
    /// that occurrence lies to the right of `j`.
    #[inline(always)]
    fn bad_char_shift(&self, j: usize, symbol: S) -> isize {
        j as isize - self.last_occurrence(symbol)
    }
}

/// Dense table over the full byte domain.
#[derive(Clone, Debug)]
pub struct ByteTable {
    last: [isize; ALPHABET_SIZE],
}

impl BadCharTable<u8> for ByteTable {
    fn build(pattern: &[u8]) -> Self {
        let mut last = [ABSENT; ALPHABET_SIZE];
        for (i, &b) in pattern.iter().enumerate() {
            last[b as usize] = i as isize;
        }
        ByteTable { last }
    }

    #[inline(always)]
    fn last_occurrence(&self, symbol: u8) -> isize {
        self.last[symbol as usize]
    }
}

impl ByteTable {
    /// Raw view of all 256 entries.
    pub fn as_array(&self) -> &[isize; ALPHABET_SIZE] {
        &self.last
    }
}

/// Sparse table for symbol domains too large for a dense array.
#[derive(Clone, Debug)]
pub struct MappedTable<S: Eq + Hash> {
    last: AHashMap<S, usize>,
}

impl<S: Copy + Eq + Hash> BadCharTable<S> for MappedTable<S> {
    fn build(pattern: &[S]) -> Self {
        let mut last = AHashMap::with_capacity(pattern.len());
        for (i, &sym) in pattern.iter().enumerate() {
            last.insert(sym, i);
        }
        MappedTable { last }
    }

    #[inline]
    fn last_occurrence(&self, symbol: S) -> isize {
        match self.last.get(&symbol) {
            Some(&i) => i as isize,
            None => ABSENT,
        }
    }
}

impl<S: Eq + Hash> MappedTable<S> {
    /// Number of distinct symbols in the pattern.
    pub fn distinct_symbols(&self) -> usize {
        self.last.len()
    }
}
