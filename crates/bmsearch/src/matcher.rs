// Boyer-Moore scan loop
//
// Compares the pattern right-to-left at each alignment. On a mismatch the
// alignment advances by the larger of the good-suffix and bad-character
// shifts; after a full match it advances by the pattern's period so that
// overlapping occurrences are still reported.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::bad_char::{BadCharTable, Symbol};
use crate::good_suffix::GoodSuffixTable;

/// A pattern preprocessed for Boyer-Moore search.
///
/// Building the finder runs both preprocessing steps once; the finder can then
/// scan any number of texts. It holds no mutable state, so a shared reference
/// may be used from several threads at once.
#[derive(Clone, Debug)]
pub struct BoyerMoore<'p, S: Symbol> {
    pattern: &'p [S],
    bad_char: S::Table,
    good_suffix: GoodSuffixTable,
}

impl<'p, S: Symbol> BoyerMoore<'p, S> {
    pub fn new(pattern: &'p [S]) -> Self {
        let bad_char = <S::Table as BadCharTable<S>>::build(pattern);
        let good_suffix = GoodSuffixTable::build(pattern);
        debug!(
            "boyer-moore: pattern_len={} period={}",
            pattern.len(),
            good_suffix.period()
        );
        BoyerMoore {
            pattern,
            bad_char,
            good_suffix,
        }
    }

    pub fn pattern(&self) -> &'p [S] {
        self.pattern
    }

    pub fn bad_char(&self) -> &S::Table {
        &self.bad_char
    }

    pub fn good_suffix(&self) -> &GoodSuffixTable {
        &self.good_suffix
    }

    /// Lazily yield every start offset of the pattern in `text`, in increasing
    /// order. Overlapping occurrences are included.
    pub fn find_iter<'a>(&'a self, text: &'a [S]) -> Matches<'a, 'p, S> {
        Matches {
            finder: self,
            text,
            pos: 0,
        }
    }

    /// First occurrence, if any.
    pub fn find(&self, text: &[S]) -> Option<usize> {
        self.find_iter(text).next()
    }

    pub fn is_match(&self, text: &[S]) -> bool {
        self.find(text).is_some()
    }

    pub fn count(&self, text: &[S]) -> usize {
        self.find_iter(text).count()
    }

    /// Advance after a mismatch at pattern index `j` against text symbol `bad`.
    #[inline(always)]
    fn mismatch_shift(&self, j: usize, bad: S) -> usize {
        // The matched suffix is pattern[j+1..m), hence shift[j + 1].
        let good = self.good_suffix.shift(j + 1) as isize;
        let bad = self.bad_char.bad_char_shift(j, bad);
        good.max(bad) as usize
    }
}

/// Iterator over match offsets, created by [`BoyerMoore::find_iter`].
///
/// Stopping early is always safe: no work is done beyond the last offset
/// returned.
#[derive(Debug)]
pub struct Matches<'a, 'p, S: Symbol> {
    finder: &'a BoyerMoore<'p, S>,
    text: &'a [S],
    pos: usize,
}

impl<S: Symbol> Matches<'_, '_, S> {
    /// Last alignment at which the pattern still fits, or `None` when the
    /// scan must not run at all (empty pattern, or pattern longer than text).
    #[inline]
    fn last_alignment(&self) -> Option<usize> {
        let m = self.finder.pattern.len();
        let n = self.text.len();
        if m == 0 || m > n { None } else { Some(n - m) }
    }
}

impl<S: Symbol> Iterator for Matches<'_, '_, S> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let last = self.last_alignment()?;
        let pattern = self.finder.pattern;
        let text = self.text;

        while self.pos <= last {
            let s = self.pos;

            // j counts the symbols still to compare; pattern[j - 1] is next.
            let mut j = pattern.len();
            while j > 0 && pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            if j == 0 {
                self.pos = s + self.finder.good_suffix.period();
                trace!("boyer-moore: match at {}", s);
                return Some(s);
            }

            let j = j - 1;
            self.pos = s + self.finder.mismatch_shift(j, text[s + j]);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.last_alignment() {
            Some(last) if self.pos <= last => (0, Some(last - self.pos + 1)),
            _ => (0, Some(0)),
        }
    }
}

impl<S: Symbol> FusedIterator for Matches<'_, '_, S> {}

/// All start offsets of `pattern` in `text`, in increasing order.
///
/// An empty pattern, or one longer than the text, yields no matches.
pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> Vec<usize> {
    BoyerMoore::new(pattern).find_iter(text).collect()
}

/// Byte-oriented search over UTF-8 text. Offsets are byte offsets.
pub fn search_str(text: &str, pattern: &str) -> Vec<usize> {
    search(text.as_bytes(), pattern.as_bytes())
}

/// Search over `char`s. Offsets are char indices, not byte offsets.
pub fn search_chars(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    search(&text, &pattern)
}
