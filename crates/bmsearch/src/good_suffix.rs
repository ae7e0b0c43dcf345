// Good-suffix rule table
//
// Built in two passes over the pattern:
// 1. strong_suffix_pass: walks the pattern right-to-left computing, for every
//    suffix, where its widest border starts (bpos), and records a shift the
//    first time a boundary is hit by a mismatching border extension.
// 2. complete_with_global_border: fills every boundary the first pass left
//    unset with the widest border of the whole pattern, stepping to narrower
//    borders as the boundary moves past them.
//
// Both passes are pure: arrays go in, arrays come out.

use crate::limits::UNSET_SHIFT;

/// Shift distances for the good-suffix rule, indexed by boundary `j ∈ [0, m]`.
///
/// `shift(j)` is how far the pattern may advance when `pattern[j..m)` matched
/// and the symbol just before `j` did not. `shift(0)` is the advance after a
/// full match, i.e. the pattern's period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
    bpos: Vec<usize>,
}

impl GoodSuffixTable {
    pub fn build<S: PartialEq>(pattern: &[S]) -> Self {
        let (shift, bpos) = strong_suffix_pass(pattern);
        let shift = complete_with_global_border(shift, &bpos);
        debug_assert!(
            shift.iter().all(|&s| s != UNSET_SHIFT),
            "good-suffix entry left unset after completion: {:?}",
            shift
        );
        GoodSuffixTable { shift, bpos }
    }

    #[inline(always)]
    pub fn shift(&self, j: usize) -> usize {
        self.shift[j]
    }

    /// Advance applied after a full match.
    #[inline(always)]
    pub fn period(&self) -> usize {
        self.shift[0]
    }

    /// Start of the widest border of each suffix `pattern[i..m)`; `m + 1` entries.
    pub fn borders(&self) -> &[usize] {
        &self.bpos
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }

    /// Number of boundaries, `m + 1`.
    pub fn len(&self) -> usize {
        self.shift.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shift.is_empty()
    }
}

/// First pass: border positions plus the shifts discovered on the way.
///
/// Returns `(shift, bpos)`, both of length `m + 1`. Entries of `shift` that no
/// border extension reached are still `UNSET_SHIFT`.
pub fn strong_suffix_pass<S: PartialEq>(pattern: &[S]) -> (Vec<usize>, Vec<usize>) {
    let m = pattern.len();
    let mut shift = vec![UNSET_SHIFT; m + 1];
    let mut bpos = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    bpos[i] = j;

    while i > 0 {
        // Border of pattern[i..m) cannot be extended by pattern[i-1]; fall back
        // to narrower borders. First write wins: wider borders come first.
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == UNSET_SHIFT {
                shift[j] = j - i;
            }
            j = bpos[j];
        }
        i -= 1;
        j -= 1;
        bpos[i] = j;
    }

    (shift, bpos)
}

/// Second pass: fill the boundaries the first pass never reached.
///
/// Uses the widest border of the whole pattern (`bpos[0]`) until the boundary
/// passes it, then the next narrower one.
pub fn complete_with_global_border(mut shift: Vec<usize>, bpos: &[usize]) -> Vec<usize> {
    debug_assert_eq!(shift.len(), bpos.len());
    let m = shift.len() - 1;

    let mut j = bpos[0];
    for i in 0..=m {
        if shift[i] == UNSET_SHIFT {
            shift[i] = j;
        }
        if i == j {
            j = bpos[j];
        }
    }

    shift
}
