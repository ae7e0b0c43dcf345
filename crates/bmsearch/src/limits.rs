//! Centralized table sizes and sentinel values.
//!
//! All magic numbers used by the preprocessing passes are collected here
//! so the tables and the scan loop agree on them.

// ===== Bad character =====

/// Number of distinct byte values; size of the dense bad-character table.
pub const ALPHABET_SIZE: usize = 256;

/// Last-occurrence value for a symbol that never appears in the pattern.
pub const ABSENT: isize = -1;

// ===== Good suffix =====

/// Marker for a shift-table entry not yet written by either pass.
/// Every real shift is at least 1, so 0 is free to mean "unset".
pub const UNSET_SHIFT: usize = 0;
