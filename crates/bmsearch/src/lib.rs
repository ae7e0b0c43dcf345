// Boyer-Moore substring search
// Exact matching with the bad-character rule and the strong good-suffix rule

#[cfg(test)]
mod test;

pub mod bad_char;
pub mod good_suffix;
pub mod limits;
pub mod matcher;

pub use bad_char::{BadCharTable, ByteTable, MappedTable, Symbol};
pub use good_suffix::GoodSuffixTable;
pub use matcher::{BoyerMoore, Matches, search, search_chars, search_str};
