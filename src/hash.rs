//! # String Hash Functions
//!
//! Pluggable hash functions for [`ChainedTable`](crate::table::ChainedTable).
//! The table accepts any pure `fn(&str) -> u64` and reduces the result modulo
//! its bucket count, so a hash function only ever influences how keys spread
//! across buckets, never whether an operation is correct.
//!
//! Two reference functions are provided:
//! - [`char_sum_hash`]: the sum of the key's character codes. Cheap, but every
//!   anagram of a key collides with it.
//! - [`weighted_sum_hash`]: each character code scaled by its 1-based
//!   position, so anagrams land in different buckets and natural-language keys
//!   spread more evenly.

/// A pluggable string hash: a pure function from a key to a `u64`.
///
/// A plain `fn` pointer keeps the strategy `Copy` and stateless, which keeps
/// rehashing deterministic.
pub type HashFn = fn(&str) -> u64;

/// Sums the character codes of `key`.
pub fn char_sum_hash(key: &str) -> u64 {
    key.chars().fold(0u64, |acc, ch| acc.wrapping_add(ch as u64))
}

/// Sums the character codes of `key`, each scaled by its 1-based position.
///
/// Separates anagram-like keys ("listen" / "silent") that [`char_sum_hash`]
/// sends to the same bucket.
pub fn weighted_sum_hash(key: &str) -> u64 {
    key.chars().enumerate().fold(0u64, |acc, (i, ch)| {
        acc.wrapping_add((i as u64 + 1).wrapping_mul(ch as u64))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_sum_known_values() {
        assert_eq!(char_sum_hash(""), 0);
        assert_eq!(char_sum_hash("a"), 97);
        assert_eq!(char_sum_hash("ab"), 97 + 98);
    }

    #[test]
    fn weighted_sum_known_values() {
        assert_eq!(weighted_sum_hash(""), 0);
        assert_eq!(weighted_sum_hash("a"), 97);
        assert_eq!(weighted_sum_hash("ab"), 97 + 2 * 98);
    }

    #[test]
    fn char_sum_collides_on_anagrams() {
        assert_eq!(char_sum_hash("listen"), char_sum_hash("silent"));
        assert_eq!(char_sum_hash("stop"), char_sum_hash("pots"));
    }

    #[test]
    fn weighted_sum_separates_anagrams() {
        assert_ne!(weighted_sum_hash("listen"), weighted_sum_hash("silent"));
        assert_ne!(weighted_sum_hash("stop"), weighted_sum_hash("pots"));
    }

    #[test]
    fn both_are_deterministic() {
        assert_eq!(char_sum_hash("determinism"), char_sum_hash("determinism"));
        assert_eq!(
            weighted_sum_hash("determinism"),
            weighted_sum_hash("determinism")
        );
    }
}
