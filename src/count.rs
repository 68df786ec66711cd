//! # Word Frequency Counting
//!
//! Case-insensitive word counting over plain text, backed by a
//! [`ChainedTable`] keyed on the lowercased word. Counting starts from a
//! fixed bucket count and doubles the table whenever the load factor climbs
//! past a threshold, so lookup chains stay short on large inputs without
//! resizing on every insert.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::hash::weighted_sum_hash;
use crate::table::ChainedTable;

/// Buckets allocated before the first word is counted.
const INITIAL_CAPACITY: usize = 2500;

/// Counting doubles the bucket count whenever the load factor exceeds this.
const MAX_LOAD_FACTOR: f64 = 8.0;

lazy_static! {
    /// A word: word characters with interior apostrophes allowed ("don't",
    /// "dog's"); leading and trailing apostrophes are not captured.
    static ref WORD: Regex = Regex::new(r"\w[\w']*\w|\w").unwrap();
}

/// Yields each word of `text` in order of appearance, lowercased.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Counts every word of `text`, case-insensitively.
///
/// The returned table maps each lowercased word to its number of
/// occurrences. The load factor is checked after every word so the growth
/// point does not depend on input ordering.
pub fn count_words(text: &str) -> Result<ChainedTable<usize>> {
    let mut table = ChainedTable::new(INITIAL_CAPACITY, weighted_sum_hash)?;
    for word in words(text) {
        match table.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                table.put(&word, 1);
            }
        }
        if table.load_factor() > MAX_LOAD_FACTOR {
            let doubled = 2 * table.capacity();
            table.resize(doubled)?;
            debug!(
                "grew word table to {} buckets holding {} words",
                doubled,
                table.len()
            );
        }
    }
    Ok(table)
}

/// Returns the `number` most frequent words of `text` as `(word, count)`
/// pairs, most frequent first. Words tied on count come back in an
/// unspecified order.
pub fn top_words(text: &str, number: usize) -> Result<Vec<(String, usize)>> {
    let table = count_words(text)?;
    let mut pairs: Vec<(String, usize)> = table
        .iter()
        .map(|(word, count)| (word.to_owned(), *count))
        .collect();
    pairs.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    pairs.truncate(number);
    Ok(pairs)
}

/// Reads the file at `path` and returns its `number` most frequent words,
/// as [`top_words`] would.
///
/// # Errors
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be
/// read.
pub fn top_words_in_file<P: AsRef<Path>>(path: P, number: usize) -> Result<Vec<(String, usize)>> {
    let text = fs::read_to_string(path)?;
    top_words(&text, number)
}
