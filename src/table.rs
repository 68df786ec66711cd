//! # Separate-Chaining Hash Table
//!
//! A fixed-interface, string-keyed hash table using separate chaining. Each
//! of the table's buckets owns a [`Chain`] of entries, and a pluggable
//! [`HashFn`] maps keys to buckets via `hash(key) % capacity`.
//!
//! ## Key Features
//! - **String keys, generic values** (`ChainedTable<V>`).
//! - **Pluggable hashing**: any pure `fn(&str) -> u64`; see [`crate::hash`].
//! - **Caller-driven growth**: `put` never resizes. Callers watch
//!   [`load_factor`](ChainedTable::load_factor) and call
//!   [`resize`](ChainedTable::resize) when it suits their workload, so
//!   behavior under a given load threshold stays reproducible.
//! - **Consistent visible state**: every operation either completes or
//!   returns an error without mutating the table; entry count, capacity, and
//!   chain contents always agree between calls.

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::hash::{weighted_sum_hash, HashFn};

/// Buckets allocated when a builder is not told otherwise.
const DEFAULT_CAPACITY: usize = 16;

/// A separate-chaining hash table with string keys and values of type `V`.
#[derive(Debug)]
pub struct ChainedTable<V> {
    buckets: Vec<Chain<V>>,
    len: usize,
    hash: HashFn,
}

impl<V> ChainedTable<V> {
    /// Creates a table with `capacity` buckets and the given hash function.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero; no table is
    /// created.
    pub fn new(capacity: usize, hash: HashFn) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);
        Ok(ChainedTable {
            buckets,
            len: 0,
            hash,
        })
    }

    /// Creates a table with `capacity` buckets and the default
    /// position-weighted hash.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(capacity, weighted_sum_hash)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets. Always at least 1.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of stored entries to buckets. Chaining puts no ceiling on chain
    /// depth, so values above 1.0 are normal under load.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Number of buckets currently holding no entries.
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Inserts or overwrites the value for `key`, returning the previous
    /// value if one was stored.
    ///
    /// Never grows the table: callers decide when to [`resize`](Self::resize)
    /// based on [`load_factor`](Self::load_factor).
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        let at = self.bucket_index(key);
        let chain = &mut self.buckets[at];
        match chain.get_mut(key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                chain.push(key.to_owned(), value);
                self.len += 1;
                None
            }
        }
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)].get(key)
    }

    /// Returns the value stored for `key` mutably, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let at = self.bucket_index(key);
        self.buckets[at].get_mut(key)
    }

    /// True if `key` is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets[self.bucket_index(key)].contains(key)
    }

    /// Removes the entry for `key` and returns its value. Removing an absent
    /// key is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let at = self.bucket_index(key);
        let removed = self.buckets[at].remove(key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Drops every entry while keeping the bucket count.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Rebuilds the table with `new_capacity` buckets, moving every entry to
    /// the bucket its key hashes to under the new count. Shrinking is legal;
    /// it merely deepens the remaining chains.
    ///
    /// Every key is hashed and the replacement buckets are fully built before
    /// the existing ones are disturbed, so a rejected capacity (or a hash
    /// function that panics) leaves the table exactly as it was.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `new_capacity` is zero.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(Error::InvalidCapacity(new_capacity));
        }
        let hash = self.hash;
        // All hashing happens before the original buckets are disturbed.
        let targets: Vec<usize> = self
            .buckets
            .iter()
            .flat_map(|chain| chain.iter())
            .map(|(key, _)| (hash(key) % new_capacity as u64) as usize)
            .collect();

        let mut rebuilt: Vec<Chain<V>> = Vec::with_capacity(new_capacity);
        rebuilt.resize_with(new_capacity, Chain::new);

        let entries = std::mem::take(&mut self.buckets).into_iter().flatten();
        for (entry, at) in entries.zip(targets) {
            rebuilt[at].push_entry(entry);
        }
        self.buckets = rebuilt;
        Ok(())
    }

    /// Borrows every `(key, value)` pair, bucket by bucket. Order is
    /// unspecified and changes across resizes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    fn bucket_index(&self, key: &str) -> usize {
        ((self.hash)(key) % self.buckets.len() as u64) as usize
    }
}

/// A builder for [`ChainedTable`]. Typically you'll call
/// `.with_capacity(...)`, `.with_hash_fn(...)`, then `.build()`.
#[derive(Debug)]
pub struct ChainedTableBuilder {
    capacity: usize,
    hash: HashFn,
}

impl Default for ChainedTableBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hash: weighted_sum_hash,
        }
    }
}

impl ChainedTableBuilder {
    /// Creates a builder with the default capacity and position-weighted
    /// hash.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the bucket count. Validated when the table is built.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the hash function.
    pub fn with_hash_fn(mut self, hash: HashFn) -> Self {
        self.hash = hash;
        self
    }

    /// Builds the final table.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if the configured capacity is zero.
    pub fn build<V>(self) -> Result<ChainedTable<V>> {
        ChainedTable::new(self.capacity, self.hash)
    }
}
