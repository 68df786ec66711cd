//! One bucket's worth of entries for the separate-chaining table.
//!
//! A [`Chain`] owns an ordered sequence of key/value entries and supports the
//! per-bucket operations the table needs: append, linear search by key,
//! removal by key, and full reset. At most one entry per distinct key may
//! live in a chain; [`ChainedTable`](crate::table::ChainedTable) checks for
//! an existing key before appending, the chain itself never does.

/// A single key/value pair owned by a chain.
#[derive(Debug)]
pub struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

impl<V> Entry<V> {
    /// The entry's key, immutable once inserted.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry into its `(key, value)` pair.
    pub fn into_pair(self) -> (String, V) {
        (self.key, self.value)
    }
}

/// An owned sequence of entries sharing one bucket.
#[derive(Debug)]
pub struct Chain<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Chain<V> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Chain {
            entries: Vec::new(),
        }
    }

    /// Number of entries in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the chain holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new entry. Always succeeds; the caller must ensure `key` is
    /// not already present.
    pub fn push(&mut self, key: String, value: V) {
        self.entries.push(Entry { key, value });
    }

    pub(crate) fn push_entry(&mut self, entry: Entry<V>) {
        self.entries.push(entry);
    }

    /// Linear scan for `key`; returns the first matching value.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Linear scan for `key`; returns the first matching value mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    /// True if the chain holds an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Unlinks the first entry matching `key` and returns its value, or
    /// `None` if no entry matched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let at = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.swap_remove(at).value)
    }

    /// Drops every entry; length becomes 0.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Borrows the chain's `(key, value)` pairs in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.value))
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = Entry<V>;
    type IntoIter = std::vec::IntoIter<Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
