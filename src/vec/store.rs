use std::ops::Range;

/// Contiguous storage used by `SortedVec`.
///
/// This is the storage customization point: growth strategy and allocation
/// live behind it, the container only asks for positional edits. Keys are
/// kept in one contiguous run, so `insert_at`/`remove_at` shift the tail.
///
/// The store never looks at key order; keeping the slice sorted is entirely
/// the container's job.
pub trait Store: Default {
    type K;

    /// Number of stored keys.
    fn len(&self) -> usize;

    /// Returns true if no key is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys the store can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Reserve room for at least `additional` more keys.
    fn reserve(&mut self, additional: usize);

    fn as_slice(&self) -> &[Self::K];

    fn as_mut_slice(&mut self) -> &mut [Self::K];

    /// Append a key at the end.
    fn push(&mut self, key: Self::K);

    /// Insert `key` at `idx`, shifting everything after it.
    ///
    /// Panics if `idx > len`.
    fn insert_at(&mut self, idx: usize, key: Self::K);

    /// Remove and return the key at `idx`, shifting everything after it.
    ///
    /// Panics if `idx >= len`.
    fn remove_at(&mut self, idx: usize) -> Self::K;

    /// Remove all keys in `range`.
    ///
    /// Panics if the range is out of bounds.
    fn remove_range(&mut self, range: Range<usize>);

    /// Drop all keys. Capacity is left unspecified.
    fn clear(&mut self);

    /// Collapse runs of adjacent keys for which `same` returns true,
    /// keeping the first key of each run. `same` is called as
    /// `same(kept, probe)` with `kept` earlier in the slice.
    fn dedup_adjacent_by<F>(&mut self, same: F)
    where
        F: FnMut(&Self::K, &Self::K) -> bool;

    /// Consume the store and return the keys in storage order.
    fn into_vec(self) -> Vec<Self::K>;
}

/// Default [`Store`], a plain `Vec` on the global allocator.
#[derive(Debug, Clone)]
pub struct VecStore<K> {
    keys: Vec<K>,
}

impl<K> VecStore<K> {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<Vec<K>> for VecStore<K> {
    fn from(keys: Vec<K>) -> Self {
        Self { keys }
    }
}

impl<K> Store for VecStore<K> {
    type K = K;

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
    }

    #[inline]
    fn as_slice(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [K] {
        &mut self.keys
    }

    fn push(&mut self, key: K) {
        self.keys.push(key);
    }

    fn insert_at(&mut self, idx: usize, key: K) {
        self.keys.insert(idx, key);
    }

    fn remove_at(&mut self, idx: usize) -> K {
        self.keys.remove(idx)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.keys.drain(range);
    }

    fn clear(&mut self) {
        self.keys.clear();
    }

    fn dedup_adjacent_by<F>(&mut self, mut same: F)
    where
        F: FnMut(&K, &K) -> bool,
    {
        // Vec::dedup_by passes the later element first
        self.keys.dedup_by(|probe, kept| same(kept, probe));
    }

    fn into_vec(self) -> Vec<K> {
        self.keys
    }
}
