mod bulk;
mod iterator;
pub use iterator::*;
mod search;
pub use search::*;
mod store;
pub use store::*;

use std::fmt;
use std::mem;
use std::ops::Range;

use crate::order::{NaturalOrder, SortOrder};

/// Sorted, duplicate free sequence on contiguous storage, with following
/// considerations:
///
/// 1. Set/map style lookups stay O(log n) through binary search over one
///    contiguous key run
/// 2. Point insertion cost is dominated by the tail shift; a positional
///    hint skips the search when the caller already knows the spot
/// 3. Bulk load sorts once instead of shifting per element
///
/// The ordering invariant holds after every public call: keys are strictly
/// increasing under the comparator, so no two of them are equivalent.
/// Positions are plain indices and follow contiguous storage rules, any
/// insertion or removal may invalidate previously obtained indices.
///
/// There is no interior locking; sharing across threads needs external
/// serialization.
///
/// # Example
/// ```rust
/// use sorted_vec_set::{NaturalOrder, SortedVec, VecStore};
///
/// let mut vec = SortedVec::<VecStore<u64>>::new(NaturalOrder);
///
/// // insert new key
/// assert_eq!(vec.insert(3), (0, true));
///
/// // duplicate insert is a no-op pointing at the existing key
/// assert_eq!(vec.insert(3), (0, false));
///
/// assert_eq!(vec.insert(1), (0, true));
/// assert_eq!(vec.as_slice(), &[1, 3]);
///
/// // remove by key
/// assert_eq!(vec.remove(&3), Some(3));
/// assert_eq!(vec.remove(&3), None);
/// ```
#[derive(Clone)]
pub struct SortedVec<S: Store, O: SortOrder<S::K> = NaturalOrder> {
    store: S,
    order: O,
}

impl<S, O> SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K>,
{
    /// Create an empty `SortedVec` with the given comparator.
    pub fn new(order: O) -> Self {
        Self {
            store: S::default(),
            order,
        }
    }

    /// Returns the number of stored keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no key is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of keys the underlying store can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Reserve room for at least `additional` more keys.
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
    }

    /// A reference to the comparator.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The keys as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[S::K] {
        self.store.as_slice()
    }

    /// The smallest key, if any.
    pub fn first(&self) -> Option<&S::K> {
        self.as_slice().first()
    }

    /// The largest key, if any.
    pub fn last(&self) -> Option<&S::K> {
        self.as_slice().last()
    }

    /// Iterate the keys in ascending comparator order.
    pub fn iter(&self) -> Iter<'_, S::K> {
        Iter::new(self.as_slice())
    }

    /// Insert a key, keeping the sequence sorted and duplicate free.
    ///
    /// Returns the key's index and whether it was actually inserted. When an
    /// equivalent key is already stored nothing changes and the index points
    /// at the existing key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::{NaturalOrder, SortedVec, VecStore};
    ///
    /// let mut vec = SortedVec::<VecStore<i32>>::new(NaturalOrder);
    /// assert_eq!(vec.insert(2), (0, true));
    /// assert_eq!(vec.insert(1), (0, true));
    /// assert_eq!(vec.insert(2), (1, false));
    /// ```
    pub fn insert(&mut self, key: S::K) -> (usize, bool) {
        let result = match locate(self.store.as_slice(), &key, &self.order) {
            Ok(idx) => (idx, false),
            Err(idx) => {
                self.store.insert_at(idx, key);
                (idx, true)
            }
        };

        #[cfg(test)]
        assert!(self.validate());

        result
    }

    /// Insert with a positional hint.
    ///
    /// When the hint is consistent with its neighbors the key is placed
    /// there directly, skipping the binary search. A wrong hint falls back
    /// to [`insert`](Self::insert); the final contents are identical either
    /// way, only the search cost differs.
    pub fn insert_hint(&mut self, hint: usize, key: S::K) -> (usize, bool) {
        if self.hint_fits(hint, &key) {
            self.store.insert_at(hint, key);

            #[cfg(test)]
            assert!(self.validate());

            (hint, true)
        } else {
            self.insert(key)
        }
    }

    /// A hint is usable when inserting there keeps the sequence ordered:
    /// the predecessor, if any, must sort before `key`, and `key` must sort
    /// before the key currently at `hint`, if any.
    fn hint_fits(&self, hint: usize, key: &S::K) -> bool {
        let keys = self.store.as_slice();
        if hint > keys.len() {
            return false;
        }
        if hint > 0 && !self.order.greater(key, &keys[hint - 1]) {
            return false;
        }
        if hint < keys.len() && !self.order.less(key, &keys[hint]) {
            return false;
        }
        true
    }

    /// First index whose key is not less than `key`.
    pub fn lower_bound(&self, key: &S::K) -> usize {
        lower_bound(self.as_slice(), key, &self.order)
    }

    /// First index whose key is greater than `key`.
    pub fn upper_bound(&self, key: &S::K) -> usize {
        upper_bound(self.as_slice(), key, &self.order)
    }

    /// Index range of keys equivalent to `key`. Length is 0 or 1.
    pub fn equal_range(&self, key: &S::K) -> Range<usize> {
        equal_range(self.as_slice(), key, &self.order)
    }

    /// Index of the key equivalent to `key`, if stored.
    pub fn find(&self, key: &S::K) -> Option<usize> {
        locate(self.as_slice(), key, &self.order).ok()
    }

    /// Reference to the stored key equivalent to `key`, if any.
    ///
    /// With a comparator that ignores part of the key this returns the
    /// stored representative, which may differ from `key` itself.
    pub fn get(&self, key: &S::K) -> Option<&S::K> {
        let idx = self.find(key)?;
        Some(&self.as_slice()[idx])
    }

    /// Returns true if an equivalent key is stored.
    pub fn contains(&self, key: &S::K) -> bool {
        self.find(key).is_some()
    }

    /// Number of keys equivalent to `key`, always 0 or 1.
    pub fn count(&self, key: &S::K) -> usize {
        self.equal_range(key).len()
    }

    /// Remove the key equivalent to `key`, returning it if it was stored.
    ///
    /// Removing an absent key is not an error.
    pub fn remove(&mut self, key: &S::K) -> Option<S::K> {
        match locate(self.store.as_slice(), key, &self.order) {
            Ok(idx) => Some(self.store.remove_at(idx)),
            Err(_) => None,
        }
    }

    /// Remove and return the key at `idx`.
    ///
    /// Removal cannot break ordering, so no rework is needed.
    ///
    /// Panics if `idx` is out of bounds.
    pub fn remove_at(&mut self, idx: usize) -> S::K {
        self.store.remove_at(idx)
    }

    /// Remove all keys in the index `range`.
    ///
    /// Panics if the range is out of bounds.
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.store.remove_range(range);
    }

    /// Drop all keys. Reserved capacity may be retained.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Exchange contents and comparators with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Re-check the ordering invariant from scratch, without trusting the
    /// incremental maintenance: every adjacent pair must be strictly
    /// ascending, which also rules out equivalent neighbors. A diagnostic
    /// aid, mainly useful after a comparator contract violation is
    /// suspected.
    pub fn validate(&self) -> bool {
        self.as_slice()
            .windows(2)
            .all(|pair| self.order.less(&pair[0], &pair[1]))
    }

    /// Consume self and return the sorted keys.
    pub fn into_vec(self) -> Vec<S::K> {
        self.store.into_vec()
    }
}

impl<S, O> Default for SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K> + Default,
{
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<S, O> fmt::Debug for SortedVec<S, O>
where
    S: Store,
    S::K: fmt::Debug,
    O: SortOrder<S::K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S, O> PartialEq for SortedVec<S, O>
where
    S: Store,
    S::K: PartialEq,
    O: SortOrder<S::K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<S, O> Eq for SortedVec<S, O>
where
    S: Store,
    S::K: Eq,
    O: SortOrder<S::K>,
{
}

impl<S, O> FromIterator<S::K> for SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K> + Default,
{
    fn from_iter<I: IntoIterator<Item = S::K>>(iter: I) -> Self {
        Self::from_unsorted(iter, O::default())
    }
}

impl<S, O> Extend<S::K> for SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K>,
{
    fn extend<I: IntoIterator<Item = S::K>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<S, O> IntoIterator for SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K>,
{
    type Item = S::K;
    type IntoIter = IntoIter<S::K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.store.into_vec())
    }
}

impl<'a, S, O> IntoIterator for &'a SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K>,
{
    type Item = &'a S::K;
    type IntoIter = Iter<'a, S::K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
