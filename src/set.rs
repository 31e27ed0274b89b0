use std::fmt;

use crate::order::{NaturalOrder, SortOrder};
use crate::vec::{IntoIter, Iter, SortedVec, VecStore};

/// An ordered set on contiguous storage.
///
/// Lookups are O(log n) binary searches, insertion and removal pay the
/// tail shift of a `Vec`. Compared to a tree based set it trades worst
/// case mutation cost for locality and cheap ordered iteration, which is
/// the right trade when the set is mostly read or built in bulk.
///
/// # Examples
/// ```rust
/// use sorted_vec_set::SortedVecSet;
///
/// let mut set = SortedVecSet::from([5, 3, 1, 3, 2]);
/// assert_eq!(set.len(), 4);
///
/// set.insert(4);
/// let keys = set.iter().copied().collect::<Vec<_>>();
/// assert_eq!(keys, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone)]
pub struct SortedVecSet<K, O: SortOrder<K> = NaturalOrder> {
    vec: SortedVec<VecStore<K>, O>,
}

impl<K: Ord> SortedVecSet<K> {
    /// Create an empty set ordered by `Ord`.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let set = SortedVecSet::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            vec: SortedVec::new(NaturalOrder),
        }
    }
}

impl<K, O: SortOrder<K>> SortedVecSet<K, O> {
    /// Create an empty set with a custom comparator.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::{OrderBy, SortedVecSet};
    ///
    /// let mut set = SortedVecSet::with_order(OrderBy(|a: &u32, b: &u32| b < a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.as_slice(), &[2, 1]);
    /// ```
    pub fn with_order(order: O) -> Self {
        Self {
            vec: SortedVec::new(order),
        }
    }

    /// Returns the number of keys in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the set contains no key.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Insert a key into the set.
    /// Returns true if the key was inserted, false if an equivalent key
    /// already existed.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let mut set = SortedVecSet::<i32>::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.vec.insert(key).1
    }

    /// Remove a key from the set.
    /// Returns true if the key was removed, false if it didn't exist.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let mut set = SortedVecSet::<i32>::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&2));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.vec.remove(key).is_some()
    }

    /// Remove and return the stored key equivalent to `key`.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let mut set = SortedVecSet::from([1, 2]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take(&mut self, key: &K) -> Option<K> {
        self.vec.remove(key)
    }

    /// Returns true if the set contains a key equivalent to `key`.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let set = SortedVecSet::from([1, 2, 3]);
    /// assert!(set.contains(&2));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.vec.contains(key)
    }

    /// Returns a reference to the stored key equivalent to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.vec.get(key)
    }

    /// The smallest key in the set, if any.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let set = SortedVecSet::from([3, 1, 2]);
    /// assert_eq!(set.first(), Some(&1));
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn first(&self) -> Option<&K> {
        self.vec.first()
    }

    /// The largest key in the set, if any.
    pub fn last(&self) -> Option<&K> {
        self.vec.last()
    }

    /// Iterate the keys in ascending comparator order.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let set = SortedVecSet::from([3, 1, 2]);
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        self.vec.iter()
    }

    /// The keys as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[K] {
        self.vec.as_slice()
    }

    /// Drop all keys, keeping any reserved capacity.
    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Reserve room for at least `additional` more keys.
    pub fn reserve(&mut self, additional: usize) {
        self.vec.reserve(additional);
    }

    /// Access the underlying [`SortedVec`] for the positional API:
    /// bounds, hinted insertion, index based removal.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let set = SortedVecSet::from([10, 20, 30]);
    /// assert_eq!(set.as_sorted_vec().lower_bound(&15), 1);
    /// ```
    pub fn as_sorted_vec(&self) -> &SortedVec<VecStore<K>, O> {
        &self.vec
    }

    /// Mutable access to the underlying [`SortedVec`].
    pub fn as_sorted_vec_mut(&mut self) -> &mut SortedVec<VecStore<K>, O> {
        &mut self.vec
    }

    /// Consume the set and return the sorted keys.
    pub fn into_vec(self) -> Vec<K> {
        self.vec.into_vec()
    }
}

impl<K: Ord> Default for SortedVecSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, O: SortOrder<K>> fmt::Debug for SortedVecSet<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.vec, f)
    }
}

impl<K: PartialEq, O: SortOrder<K>> PartialEq for SortedVecSet<K, O> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<K: Eq, O: SortOrder<K>> Eq for SortedVecSet<K, O> {}

impl<K: Ord> FromIterator<K> for SortedVecSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            vec: SortedVec::from_unsorted(iter, NaturalOrder),
        }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for SortedVecSet<K> {
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::SortedVecSet;
    ///
    /// let set = SortedVecSet::from([3, 1, 2, 1]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K, O: SortOrder<K>> Extend<K> for SortedVecSet<K, O> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.vec.insert_all(iter);
    }
}

impl<K, O: SortOrder<K>> IntoIterator for SortedVecSet<K, O> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<'a, K, O: SortOrder<K>> IntoIterator for &'a SortedVecSet<K, O> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
