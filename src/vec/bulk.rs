use super::{SortedVec, Store};
use crate::order::SortOrder;

impl<S, O> SortedVec<S, O>
where
    S: Store,
    O: SortOrder<S::K>,
{
    /// Build a `SortedVec` from arbitrary input: possibly unsorted, possibly
    /// containing duplicates. The input is loaded as-is and fixed up with
    /// one sort-and-dedup pass, O(n log n) instead of a per-element shift.
    ///
    /// The sort is stable, so among input duplicates the first occurrence is
    /// the one kept.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vec_set::{NaturalOrder, SortedVec, VecStore};
    ///
    /// let vec = SortedVec::<VecStore<i32>>::from_unsorted([5, 3, 1, 3, 2], NaturalOrder);
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 5]);
    /// ```
    pub fn from_unsorted<I>(data: I, order: O) -> Self
    where
        I: IntoIterator<Item = S::K>,
    {
        let mut store = S::default();
        let iter = data.into_iter();
        store.reserve(iter.size_hint().0);
        for key in iter {
            store.push(key);
        }
        Self::with_store(store, order)
    }

    /// Build a `SortedVec` from a preloaded store, sorting and deduplicating
    /// its contents in place.
    pub fn with_store(store: S, order: O) -> Self {
        let mut vec = Self { store, order };
        vec.sort_unique();

        #[cfg(test)]
        assert!(vec.validate());

        vec
    }

    /// Insert every key from `data`.
    ///
    /// On an empty container the keys are appended and fixed with a single
    /// sort-and-dedup pass. On a non-empty one the existing sorted prefix is
    /// worth keeping, so room is reserved and each key goes through a point
    /// insert instead.
    pub fn insert_all<I>(&mut self, data: I)
    where
        I: IntoIterator<Item = S::K>,
    {
        let iter = data.into_iter();

        if self.is_empty() {
            for key in iter {
                self.store.push(key);
            }
            self.sort_unique();

            #[cfg(test)]
            assert!(self.validate());

            return;
        }

        self.store.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }

    /// Restore the invariant over the whole store: stable sort by the
    /// comparator, then collapse each run of equivalent keys down to its
    /// first element.
    fn sort_unique(&mut self) {
        let order = &self.order;
        self.store
            .as_mut_slice()
            .sort_by(|a, b| order.ordering(a, b));
        self.store
            .dedup_adjacent_by(|kept, probe| order.equivalent(kept, probe));
    }
}
