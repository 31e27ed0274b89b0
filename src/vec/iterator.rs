use std::iter::FusedIterator;

/// Borrowed iterator over the keys in ascending comparator order.
pub struct Iter<'a, K> {
    inner: std::slice::Iter<'a, K>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(keys: &'a [K]) -> Self {
        Self { inner: keys.iter() }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owning iterator over the keys in ascending comparator order.
pub struct IntoIter<K> {
    inner: std::vec::IntoIter<K>,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(keys: Vec<K>) -> Self {
        Self {
            inner: keys.into_iter(),
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}

#[cfg(test)]
mod tests {
    use crate::SortedVecSet;

    #[test]
    fn test_iter() {
        let set = SortedVecSet::from([3, 1, 2]);
        let keys = set.iter().copied().collect::<Vec<_>>();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_iter_rev() {
        let set = SortedVecSet::from([3, 1, 2]);
        let keys = set.iter().rev().copied().collect::<Vec<_>>();
        assert_eq!(keys, vec![3, 2, 1]);
    }

    #[test]
    fn test_into_iter() {
        let set = SortedVecSet::from([3, 1, 2]);
        let mut iter = set.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
