use std::cmp::Ordering;

/// Strict weak ordering over `K`, the comparison contract of the container.
///
/// Only [`less`](SortOrder::less) is required; the equivalence test and the
/// `Ordering` view are derived from it. Implementations must be irreflexive,
/// asymmetric for non-equivalent values and transitive. The container never
/// checks this; a comparator that breaks the contract is a logic error and
/// leaves the container in an arbitrary (but memory safe) state, detectable
/// after the fact with `validate`.
///
/// The comparator instance is owned by the container and must keep the same
/// ordering for the container's whole lifetime.
pub trait SortOrder<K> {
    /// Returns true if `a` sorts before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns true if `a` sorts after `b`.
    fn greater(&self, a: &K, b: &K) -> bool {
        self.less(b, a)
    }

    /// Two keys are equivalent when neither sorts before the other.
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// `Ordering` view of the predicate, for stable sorting.
    fn ordering(&self, a: &K, b: &K) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Ascending order through `Ord`, the default comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> SortOrder<K> for NaturalOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }

    #[inline]
    fn ordering(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter turning a less-than closure into a [`SortOrder`].
///
/// Useful for ad-hoc and stateful comparators:
///
/// ```rust
/// use sorted_vec_set::{OrderBy, SortedVecSet};
///
/// let mut set = SortedVecSet::with_order(OrderBy(|a: &i32, b: &i32| b < a));
/// set.insert(1);
/// set.insert(3);
/// set.insert(2);
///
/// assert_eq!(set.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderBy<F>(pub F);

impl<K, F> SortOrder<K> for OrderBy<F>
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        let order = NaturalOrder;
        assert!(order.less(&1, &2));
        assert!(!order.less(&2, &1));
        assert!(!order.less(&1, &1));
        assert!(order.greater(&2, &1));
        assert!(order.equivalent(&1, &1));
        assert_eq!(order.ordering(&1, &2), Ordering::Less);
        assert_eq!(order.ordering(&2, &1), Ordering::Greater);
        assert_eq!(order.ordering(&1, &1), Ordering::Equal);
    }

    #[test]
    fn test_order_by_closure() {
        // descending
        let order = OrderBy(|a: &i32, b: &i32| b < a);
        assert!(order.less(&2, &1));
        assert!(!order.less(&1, &2));
        assert_eq!(order.ordering(&2, &1), Ordering::Less);
    }

    #[test]
    fn test_derived_equivalence() {
        // order by absolute value, so 2 and -2 are equivalent but not equal
        let order = OrderBy(|a: &i32, b: &i32| a.abs() < b.abs());
        assert!(order.equivalent(&2, &-2));
        assert!(!order.equivalent(&2, &3));
        assert_eq!(order.ordering(&-2, &2), Ordering::Equal);
    }
}
