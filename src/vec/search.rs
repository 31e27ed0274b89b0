use std::ops::Range;

use crate::order::SortOrder;

/// First index whose key is not less than `key`.
pub fn lower_bound<K, O: SortOrder<K>>(keys: &[K], key: &K, order: &O) -> usize {
    keys.partition_point(|probe| order.less(probe, key))
}

/// First index whose key is greater than `key`.
pub fn upper_bound<K, O: SortOrder<K>>(keys: &[K], key: &K, order: &O) -> usize {
    keys.partition_point(|probe| !order.less(key, probe))
}

/// Index range of keys equivalent to `key`. On a sorted, duplicate free
/// slice the range length is 0 or 1.
pub fn equal_range<K, O: SortOrder<K>>(keys: &[K], key: &K, order: &O) -> Range<usize> {
    lower_bound(keys, key, order)..upper_bound(keys, key, order)
}

/// Locate `key`, with the same result convention as `slice::binary_search`:
/// `Ok(idx)` for the equivalent key at `idx`, `Err(idx)` for the index
/// where `key` would be inserted to keep the slice sorted.
pub fn locate<K, O: SortOrder<K>>(keys: &[K], key: &K, order: &O) -> Result<usize, usize> {
    let idx = lower_bound(keys, key, order);
    match keys.get(idx) {
        Some(found) if order.equivalent(found, key) => Ok(idx),
        _ => Err(idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{NaturalOrder, OrderBy};

    #[test]
    fn test_locate() {
        let keys = (1..=64u32).map(|i| i * 2).collect::<Vec<_>>();

        assert_eq!(locate(&keys, &1, &NaturalOrder), Err(0));
        assert_eq!(locate(&keys, &2, &NaturalOrder), Ok(0));
        assert_eq!(locate(&keys, &3, &NaturalOrder), Err(1));
        assert_eq!(locate(&keys, &4, &NaturalOrder), Ok(1));
        assert_eq!(locate(&keys, &5, &NaturalOrder), Err(2));
        assert_eq!(locate(&keys, &128, &NaturalOrder), Ok(63));
        assert_eq!(locate(&keys, &129, &NaturalOrder), Err(64));
        assert_eq!(locate(&keys, &130, &NaturalOrder), Err(64));
    }

    #[test]
    fn test_bounds() {
        let keys = [1, 3, 3, 5];
        let order = NaturalOrder;

        assert_eq!(lower_bound(&keys, &0, &order), 0);
        assert_eq!(lower_bound(&keys, &3, &order), 1);
        assert_eq!(upper_bound(&keys, &3, &order), 3);
        assert_eq!(equal_range(&keys, &3, &order), 1..3);
        assert_eq!(equal_range(&keys, &4, &order), 3..3);
        assert_eq!(upper_bound(&keys, &5, &order), 4);
        assert_eq!(lower_bound(&keys, &6, &order), 4);
    }

    #[test]
    fn test_empty_slice() {
        let keys: [i32; 0] = [];
        assert_eq!(lower_bound(&keys, &1, &NaturalOrder), 0);
        assert_eq!(upper_bound(&keys, &1, &NaturalOrder), 0);
        assert_eq!(locate(&keys, &1, &NaturalOrder), Err(0));
    }

    #[test]
    fn test_custom_order() {
        let order = OrderBy(|a: &i32, b: &i32| b < a);
        let keys = [9, 7, 5, 3];

        assert_eq!(locate(&keys, &7, &order), Ok(1));
        assert_eq!(locate(&keys, &6, &order), Err(2));
        assert_eq!(locate(&keys, &10, &order), Err(0));
        assert_eq!(locate(&keys, &1, &order), Err(4));
    }
}
