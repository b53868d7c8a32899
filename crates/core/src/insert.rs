use crate::sequence::Sequence;

/// Inserts `item` into the sorted prefix `chain[..bound]` and returns the
/// position it was inserted at.
///
/// Only positions below `bound` are ever read, and `less` is called once per
/// halving step, so a window of `w` elements costs at most
/// `ceil(log2(w + 1))` calls. An equal element already in the window stays
/// behind the inserted one.
///
/// # Panics
///
/// Panics if `bound` exceeds the chain length.
pub fn binary_insert<T, S, F>(chain: &mut S, item: T, bound: usize, less: &mut F) -> usize
where
    S: Sequence<T>,
    F: FnMut(&T, &T) -> bool,
{
    assert!(bound <= chain.len(), "search window past end of chain");

    let (mut lo, mut hi) = (0, bound);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if less(&chain[mid], &item) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    chain.insert_at(lo, item);
    lo
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::binary_insert;

    fn counting(count: &mut usize) -> impl FnMut(&i32, &i32) -> bool + '_ {
        move |a, b| {
            *count += 1;
            a < b
        }
    }

    #[test]
    fn zero_bound_inserts_at_front_without_comparing() {
        let mut count = 0;
        let mut chain = vec![1, 2, 3];
        let pos = binary_insert(&mut chain, 9, 0, &mut counting(&mut count));
        assert_eq!(pos, 0);
        assert_eq!(chain, [9, 1, 2, 3]);
        assert_eq!(count, 0);
    }

    #[test]
    fn finds_position_inside_window() {
        let mut count = 0;
        let mut chain: VecDeque<i32> = [10, 20, 30, 40, 50, 60, 70].into();
        let pos = binary_insert(&mut chain, 35, 7, &mut counting(&mut count));
        assert_eq!(pos, 3);
        assert!(chain.iter().eq([10, 20, 30, 35, 40, 50, 60, 70].iter()));
        assert_eq!(count, 3);
    }

    #[test]
    fn never_reads_past_bound() {
        let mut chain = vec![1, 2, 3, 100, 0];
        let mut less = |a: &i32, b: &i32| {
            assert_ne!(*a, 0, "read outside the search window");
            a < b
        };
        let pos = binary_insert(&mut chain, 50, 4, &mut less);
        assert_eq!(pos, 3);
        assert_eq!(chain, [1, 2, 3, 50, 100, 0]);
    }

    #[test]
    fn equal_values_go_in_front() {
        let mut count = 0;
        let mut chain = vec![(5, 'a'), (5, 'b')];
        let mut less = |a: &(i32, char), b: &(i32, char)| {
            count += 1;
            a.0 < b.0
        };
        let pos = binary_insert(&mut chain, (5, 'n'), 2, &mut less);
        assert_eq!(pos, 0);
        assert_eq!(chain[0], (5, 'n'));
        assert_eq!(count, 2);
    }

    #[test]
    fn comparisons_within_log_bound() {
        for window in 0..64usize {
            for target in 0..=window {
                let mut count = 0;
                let mut chain: Vec<i32> = (0..window).map(|v| 2 * v as i32).collect();
                let item = 2 * target as i32 - 1;
                binary_insert(&mut chain, item, window, &mut counting(&mut count));
                let limit = (window + 1).next_power_of_two().trailing_zeros() as usize;
                assert!(count <= limit, "window={window} target={target}");
                assert!(chain.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
