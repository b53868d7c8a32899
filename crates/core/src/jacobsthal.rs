/// Returns the Jacobsthal numbers `0, 1, 1, 3, 5, 11, ...` up to and
/// including the first term that is `>= bound`.
///
/// The two seed terms are always present, so `jacobsthal(0)` is `[0, 1]`.
#[must_use]
pub fn jacobsthal(bound: usize) -> Vec<usize> {
    let mut terms = vec![0usize, 1];
    loop {
        let (prev, last) = (terms[terms.len() - 2], terms[terms.len() - 1]);
        if last >= bound {
            break;
        }
        terms.push(last + 2 * prev);
    }
    terms
}

/// Returns the 1-based indices `1..=count` in the order the pending
/// elements should be inserted into the main chain.
///
/// Each Jacobsthal group is emitted from its upper boundary down to one past
/// the previous boundary, so a whole group is inserted before any element
/// of a lower group is searched for. Indices past the last boundary that
/// fits in `count` follow in ascending order.
#[must_use]
pub fn insertion_order(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }

    let terms = jacobsthal(count);
    let mut order = Vec::with_capacity(count);
    let mut used = vec![false; count + 1];

    for pair in terms.windows(2).skip(1) {
        let (low, high) = (pair[0], pair[1]);
        if high > count {
            break;
        }
        for idx in (low + 1..=high).rev() {
            if !used[idx] {
                used[idx] = true;
                order.push(idx);
            }
        }
    }

    order.extend((1..=count).filter(|&idx| !used[idx]));
    order
}
