/// Returns an upper bound on the comparisons a merge-insertion sort of `n`
/// elements can perform.
///
/// One comparison per pair, plus the recursive bound for the pair maxima,
/// plus a full binary search over the whole chain for every insertion. Real
/// searches run over a window at most that large.
#[must_use]
pub fn worst_case_comparisons(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }

    let num_pairs = n / 2;
    let mut total = num_pairs + worst_case_comparisons(num_pairs);

    // The chain starts with num_pairs + 1 elements and grows by one per insertion.
    for chain_len in (num_pairs + 1)..n {
        total += ceil_log2(chain_len + 1);
    }

    total
}

/// Returns `ceil(log2(n!))`, the fewest comparisons any comparison sort
/// needs in the worst case.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn information_bound(n: usize) -> usize {
    let bits: f64 = (2..=n).map(|k| (k as f64).log2()).sum();
    // Keep float noise from pushing an exact power of two up a step.
    (bits - 1e-9).ceil().max(0.0) as usize
}

fn ceil_log2(value: usize) -> usize {
    if value <= 1 {
        return 0;
    }
    (usize::BITS - (value - 1).leading_zeros()) as usize
}
