use std::marker::PhantomData;

use log::{debug, trace};

use crate::insert::binary_insert;
use crate::jacobsthal::insertion_order;
use crate::sequence::{Contiguous, Deque, Layout, Sequence};

/// Merge-insertion sorter over integers stored in the layout `L`.
///
/// Each instance owns its comparison counter; [`FordJohnson::sort`] resets
/// it and [`FordJohnson::comparisons`] reads it back.
#[derive(Debug, Clone)]
pub struct FordJohnson<L> {
    comparisons: usize,
    layout: PhantomData<L>,
}

pub type VecSorter = FordJohnson<Contiguous>;
pub type DequeSorter = FordJohnson<Deque>;

impl<L: Layout> Default for FordJohnson<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layout> FordJohnson<L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            comparisons: 0,
            layout: PhantomData,
        }
    }

    /// Sorts `input` ascending using the Ford-Johnson merge-insertion
    /// algorithm, keeping the number of value comparisons close to
    /// `ceil(log2(n!))`.
    #[must_use]
    pub fn sort(&mut self, input: L::Seq<i32>) -> L::Seq<i32> {
        self.comparisons = 0;

        let values: Vec<i32> = input.into_iter().collect();
        if values.len() <= 1 {
            return values.into_iter().collect();
        }

        let mut count = 0usize;
        let ids: L::Seq<usize> = (0..values.len()).collect();
        let sorted = merge_insert::<L>(ids, &mut |a: &usize, b: &usize| {
            count += 1;
            values[*a] < values[*b]
        });
        self.comparisons = count;

        debug!(
            "sorted {} elements with {} using {count} comparisons",
            values.len(),
            L::NAME
        );
        sorted.into_iter().map(|id| values[id]).collect()
    }

    /// Comparisons performed by the most recent call to [`FordJohnson::sort`].
    #[must_use]
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

/// Sorts a chain of element ids. `less(a, b)` returns true when `a` must
/// come before `b`.
fn merge_insert<L: Layout>(
    ids: L::Seq<usize>,
    less: &mut impl FnMut(&usize, &usize) -> bool,
) -> L::Seq<usize> {
    let n = ids.len();
    if n <= 1 {
        return ids;
    }

    let num_pairs = n / 2;
    let straggler = (n % 2 == 1).then(|| ids[n - 1]);
    trace!(
        "merge-insert level: {n} elements, {num_pairs} pairs, straggler={}",
        straggler.is_some()
    );

    // The larger member of each pair ("main") goes into the recursive step.
    // Equal members leave the second one as main.
    let max_id = (0..n).map(|i| ids[i]).max().unwrap_or(0);
    let mut partner_of = vec![0usize; max_id + 1];
    let mut mains = Vec::with_capacity(num_pairs);
    for i in 0..num_pairs {
        let (a, b) = (ids[2 * i], ids[2 * i + 1]);
        if less(&b, &a) {
            mains.push(a);
            partner_of[a] = b;
        } else {
            mains.push(b);
            partner_of[b] = a;
        }
    }

    let sorted_mains: Vec<usize> = merge_insert::<L>(mains.into_iter().collect(), less)
        .into_iter()
        .collect();

    // The partner of the smallest main is below every main, so it opens the
    // chain without a search.
    let mut chain: L::Seq<usize> = std::iter::once(partner_of[sorted_mains[0]])
        .chain(sorted_mains.iter().copied())
        .collect();

    // main_pos[k] is the current chain position of sorted_mains[k]. Its
    // partner only needs to be searched for below that position.
    let mut main_pos: Vec<usize> = (1..=num_pairs).collect();
    for idx in insertion_order(num_pairs - 1) {
        let bound = main_pos[idx];
        let pos = binary_insert(&mut chain, partner_of[sorted_mains[idx]], bound, less);
        let shifted = main_pos.partition_point(|&p| p < pos);
        for p in &mut main_pos[shifted..] {
            *p += 1;
        }
    }

    if let Some(last) = straggler {
        let bound = chain.len();
        binary_insert(&mut chain, last, bound, less);
    }

    chain
}
