//! Ford-Johnson merge-insertion sort over integers.
//!
//! Elements are paired, the larger member of each pair is sorted
//! recursively, and the smaller members are binary-inserted back in an order
//! derived from the Jacobsthal numbers. The same algorithm runs on a
//! contiguous ([`Vec`]) or double-ended ([`std::collections::VecDeque`])
//! chain, with identical output and comparison counts.
//!
//! ```
//! use mergeinsert::VecSorter;
//!
//! let mut sorter = VecSorter::new();
//! assert_eq!(sorter.sort(vec![3, 1, 2]), vec![1, 2, 3]);
//! assert_eq!(sorter.comparisons(), 3);
//! ```

mod bounds;
mod insert;
mod jacobsthal;
mod sequence;
mod sorter;

pub use bounds::{information_bound, worst_case_comparisons};
pub use insert::binary_insert;
pub use jacobsthal::{insertion_order, jacobsthal};
pub use sequence::{Contiguous, Deque, Layout, Sequence};
pub use sorter::{DequeSorter, FordJohnson, VecSorter};
