use std::collections::VecDeque;
use std::ops::Index;

/// The capabilities the merge-insertion sort needs from a backing
/// container: indexed reads, insertion at an arbitrary position, appends and
/// a length.
pub trait Sequence<T>: Index<usize, Output = T> + FromIterator<T> + IntoIterator<Item = T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` so that it ends up at `index`, shifting later
    /// elements back by one.
    fn insert_at(&mut self, index: usize, value: T);

    fn push_back(&mut self, value: T);
}

impl<T> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }
}

/// A family of sequences sharing one representation, so that a sort can
/// hold ids and values in the same kind of container.
pub trait Layout {
    type Seq<T>: Sequence<T>;

    /// Name of the concrete container, for reports.
    const NAME: &'static str;
}

/// Contiguous storage backed by [`Vec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Contiguous;

/// Double-ended storage backed by [`VecDeque`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Deque;

impl Layout for Contiguous {
    type Seq<T> = Vec<T>;
    const NAME: &'static str = "Vec";
}

impl Layout for Deque {
    type Seq<T> = VecDeque<T>;
    const NAME: &'static str = "VecDeque";
}
