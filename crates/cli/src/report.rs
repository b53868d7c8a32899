use std::fmt::Write;
use std::time::{Duration, Instant};

use mergeinsert::{FordJohnson, Layout};

/// One timed sort on a single layout.
pub struct Run {
    pub layout: &'static str,
    pub sorted: Vec<i32>,
    pub elapsed: Duration,
    pub comparisons: usize,
}

/// Sorts `input` on layout `L`, timing only the sort itself.
pub fn timed<L: Layout>(input: &[i32]) -> Run {
    let seq: L::Seq<i32> = input.iter().copied().collect();
    let mut sorter = FordJohnson::<L>::new();

    let start = Instant::now();
    let sorted = sorter.sort(seq);
    let elapsed = start.elapsed();

    Run {
        layout: L::NAME,
        sorted: sorted.into_iter().collect(),
        elapsed,
        comparisons: sorter.comparisons(),
    }
}

/// Index of the first element where the two runs disagree, if any.
pub fn first_mismatch(a: &[i32], b: &[i32]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then_some(a.len().min(b.len())))
}

pub fn values_line(label: &str, values: &[i32]) -> String {
    let mut line = format!("{label:<9}");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{v}");
    }
    line
}

pub fn timing_line(len: usize, run: &Run) -> String {
    format!(
        "Time to process a range of {len} elements with {:<8} : {}.{:03} us",
        run.layout,
        run.elapsed.as_micros(),
        run.elapsed.subsec_nanos() % 1_000
    )
}

pub fn comparisons_line(run: &Run, bound: usize) -> String {
    format!(
        "Comparisons with {:<8} : {} (information bound {bound})",
        run.layout, run.comparisons
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mergeinsert::{Contiguous, Deque};

    use super::{Run, comparisons_line, first_mismatch, timed, timing_line, values_line};

    #[test]
    fn both_layouts_agree() {
        let input = [8, 9, 5, 9, 9, 9, 4, 1];
        let vec_run = timed::<Contiguous>(&input);
        let deque_run = timed::<Deque>(&input);
        assert_eq!(vec_run.sorted, [1, 4, 5, 8, 9, 9, 9, 9]);
        assert_eq!(first_mismatch(&vec_run.sorted, &deque_run.sorted), None);
        assert_eq!(vec_run.comparisons, deque_run.comparisons);
        assert_eq!(vec_run.layout, "Vec");
        assert_eq!(deque_run.layout, "VecDeque");
    }

    #[test]
    fn reports_first_difference() {
        assert_eq!(first_mismatch(&[1, 2, 3], &[1, 5, 3]), Some(1));
        assert_eq!(first_mismatch(&[1, 2], &[1, 2, 3]), Some(2));
        assert_eq!(first_mismatch(&[], &[]), None);
    }

    #[test]
    fn formats_lines() {
        assert_eq!(values_line("Before:", &[3, 1, 2]), "Before:  3 1 2");
        assert_eq!(values_line("After:", &[]), "After:   ");

        let run = Run {
            layout: "Vec",
            sorted: vec![1, 2],
            elapsed: Duration::from_nanos(12_345),
            comparisons: 1,
        };
        assert_eq!(
            timing_line(2, &run),
            "Time to process a range of 2 elements with Vec      : 12.345 us"
        );
        assert_eq!(
            comparisons_line(&run, 1),
            "Comparisons with Vec      : 1 (information bound 1)"
        );
    }
}
