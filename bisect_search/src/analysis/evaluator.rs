use std::{cell::Cell, cmp::Ordering, rc::Rc};

use crate::search::Searcher;

/// Wraps an element so that every comparison made against it is counted.
///
/// The `elem` is what gets compared, the `comparison_counter` is bumped on the way.
#[derive(Clone, Debug)]
pub struct SearchEvaluator<T> {
    elem: T,
    // Shared by every element of the slice and by the target, so it has to be mutable through a
    // shared reference. Searchers only ever see `&[T]`.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SearchEvaluator<T> {
    pub fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn bump(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SearchEvaluator<T> {}

impl<T: PartialEq> PartialEq for SearchEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bump();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SearchEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.bump();
        self.elem.partial_cmp(&other.elem)
    }
}

// Must agree with partial_cmp, both count as one comparison.
impl<T: Ord> Ord for SearchEvaluator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bump();
        self.elem.cmp(&other.elem)
    }
}

/// Runs `searcher` over a copy of `slice` whose elements count every comparison made against
/// them, and returns how many there were.
///
/// Both searchers in this crate make exactly one comparison per step.
///
/// ```
/// use bisect_search::analysis::count_comparisons;
/// use bisect_search::search::BinarySearcher;
///
/// let slice = (0..100).collect::<Vec<_>>();
/// assert_eq!(count_comparisons(BinarySearcher, &slice, &49), 1);
/// ```
pub fn count_comparisons<T, S>(searcher: S, slice: &[T], target: &T) -> usize
where
    T: Clone,
    S: Searcher<SearchEvaluator<T>>,
{
    let counter = Rc::new(Cell::new(0));
    let values = slice
        .iter()
        .map(|elem| SearchEvaluator::new(elem.clone(), counter.clone()))
        .collect::<Vec<_>>();
    let target = SearchEvaluator::new(target.clone(), counter.clone());

    counter.set(0);
    searcher.search(&values, &target);

    counter.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{BinarySearcher, LinearSearcher};

    #[test]
    fn one_comparison_per_binary_step() {
        let slice = (0..1000).collect::<Vec<_>>();
        for target in [0, 1, 333, 500, 998, 999, 1000, -1] {
            let steps = BinarySearcher.search(&slice, &target).steps;
            assert_eq!(count_comparisons(BinarySearcher, &slice, &target), steps);
        }
    }

    #[test]
    fn one_comparison_per_linear_step() {
        let slice = (0..100).collect::<Vec<_>>();
        assert_eq!(count_comparisons(LinearSearcher, &slice, &0), 1);
        assert_eq!(count_comparisons(LinearSearcher, &slice, &99), 100);
        assert_eq!(count_comparisons(LinearSearcher, &slice, &100), 100);
    }

    #[test]
    fn counter_is_shared() {
        let counter = Rc::new(Cell::new(0));
        let a = SearchEvaluator::new(1, counter.clone());
        let b = SearchEvaluator::new(2, counter.clone());
        assert!(a < b);
        assert!(a != b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(counter.get(), 3);
    }
}
