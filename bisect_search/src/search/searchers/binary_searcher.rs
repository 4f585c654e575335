use std::cmp::Ordering;

use log::trace;

use crate::search::{Outcome, Searcher};

/// An implementation of [Binary Search](https://en.wikipedia.org/wiki/Binary_search) that counts
/// its midpoint evaluations.
///
/// # Usage
///```
/// use bisect_search::search::{BinarySearcher, Searcher};
///
/// let slice = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
///
/// let outcome = BinarySearcher.search(&slice, &7);
/// assert_eq!(outcome.position, Some(3));
/// assert_eq!(outcome.steps, 4);
///
/// let outcome = BinarySearcher.search(&slice, &8);
/// assert_eq!(outcome.position, None);
///```
///
/// # Explanation
///
/// Binary search compares the target value to the middle element of the slice. If they are not
/// equal, the half in which the target cannot lie is eliminated and the search continues on the
/// remaining half, again taking the middle element to compare to the target, and repeating this
/// until the target value is found or the remaining half is empty.
///
/// # Algorithm
///
/// The window `[low, high]` starts as the whole slice. Each step takes
/// `mid = floor((low + high) / 2)`, counts one step and compares `slice[mid]` with the target:
///
/// - equal: done, `mid` is returned.
/// - smaller: the target can only be above, `low = mid + 1`.
/// - bigger: the target can only be below, `high = mid - 1`.
///
/// When the window is empty the target is absent. A slice of `n` elements never takes more than
/// `floor(log2(n)) + 1` steps, and an empty slice takes none.
///
/// # Caveats
///
/// The slice must be sorted in ascending order. This is not checked: an unsorted slice gives an
/// unspecified (but deterministic) answer.
///
/// If the target appears more than once, the returned position is whichever copy the bisection
/// lands on first. It is not guaranteed to be the first or the last one.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearcher;

impl<T> Searcher<T> for BinarySearcher
where
    T: Ord,
{
    const NAME: &'static str = "Binary Search";

    fn search(&self, slice: &[T], target: &T) -> Outcome {
        let mut steps = 0;

        if slice.is_empty() {
            return Outcome::not_found(steps);
        }

        let mut low = 0;
        let mut high = slice.len() - 1;

        while low <= high {
            // Same as (low + high) / 2 without the overflow.
            let mid = low + (high - low) / 2;
            steps += 1;
            trace!("step {steps}: window [{low}, {high}], mid {mid}");

            match slice[mid].cmp(target) {
                Ordering::Equal => return Outcome::found(mid, steps),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => {
                    // high would go below zero, which is below low.
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
            }
        }

        Outcome::not_found(steps)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::search::max_binary_steps;

    fn odds() -> Vec<i32> {
        vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]
    }

    #[test]
    fn finds_seven() {
        // mid 4 (9) too big, mid 1 (3) too small, mid 2 (5) too small, mid 3 (7).
        assert_eq!(BinarySearcher.search(&odds(), &7), Outcome::found(3, 4));
    }

    #[test]
    fn finds_thirteen() {
        assert_eq!(BinarySearcher.search(&odds(), &13), Outcome::found(6, 4));
    }

    #[test]
    fn finds_middle_in_one_step() {
        assert_eq!(BinarySearcher.search(&odds(), &9), Outcome::found(4, 1));
    }

    #[test]
    fn misses_eight() {
        assert_eq!(BinarySearcher.search(&odds(), &8), Outcome::not_found(4));
    }

    #[test]
    fn every_element_is_found() {
        let slice = odds();
        for (i, value) in slice.iter().enumerate() {
            let outcome = BinarySearcher.search(&slice, value);
            assert_eq!(outcome.position, Some(i));
            assert!(outcome.steps <= max_binary_steps(slice.len()));
        }
    }

    #[test]
    fn below_and_above_range() {
        let slice = odds();
        let below = BinarySearcher.search(&slice, &0);
        assert_eq!(below.position, None);
        assert!(below.steps <= max_binary_steps(slice.len()));

        let above = BinarySearcher.search(&slice, &100);
        assert_eq!(above.position, None);
        assert!(above.steps <= max_binary_steps(slice.len()));
    }

    #[test]
    fn simple_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(BinarySearcher.search(&empty, &1), Outcome::not_found(0));

        let one = [1];
        assert_eq!(BinarySearcher.search(&one, &1), Outcome::found(0, 1));
        assert_eq!(BinarySearcher.search(&one, &0), Outcome::not_found(1));
        assert_eq!(BinarySearcher.search(&one, &2), Outcome::not_found(1));

        let two = [1, 2];
        assert_eq!(BinarySearcher.search(&two, &1), Outcome::found(0, 1));
        assert_eq!(BinarySearcher.search(&two, &2), Outcome::found(1, 2));
        assert_eq!(BinarySearcher.search(&two, &3), Outcome::not_found(2));
    }

    #[test]
    fn duplicates_land_on_some_copy() {
        let slice = [1, 2, 2, 2, 2, 2, 3];
        let outcome = BinarySearcher.search(&slice, &2);
        let position = outcome.position.expect("2 is in the slice");
        assert_eq!(slice[position], 2);
    }

    #[test]
    fn strings() {
        let names = ["Ana", "Carlos", "Diana", "Eduardo", "Fernanda"];
        assert_eq!(BinarySearcher.search(&names, &"Diana").position, Some(2));
        assert_eq!(BinarySearcher.search(&names, &"Zacarias").position, None);

        let owned: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            BinarySearcher.search(&owned, &String::from("Eduardo")).position,
            Some(3)
        );
    }

    #[test]
    fn same_answer_twice() {
        let slice = (0..1000).collect::<Vec<_>>();
        let first = BinarySearcher.search(&slice, &777);
        let second = BinarySearcher.search(&slice, &777);
        assert_eq!(first, second);
    }

    #[test]
    fn large_extremes_stay_within_bound() {
        let slice = (0..1_000_000).collect::<Vec<u64>>();
        for target in [0, 1, 499_999, 999_998, 999_999, 1_000_000] {
            let outcome = BinarySearcher.search(&slice, &target);
            assert!(outcome.steps <= 20, "{target} took {} steps", outcome.steps);
        }
    }
}
