use log::trace;

use crate::search::{Outcome, Searcher};

/// An implementation of [Linear Search](https://en.wikipedia.org/wiki/Linear_search), used as the
/// baseline [`BinarySearcher`](crate::search::BinarySearcher) is measured against.
///
/// # Usage
///```
/// use bisect_search::search::{LinearSearcher, Searcher};
///
/// let slice = [4, 1, 3, 1];
/// let outcome = LinearSearcher.search(&slice, &1);
/// assert_eq!(outcome.position, Some(1));
/// assert_eq!(outcome.steps, 2);
///```
/// # Explanation
///
/// Linear search checks each element of the slice in turn, starting at index 0, until one equal
/// to the target is found or the slice runs out. Every element examined is one step, so a miss
/// always costs exactly `slice.len()` steps. The slice does not need to be sorted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearSearcher;

impl<T> Searcher<T> for LinearSearcher
where
    T: PartialEq,
{
    const NAME: &'static str = "Linear Search";

    fn search(&self, slice: &[T], target: &T) -> Outcome {
        let mut steps = 0;

        for (i, elem) in slice.iter().enumerate() {
            steps += 1;
            if elem == target {
                trace!("matched at {i}");
                return Outcome::found(i, steps);
            }
        }

        Outcome::not_found(steps)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let slice = [5, 1, 4, 2, 3];
        assert_eq!(LinearSearcher.search(&slice, &4), Outcome::found(2, 3));
        assert_eq!(LinearSearcher.search(&slice, &6), Outcome::not_found(5));
    }

    #[test]
    fn first_match_wins() {
        let slice = [7, 3, 7, 3];
        assert_eq!(LinearSearcher.search(&slice, &3), Outcome::found(1, 2));
    }

    #[test]
    fn sorted_array() {
        let slice = (1..10).collect::<Vec<_>>();
        for (i, value) in slice.iter().enumerate() {
            assert_eq!(LinearSearcher.search(&slice, value), Outcome::found(i, i + 1));
        }
    }

    #[test]
    fn simple_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(LinearSearcher.search(&empty, &1), Outcome::not_found(0));

        let one = [1];
        assert_eq!(LinearSearcher.search(&one, &1), Outcome::found(0, 1));
        assert_eq!(LinearSearcher.search(&one, &2), Outcome::not_found(1));
    }

    #[test]
    fn partial_eq_only() {
        // f64 is not Ord but linear search only needs equality.
        let slice = [0.5, 1.5, 2.5];
        assert_eq!(LinearSearcher.search(&slice, &1.5), Outcome::found(1, 2));
    }
}
