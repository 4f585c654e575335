//! Searching algorithms that report how much work they did.
//!
//! Every searcher returns an [`Outcome`]: where the target was found (if it was) and how many
//! steps it took to get there. A step is one element examined, so for [`BinarySearcher`] it is
//! one midpoint evaluation and for [`LinearSearcher`] it is one element of the scan.
//!
//! # Example
//!
//! ```
//! use bisect_search::search::{BinarySearcher, Searcher};
//!
//! let slice = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
//! let outcome = BinarySearcher.search(&slice, &13);
//! assert_eq!(outcome.position, Some(6));
//! assert_eq!(outcome.steps, 4);
//! ```

mod searchers;

pub use searchers::binary_searcher::BinarySearcher;
pub use searchers::linear_searcher::LinearSearcher;

use std::fmt::{self, Display};

/// The result of a single search.
///
/// `position` is `None` when the target is not in the slice. When it is `Some(i)` then
/// `slice[i] == target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub position: Option<usize>,
    pub steps: usize,
}

impl Outcome {
    pub fn found(position: usize, steps: usize) -> Self {
        Self {
            position: Some(position),
            steps,
        }
    }

    pub fn not_found(steps: usize) -> Self {
        Self {
            position: None,
            steps,
        }
    }

    pub fn is_found(&self) -> bool {
        self.position.is_some()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "found at {position} in {} steps", self.steps),
            None => write!(f, "not found after {} steps", self.steps),
        }
    }
}

/// The searching algorithm must implement the trait `Searcher`.
///
/// Implementors never mutate the slice and keep no state between calls, so the same searcher
/// may be used on the same slice from any number of places at once.
pub trait Searcher<T> {
    /// Name used in reports.
    const NAME: &'static str;

    fn search(&self, slice: &[T], target: &T) -> Outcome;
}

/// Binary search over an ascending slice. See [`BinarySearcher`].
///
/// ```
/// let slice = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
/// assert_eq!(bisect_search::search::search(&slice, &8).position, None);
/// ```
pub fn search<T: Ord>(slice: &[T], target: &T) -> Outcome {
    BinarySearcher.search(slice, target)
}

/// Linear scan from the front of the slice. See [`LinearSearcher`].
pub fn search_linear<T: PartialEq>(slice: &[T], target: &T) -> Outcome {
    LinearSearcher.search(slice, target)
}

/// `floor(log2(n)) + 1`, the most midpoints a binary search over `n` elements can evaluate.
///
/// Returns 0 for an empty slice.
pub fn max_binary_steps(n: usize) -> usize {
    match n {
        0 => 0,
        n => n.ilog2() as usize + 1,
    }
}
