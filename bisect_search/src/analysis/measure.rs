use std::time::{Duration, Instant};

use log::debug;

use super::memory::{MemoryProbe, MemoryUsage};
use crate::search::{BinarySearcher, LinearSearcher, Outcome, Searcher};

/// One timed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub memory: MemoryUsage,
}

impl Measurement {
    pub fn micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Binary and linear search timed on the same input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub binary: Measurement,
    pub linear: Measurement,
}

impl Comparison {
    /// How many times slower the linear scan was. 0 if the binary search was too fast to time.
    pub fn time_advantage(&self) -> f64 {
        ratio(self.linear.micros(), self.binary.micros())
    }

    /// How many more steps the linear scan took. 0 if binary search took no steps.
    pub fn step_advantage(&self) -> f64 {
        ratio(
            self.linear.outcome.steps as f64,
            self.binary.outcome.steps as f64,
        )
    }
}

pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Times `searcher` over `slice` and samples heap usage on either side of it.
pub fn measure<T, S, P>(
    searcher: S,
    slice: &[T],
    target: &T,
    probe: &P,
) -> anyhow::Result<Measurement>
where
    S: Searcher<T>,
    P: MemoryProbe,
{
    let before = probe.allocated()?;

    let now = Instant::now();
    let outcome = searcher.search(slice, target);
    let elapsed = now.elapsed();

    let after = probe.allocated()?;

    debug!(
        "{} over {} elements: {outcome} in {elapsed:?}",
        S::NAME,
        slice.len()
    );

    Ok(Measurement {
        outcome,
        elapsed,
        memory: MemoryUsage { before, after },
    })
}

/// Measures [`BinarySearcher`] and then [`LinearSearcher`] on the same slice and target.
///
/// ```
/// use bisect_search::analysis::{compare, NoopProbe};
///
/// let slice = (0..10_000).collect::<Vec<_>>();
/// let comparison = compare(&slice, &9_999, &NoopProbe).unwrap();
///
/// assert_eq!(comparison.binary.outcome.position, Some(9_999));
/// assert_eq!(comparison.linear.outcome.steps, 10_000);
/// assert!(comparison.step_advantage() > 100.0);
/// ```
pub fn compare<T, P>(slice: &[T], target: &T, probe: &P) -> anyhow::Result<Comparison>
where
    T: Ord,
    P: MemoryProbe,
{
    Ok(Comparison {
        binary: measure(BinarySearcher, slice, target, probe)?,
        linear: measure(LinearSearcher, slice, target, probe)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::memory::{JemallocProbe, NoopProbe};

    #[test]
    fn measurement_carries_outcome() {
        let slice = (0..1000).collect::<Vec<_>>();
        let measurement = measure(BinarySearcher, &slice, &500, &NoopProbe).unwrap();
        assert_eq!(
            measurement.outcome,
            BinarySearcher.search(&slice, &500)
        );
        assert_eq!(measurement.memory, MemoryUsage::default());
        assert!(measurement.micros() >= 0.0);
    }

    #[test]
    fn binary_search_allocates_nothing() {
        let slice = (0..10_000).collect::<Vec<_>>();
        let measurement = measure(BinarySearcher, &slice, &4_321, &JemallocProbe).unwrap();
        assert_eq!(measurement.outcome.position, Some(4_321));
        assert_eq!(measurement.memory.delta(), 0);
    }

    #[test]
    fn comparison_agrees_on_presence() {
        let slice = (0..1000).map(|i| i * 2).collect::<Vec<_>>();

        let hit = compare(&slice, &998, &NoopProbe).unwrap();
        assert_eq!(hit.binary.outcome.position, Some(499));
        assert_eq!(hit.linear.outcome.position, Some(499));

        let miss = compare(&slice, &999, &NoopProbe).unwrap();
        assert_eq!(miss.binary.outcome.position, None);
        assert_eq!(miss.linear.outcome.position, None);
        assert_eq!(miss.linear.outcome.steps, 1000);
    }

    #[test]
    fn ratios_guard_zero() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, 4.0), 2.5);

        let empty: [i32; 0] = [];
        let comparison = compare(&empty, &1, &NoopProbe).unwrap();
        assert_eq!(comparison.step_advantage(), 0.0);
    }
}
