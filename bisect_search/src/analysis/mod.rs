//! Measurement harness around the searchers.
//!
//! Times searches, samples heap usage while they run, counts the element comparisons they make
//! and runs the suites that check binary search against `log2(n)` and against a linear scan.
//!
//! # Example
//!
//! ```
//! use bisect_search::analysis::{binary_vs_linear, NoopProbe};
//!
//! let records = binary_vs_linear(&[1_000, 10_000], &NoopProbe).unwrap();
//! assert_eq!(records[1].linear_steps, 10_000);
//! assert!(records[1].binary_steps <= 14);
//! ```

mod evaluator;
mod measure;
mod memory;
pub mod report;
mod scenarios;

pub use evaluator::{count_comparisons, SearchEvaluator};
pub use measure::{compare, measure, Comparison, Measurement};
pub use memory::{JemallocProbe, MemoryProbe, MemoryUsage, NoopProbe};
pub use scenarios::{
    binary_vs_linear, break_even, generate_names, large_scale, names, small_scale,
    space_complexity, theoretical_validation, BreakEvenRecord, ComparisonRecord, NameRecord,
    ScaleRecord, SpaceRecord, ValidationRecord,
};

const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

/// Sizes every suite runs over, and the seed for generated names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub small_sizes: Vec<usize>,
    pub large_sizes: Vec<usize>,
    pub name_sizes: Vec<usize>,
    pub comparison_sizes: Vec<usize>,
    pub space_sizes: Vec<usize>,
    pub break_even_sizes: Vec<usize>,
    pub validation_sizes: Vec<usize>,
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            small_sizes: vec![HUNDRED, 200, 400, 600, 800, THOUSAND],
            large_sizes: vec![TEN_THOUSAND, 20_000, 40_000, 60_000, 80_000, HUNDRED_THOUSAND],
            name_sizes: vec![THOUSAND, 5_000, TEN_THOUSAND],
            comparison_sizes: vec![
                THOUSAND,
                5_000,
                TEN_THOUSAND,
                25_000,
                50_000,
                HUNDRED_THOUSAND,
            ],
            space_sizes: vec![THOUSAND, 5_000, TEN_THOUSAND, 20_000, 50_000],
            break_even_sizes: vec![THOUSAND, 5_000, TEN_THOUSAND, 50_000],
            validation_sizes: vec![HUNDRED, THOUSAND, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION],
            seed: 42,
        }
    }
}

impl AnalysisConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub small_scale: Vec<ScaleRecord>,
    pub large_scale: Vec<ScaleRecord>,
    pub names: Vec<NameRecord>,
    pub comparison: Vec<ComparisonRecord>,
    pub space: Vec<SpaceRecord>,
    pub break_even: Vec<BreakEvenRecord>,
    pub validation: Vec<ValidationRecord>,
}

impl Analysis {
    /// Runs every suite in `config`.
    pub fn run<P: MemoryProbe>(config: &AnalysisConfig, probe: &P) -> anyhow::Result<Self> {
        Ok(Self {
            small_scale: small_scale(&config.small_sizes, probe)?,
            large_scale: large_scale(&config.large_sizes, probe)?,
            names: names(&config.name_sizes, config.seed, probe)?,
            comparison: binary_vs_linear(&config.comparison_sizes, probe)?,
            space: space_complexity::<u64>(&config.space_sizes),
            break_even: break_even(&config.break_even_sizes),
            validation: theoretical_validation(&config.validation_sizes),
        })
    }
}
