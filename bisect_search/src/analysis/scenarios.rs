use std::mem::size_of;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::evaluator::count_comparisons;
use super::measure::{compare, measure, ratio};
use super::memory::MemoryProbe;
use crate::search::{max_binary_steps, BinarySearcher, Searcher};

const BASE_NAMES: [&str; 25] = [
    "Ana",
    "Carlos",
    "Diana",
    "Eduardo",
    "Fernanda",
    "Gabriel",
    "Helena",
    "Ignacio",
    "Julia",
    "Kevin",
    "Laura",
    "Mario",
    "Natalia",
    "Oscar",
    "Patricia",
    "Quintero",
    "Rosa",
    "Santiago",
    "Teresa",
    "Ulises",
    "Valentina",
    "Walter",
    "Ximena",
    "Yolanda",
    "Zacarias",
];

// Names longer than this are cut in reports.
const NAME_DISPLAY_LEN: usize = 10;

// Average case quicksort cost used for the break-even estimate: 1.5 n log2(n).
const SORT_COST_FACTOR: f64 = 1.5;

// low, high, mid and the step counter.
const SEARCH_LOCALS: usize = 4;

/// Timing of a binary search for the middle element of `0..size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRecord {
    pub size: usize,
    pub time_us: f64,
    pub steps: usize,
    pub log2_n: f64,
    /// Rough count of primitive operations: 6 to set up, 8 per halving.
    pub operations: f64,
    pub memory_kb: f64,
}

/// Binary vs linear search for a name picked from a sorted list of generated names.
#[derive(Debug, Clone, PartialEq)]
pub struct NameRecord {
    pub size: usize,
    pub position: usize,
    pub binary_us: f64,
    pub linear_us: f64,
    pub binary_steps: usize,
    pub linear_steps: usize,
    pub found: bool,
    pub name: String,
}

/// Binary vs linear search for the last element of `0..size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    pub size: usize,
    pub binary_us: f64,
    pub linear_us: f64,
    pub time_advantage: f64,
    pub binary_steps: usize,
    pub linear_steps: usize,
    pub step_advantage: f64,
    /// Element comparisons made by the binary search.
    pub comparisons: usize,
}

/// Memory held by the slice versus memory the search itself needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceRecord {
    pub size: usize,
    pub sequence_bytes: usize,
    pub variable_bytes: usize,
    pub total_kb: f64,
    pub variable_percent: f64,
}

/// How many searches it takes before sorting first and binary searching pays off.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakEvenRecord {
    pub size: usize,
    pub sort_cost: f64,
    pub linear_average: f64,
    pub binary_average: f64,
    pub searches_needed: u64,
}

/// Measured step counts against the `log2(n)` prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRecord {
    pub size: usize,
    pub actual_steps: usize,
    pub theoretical_steps: f64,
    pub difference: f64,
    pub step_bound: usize,
    pub within_bound: bool,
    pub linear_theoretical: usize,
    pub theoretical_advantage: f64,
}

fn progress(name: &str, len: usize) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(&format!(
            "{name} -> {{spinner:.green}} [{{elapsed_precise}}] [{{bar:50.cyan/blue}}] Sizes: ({{pos}}/{{len}})"
        ))
        .context("Invalid progress bar template")?,
    );
    Ok(pb)
}

fn sorted_integers(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

fn log2(size: usize) -> f64 {
    (size as f64).log2()
}

fn scale<P: MemoryProbe>(
    name: &str,
    sizes: &[usize],
    probe: &P,
) -> anyhow::Result<Vec<ScaleRecord>> {
    info!("Running {name} over {sizes:?}");
    let pb = progress(name, sizes.len())?;

    let mut records = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if size == 0 {
            pb.inc(1);
            continue;
        }

        let slice = sorted_integers(size);
        let target = (size / 2) as u64;
        let measurement = measure(BinarySearcher, &slice, &target, probe)?;

        let log2_n = log2(size);
        records.push(ScaleRecord {
            size,
            time_us: measurement.micros(),
            steps: measurement.outcome.steps,
            log2_n,
            operations: 6.0 + 8.0 * log2_n,
            memory_kb: measurement.memory.delta() as f64 / 1024.0,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(records)
}

/// Binary search for the middle element of small slices.
pub fn small_scale<P: MemoryProbe>(
    sizes: &[usize],
    probe: &P,
) -> anyhow::Result<Vec<ScaleRecord>> {
    scale("Small Scale", sizes, probe)
}

/// Binary search for the middle element of large slices.
pub fn large_scale<P: MemoryProbe>(
    sizes: &[usize],
    probe: &P,
) -> anyhow::Result<Vec<ScaleRecord>> {
    scale("Large Scale", sizes, probe)
}

/// `count` names of the form `{first name}{index:04}`, sorted.
///
/// The first names are drawn from a fixed list with an rng seeded by `seed`, so the same seed
/// always gives the same names.
///
/// ```
/// use bisect_search::analysis::generate_names;
///
/// let names = generate_names(100, 7);
/// assert_eq!(names.len(), 100);
/// assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
/// assert_eq!(names, generate_names(100, 7));
/// ```
pub fn generate_names(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut names = (0..count)
        .map(|i| {
            let base = BASE_NAMES[rng.gen_range(0..BASE_NAMES.len())];
            format!("{base}{i:04}")
        })
        .collect::<Vec<_>>();

    names.sort();
    names
}

fn shorten(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LEN {
        let cut = name.chars().take(NAME_DISPLAY_LEN).collect::<String>();
        format!("{cut}...")
    } else {
        name.to_string()
    }
}

/// Binary vs linear search over generated names, looking for the first, middle and last name.
pub fn names<P: MemoryProbe>(
    sizes: &[usize],
    seed: u64,
    probe: &P,
) -> anyhow::Result<Vec<NameRecord>> {
    info!("Running name searches over {sizes:?}");
    let pb = progress("Names", sizes.len())?;

    let mut records = Vec::with_capacity(sizes.len() * 3);
    for &size in sizes {
        if size == 0 {
            pb.inc(1);
            continue;
        }

        let names = generate_names(size, seed);
        for position in [0, size / 2, size - 1] {
            let target = &names[position];
            let comparison = compare(&names, target, probe)?;

            records.push(NameRecord {
                size,
                position,
                binary_us: comparison.binary.micros(),
                linear_us: comparison.linear.micros(),
                binary_steps: comparison.binary.outcome.steps,
                linear_steps: comparison.linear.outcome.steps,
                found: comparison.binary.outcome.is_found(),
                name: shorten(target),
            });
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(records)
}

/// Binary vs linear search for the last element, the worst case for the linear scan.
pub fn binary_vs_linear<P: MemoryProbe>(
    sizes: &[usize],
    probe: &P,
) -> anyhow::Result<Vec<ComparisonRecord>> {
    info!("Running binary vs linear over {sizes:?}");
    let pb = progress("Binary vs Linear", sizes.len())?;

    let mut records = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let slice = sorted_integers(size);
        let target = size.saturating_sub(1) as u64;
        let comparison = compare(&slice, &target, probe)?;

        records.push(ComparisonRecord {
            size,
            binary_us: comparison.binary.micros(),
            linear_us: comparison.linear.micros(),
            time_advantage: comparison.time_advantage(),
            binary_steps: comparison.binary.outcome.steps,
            linear_steps: comparison.linear.outcome.steps,
            step_advantage: comparison.step_advantage(),
            comparisons: count_comparisons(BinarySearcher, &slice, &target),
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(records)
}

/// Memory of a slice of `T` against the fixed amount the search needs on top of it.
///
/// ```
/// use bisect_search::analysis::space_complexity;
///
/// let records = space_complexity::<u64>(&[1000]);
/// assert_eq!(records[0].sequence_bytes, 8000);
/// assert!(records[0].variable_percent < 1.0);
/// ```
pub fn space_complexity<T>(sizes: &[usize]) -> Vec<SpaceRecord> {
    let variable_bytes = SEARCH_LOCALS * size_of::<usize>();

    sizes
        .iter()
        .map(|&size| {
            let sequence_bytes = size * size_of::<T>();
            let total = sequence_bytes + variable_bytes;
            SpaceRecord {
                size,
                sequence_bytes,
                variable_bytes,
                total_kb: total as f64 / 1024.0,
                variable_percent: variable_bytes as f64 / total as f64 * 100.0,
            }
        })
        .collect()
}

/// Number of searches after which sorting once and binary searching beats scanning every time.
///
/// Sizes where a binary search is not cheaper than half a scan (up to 4) never break even and
/// are skipped.
pub fn break_even(sizes: &[usize]) -> Vec<BreakEvenRecord> {
    sizes
        .iter()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let log2_n = log2(size);
            (size, log2_n, size as f64 / 2.0)
        })
        .filter(|&(_, binary_average, linear_average)| linear_average > binary_average)
        .map(|(size, binary_average, linear_average)| {
            let sort_cost = size as f64 * binary_average * SORT_COST_FACTOR;
            let saved_per_search = linear_average - binary_average;

            BreakEvenRecord {
                size,
                sort_cost,
                linear_average,
                binary_average,
                searches_needed: (sort_cost / saved_per_search).ceil() as u64,
            }
        })
        .collect()
}

/// Real step counts for the middle element against `log2(n)` and the `floor(log2(n)) + 1` bound.
pub fn theoretical_validation(sizes: &[usize]) -> Vec<ValidationRecord> {
    info!("Validating step counts over {sizes:?}");

    sizes
        .iter()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let slice = sorted_integers(size);
            let actual_steps = BinarySearcher.search(&slice, &((size / 2) as u64)).steps;
            let theoretical_steps = log2(size);
            let step_bound = max_binary_steps(size);

            ValidationRecord {
                size,
                actual_steps,
                theoretical_steps,
                difference: (actual_steps as f64 - theoretical_steps).abs(),
                step_bound,
                within_bound: actual_steps <= step_bound,
                linear_theoretical: size,
                theoretical_advantage: ratio(size as f64, theoretical_steps),
            }
        })
        .collect()
}
