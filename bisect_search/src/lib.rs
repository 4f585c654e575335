//! # Introduction
//!
//! Binary search that counts its own steps, a linear search to compare it against, and the
//! harness that times both and checks binary search against `log2(n)`.
//!
//! ```
//! use bisect_search::search::{search, search_linear};
//!
//! let slice = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
//!
//! assert_eq!(search(&slice, &7).position, Some(3));
//! assert_eq!(search(&slice, &8).position, None);
//! assert_eq!(search_linear(&slice, &7).steps, 4);
//! ```

pub mod analysis;
pub mod search;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use log::{info, warn};

use analysis::{report, Analysis, AnalysisConfig, JemallocProbe};
use search::{BinarySearcher, LinearSearcher, Outcome, Searcher};

/// Install the `bisect` binary and run `bisect search` to see what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SearchArgs {
    #[command(subcommand)]
    command: SearchCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SearchCommands {
    /// Search for a value in a list given on the command line.
    Find {
        /// The value to look for.
        #[arg(allow_negative_numbers = true)]
        target: String,

        /// Comma separated values to search in. Expected in ascending order.
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// How to compare the values.
        #[arg(long, value_enum, default_value_t = Kind::Int)]
        kind: Kind,

        /// Scan linearly instead of bisecting.
        #[arg(long)]
        linear: bool,

        /// Sort the values before searching.
        #[arg(long)]
        sort: bool,
    },

    /// Search 13 in the first ten odd numbers.
    Demo,

    /// Time binary and linear search looking for the last of `size` sorted numbers.
    Compare {
        #[arg(short, long, default_value_t = 10_000)]
        size: usize,
    },

    /// Run every measurement suite and print the results.
    Analyze {
        /// Seed for the generated names.
        #[arg(long, default_value_t = AnalysisConfig::default().seed)]
        seed: u64,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Kind {
    /// Compare as signed integers
    Int,

    /// Compare as text
    Text,
}

impl SearchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SearchCommands::Find {
                target,
                values,
                kind,
                linear,
                sort,
            } => {
                let outcome = match kind {
                    Kind::Int => {
                        let target = target
                            .trim()
                            .parse::<i64>()
                            .with_context(|| format!("Target {target:?} is not an integer"))?;
                        let values = values
                            .iter()
                            .map(|value| {
                                value.trim().parse::<i64>().with_context(|| {
                                    format!("Value {value:?} is not an integer")
                                })
                            })
                            .collect::<anyhow::Result<Vec<_>>>()?;
                        find(values, &target, linear, sort)
                    }
                    Kind::Text => find(values, &target, linear, sort),
                };

                print_outcome(&outcome);
            }

            SearchCommands::Demo => report::demo(),

            SearchCommands::Compare { size } => report::quick_compare(size, &JemallocProbe)?,

            SearchCommands::Analyze { seed } => {
                let config = AnalysisConfig::default().with_seed(seed);
                info!("Running analysis with {config:?}");

                let analysis = Analysis::run(&config, &JemallocProbe)?;
                report::print_analysis(&analysis);
            }
        }

        Ok(())
    }
}

fn find<T: Ord>(mut values: Vec<T>, target: &T, linear: bool, sort: bool) -> Outcome {
    if sort {
        values.sort();
    }

    if linear {
        return LinearSearcher.search(&values, target);
    }

    if !values.windows(2).all(|pair| pair[0] <= pair[1]) {
        warn!("Values are not in ascending order, the result is meaningless. Pass --sort");
    }

    BinarySearcher.search(&values, target)
}

fn print_outcome(outcome: &Outcome) {
    match outcome.position {
        Some(position) => println!("{} {position}", "Found at ->".bold().green()),
        None => println!("{}", "Not found".bold().red()),
    }
    println!("{} {}", "Steps ->".bold().blue(), outcome.steps);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_sorted() {
        let outcome = find(vec![1, 3, 5, 7, 9], &7, false, false);
        assert_eq!(outcome, Outcome::found(3, 2));
    }

    #[test]
    fn find_sorts_first() {
        let outcome = find(vec![9, 7, 5, 3, 1], &7, false, true);
        assert_eq!(outcome.position, Some(3));
    }

    #[test]
    fn find_linear_keeps_order() {
        let outcome = find(vec![9, 7, 5], &7, true, false);
        assert_eq!(outcome, Outcome::found(1, 2));
    }

    #[test]
    fn find_negative() {
        let outcome = find(vec![-5, -3, 0], &-3, false, false);
        assert_eq!(outcome, Outcome::found(1, 1));
    }

    #[test]
    fn find_text() {
        let values = ["Ana", "Diana", "Mario"].map(String::from).to_vec();
        let outcome = find(values, &String::from("Mario"), false, false);
        assert_eq!(outcome.position, Some(2));
    }
}
