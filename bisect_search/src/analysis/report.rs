use colored::Colorize;
use prettytable::{row, Table};

use super::{
    compare, Analysis, BreakEvenRecord, ComparisonRecord, MemoryProbe, NameRecord, ScaleRecord,
    SpaceRecord, ValidationRecord,
};
use crate::search::{search, BinarySearcher, LinearSearcher, Searcher};

fn title(text: &str) {
    println!("{}", text.bold().underline().blue());
}

fn micros(value: f64) -> String {
    format!("{value:.2} µs")
}

fn times(value: f64) -> String {
    format!("{value:.1}x")
}

pub fn print_scale(heading: &str, records: &[ScaleRecord]) {
    title(heading);

    let mut table = Table::new();
    table.add_row(row![
        "Size".bold(),
        "Time".bold(),
        "log2(n)".bold(),
        "Operations".bold(),
        "Steps".bold(),
        "Memory (KB)".bold()
    ]);

    for record in records {
        table.add_row(row![
            record.size.to_string(),
            micros(record.time_us),
            format!("{:.2}", record.log2_n),
            format!("{:.1}", record.operations),
            record.steps.to_string(),
            format!("{:.1}", record.memory_kb)
        ]);
    }

    table.printstd();
    println!();
}

pub fn print_names(records: &[NameRecord]) {
    title("Searching Names");

    let mut table = Table::new();
    table.add_row(row![
        "Size".bold(),
        "Position".bold(),
        "Name".bold(),
        "Binary".bold(),
        "Linear".bold(),
        "Binary Steps".bold(),
        "Linear Steps".bold(),
        "Found".bold()
    ]);

    for record in records {
        let found = if record.found {
            "yes".green()
        } else {
            "no".red()
        };
        table.add_row(row![
            record.size.to_string(),
            record.position.to_string(),
            record.name,
            micros(record.binary_us),
            micros(record.linear_us),
            record.binary_steps.to_string(),
            record.linear_steps.to_string(),
            found
        ]);
    }

    table.printstd();
    println!();
}

pub fn print_comparison(records: &[ComparisonRecord]) {
    title("Binary Search vs Linear Search");

    let mut table = Table::new();
    table.add_row(row![
        "Size".bold(),
        "Binary".bold(),
        "Linear".bold(),
        "Time Advantage".bold(),
        "Binary Steps".bold(),
        "Linear Steps".bold(),
        "Step Advantage".bold(),
        "Comparisons Made".bold()
    ]);

    for record in records {
        table.add_row(row![
            record.size.to_string(),
            micros(record.binary_us),
            micros(record.linear_us),
            times(record.time_advantage),
            record.binary_steps.to_string(),
            record.linear_steps.to_string(),
            times(record.step_advantage),
            record.comparisons.to_string()
        ]);
    }

    table.printstd();
    println!();
}

pub fn print_space(records: &[SpaceRecord]) {
    title("Space Complexity");

    let mut table = Table::new();
    table.add_row(row![
        "Size".bold(),
        "Slice (bytes)".bold(),
        "Search (bytes)".bold(),
        "Total (KB)".bold(),
        "Search Share".bold()
    ]);

    for record in records {
        table.add_row(row![
            record.size.to_string(),
            record.sequence_bytes.to_string(),
            record.variable_bytes.to_string(),
            format!("{:.1}", record.total_kb),
            format!("{:.3}%", record.variable_percent)
        ]);
    }

    table.printstd();
    println!();
}

pub fn print_break_even(records: &[BreakEvenRecord]) {
    title("Break-even Point for Sorting First");

    let mut table = Table::new();
    table.add_row(row![
        "Size".bold(),
        "Sort Cost".bold(),
        "Linear Average".bold(),
        "Binary Average".bold(),
        "Searches Needed".bold()
    ]);

    for record in records {
        table.add_row(row![
            record.size.to_string(),
            format!("{:.0}", record.sort_cost),
            format!("{:.1}", record.linear_average),
            format!("{:.1}", record.binary_average),
            record.searches_needed.to_string()
        ]);
    }

    table.printstd();
    println!();
}

pub fn print_validation(records: &[ValidationRecord]) {
    title("Theoretical Validation");

    let mut table = Table::new();
    table.add_row(row![
        "Size".bold(),
        "Actual Steps".bold(),
        "log2(n)".bold(),
        "Difference".bold(),
        "Bound".bold(),
        "Linear Steps".bold(),
        "Advantage".bold()
    ]);

    for record in records {
        let bound = if record.within_bound {
            record.step_bound.to_string().green()
        } else {
            record.step_bound.to_string().red()
        };
        table.add_row(row![
            record.size.to_string(),
            record.actual_steps.to_string(),
            format!("{:.1}", record.theoretical_steps),
            format!("{:.2}", record.difference),
            bound,
            record.linear_theoretical.to_string(),
            times(record.theoretical_advantage)
        ]);
    }

    table.printstd();
    println!();
}

/// Prints every table of `analysis` followed by a short summary.
pub fn print_analysis(analysis: &Analysis) {
    print_scale("Small Scale", &analysis.small_scale);
    print_scale("Large Scale", &analysis.large_scale);
    print_names(&analysis.names);
    print_comparison(&analysis.comparison);
    print_space(&analysis.space);
    print_break_even(&analysis.break_even);
    print_validation(&analysis.validation);

    if let Some(largest) = analysis.comparison.last() {
        println!(
            "{} {} faster, {} fewer steps at {} elements",
            "Binary Search ->".bold().green(),
            times(largest.time_advantage).bold(),
            times(largest.step_advantage).bold(),
            largest.size
        );
    }

    let all_within = analysis.validation.iter().all(|r| r.within_bound);
    if all_within {
        println!(
            "{} every step count within floor(log2(n)) + 1",
            "Validation ->".bold().green()
        );
    } else {
        println!(
            "{} step count above floor(log2(n)) + 1",
            "Validation ->".bold().red()
        );
    }
}

/// Searches 13 in the first ten odd numbers and prints what happened.
pub fn demo() {
    let slice = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
    let target = 13;

    println!("{} {slice:?}", "Slice ->".bold().blue());
    println!("{} {target}", "Looking for ->".bold().blue());

    let outcome = search(&slice, &target);
    match outcome.position {
        Some(position) => println!("{} {position}", "Found at ->".bold().green()),
        None => println!("{}", "Not found".bold().red()),
    }
    println!("{} {}", "Steps ->".bold().blue(), outcome.steps);
}

/// Binary vs linear search for the last element of `0..size`.
pub fn quick_compare<P: MemoryProbe>(size: usize, probe: &P) -> anyhow::Result<()> {
    let slice = (0..size as u64).collect::<Vec<_>>();
    let target = size.saturating_sub(1) as u64;

    println!(
        "{} {} sorted elements, looking for {target}",
        "List Size ->".bold().underline().blue(),
        size.to_string().bold()
    );

    let comparison = compare(&slice, &target, probe)?;
    let binary = <BinarySearcher as Searcher<u64>>::NAME;
    let linear = <LinearSearcher as Searcher<u64>>::NAME;

    let mut table = Table::new();
    table.add_row(row![
        "Searcher".bold(),
        "Steps".bold(),
        "Time Taken".bold()
    ]);
    table.add_row(row![
        binary,
        comparison.binary.outcome.steps.to_string(),
        format!("{:?}", comparison.binary.elapsed)
    ]);
    table.add_row(row![
        linear,
        comparison.linear.outcome.steps.to_string(),
        format!("{:?}", comparison.linear.elapsed)
    ]);
    table.printstd();

    println!(
        "{} {} in time, {} in steps",
        "Speedup ->".bold().green(),
        times(comparison.time_advantage()),
        times(comparison.step_advantage())
    );

    Ok(())
}
