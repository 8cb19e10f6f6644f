use std::path::PathBuf;

use anyhow::Result;
use aoc2022::{calories, input};
use clap::Parser;

/// Day 1: calorie counting.
#[derive(Parser)]
struct Cli {
    /// Path to the puzzle input
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let lines = input::read_lines(&cli.input)?;
    let groups = input::numeric_groups(&lines)?;
    println!("{}", calories::largest_total(&groups));
    println!("{}", calories::top_three_total(&groups));
    Ok(())
}
