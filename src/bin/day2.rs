use std::path::PathBuf;

use anyhow::{Context, Result};
use aoc2022::input;
use aoc2022::parse::{MoveRound, OutcomeRound};
use clap::Parser;

/// Day 2: rock paper scissors strategy guide.
#[derive(Parser)]
struct Cli {
    /// Path to the puzzle input
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let lines = input::read_lines(&cli.input)?;

    // Part one reads the second column as our hand, part two as the
    // outcome we have to reach.
    let mut part_one = 0;
    let mut part_two = 0;
    for (i, line) in lines.iter().enumerate() {
        let round: MoveRound = line
            .parse()
            .with_context(|| format!("line {}", i + 1))?;
        part_one += round.points();

        let round: OutcomeRound = line
            .parse()
            .with_context(|| format!("line {}", i + 1))?;
        part_two += round.points();
    }

    println!("{part_one}");
    println!("{part_two}");
    Ok(())
}
