use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;
use uva::puzzles;

#[derive(Parser)]
#[command(name = "uva")]
#[command(about = "Solvers for a small set of UVa judge problems")]
struct Cmd {
    /// Read the puzzle input from a file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Subcommand)]
enum Puzzle {
    /// 3n+1: maximum Collatz cycle length per range (UVa 100)
    Cycles,
    /// Blocks-world stack manipulation (UVa 101)
    Blocks,
    /// Primitive Pythagorean triples and untouched numbers (UVa 106)
    Triples,
    /// Maximum sub-rectangle sum (UVa 108)
    Maxsum,
    /// Total area of kingdoms struck by missiles (UVa 109)
    Kingdoms,
    /// Coin combinations for dollar amounts (UVa 147)
    Dollars,
    /// Anagram enumeration in judge order (UVa 195)
    Anagrams,
    /// Illuminated mountain slopes (UVa 920)
    Mountains,
    /// Most central important station (UVa 11792)
    Stations,
}

impl Puzzle {
    fn name(&self) -> &'static str {
        match self {
            Puzzle::Cycles => "cycles",
            Puzzle::Blocks => "blocks",
            Puzzle::Triples => "triples",
            Puzzle::Maxsum => "maxsum",
            Puzzle::Kingdoms => "kingdoms",
            Puzzle::Dollars => "dollars",
            Puzzle::Anagrams => "anagrams",
            Puzzle::Mountains => "mountains",
            Puzzle::Stations => "stations",
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the puzzle answer.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    let input = read_input(cmd.input.as_deref())?;
    let started = Instant::now();
    let stdout = io::stdout();
    run(&cmd.puzzle, &input, &mut stdout.lock())?;
    tracing::info!(
        puzzle = cmd.puzzle.name(),
        input_bytes = input.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "solved"
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn run(puzzle: &Puzzle, input: &str, out: &mut impl Write) -> Result<()> {
    let input = input.as_bytes();
    match puzzle {
        Puzzle::Cycles => puzzles::cycles::solve(input, out),
        Puzzle::Blocks => puzzles::blocks::solve(input, out),
        Puzzle::Triples => puzzles::triples::solve(input, out),
        Puzzle::Maxsum => puzzles::maxsum::solve(input, out),
        Puzzle::Kingdoms => puzzles::kingdoms::solve(input, out),
        Puzzle::Dollars => puzzles::dollars::solve(input, out),
        Puzzle::Anagrams => puzzles::anagrams::solve(input, out),
        Puzzle::Mountains => puzzles::mountains::solve(input, out),
        Puzzle::Stations => puzzles::stations::solve(input, out),
    }
    .with_context(|| format!("solving {}", puzzle.name()))
}
