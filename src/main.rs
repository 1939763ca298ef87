mod library;
mod options;

mod day11;
mod day17;
mod day24;

use std::{
    fs,
    io::{self, Read},
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use structopt::StructOpt;
use thiserror::Error;

use crate::options::SimulationOptions;

#[derive(Debug, Clone, Error)]
pub enum SolutionDayError {
    #[error("Failed to parse day: {0}")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not an Advent Puzzle Day with a cellular automaton")]
    BadDay(u8),
}

macro_rules! solution_days {
    (
        $($Day:ident = $number:literal)*
    ) => {
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum SolutionDay {
            $($Day,)*
        }

        impl FromStr for SolutionDay {
            type Err = SolutionDayError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: u8 = s.parse()?;

                match value {
                    $($number => Ok(SolutionDay::$Day),)*
                    value => Err(SolutionDayError::BadDay(value)),
                }
            }
        }
    };
}

solution_days! {
    day11 = 11
    day17 = 17
    day24 = 24
}

#[derive(Debug, Clone, Error)]
pub enum SolutionPartError {
    #[error("Failed to parse part: {0}")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not an Advent Puzzle Part; must be 1 or 2")]
    BadPart(u8),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionPart {
    part1,
    part2,
}

impl FromStr for SolutionPart {
    type Err = SolutionPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            1 => Ok(SolutionPart::part1),
            2 => Ok(SolutionPart::part2),
            value => Err(SolutionPartError::BadPart(value)),
        }
    }
}

/// Cellular automaton solutions for the Advent of Code, 2020: the seating
/// system (day 11), Conway cubes (day 17), and the lobby floor (day 24).
#[derive(Debug, StructOpt)]
struct Args {
    /// Which day's solution are you looking for?
    #[structopt(short, long)]
    pub day: SolutionDay,

    /// Part 1 or Part 2?
    #[structopt(short, long)]
    pub part: SolutionPart,

    #[structopt(flatten)]
    pub simulation: SimulationOptions,

    /// The file from which to read input. If omitted, we read from stdin.
    pub input: Option<PathBuf>,
}

macro_rules! solver_picker {
    ($day:expr, $part:expr, $input:expr, $options:expr; $(
        $Day:ident { $($Part:ident)* }
    )*) => {{

        #[allow(unreachable_patterns)]
        match ($day, $part) {
            $($(
                (SolutionDay::$Day, SolutionPart::$Part) => {
                    println!("{}", crate::$Day::$Part($input, $options)?)
                }
            )*)*
            (day, part) => anyhow::bail!("No solution code for {:?}, {:?}", day, part),
        }
    }};
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::from_args();

    let mut input = String::new();

    match args.input {
        Some(path) => {
            let mut file = fs::File::open(&path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;

            file.read_to_string(&mut input)
                .with_context(|| format!("Failed to read from input file '{}'", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
        }
    }

    solver_picker! (
        args.day, args.part, &input, &args.simulation;

        day11 {part1 part2}
        day17 {part1 part2}
        day24 {part1 part2}
    );

    Ok(())
}
