use anyhow::Context;

use crate::{
    library::automaton::{Generation, Neighborhood, SeatGrid, SeatingRule},
    options::SimulationOptions,
};

fn solve(input: &str, rule: SeatingRule, options: &SimulationOptions) -> anyhow::Result<usize> {
    let grid: SeatGrid = input.parse().context("Failed to parse seating layout")?;
    let neighborhood = Neighborhood::touching();

    let settled = options
        .driver()
        .run_to_fixed_point(grid, options.max_generations, |grid| {
            grid.step(&neighborhood, &rule)
        })
        .context("Seating never settled")?;

    if options.verbose {
        eprintln!(
            "Settled after {} rounds:\n{}",
            settled.steps, settled.generation
        );
    }

    Ok(settled.generation.count_active())
}

pub fn part1(input: &str, options: &SimulationOptions) -> anyhow::Result<usize> {
    solve(input, SeatingRule::ADJACENT, options)
}

pub fn part2(input: &str, options: &SimulationOptions) -> anyhow::Result<usize> {
    solve(input, SeatingRule::VISIBLE, options)
}
