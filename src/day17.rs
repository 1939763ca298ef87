use anyhow::Context;

use crate::{
    library::automaton::{CellSet, Generation, Neighborhood, Point, CONWAY_CUBES},
    options::SimulationOptions,
};

const BOOT_CYCLES: usize = 6;

fn solve<const N: usize>(input: &str, options: &SimulationOptions) -> anyhow::Result<usize> {
    let initial_cube = CellSet::<Point<N>>::from_plane(input).context("Failed to parse cube")?;
    let neighborhood = Neighborhood::moore();

    let final_cube = options.driver().run_for(
        initial_cube,
        options.steps_or(BOOT_CYCLES),
        |cube| cube.step(&neighborhood, &CONWAY_CUBES),
    );

    if options.verbose {
        eprintln!("{}", final_cube);
    }

    Ok(final_cube.count_active())
}

pub fn part1(input: &str, options: &SimulationOptions) -> anyhow::Result<usize> {
    solve::<3>(input, options)
}

pub fn part2(input: &str, options: &SimulationOptions) -> anyhow::Result<usize> {
    solve::<4>(input, options)
}
