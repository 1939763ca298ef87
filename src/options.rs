use structopt::StructOpt;

use crate::library::automaton::Driver;

/// Knobs shared by every simulation
#[derive(Debug, Clone, Default, StructOpt)]
pub struct SimulationOptions {
    /// Run this many generations instead of the puzzle's usual count. Only
    /// affects simulations with a fixed length.
    #[structopt(long)]
    pub steps: Option<usize>,

    /// Give up on a simulation that's still changing after this many
    /// generations. By default, simulations that run until they settle are
    /// allowed to run forever.
    #[structopt(long)]
    pub max_generations: Option<usize>,

    /// Print the active cell count of every generation, and the final
    /// generation where it can be drawn, to stderr
    #[structopt(short, long)]
    pub verbose: bool,
}

impl SimulationOptions {
    pub fn steps_or(&self, default: usize) -> usize {
        self.steps.unwrap_or(default)
    }

    pub fn driver(&self) -> Driver {
        Driver {
            trace: self.verbose,
        }
    }
}
