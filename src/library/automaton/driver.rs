//! Running an automaton forward, either for a fixed number of generations
//! or until it stops changing.

use thiserror::Error;

/// A snapshot of every cell in an automaton at one point in time.
pub trait Generation {
    type Coordinate;

    fn is_active(&self, coordinate: Self::Coordinate) -> bool;

    fn count_active(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the simulation was still changing after {generations} generations")]
pub struct NonTermination {
    pub generations: usize,
}

/// A generation that maps to itself, along with the number of steps that
/// changed something on the way there.
#[derive(Debug, Clone)]
pub struct Converged<G> {
    pub generation: G,
    pub steps: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Driver {
    /// If set, print the active count of each generation to stderr
    pub trace: bool,
}

impl Driver {
    fn observe(&self, index: usize, generation: &impl Generation) {
        if self.trace {
            eprintln!(
                "generation {}: {} active",
                index,
                generation.count_active()
            );
        }
    }

    /// Apply `step` exactly `steps` times. There's no early exit, even if
    /// the generation stops changing.
    pub fn run_for<G: Generation>(
        &self,
        initial: G,
        steps: usize,
        mut step: impl FnMut(&G) -> G,
    ) -> G {
        let mut current = initial;
        self.observe(0, &current);

        for index in 1..=steps {
            current = step(&current);
            self.observe(index, &current);
        }

        current
    }

    /// Apply `step` until it returns a generation equal to its input. If
    /// `limit` is given, fail once more than that many steps have changed
    /// the generation.
    pub fn run_to_fixed_point<G: Generation + PartialEq>(
        &self,
        initial: G,
        limit: Option<usize>,
        mut step: impl FnMut(&G) -> G,
    ) -> Result<Converged<G>, NonTermination> {
        let mut current = initial;
        let mut steps = 0;
        self.observe(0, &current);

        loop {
            let next = step(&current);

            if next == current {
                return Ok(Converged {
                    generation: current,
                    steps,
                });
            }

            steps += 1;
            self.observe(steps, &next);

            if limit.map_or(false, |limit| steps > limit) {
                return Err(NonTermination { generations: steps });
            }

            current = next;
        }
    }
}
