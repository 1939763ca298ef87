//! Sparse storage for automata in unbounded space: the set of active cells.

use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter, Write},
    hash::Hash,
    iter::FromIterator,
};

use itertools::Itertools;
use joinery::JoinableIterator;

use super::{
    coordinate::{Coordinate, Neighborhood, Point},
    driver::Generation,
    parse::{parse_plane, MalformedInput},
    rule::Rule,
};

#[derive(Debug, Clone)]
pub struct CellSet<C> {
    cells: HashSet<C>,
}

impl<C: Coordinate + Hash> CellSet<C> {
    pub fn new() -> Self {
        CellSet {
            cells: HashSet::new(),
        }
    }

    pub fn active_coordinates(&self) -> &HashSet<C> {
        &self.cells
    }

    /// Flip a cell between active and inactive
    pub fn toggle(&mut self, cell: C) {
        if !self.cells.insert(cell) {
            self.cells.remove(&cell);
        }
    }

    /// For every cell adjacent to at least one active cell, the number of
    /// active cells it's adjacent to. Active cells with no active neighbors
    /// are absent.
    fn neighbor_counts(&self, neighborhood: &Neighborhood<C>) -> HashMap<C, usize> {
        let mut counts = HashMap::with_capacity(self.cells.len() * neighborhood.len());

        self.cells
            .iter()
            .flat_map(|&cell| neighborhood.neighbors_of(cell))
            .for_each(|neighbor| *counts.entry(neighbor).or_default() += 1);

        counts
    }

    /// All the inactive cells that are adjacent to an active cell. Along
    /// with the active cells themselves, these are the only cells that can
    /// change in the next generation.
    pub fn frontier(&self, neighborhood: &Neighborhood<C>) -> HashSet<C> {
        self.cells
            .iter()
            .flat_map(|&cell| neighborhood.neighbors_of(cell))
            .filter(|neighbor| !self.cells.contains(neighbor))
            .collect()
    }

    /// Compute the next generation. Each active cell contributes 1 to the
    /// count of each of its neighbors, so only the active cells and the
    /// frontier are ever examined.
    pub fn step(&self, neighborhood: &Neighborhood<C>, rule: &impl Rule) -> Self {
        let counts = self.neighbor_counts(neighborhood);
        let count_of = |cell: &C| counts.get(cell).copied().unwrap_or(0);

        let survivors = self
            .cells
            .iter()
            .copied()
            .filter(|cell| rule.next_state(true, count_of(cell)));

        let births = self
            .frontier(neighborhood)
            .into_iter()
            .filter(|cell| rule.next_state(false, count_of(cell)));

        survivors.chain(births).collect()
    }
}

impl<C: Coordinate + Hash> Default for CellSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coordinate + Hash> PartialEq for CellSet<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<C: Coordinate + Hash> Eq for CellSet<C> {}

impl<C: Coordinate + Hash> FromIterator<C> for CellSet<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        CellSet {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<C: Coordinate + Hash> Generation for CellSet<C> {
    type Coordinate = C;

    #[inline]
    fn is_active(&self, cell: C) -> bool {
        self.cells.contains(&cell)
    }

    fn count_active(&self) -> usize {
        self.cells.len()
    }
}

/// The smallest box containing every active cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<const N: usize> {
    pub min: [isize; N],
    pub max: [isize; N],
}

impl<const N: usize> Bounds<N> {
    fn around(point: Point<N>) -> Self {
        Bounds {
            min: point.0,
            max: point.0,
        }
    }

    fn include(mut self, point: Point<N>) -> Self {
        for axis in 0..N {
            self.min[axis] = self.min[axis].min(point.0[axis]);
            self.max[axis] = self.max[axis].max(point.0[axis]);
        }

        self
    }
}

impl<const N: usize> CellSet<Point<N>> {
    /// Seed a set from a 2-D slice of `#` (active) and `.` (inactive) cells,
    /// placed on the plane where every axis past the first two is 0.
    pub fn from_plane(input: &str) -> Result<Self, MalformedInput> {
        let rows = parse_plane(input, |cell| match cell {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;

        Ok((0..)
            .zip(rows)
            .flat_map(|(row, cells)| {
                (0..)
                    .zip(cells)
                    .filter(|&(_, active)| active)
                    .map(move |(column, _)| Point::on_plane(row, column))
            })
            .collect())
    }

    /// Compute the bounding box of the active cells. This isn't stored; it's
    /// only needed for display.
    pub fn bounds(&self) -> Option<Bounds<N>> {
        let mut cells = self.active_coordinates().iter().copied();
        let first = cells.next()?;

        Some(cells.fold(Bounds::around(first), Bounds::include))
    }
}

const AXIS_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Render every 2-D slice in the bounding box, in the style of the puzzle:
/// a `z=0, w=1` header for each slice, then rows of `#` and `.`.
impl<const N: usize> Display for CellSet<Point<N>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bounds = match self.bounds() {
            Some(bounds) if N >= 2 => bounds,
            _ => return Ok(()),
        };

        let slices: Vec<Vec<isize>> = match N {
            2 => vec![Vec::new()],
            _ => (2..N)
                .map(|axis| bounds.min[axis]..=bounds.max[axis])
                .multi_cartesian_product()
                .collect(),
        };

        for (index, slice) in slices.iter().enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }

            if !slice.is_empty() {
                let header = slice.iter().zip(2..).map(|(value, axis)| {
                    format!("{}={}", AXIS_NAMES.get(axis).unwrap_or(&"?"), value)
                });

                writeln!(f, "{}", header.join_with(", "))?;
            }

            for row in bounds.min[0]..=bounds.max[0] {
                for column in bounds.min[1]..=bounds.max[1] {
                    let mut coords = Point::<N>::on_plane(row, column).0;
                    coords[2..].copy_from_slice(slice);

                    f.write_char(match self.is_active(Point(coords)) {
                        true => '#',
                        false => '.',
                    })?;
                }

                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}
