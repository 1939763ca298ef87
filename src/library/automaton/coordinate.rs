//! Points in the spaces our automata live in, and the neighborhoods that
//! connect them.

use std::{fmt::Debug, iter};

use gridly::prelude::*;
use itertools::Itertools;

/// A point in some (possibly unbounded) space. A point can be offset by a
/// `Delta` to reach another point; a `Neighborhood` is a fixed set of these
/// deltas.
pub trait Coordinate: Copy + Eq + Debug {
    type Delta: Copy + Debug;

    fn offset(self, delta: Self::Delta) -> Self;
}

/// A point in N-dimensional integer space. Axis 0 is the row and axis 1 is
/// the column of the plane the input is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<const N: usize>(pub [isize; N]);

impl<const N: usize> Point<N> {
    /// The point at (row, column) on the plane where every other axis is 0.
    pub fn on_plane(row: isize, column: isize) -> Self {
        let mut coords = [0; N];

        if let [x, y, ..] = &mut coords[..] {
            *x = row;
            *y = column;
        }

        Point(coords)
    }
}

impl<const N: usize> Coordinate for Point<N> {
    type Delta = [isize; N];

    #[inline]
    fn offset(self, delta: [isize; N]) -> Self {
        let mut coords = self.0;

        coords
            .iter_mut()
            .zip(delta.iter())
            .for_each(|(coord, &step)| *coord += step);

        Point(coords)
    }
}

impl Coordinate for Location {
    type Delta = Vector;

    #[inline]
    fn offset(self, delta: Vector) -> Self {
        self + delta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    East,
    Southeast,
    Southwest,
    West,
    Northwest,
    Northeast,
}

use HexDirection::*;

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [East, Southeast, Southwest, West, Northwest, Northeast];

    /// The (q, r) axial step for this direction
    #[inline]
    fn axial(self) -> (isize, isize) {
        match self {
            East => (1, 0),
            West => (-1, 0),
            Northeast => (1, -1),
            Northwest => (0, -1),
            Southeast => (0, 1),
            Southwest => (-1, 1),
        }
    }
}

/// A hex tile, in axial coordinates. East-west travel changes `q`; the
/// diagonals change `r`, with the northeast and southwest diagonals also
/// shifting `q` so that every tile has exactly one integer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Hex {
    pub q: isize,
    pub r: isize,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };
}

impl Coordinate for Hex {
    type Delta = HexDirection;

    #[inline]
    fn offset(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.axial();

        Hex {
            q: self.q + dq,
            r: self.r + dr,
        }
    }
}

/// Every nonzero vector in {-1, 0, 1}^N
fn moore_offsets<const N: usize>() -> impl Iterator<Item = [isize; N]> {
    iter::repeat(-1..=1)
        .take(N)
        .multi_cartesian_product()
        .filter(|delta| delta.iter().any(|&step| step != 0))
        .map(|steps| {
            let mut delta = [0; N];
            delta
                .iter_mut()
                .zip(steps)
                .for_each(|(slot, step)| *slot = step);
            delta
        })
}

/// The set of offsets that make two points adjacent in some topology.
#[derive(Debug, Clone)]
pub struct Neighborhood<C: Coordinate> {
    offsets: Vec<C::Delta>,
}

impl<C: Coordinate> Neighborhood<C> {
    pub fn offsets(&self) -> &[C::Delta] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Every point adjacent to `point`. There's no bound on the space, so
    /// this is well defined for any point at all.
    pub fn neighbors_of<'a>(&'a self, point: C) -> impl Iterator<Item = C> + 'a
    where
        C: 'a,
    {
        self.offsets.iter().map(move |&delta| point.offset(delta))
    }
}

impl<const N: usize> Neighborhood<Point<N>> {
    /// All points within Chebyshev distance 1, excluding the point itself.
    pub fn moore() -> Self {
        Neighborhood {
            offsets: moore_offsets::<N>().collect(),
        }
    }
}

impl Neighborhood<Location> {
    /// The 8 cells touching a grid cell, including diagonals.
    pub fn touching() -> Self {
        Neighborhood {
            offsets: moore_offsets::<2>()
                .map(|[rows, columns]| Vector {
                    rows: Rows(rows),
                    columns: Columns(columns),
                })
                .collect(),
        }
    }
}

impl Neighborhood<Hex> {
    pub fn hex() -> Self {
        Neighborhood {
            offsets: HexDirection::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;

    fn moore_count<const N: usize>(origin: Point<N>) -> (usize, usize, bool) {
        let neighborhood = Neighborhood::<Point<N>>::moore();
        let neighbors: HashSet<Point<N>> = neighborhood.neighbors_of(origin).collect();

        (
            neighborhood.len(),
            neighbors.len(),
            neighbors.contains(&origin),
        )
    }

    #[test]
    fn moore_2d() {
        assert_eq!(moore_count(Point([3, -7])), (8, 8, false));
    }

    #[test]
    fn moore_3d() {
        assert_eq!(moore_count(Point([0, 0, 0])), (26, 26, false));
    }

    #[test]
    fn moore_4d() {
        assert_eq!(moore_count(Point([1000, -1000, 5, 5])), (80, 80, false));
    }

    #[test]
    fn moore_offsets_exclude_zero() {
        assert!(Neighborhood::<Point<3>>::moore()
            .offsets()
            .iter()
            .all(|delta| delta != &[0, 0, 0]));
    }

    #[test]
    fn moore_neighbors_are_adjacent() {
        let origin = Point([10, 20, 30]);

        for neighbor in Neighborhood::<Point<3>>::moore().neighbors_of(origin) {
            let distance = neighbor
                .0
                .iter()
                .zip(origin.0.iter())
                .map(|(a, b)| (a - b).abs())
                .max();

            assert_eq!(distance, Some(1));
        }
    }

    #[test]
    fn touching_matches_moore_2d() {
        let origin = Location {
            row: Row(4),
            column: Column(4),
        };

        let touching: HashSet<(isize, isize)> = Neighborhood::touching()
            .neighbors_of(origin)
            .map(|loc| (loc.row.0, loc.column.0))
            .collect();

        let moore: HashSet<(isize, isize)> = Neighborhood::<Point<2>>::moore()
            .neighbors_of(Point([4, 4]))
            .map(|Point([row, column])| (row, column))
            .collect();

        assert_eq!(touching, moore);
    }

    #[test]
    fn hex_has_six_distinct_neighbors() {
        let neighbors: HashSet<Hex> = Neighborhood::hex().neighbors_of(Hex::ORIGIN).collect();

        assert_eq!(neighbors.len(), 6);
        assert!(!neighbors.contains(&Hex::ORIGIN));
    }

    #[test]
    fn hex_directions_close_a_loop() {
        let end = HexDirection::ALL
            .iter()
            .fold(Hex::ORIGIN, |hex, &direction| hex.offset(direction));

        assert_eq!(end, Hex::ORIGIN);
    }

    #[test_case(&[East, West] => Hex::ORIGIN; "east west")]
    #[test_case(&[Northwest, West, Southwest, East, East] => Hex::ORIGIN; "nwwswee")]
    #[test_case(&[East, Southeast, Northeast, East] => Hex { q: 3, r: 0 }; "esenee")]
    #[test_case(&[Northeast, Southeast] => Hex { q: 1, r: 0 }; "ne se")]
    #[test_case(&[Northwest, Southwest] => Hex { q: -1, r: 0 }; "nw sw")]
    fn hex_walks(path: &[HexDirection]) -> Hex {
        path.iter()
            .fold(Hex::ORIGIN, |hex, &direction| hex.offset(direction))
    }
}
