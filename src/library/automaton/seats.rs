//! Dense, fixed-size storage for the seating layout: every cell is floor, an
//! empty seat, or an occupied seat.

use std::{
    fmt::{self, Display, Formatter, Write},
    iter,
    str::FromStr,
};

use gridly::prelude::*;
use itertools::Itertools;
use thiserror::Error;

use super::{
    coordinate::Neighborhood,
    driver::Generation,
    parse::{parse_plane, require_rectangle, MalformedInput},
    rule::{Rule, SeatingRule},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Empty,
    Occupied,
}

impl Cell {
    fn from_char(cell: char) -> Option<Self> {
        match cell {
            '.' => Some(Cell::Floor),
            'L' => Some(Cell::Empty),
            '#' => Some(Cell::Occupied),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::Floor => '.',
            Cell::Empty => 'L',
            Cell::Occupied => '#',
        }
    }

    fn seat(occupied: bool) -> Self {
        match occupied {
            true => Cell::Occupied,
            false => Cell::Empty,
        }
    }
}

/// How a seat's neighbors are found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sight {
    /// The 8 cells touching the seat
    Adjacent,

    /// The first seat in each of the 8 directions, looking past floor
    LineOfSight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("({row}, {column}) is outside the seating grid")]
pub struct OutOfBounds {
    pub row: isize,
    pub column: isize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: isize,
    columns: isize,

    // Row-major
    cells: Vec<Cell>,
}

impl SeatGrid {
    fn locations(&self) -> impl Iterator<Item = Location> {
        let columns = self.columns;

        (0..self.rows).flat_map(move |row| {
            (0..columns).map(move |column| Location {
                row: Row(row),
                column: Column(column),
            })
        })
    }

    pub fn cell_state(&self, row: isize, column: isize) -> Result<Cell, OutOfBounds> {
        self.get(Location {
            row: Row(row),
            column: Column(column),
        })
        .map(|&cell| cell)
        .map_err(|_| OutOfBounds { row, column })
    }

    /// The first non-floor cell seen looking from `from` in `direction`,
    /// if there is one before the edge of the grid.
    fn first_seat(&self, from: Location, direction: Vector) -> Option<Cell> {
        iter::successors(Some(from + direction), |&location| {
            Some(location + direction)
        })
        // Stop at the edge of the grid
        .map(|location| self.get(location).ok())
        .while_some()
        .copied()
        .find(|&cell| cell != Cell::Floor)
    }

    /// Count the occupied seats that can be seen from `location`. Neighbors
    /// outside the grid don't count.
    fn occupied_neighbors(
        &self,
        location: Location,
        neighborhood: &Neighborhood<Location>,
        sight: Sight,
    ) -> usize {
        match sight {
            Sight::Adjacent => neighborhood
                .neighbors_of(location)
                .filter(|&neighbor| self.is_active(neighbor))
                .count(),
            Sight::LineOfSight => neighborhood
                .offsets()
                .iter()
                .filter(|&&direction| {
                    self.first_seat(location, direction) == Some(Cell::Occupied)
                })
                .count(),
        }
    }

    /// Compute the next seating layout. Floor never changes; every seat is
    /// evaluated against the current layout, which is left untouched.
    pub fn step(&self, neighborhood: &Neighborhood<Location>, rule: &SeatingRule) -> Self {
        let cells = self
            .locations()
            .zip(self.cells.iter())
            .map(|(location, &cell)| match cell {
                Cell::Floor => Cell::Floor,
                seat => {
                    let occupied = self.occupied_neighbors(location, neighborhood, rule.sight);
                    Cell::seat(rule.next_state(seat == Cell::Occupied, occupied))
                }
            })
            .collect();

        SeatGrid {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }
}

impl GridBounds for SeatGrid {
    fn dimensions(&self) -> Vector {
        Vector {
            rows: Rows(self.rows),
            columns: Columns(self.columns),
        }
    }

    fn root(&self) -> Location {
        Location {
            row: Row(0),
            column: Column(0),
        }
    }
}

impl Grid for SeatGrid {
    type Item = Cell;

    unsafe fn get_unchecked(&self, location: Location) -> &Cell {
        let index = location.row.0 * self.columns + location.column.0;
        &self.cells[index as usize]
    }
}

impl Generation for SeatGrid {
    type Coordinate = Location;

    #[inline]
    fn is_active(&self, location: Location) -> bool {
        self.get(location).ok() == Some(&Cell::Occupied)
    }

    fn count_active(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied)
            .count()
    }
}

impl FromStr for SeatGrid {
    type Err = MalformedInput;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows = parse_plane(input, Cell::from_char)?;
        let columns = require_rectangle(&rows)?;

        Ok(SeatGrid {
            rows: rows.len() as isize,
            columns: columns as isize,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

impl Display for SeatGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = self.cell_state(row, column).map_err(|_| fmt::Error)?;
                f.write_char(cell.as_char())?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
