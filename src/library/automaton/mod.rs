//! A small cellular automaton engine. Each generation is an owned snapshot,
//! either a sparse set of active cells in unbounded space (`CellSet`) or a
//! dense, fixed-size grid (`SeatGrid`). A `Rule` decides each cell's next
//! state from its own state and its count of active neighbors, where
//! "neighbor" is defined by a `Neighborhood`. A `Driver` runs generations
//! forward.

pub mod cells;
pub mod coordinate;
pub mod driver;
pub mod parse;
pub mod rule;
pub mod seats;

pub use cells::CellSet;
pub use coordinate::{Coordinate, Hex, HexDirection, Neighborhood, Point};
pub use driver::{Driver, Generation};
pub use rule::{SeatingRule, CONWAY_CUBES, HEX_TILES};
pub use seats::SeatGrid;
