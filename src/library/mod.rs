//! The library is a collection of common types, traits, and functions that
//! the puzzle solutions share

pub mod automaton;
