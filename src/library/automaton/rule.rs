//! Transition rules: given a cell's current state and how many of its
//! neighbors are active, decide the cell's next state.

use super::seats::Sight;

pub trait Rule {
    fn next_state(&self, active: bool, active_neighbors: usize) -> bool;
}

/// A life-like rule: an active cell survives if its neighbor count is in
/// `survive`, and an inactive cell becomes active if its count is in `birth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeRule {
    pub survive: &'static [usize],
    pub birth: &'static [usize],
}

pub const CONWAY_CUBES: LifeRule = LifeRule {
    survive: &[2, 3],
    birth: &[3],
};

pub const HEX_TILES: LifeRule = LifeRule {
    survive: &[1, 2],
    birth: &[2],
};

impl Rule for LifeRule {
    #[inline]
    fn next_state(&self, active: bool, active_neighbors: usize) -> bool {
        match active {
            true => self.survive.contains(&active_neighbors),
            false => self.birth.contains(&active_neighbors),
        }
    }
}

/// Passengers sit in an empty seat when they can't see anyone, and leave
/// an occupied seat when they can see at least `tolerance` other people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingRule {
    pub sight: Sight,
    pub tolerance: usize,
}

impl SeatingRule {
    pub const ADJACENT: SeatingRule = SeatingRule {
        sight: Sight::Adjacent,
        tolerance: 4,
    };

    pub const VISIBLE: SeatingRule = SeatingRule {
        sight: Sight::LineOfSight,
        tolerance: 5,
    };
}

impl Rule for SeatingRule {
    #[inline]
    fn next_state(&self, occupied: bool, occupied_neighbors: usize) -> bool {
        match occupied {
            true => occupied_neighbors < self.tolerance,
            false => occupied_neighbors == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(true, 1 => false)]
    #[test_case(true, 2 => true)]
    #[test_case(true, 3 => true)]
    #[test_case(true, 4 => false)]
    #[test_case(false, 2 => false)]
    #[test_case(false, 3 => true)]
    #[test_case(false, 4 => false)]
    fn conway_cubes(active: bool, neighbors: usize) -> bool {
        CONWAY_CUBES.next_state(active, neighbors)
    }

    #[test_case(true, 0 => false)]
    #[test_case(true, 1 => true)]
    #[test_case(true, 2 => true)]
    #[test_case(true, 3 => false)]
    #[test_case(false, 1 => false)]
    #[test_case(false, 2 => true)]
    #[test_case(false, 3 => false)]
    fn hex_tiles(active: bool, neighbors: usize) -> bool {
        HEX_TILES.next_state(active, neighbors)
    }

    #[test_case(SeatingRule::ADJACENT, true, 3 => true)]
    #[test_case(SeatingRule::ADJACENT, true, 4 => false)]
    #[test_case(SeatingRule::VISIBLE, true, 4 => true)]
    #[test_case(SeatingRule::VISIBLE, true, 5 => false)]
    #[test_case(SeatingRule::ADJACENT, false, 0 => true)]
    #[test_case(SeatingRule::VISIBLE, false, 1 => false)]
    fn seating(rule: SeatingRule, occupied: bool, neighbors: usize) -> bool {
        rule.next_state(occupied, neighbors)
    }
}
