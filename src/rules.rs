//! Rules of Conway's Game of Life, B3/S23.
//!
//! See: https://conwaylife.com/wiki/Conway%27s_Game_of_Life

/// What happens to a cell between two generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Alive with fewer than 2 alive neighbors
    Underpopulated,

    /// Alive with 2 or 3 alive neighbors
    Survives,

    /// Alive with more than 3 alive neighbors
    Overpopulated,

    /// Dead with exactly 3 alive neighbors
    Born,

    StaysDead,
}

impl Fate {
    /// Whether the cell is alive in the next generation.
    pub const fn is_alive(self) -> bool {
        matches!(self, Fate::Survives | Fate::Born)
    }
}

/// Classify a cell by its current state and number of alive neighbors.
///
/// Every `(alive, neighbors)` pair lands in exactly one arm.
pub const fn classify(alive: bool, neighbors: u8) -> Fate {
    match (alive, neighbors) {
        (true, 0..=1) => Fate::Underpopulated,
        (true, 2..=3) => Fate::Survives,
        (true, _) => Fate::Overpopulated,
        (false, 3) => Fate::Born,
        (false, _) => Fate::StaysDead,
    }
}

/// Next state of a cell.
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    classify(alive, neighbors).is_alive()
}
