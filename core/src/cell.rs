use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// `mine` and `adjacent_mines` are fixed when the grid is built. `revealed` only ever goes from `false` to `true`,
/// and `flagged` can only toggle while the cell is still covered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(mine: bool, adjacent_mines: u8) -> Self {
        Self {
            mine,
            revealed: false,
            flagged: false,
            adjacent_mines,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Covered and not flagged, the only state a cascade will open.
    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }

    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }
}
