use bitflags::bitflags;

use crate::BoardError;

pub const SIZE: usize = 9;
pub const CELLS: usize = SIZE * SIZE;

/// 9x9 digit matrix. 0 means empty, 1-9 are placed digits.
pub type Grid = [[u8; SIZE]; SIZE];

bitflags! {
    /// Per-cell state bits. HINT is set once by the generator and never
    /// cleared; ERROR follows the player's latest entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        const HINT = 0b01;
        const ERROR = 0b10;
    }
}

/// Outcome of a digit entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    /// The target cell is a hint; the board was left untouched.
    Locked,
    /// The digit was written. `conflict` is true when it disagrees with
    /// the solution.
    Placed { conflict: bool },
}

/// A playable puzzle: the complete solution, the player-facing grid, the
/// per-cell flags and the count of cells still to be filled correctly.
///
/// Hint cells always show their solution value; every other cell starts
/// at 0 and is owned by the player from then on.
#[derive(Clone, Debug)]
pub struct Board {
    solution: Grid,
    visible: Grid,
    flags: [[CellFlags; SIZE]; SIZE],
    cells_left: u8,
}

impl Board {
    pub(crate) fn new(
        solution: Grid,
        visible: Grid,
        flags: [[CellFlags; SIZE]; SIZE],
        cells_left: u8,
    ) -> Self {
        Self {
            solution,
            visible,
            flags,
            cells_left,
        }
    }

    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    pub fn visible(&self) -> &Grid {
        &self.visible
    }

    /// The player-facing value at (row, col); 0 when the cell is empty.
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.visible[row][col]
    }

    pub fn flags_at(&self, row: usize, col: usize) -> CellFlags {
        self.flags[row][col]
    }

    /// Non-hint cells whose visible value does not yet match the solution.
    pub fn cells_left(&self) -> u8 {
        self.cells_left
    }

    pub fn is_complete(&self) -> bool {
        self.cells_left == 0
    }

    /// Enter `digit` (0 erases) at the selected cell.
    ///
    /// Hint cells swallow the entry unchanged. Anywhere else the digit is
    /// written, ERROR is set or cleared by comparing against the solution,
    /// and the progress counter moves with the cell's correctness.
    pub fn apply_entry(&mut self, row: usize, col: usize, digit: u8) -> Result<Entry, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if digit > 9 {
            return Err(BoardError::InvalidDigit(digit));
        }

        if self.flags[row][col].contains(CellFlags::HINT) {
            return Ok(Entry::Locked);
        }

        let was_right = self.visible[row][col] == self.solution[row][col];
        self.visible[row][col] = digit;

        let conflict = digit != self.solution[row][col];
        self.flags[row][col].set(CellFlags::ERROR, conflict);

        if was_right && conflict {
            self.cells_left += 1;
        } else if !was_right && !conflict {
            self.cells_left -= 1;
        }

        Ok(Entry::Placed { conflict })
    }
}
