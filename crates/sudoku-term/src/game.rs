use sudoku_engine::{generate_board, Board, BoardError, Entry};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished,
}

/// Shell-side game state: the board plus the selected cell and phase.
/// The selected cell is presentation state only; the engine never sees it.
pub struct Game {
    pub board: Board,
    pub hints: u8,
    pub selected_row: usize,
    pub selected_col: usize,
    pub phase: Phase,
}

impl Game {
    pub fn new(hints: u8) -> Result<Self, BoardError> {
        let board = generate_board(hints)?;
        Ok(Self {
            board,
            hints,
            selected_row: 4,
            selected_col: 4,
            phase: Phase::Playing,
        })
    }

    pub fn start_new_game(&mut self) -> Result<(), BoardError> {
        info!(hints = self.hints, "starting new game");
        self.board = generate_board(self.hints)?;
        self.selected_row = 4;
        self.selected_col = 4;
        self.phase = Phase::Playing;
        Ok(())
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        self.selected_row = (self.selected_row as i32 + dr).rem_euclid(9) as usize;
        self.selected_col = (self.selected_col as i32 + dc).rem_euclid(9) as usize;
    }

    /// Enter a digit (0 erases) at the selected cell. Hint cells swallow
    /// the keystroke; completing the last cell ends the game.
    pub fn enter_digit(&mut self, digit: u8) {
        if self.phase != Phase::Playing {
            return;
        }

        match self
            .board
            .apply_entry(self.selected_row, self.selected_col, digit)
        {
            Ok(Entry::Placed { .. }) => {
                if self.board.is_complete() {
                    info!("puzzle complete");
                    self.phase = Phase::Finished;
                }
            }
            // The cursor never leaves the grid and digits come from the
            // key handler, so the Err arm is dead; Locked needs no action.
            Ok(Entry::Locked) | Err(_) => {}
        }
    }

    /// Count of cells currently flagged as wrong, for the info panel.
    pub fn error_count(&self) -> u32 {
        use sudoku_engine::CellFlags;

        let mut errors = 0;
        for r in 0..9 {
            for c in 0..9 {
                if self.board.flags_at(r, c).contains(CellFlags::ERROR) {
                    errors += 1;
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_around_the_grid() {
        let mut game = Game::new(40).unwrap();
        game.selected_row = 0;
        game.selected_col = 8;

        game.move_cursor(-1, 1);
        assert_eq!(game.selected_row, 8);
        assert_eq!(game.selected_col, 0);
    }

    #[test]
    fn completing_the_board_finishes_the_game() {
        let mut game = Game::new(0).unwrap();
        let solution = *game.board.solution();

        for r in 0..9 {
            for c in 0..9 {
                game.selected_row = r;
                game.selected_col = c;
                game.enter_digit(solution[r][c]);
            }
        }

        assert_eq!(game.phase, Phase::Finished);
        // Finished games ignore further entries.
        game.selected_row = 0;
        game.selected_col = 0;
        game.enter_digit(0);
        assert!(game.board.is_complete());
    }
}
