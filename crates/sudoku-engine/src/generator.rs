use rand::rng;
use rand::seq::SliceRandom;
use rand::RngExt;
use tracing::debug;

use crate::board::{Board, CellFlags, Grid, CELLS, SIZE};
use crate::validation::placement_fits;
use crate::BoardError;

/// Hint count used when no knob is given; reveals just under half the grid.
pub const DEFAULT_HINTS: u8 = 40;

/// Generate a playable board: a complete random solution with `hints`
/// cells revealed and locked, the rest hidden for the player to fill.
pub fn generate_board(hints: u8) -> Result<Board, BoardError> {
    if hints as usize > CELLS {
        return Err(BoardError::TooManyHints(hints));
    }

    let mut solution: Grid = [[0; SIZE]; SIZE];
    let solved = fill(&mut solution, 0, 0);
    debug_assert!(solved, "an empty grid is always completable");

    let flags = pick_hints(hints);

    let mut visible: Grid = [[0; SIZE]; SIZE];
    for r in 0..SIZE {
        for c in 0..SIZE {
            if flags[r][c].contains(CellFlags::HINT) {
                visible[r][c] = solution[r][c];
            }
        }
    }

    let cells_left = CELLS as u8 - hints;
    debug!(hints, cells_left, "generated board");

    Ok(Board::new(solution, visible, flags, cells_left))
}

/// Fill the grid in place by randomized backtracking.
///
/// The cursor walks the cells in row-major order, col advancing fastest;
/// row 9 is the accept state. At an empty cell the digits 1-9 are tried
/// in uniformly shuffled order, and the write is undone before reporting
/// failure, so a failed branch leaves the grid as it found it.
fn fill(grid: &mut Grid, row: usize, col: usize) -> bool {
    if row == SIZE {
        return true;
    }
    if col == SIZE {
        return fill(grid, row + 1, 0);
    }
    if grid[row][col] != 0 {
        return fill(grid, row, col + 1);
    }

    let mut rng = rng();
    let mut digits: Vec<u8> = (1..=9).collect();
    digits.shuffle(&mut rng);

    for digit in digits {
        if placement_fits(grid, row, col, digit) {
            grid[row][col] = digit;
            if fill(grid, row, col + 1) {
                return true;
            }
            grid[row][col] = 0;
        }
    }
    false
}

/// Mark `hints` distinct random cells, resampling on collision.
fn pick_hints(hints: u8) -> [[CellFlags; SIZE]; SIZE] {
    let mut rng = rng();
    let mut flags = [[CellFlags::empty(); SIZE]; SIZE];
    let mut marked = 0;

    while marked < hints {
        let row = rng.random_range(0..SIZE);
        let col = rng.random_range(0..SIZE);
        if flags[row][col].contains(CellFlags::HINT) {
            continue;
        }
        flags[row][col].insert(CellFlags::HINT);
        marked += 1;
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every row, column and 3x3 box must be a permutation of 1-9.
    fn assert_solved(grid: &Grid) {
        for row in 0..SIZE {
            let mut seen = [false; 10];
            for col in 0..SIZE {
                let digit = grid[row][col] as usize;
                assert!(digit >= 1 && digit <= 9, "row {row} holds {digit}");
                assert!(!seen[digit], "row {row} repeats {digit}");
                seen[digit] = true;
            }
        }

        for col in 0..SIZE {
            let mut seen = [false; 10];
            for row in 0..SIZE {
                let digit = grid[row][col] as usize;
                assert!(!seen[digit], "column {col} repeats {digit}");
                seen[digit] = true;
            }
        }

        for box_r in 0..3 {
            for box_c in 0..3 {
                let mut seen = [false; 10];
                for r in 0..3 {
                    for c in 0..3 {
                        let digit = grid[box_r * 3 + r][box_c * 3 + c] as usize;
                        assert!(!seen[digit], "box ({box_r}, {box_c}) repeats {digit}");
                        seen[digit] = true;
                    }
                }
            }
        }
    }

    fn count_hints(board: &Board) -> usize {
        let mut hints = 0;
        for r in 0..SIZE {
            for c in 0..SIZE {
                if board.flags_at(r, c).contains(CellFlags::HINT) {
                    hints += 1;
                }
            }
        }
        hints
    }

    #[test]
    fn solution_is_valid_for_any_hint_count() {
        for hints in [0, 40, 81] {
            let board = generate_board(hints).unwrap();
            assert_solved(board.solution());
        }
    }

    #[test]
    fn hint_count_is_exact() {
        let board = generate_board(40).unwrap();
        assert_eq!(count_hints(&board), 40);
        assert_eq!(board.cells_left(), 41);
    }

    #[test]
    fn hint_cells_show_the_solution_and_the_rest_start_empty() {
        let board = generate_board(40).unwrap();
        for r in 0..SIZE {
            for c in 0..SIZE {
                if board.flags_at(r, c).contains(CellFlags::HINT) {
                    assert_eq!(board.value(r, c), board.solution()[r][c]);
                } else {
                    assert_eq!(board.value(r, c), 0);
                }
                assert!(!board.flags_at(r, c).contains(CellFlags::ERROR));
            }
        }
    }

    #[test]
    fn zero_hints_hides_the_whole_grid() {
        let board = generate_board(0).unwrap();
        assert_eq!(count_hints(&board), 0);
        assert_eq!(board.cells_left(), 81);
        for r in 0..SIZE {
            for c in 0..SIZE {
                assert_eq!(board.value(r, c), 0);
            }
        }
    }

    #[test]
    fn eighty_one_hints_reveals_the_whole_grid() {
        let board = generate_board(81).unwrap();
        assert_eq!(count_hints(&board), 81);
        assert_eq!(board.cells_left(), 0);
        assert!(board.is_complete());
        assert_eq!(board.visible(), board.solution());
    }

    #[test]
    fn more_hints_than_cells_is_rejected() {
        assert!(matches!(
            generate_board(82),
            Err(BoardError::TooManyHints(82))
        ));
    }

    #[test]
    fn consecutive_boards_differ() {
        // Randomized digit order is what varies the puzzles; two runs
        // agreeing on all 81 cells would be a broken shuffle.
        let a = generate_board(0).unwrap();
        let b = generate_board(0).unwrap();
        assert_ne!(a.solution(), b.solution());
    }
}
