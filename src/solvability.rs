//! Parity check deciding whether a board can reach the goal at all.
//!
//! Sliding a tile never changes the parity of the inversion count over the
//! eight numbered tiles on a 3-wide board, and the goal has zero inversions.
//! Exactly half of all arrangements are therefore solvable.
use crate::engine::{Board, BLANK};

/// Counts pairs of numbered tiles that appear out of ascending order in
/// row-major reading order. The blank is ignored.
///
/// # Examples
/// ```
/// use puzzle_slider::engine::Board;
/// use puzzle_slider::solvability::inversion_count;
/// let board = Board::from_cells([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
/// assert_eq!(inversion_count(&board), 1);
/// ```
pub fn inversion_count(board: &Board) -> u32 {
    let tiles: Vec<u8> = board
        .encode()
        .into_iter()
        .filter(|&code| code != BLANK)
        .collect();

    let mut inversions = 0;
    for i in 0..tiles.len() {
        for j in i + 1..tiles.len() {
            if tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Returns `true` iff `board` can be transformed into the goal.
///
/// Callers are expected to check this before handing a board to
/// [`crate::solver::search`]; the search engine does not re-check it.
pub fn is_solvable(board: &Board) -> bool {
    inversion_count(board) % 2 == 0
}
