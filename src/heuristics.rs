//! Admissible distance estimates used to order the best-first frontiers.
//!
//! Both estimators depend only on the board, never on search history, and
//! never overestimate the true number of slides to the goal.
use crate::engine::{Board, Tile, COLS, ROWS};

/// Counts the numbered tiles that are not on their goal cell.
///
/// Every misplaced tile has to move at least once, so the count never
/// exceeds the true distance. The blank's cell is not counted.
///
/// # Arguments
/// * `board`: A reference to the `Board` to evaluate.
///
/// # Returns
/// The number of misplaced tiles, between 0 and 8.
///
/// # Examples
/// ```
/// use puzzle_slider::engine::Board;
/// use puzzle_slider::heuristics::misplaced_tiles;
/// let board = Board::from_cells([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
/// assert_eq!(misplaced_tiles(&board), 2);
/// ```
pub fn misplaced_tiles(board: &Board) -> u32 {
    let goal = Board::goal().encode();
    let mut misplaced = 0;
    for r in 0..ROWS {
        for c in 0..COLS {
            if let Tile::Number(n) = board.get_tile(r, c) {
                if goal[r * COLS + c] != n {
                    misplaced += 1;
                }
            }
        }
    }
    misplaced
}

/// Sums, over the numbered tiles, the row distance plus column distance
/// between each tile's cell and its goal cell.
///
/// Label `L` belongs at row `(L - 1) / 3`, column `(L - 1) % 3`. A slide
/// moves one tile by one cell, so the sum never exceeds the true distance and
/// it dominates [`misplaced_tiles`].
///
/// # Arguments
/// * `board`: A reference to the `Board` to evaluate.
///
/// # Returns
/// The total Manhattan distance as `u32`.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..ROWS {
        for c in 0..COLS {
            if let Tile::Number(n) = board.get_tile(r, c) {
                let label = n as usize - 1;
                let (goal_r, goal_c) = (label / COLS, label % COLS);
                distance += (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            }
        }
    }
    distance
}

/// Selects which estimate a best-first frontier is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
}

impl Heuristic {
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::Manhattan => manhattan_distance(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str;

    #[test]
    fn test_goal_scores_zero() {
        assert_eq!(misplaced_tiles(&Board::goal()), 0);
        assert_eq!(manhattan_distance(&Board::goal()), 0);
    }

    #[test]
    fn test_one_slide_from_goal() {
        let board = board_from_str("1234567E8").unwrap();
        assert_eq!(misplaced_tiles(&board), 1, "only tile 8 is off its cell");
        assert_eq!(manhattan_distance(&board), 1);
    }

    #[test]
    fn test_blank_is_never_counted() {
        // The goal's blank cell holds 8 here; the blank itself sits on 1's cell.
        let board = board_from_str("E23145678").unwrap();
        assert_eq!(misplaced_tiles(&board), 6);
        // 1:1, 4:1, 5:1, 6:3, 7:1, 8:1
        assert_eq!(manhattan_distance(&board), 8);
    }

    #[test]
    fn test_reversed_board_values() {
        let board = board_from_str("87654321E").unwrap();
        assert_eq!(misplaced_tiles(&board), 8);
        // 8:(0,0)->(2,1)=3, 7:(0,1)->(2,0)=3, 6:(0,2)->(1,2)=1, 5:(1,0)->(1,1)=1,
        // 4:(1,1)->(1,0)=1, 3:(1,2)->(0,2)=1, 2:(2,0)->(0,1)=3, 1:(2,1)->(0,0)=3
        assert_eq!(manhattan_distance(&board), 16);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        for text in ["8672543E1", "E12345678", "123E45678", "4127E3586"] {
            let board = board_from_str(text).unwrap();
            assert!(manhattan_distance(&board) >= misplaced_tiles(&board), "{}", text);
        }
    }

    #[test]
    fn test_heuristic_selector() {
        let board = board_from_str("87654321E").unwrap();
        assert_eq!(Heuristic::MisplacedTiles.evaluate(&board), 8);
        assert_eq!(Heuristic::Manhattan.evaluate(&board), 16);
    }
}
