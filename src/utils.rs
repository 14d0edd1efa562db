use crate::engine::{legal_moves, Board, BLANK, CELLS};
use crate::error::{Error, Result};
use crate::solvability::is_solvable;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Parses a board from its text encoding.
///
/// The input lists the nine cells in row-major order. Digits `1`-`8` are
/// tiles; `E`, `e`, `0` or `_` marks the blank. Whitespace, commas and `|`
/// separators are ignored, so `"12345678E"`, `"123 456 780"` and
/// `"1,2,3|4,5,6|7,8,_"` all describe the goal.
///
/// # Returns
/// * `Ok(Board)` if the input holds nine valid symbols forming a legal board.
/// * `Err(Error::Parse)` for an unrecognised character or a wrong cell count.
/// * `Err(Error::InvalidState)` if a label repeats or the blank is missing.
///
/// # Examples
/// ```
/// use puzzle_slider::utils::board_from_str;
/// use puzzle_slider::engine::Board;
///
/// assert_eq!(board_from_str("123 456 78E").unwrap(), Board::goal());
/// assert!(board_from_str("12345678X").is_err());
/// assert!(board_from_str("1234").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board> {
    let mut cells = Vec::with_capacity(CELLS);
    for (i, ch) in s
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',' && *ch != '|')
        .enumerate()
    {
        let code = match ch {
            'E' | 'e' | '0' | '_' => BLANK,
            '1'..='8' => ch as u8 - b'0',
            _ => {
                return Err(Error::Parse {
                    input: s.to_string(),
                    reason: format!("unrecognized character '{}' at cell {}", ch, i + 1),
                })
            }
        };
        cells.push(code);
    }

    let cells: [u8; CELLS] = cells.try_into().map_err(|cells: Vec<u8>| Error::Parse {
        input: s.to_string(),
        reason: format!("expected {} cells, found {}", CELLS, cells.len()),
    })?;
    Board::from_cells(cells)
}

/// Shuffles the goal into a uniformly random arrangement.
///
/// Half of all arrangements cannot reach the goal; check the result with
/// [`is_solvable`] before searching.
pub fn random_board(rng: &mut impl Rng) -> Board {
    let mut cells = Board::goal().encode();
    cells.shuffle(rng);
    // A shuffle of a valid encoding is still a permutation of 0..=8.
    Board::from_cells(cells).unwrap_or_else(|_| Board::goal())
}

/// Like [`random_board`], but reproducible from `seed`.
pub fn random_board_with_seed(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_board(&mut rng)
}

/// Draws random arrangements until one is solvable and differs from the goal.
pub fn random_solvable_board(rng: &mut impl Rng) -> Board {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let board = random_board(rng);
        if is_solvable(&board) && !board.is_goal() {
            debug!("drew solvable board {} after {} attempts", board, attempts);
            return board;
        }
    }
}

/// Like [`random_solvable_board`], but reproducible from `seed`.
pub fn random_solvable_board_with_seed(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_solvable_board(&mut rng)
}

/// Applies `steps` random legal moves to `board`.
///
/// The result is always solvable and at most `steps` moves from `board`
/// (possibly fewer, since the walk may double back).
pub fn scramble(board: &Board, steps: usize, rng: &mut impl Rng) -> Result<Board> {
    let mut current = *board;
    for _ in 0..steps {
        let moves = legal_moves(current.locate_blank()?);
        let mv = moves[rng.gen_range(0..moves.len())];
        current = current.apply(mv);
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Tile;

    #[test]
    fn test_board_from_str_valid() {
        let board = board_from_str("213456780").unwrap();
        assert_eq!(board.get_tile(0, 0), Tile::Number(2));
        assert_eq!(board.get_tile(2, 2), Tile::Blank);
        assert_eq!(board.to_string(), "21345678E");
    }

    #[test]
    fn test_board_from_str_separators() {
        let board = board_from_str("1,2,3|4,5,6|7,8,_").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_board_from_str_invalid_char() {
        let result = board_from_str("12345678X");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unrecognized character 'X'"));
    }

    #[test]
    fn test_board_from_str_wrong_length() {
        let result = board_from_str("1234567E");
        assert!(result.unwrap_err().to_string().contains("expected 9 cells, found 8"));
        let result = board_from_str("12345678E1");
        assert!(result.unwrap_err().to_string().contains("found 10"));
    }

    #[test]
    fn test_board_from_str_duplicate_label() {
        assert!(matches!(
            board_from_str("11345678E"),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(board_from_str("E2345678E"), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_random_board_with_seed_determinism() {
        assert_eq!(random_board_with_seed(42), random_board_with_seed(42));
        let distinct: std::collections::HashSet<Board> =
            (0..20).map(random_board_with_seed).collect();
        assert!(distinct.len() > 1, "different seeds should give different boards");
    }

    #[test]
    fn test_random_solvable_board() {
        for seed in 0..20 {
            let board = random_solvable_board_with_seed(seed);
            assert!(is_solvable(&board));
            assert!(!board.is_goal());
        }
    }

    #[test]
    fn test_scramble_stays_solvable() {
        let mut rng = SmallRng::seed_from_u64(7);
        for steps in [0, 1, 5, 40] {
            let board = scramble(&Board::goal(), steps, &mut rng).unwrap();
            assert!(is_solvable(&board));
        }
        assert_eq!(scramble(&Board::goal(), 0, &mut rng).unwrap(), Board::goal());
    }
}
