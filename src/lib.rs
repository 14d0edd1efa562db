//! # Puzzle Slider Library
//!
//! This library provides a state-space search engine for the 8-tile sliding
//! puzzle: given a scrambled 3x3 board, it finds a sequence of slides that
//! turns it into the goal `12345678E` (`E` marks the blank).
//!
//! It is used by three binaries:
//! - `solve`: Takes a board and a strategy, prints the result and writes a
//!   report file.
//! - `slider_menu`: The interactive menu: generate a random state, initialize
//!   it, and run any of the four searches on it.
//! - `strategy_comparison`: Runs every strategy over seeded random boards and
//!   prints average depth and node counts.
//!
//! ## Modules
//! - `engine`: The board (`Board`), cell contents (`Tile`), and the
//!   table-driven move model (`Move`, `legal_moves`).
//! - `solvability`: The inversion-parity check run before every search.
//! - `visited`: The per-run set of already generated states.
//! - `heuristics`: Misplaced-tiles and Manhattan-distance estimates.
//! - `frontier`: FIFO, LIFO and min-score frontiers.
//! - `solver`: The search loop (`search`, `Searcher`) and its result type.
//! - `report`: Console and file reports of finished searches.
//! - `utils`: Board parsing, random boards, and scrambling.
//! - `error`: The crate's error type.
//!
//! ## Example
//! ```
//! use puzzle_slider::solvability::is_solvable;
//! use puzzle_slider::solver::{search, Strategy};
//! use puzzle_slider::utils::board_from_str;
//!
//! let start = board_from_str("1E3425786").unwrap();
//! if is_solvable(&start) {
//!     let result = search(&start, Strategy::AStarManhattan).unwrap();
//!     assert!(result.final_state.is_goal());
//! }
//! ```

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod report;
pub mod solvability;
pub mod solver;
pub mod utils;
pub mod visited;

pub use error::{Error, Result};
