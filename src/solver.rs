use crate::engine::{legal_moves, Board, Move};
use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::heuristics::Heuristic;
use crate::visited::VisitedSet;
use log::{debug, trace};
use std::fmt;
use std::rc::Rc;

/// Selects how the search engine orders its frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Uninformed, FIFO frontier. The first goal popped is at minimal depth.
    #[value(alias = "bfs")]
    BreadthFirst,
    /// Uninformed, LIFO frontier. No depth guarantee.
    #[value(alias = "dfs")]
    DepthFirst,
    /// Best-first on `depth + misplaced tiles`.
    #[value(alias = "misplaced")]
    AStarMisplaced,
    /// Best-first on `depth + manhattan distance`.
    #[value(alias = "manhattan")]
    AStarManhattan,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::AStarMisplaced,
        Strategy::AStarManhattan,
    ];

    /// The heuristic consulted when scoring nodes, if any.
    pub fn heuristic(&self) -> Option<Heuristic> {
        match self {
            Strategy::BreadthFirst | Strategy::DepthFirst => None,
            Strategy::AStarMisplaced => Some(Heuristic::MisplacedTiles),
            Strategy::AStarManhattan => Some(Heuristic::Manhattan),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::DepthFirst => "Depth-First Search",
            Strategy::AStarMisplaced => "A* Search w/ misplaced tiles",
            Strategy::AStarManhattan => "A* Search w/ manhattan distance",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct PathLink {
    mv: Move,
    prev: Option<Rc<PathLink>>,
}

/// The moves leading from the root of a search to a node.
///
/// Extending a path is O(1): a child path links back to its parent's moves
/// instead of copying them. Paths are immutable once built, so a node's path
/// never changes when its siblings extend theirs.
#[derive(Clone, Default)]
pub struct MovePath {
    tail: Option<Rc<PathLink>>,
    len: u32,
}

impl MovePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new path equal to this one followed by `mv`.
    pub fn extended(&self, mv: Move) -> Self {
        MovePath {
            tail: Some(Rc::new(PathLink {
                mv,
                prev: self.tail.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the moves in order from the root.
    pub fn to_vec(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.len());
        let mut link = self.tail.as_deref();
        while let Some(l) = link {
            moves.push(l.mv);
            link = l.prev.as_deref();
        }
        moves.reverse();
        moves
    }
}

impl Drop for MovePath {
    // Unlink iteratively; depth-first paths can be tens of thousands long.
    fn drop(&mut self) {
        let mut link = self.tail.take();
        while let Some(rc) = link {
            match Rc::try_unwrap(rc) {
                Ok(mut owned) => link = owned.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for MovePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

/// A board together with the metadata the search keeps about it.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub state: Board,
    /// Number of moves from the start state (the g-cost).
    pub depth: u32,
    /// 1-based creation counter; the root is 1.
    pub generation_order: u64,
    pub path: MovePath,
    /// `depth + heuristic(state)` for best-first strategies, otherwise 0.
    pub score: u32,
}

/// What a successful search hands back to its caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub start: Board,
    pub final_state: Board,
    /// Length of the returned move path.
    pub depth: u32,
    /// Generation counter of the goal node.
    pub generation_order: u64,
    /// Total nodes created during the run, root included.
    pub nodes_generated: u64,
    pub moves: Vec<Move>,
}

impl SearchResult {
    /// The move path as human-readable descriptors, e.g. `"9 to 6"`.
    pub fn move_descriptors(&self) -> Vec<String> {
        self.moves.iter().map(Move::descriptor).collect()
    }
}

/// Lifecycle of one search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Seeded,
    Running,
    GoalFound,
    Exhausted,
}

/// One search run: a frontier, a visited set and a generation counter, all
/// owned by the run and dropped with it.
///
/// Use [`search`] to run to completion in one call, or drive the run with
/// [`Searcher::step`] to observe it.
pub struct Searcher {
    strategy: Strategy,
    heuristic: Option<Heuristic>,
    start: Board,
    visited: VisitedSet,
    frontier: Frontier,
    counter: u64,
    phase: SearchPhase,
    outcome: Option<SearchResult>,
}

impl Searcher {
    /// Seeds a run from `start`.
    ///
    /// Returns [`Error::NoOpRequested`] without generating any node if
    /// `start` is already the goal. Solvability is not checked here.
    pub fn new(start: Board, strategy: Strategy) -> Result<Self> {
        if start.is_goal() {
            return Err(Error::NoOpRequested);
        }
        start.locate_blank()?;

        let mut visited = VisitedSet::new();
        let mut frontier = Frontier::for_strategy(strategy);
        visited.insert(&start);
        frontier.push(SearchNode {
            state: start,
            depth: 0,
            generation_order: 1,
            path: MovePath::new(),
            score: 0,
        });
        trace!("seeded {} from {}", strategy, start);

        Ok(Searcher {
            strategy,
            heuristic: strategy.heuristic(),
            start,
            visited,
            frontier,
            counter: 1,
            phase: SearchPhase::Seeded,
            outcome: None,
        })
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn nodes_generated(&self) -> u64 {
        self.counter
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Pops one node and either finishes on it or expands it.
    ///
    /// Returns `Ok(Some(result))` when the popped node is the goal,
    /// `Ok(None)` after an expansion, and [`Error::Exhausted`] once the
    /// frontier is empty. After the goal has been found, further calls keep
    /// returning the same result.
    pub fn step(&mut self) -> Result<Option<SearchResult>> {
        match self.phase {
            SearchPhase::GoalFound => return Ok(self.outcome.clone()),
            SearchPhase::Exhausted => {
                return Err(Error::Exhausted {
                    nodes_generated: self.counter,
                })
            }
            SearchPhase::Seeded => self.phase = SearchPhase::Running,
            SearchPhase::Running => {}
        }

        let Some(node) = self.frontier.pop() else {
            self.phase = SearchPhase::Exhausted;
            debug!(
                "{} exhausted from {} after {} nodes",
                self.strategy, self.start, self.counter
            );
            return Err(Error::Exhausted {
                nodes_generated: self.counter,
            });
        };

        if node.state.is_goal() {
            self.phase = SearchPhase::GoalFound;
            let result = SearchResult {
                strategy: self.strategy,
                start: self.start,
                final_state: node.state,
                depth: node.depth,
                generation_order: node.generation_order,
                nodes_generated: self.counter,
                moves: node.path.to_vec(),
            };
            debug!(
                "{} reached the goal from {} at depth {} after {} nodes",
                self.strategy, self.start, result.depth, result.nodes_generated
            );
            self.outcome = Some(result.clone());
            return Ok(Some(result));
        }

        self.expand(&node)?;
        Ok(None)
    }

    fn expand(&mut self, node: &SearchNode) -> Result<()> {
        let blank = node.state.locate_blank()?;
        for &mv in legal_moves(blank) {
            let child = node.state.apply(mv);
            if !self.visited.insert(&child) {
                continue;
            }
            self.counter += 1;
            let depth = node.depth + 1;
            let score = self.heuristic.map_or(0, |h| depth + h.evaluate(&child));
            self.frontier.push(SearchNode {
                state: child,
                depth,
                generation_order: self.counter,
                path: node.path.extended(mv),
                score,
            });
        }
        Ok(())
    }

    /// Runs until the goal is popped or the frontier empties.
    pub fn run(mut self) -> Result<SearchResult> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }
}

/// Searches for a move sequence taking `start` to the goal.
///
/// The caller is expected to have checked `start` with
/// [`crate::solvability::is_solvable`]; an unsolvable start exhausts the
/// reachable half of the state space and returns [`Error::Exhausted`].
///
/// # Examples
/// ```
/// use puzzle_slider::engine::Board;
/// use puzzle_slider::solver::{search, Strategy};
///
/// let start = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
/// let result = search(&start, Strategy::BreadthFirst).unwrap();
/// assert!(result.final_state.is_goal());
/// assert_eq!(result.depth, 1);
/// assert_eq!(result.move_descriptors(), vec!["8 to 9"]);
/// ```
pub fn search(start: &Board, strategy: Strategy) -> Result<SearchResult> {
    Searcher::new(*start, strategy)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str;

    fn replay(start: Board, moves: &[Move]) -> Board {
        moves.iter().fold(start, |board, &mv| {
            assert_eq!(board.locate_blank().unwrap(), crate::engine::position_of(mv.blank()));
            board.apply(mv)
        })
    }

    #[test]
    fn test_goal_start_is_refused() {
        for strategy in Strategy::ALL {
            assert!(matches!(
                search(&Board::goal(), strategy),
                Err(Error::NoOpRequested)
            ));
        }
    }

    #[test]
    fn test_every_strategy_solves_short_scramble() {
        let start = board_from_str("1E3425786").unwrap();
        for strategy in Strategy::ALL {
            let result = search(&start, strategy).unwrap();
            assert!(result.final_state.is_goal(), "{}", strategy);
            assert_eq!(result.depth as usize, result.moves.len(), "{}", strategy);
            assert_eq!(replay(start, &result.moves), Board::goal(), "{}", strategy);
            assert!(result.generation_order <= result.nodes_generated);
        }
    }

    #[test]
    fn test_breadth_first_finds_three_move_solution() {
        let start = board_from_str("1E3425786").unwrap();
        let result = search(&start, Strategy::BreadthFirst).unwrap();
        assert_eq!(result.depth, 3);
        assert_eq!(result.move_descriptors(), vec!["2 to 5", "5 to 6", "6 to 9"]);
    }

    #[test]
    fn test_seeded_state() {
        let start = board_from_str("1234567E8").unwrap();
        let searcher = Searcher::new(start, Strategy::AStarManhattan).unwrap();
        assert_eq!(searcher.phase(), SearchPhase::Seeded);
        assert_eq!(searcher.nodes_generated(), 1);
        assert_eq!(searcher.frontier_len(), 1);
        assert_eq!(searcher.visited_len(), 1);
    }

    #[test]
    fn test_stepwise_run_transitions() {
        let start = board_from_str("1234567E8").unwrap();
        let mut searcher = Searcher::new(start, Strategy::BreadthFirst).unwrap();

        // Root expands into its three neighbours.
        assert!(searcher.step().unwrap().is_none());
        assert_eq!(searcher.phase(), SearchPhase::Running);
        assert_eq!(searcher.nodes_generated(), 4);
        assert_eq!(searcher.visited_len(), 4);

        // The first child generated ("8 to 9") is the goal.
        let result = searcher.step().unwrap().expect("goal popped");
        assert_eq!(searcher.phase(), SearchPhase::GoalFound);
        assert_eq!(result.generation_order, 2);
        assert_eq!(result.nodes_generated, 4);

        let again = searcher.step().unwrap().expect("result is kept");
        assert_eq!(again, result);
    }

    #[test]
    fn test_root_score_is_zero_and_children_are_scored() {
        let start = board_from_str("1234567E8").unwrap();
        let mut searcher = Searcher::new(start, Strategy::AStarMisplaced).unwrap();
        searcher.step().unwrap();
        let mut scores = Vec::new();
        while let Some(node) = searcher.frontier.pop() {
            scores.push((node.generation_order, node.score));
        }
        // Goal child: 1 + 0; other children: 1 + 2 each.
        assert_eq!(scores, vec![(2, 1), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_move_path_extension_is_independent() {
        let moves = legal_moves((1, 1));
        let root = MovePath::new();
        let a = root.extended(moves[0]);
        let b = root.extended(moves[1]);
        let aa = a.extended(moves[2]);
        assert!(root.is_empty());
        assert_eq!(a.to_vec(), vec![moves[0]]);
        assert_eq!(b.to_vec(), vec![moves[1]]);
        assert_eq!(aa.to_vec(), vec![moves[0], moves[2]]);
        assert_eq!(aa.len(), 2);
    }

    #[test]
    fn test_long_move_path_drops_without_overflow() {
        let moves = legal_moves((0, 0));
        let mut path = MovePath::new();
        for i in 0..200_000 {
            path = path.extended(moves[i % 2]);
        }
        assert_eq!(path.len(), 200_000);
        drop(path);
    }

    #[test]
    fn test_strategy_heuristics() {
        assert_eq!(Strategy::BreadthFirst.heuristic(), None);
        assert_eq!(Strategy::DepthFirst.heuristic(), None);
        assert_eq!(Strategy::AStarMisplaced.heuristic(), Some(Heuristic::MisplacedTiles));
        assert_eq!(Strategy::AStarManhattan.heuristic(), Some(Heuristic::Manhattan));
    }
}
