use crate::engine::{Board, CELLS};
use std::collections::HashSet;

/// Canonical encodings of every state admitted to a frontier during one
/// search run.
///
/// States are recorded when they are *generated*, not when they are expanded.
/// A state therefore enters the frontier at most once per run, and a cheaper
/// path discovered later is never reconsidered (first generation wins). The
/// best-first strategies inherit this non-reopening behaviour.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<[u8; CELLS]>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.seen.contains(&board.encode())
    }

    /// Records `board`. Returns `true` if it was not already present.
    pub fn insert(&mut self, board: &Board) -> bool {
        self.seen.insert(board.encode())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.insert(&Board::goal()));
        assert!(!visited.insert(&Board::goal()));
        assert_eq!(visited.len(), 1);
        assert!(visited.contains(&Board::goal()));
    }

    #[test]
    fn test_distinct_states_and_clear() {
        let mut visited = VisitedSet::new();
        let goal = Board::goal();
        let (_, neighbour) = goal.successors().unwrap()[0];
        visited.insert(&goal);
        assert!(!visited.contains(&neighbour));
        visited.insert(&neighbour);
        assert_eq!(visited.len(), 2);

        visited.clear();
        assert!(visited.is_empty());
        assert!(!visited.contains(&goal));
    }
}
