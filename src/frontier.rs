//! Pending-node containers. The pop order of the frontier is what turns the
//! shared search loop into a particular strategy.
use crate::solver::{SearchNode, Strategy};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Heap entry ordered so that `BinaryHeap` pops the lowest score first, and
/// among equal scores the node generated first.
#[derive(Debug)]
pub struct ScoredNode(SearchNode);

impl PartialEq for ScoredNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredNode {}

impl PartialOrd for ScoredNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .score
            .cmp(&self.0.score)
            .then_with(|| other.0.generation_order.cmp(&self.0.generation_order))
    }
}

/// The frontier of one search run. Its discipline is chosen when the run is
/// built and does not change while it runs.
#[derive(Debug)]
pub enum Frontier {
    /// First in, first out: breadth-first search.
    Fifo(VecDeque<SearchNode>),
    /// Last in, first out: depth-first search.
    Lifo(Vec<SearchNode>),
    /// Smallest `depth + heuristic` first: best-first search.
    MinScore(BinaryHeap<ScoredNode>),
}

impl Frontier {
    pub fn fifo() -> Self {
        Frontier::Fifo(VecDeque::new())
    }

    pub fn lifo() -> Self {
        Frontier::Lifo(Vec::new())
    }

    pub fn min_score() -> Self {
        Frontier::MinScore(BinaryHeap::new())
    }

    /// Builds the empty frontier that implements `strategy`.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Self::fifo(),
            Strategy::DepthFirst => Self::lifo(),
            Strategy::AStarMisplaced | Strategy::AStarManhattan => Self::min_score(),
        }
    }

    pub fn push(&mut self, node: SearchNode) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node),
            Frontier::Lifo(stack) => stack.push(node),
            Frontier::MinScore(heap) => heap.push(ScoredNode(node)),
        }
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::MinScore(heap) => heap.pop().map(|ScoredNode(node)| node),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::MinScore(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        match self {
            Frontier::Fifo(queue) => queue.clear(),
            Frontier::Lifo(stack) => stack.clear(),
            Frontier::MinScore(heap) => heap.clear(),
        }
    }
}
