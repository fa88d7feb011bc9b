//! Breadth first search

use crate::search::{expand, Problem, SearchNode, SearchResult, SearchStatistics};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// Breadth-first search with a FIFO queue. Unlike the best-first based
/// [`breadth_first_bfs`](super::breadth_first_bfs), children are goal tested
/// as soon as they are generated, which is safe because the first goal found
/// in FIFO order is a shallowest one.
pub fn breadth_first_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    let mut statistics = SearchStatistics::new("breadth_first_search");
    let root = Rc::new(SearchNode::root(problem.initial().clone()));
    if problem.is_goal(root.state()) {
        statistics.finalise_search();
        return SearchResult::Found(root);
    }

    let mut reached = HashSet::new();
    reached.insert(root.state().clone());
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        statistics.increment_expanded_nodes();
        for child in expand(problem, &node) {
            statistics.increment_generated_nodes();
            if problem.is_goal(child.state()) {
                statistics.finalise_search();
                return SearchResult::Found(child);
            }
            if reached.insert(child.state().clone()) {
                queue.push_back(child);
            }
        }
    }

    statistics.finalise_search();
    SearchResult::Failure
}
