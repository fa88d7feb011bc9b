//! Depth-first searches with a LIFO frontier and a cycle check along the
//! current path instead of a reached table: memory use is linear in the depth
//! instead of the number of states.

use crate::search::{expand, is_cycle, Problem, SearchNode, SearchResult, SearchStatistics};
use std::rc::Rc;
use tracing::debug;

/// Default depth bound of [`depth_limited_search`].
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// Lookback of [`is_cycle`] that covers the whole path. With it every branch
/// is a simple path, so on a finite space the searches below run out of
/// branches instead of cutting them off forever.
pub const WHOLE_PATH: usize = usize::MAX;

/// Depth-first tree search that does not go below `limit` edges from the
/// root.
///
/// Returns [`SearchResult::Cutoff`] rather than [`SearchResult::Failure`] if
/// some branch was stopped by the bound, since a deeper goal might exist.
pub fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: usize,
) -> SearchResult<P::State, P::Action> {
    depth_limited_search_with_lookback(problem, limit, WHOLE_PATH)
}

pub fn depth_limited_search_with_lookback<P: Problem>(
    problem: &P,
    limit: usize,
    lookback: usize,
) -> SearchResult<P::State, P::Action> {
    let mut statistics = SearchStatistics::new("depth_limited_search");
    let mut frontier = vec![Rc::new(SearchNode::root(problem.initial().clone()))];
    let mut result = SearchResult::Failure;

    while let Some(node) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return SearchResult::Found(node);
        }
        // a cyclic path has a shorter equivalent, so it must not count as a
        // cutoff or deepening never ends on finite spaces
        if is_cycle(&node, lookback) {
            statistics.increment_pruned_cycles();
        } else if node.depth() >= limit {
            statistics.increment_cutoffs();
            result = SearchResult::Cutoff;
        } else {
            statistics.increment_expanded_nodes();
            frontier.extend(expand(problem, &node));
        }
    }

    statistics.finalise_search();
    result
}

/// Depth limited search with limits 1, 2, 3, ... until the result is not a
/// cutoff. Finds a shallowest goal, and reports failure only once a bound was
/// reached at which nothing got cut off.
pub fn iterative_deepening_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    iterative_deepening_search_with_lookback(problem, WHOLE_PATH)
}

/// A `lookback` shorter than some cycle of the space lets paths around that
/// cycle reach every bound, so an unsolvable problem is never reported as
/// failure.
pub fn iterative_deepening_search_with_lookback<P: Problem>(
    problem: &P,
    lookback: usize,
) -> SearchResult<P::State, P::Action> {
    let mut limit = 1;
    loop {
        let result = depth_limited_search_with_lookback(problem, limit, lookback);
        if !result.is_cutoff() {
            debug!(limit, found = result.is_found(), "iterative deepening done");
            return result;
        }
        limit += 1;
    }
}

/// Unbounded depth-first search, children explored in action order. Only the
/// cycle check keeps it out of loops, so it need not terminate on infinite
/// state spaces, and it may enumerate every simple path of a finite one.
///
/// Runs on an explicit stack of child iterators rather than the call stack.
pub fn depth_first_recursive_search<P: Problem>(
    problem: &P,
) -> SearchResult<P::State, P::Action> {
    let mut statistics = SearchStatistics::new("depth_first_recursive_search");
    let root = Rc::new(SearchNode::root(problem.initial().clone()));
    if problem.is_goal(root.state()) {
        statistics.finalise_search();
        return SearchResult::Found(root);
    }

    statistics.increment_expanded_nodes();
    let mut stack = vec![expand(problem, &root)];
    while let Some(children) = stack.last_mut() {
        let Some(child) = children.next() else {
            stack.pop();
            continue;
        };
        if problem.is_goal(child.state()) {
            statistics.finalise_search();
            return SearchResult::Found(child);
        }
        if is_cycle(&child, WHOLE_PATH) {
            statistics.increment_pruned_cycles();
            continue;
        }
        statistics.increment_expanded_nodes();
        stack.push(expand(problem, &child));
    }

    statistics.finalise_search();
    SearchResult::Failure
}
