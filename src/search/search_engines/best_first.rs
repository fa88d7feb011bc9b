//! Best-first search and the algorithms that are just a particular choice of
//! evaluation function for it.

use crate::search::{
    expand, is_cycle, Frontier, Node, NodeRef, Problem, ReachedTable, SearchNode, SearchResult,
    SearchStatistics, DEFAULT_CYCLE_LOOKBACK,
};
use std::rc::Rc;
use tracing::trace;

/// Default heuristic weight of [`weighted_astar_search`].
pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 1.4;

/// Everything a graph search leaves behind, for callers that want to look at
/// more than the result.
#[derive(Debug)]
pub struct SearchOutcome<S, A> {
    pub result: SearchResult<S, A>,
    /// Best node found for every state reached during the search
    pub reached: ReachedTable<S, A>,
    pub statistics: SearchStatistics,
}

/// Graph search that always expands the frontier node with the lowest `f`.
///
/// A state is put back on the frontier only when a strictly cheaper path to
/// it is found, so each state has at most one node in the reached table.
pub fn best_first_search<P, F>(problem: &P, f: F) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    graph_search(problem, f, "best_first_search").result
}

/// Same as [`best_first_search`], but also hands back the reached table and
/// the statistics of the search.
pub fn best_first_search_with_reached<P, F>(
    problem: &P,
    f: F,
) -> SearchOutcome<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    graph_search(problem, f, "best_first_search")
}

fn graph_search<P, F>(problem: &P, f: F, engine: &'static str) -> SearchOutcome<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    let mut statistics = SearchStatistics::new(engine);
    let root = Rc::new(SearchNode::root(problem.initial().clone()));
    let mut reached = ReachedTable::new(&root);
    let mut frontier = Frontier::new([root], |node: &NodeRef<P::State, P::Action>| f(node));

    while let Some(node) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return SearchOutcome {
                result: SearchResult::Found(node),
                reached,
                statistics,
            };
        }

        statistics.increment_expanded_nodes();
        trace!(state = ?node.state(), g = node.path_cost(), "expanding");
        for child in expand(problem, &node) {
            statistics.increment_generated_nodes();
            let seen_before = reached.contains(child.state());
            if reached.offer(&child) {
                if seen_before {
                    statistics.increment_reopened_nodes();
                }
                frontier.insert(child);
            }
        }
    }

    statistics.finalise_search();
    SearchOutcome {
        result: SearchResult::Failure,
        reached,
        statistics,
    }
}

/// Best-first search without a reached table. Children are only dropped when
/// their state repeats within the last [`DEFAULT_CYCLE_LOOKBACK`] ancestors,
/// so a state may be expanded many times through different paths.
pub fn best_first_tree_search<P, F>(problem: &P, f: F) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    best_first_tree_search_with_lookback(problem, f, DEFAULT_CYCLE_LOOKBACK)
}

pub fn best_first_tree_search_with_lookback<P, F>(
    problem: &P,
    f: F,
    lookback: usize,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    F: Fn(&Node<P::State, P::Action>) -> f64,
{
    let mut statistics = SearchStatistics::new("best_first_tree_search");
    let root = Rc::new(SearchNode::root(problem.initial().clone()));
    let mut frontier = Frontier::new([root], |node: &NodeRef<P::State, P::Action>| f(node));

    while let Some(node) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return SearchResult::Found(node);
        }

        statistics.increment_expanded_nodes();
        for child in expand(problem, &node) {
            statistics.increment_generated_nodes();
            if is_cycle(&child, lookback) {
                statistics.increment_pruned_cycles();
            } else {
                frontier.insert(child);
            }
        }
    }

    statistics.finalise_search();
    SearchResult::Failure
}

fn g<S, A>(node: &Node<S, A>) -> f64 {
    node.path_cost()
}

/// Best-first search on path cost, optimal for non-negative action costs.
pub fn uniform_cost_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    graph_search(problem, g, "uniform_cost_search").result
}

/// A* with the problem's own heuristic.
pub fn astar_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    astar_search_with(problem, |node| problem.h(node))
}

/// A* with the heuristic `h`. Optimal when `h` is admissible.
pub fn astar_search_with<P, H>(problem: &P, h: H) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    H: Fn(&Node<P::State, P::Action>) -> f64,
{
    graph_search(problem, |node| g(node) + h(node), "astar_search").result
}

/// A* on the tree search variant, see [`best_first_tree_search`].
pub fn astar_tree_search<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    best_first_tree_search(problem, |node| g(node) + problem.h(node))
}

/// A* with the heuristic scaled by `weight`. Weights above one favour nodes
/// that look close to the goal, trading solution quality for speed.
pub fn weighted_astar_search<P: Problem>(
    problem: &P,
    weight: f64,
) -> SearchResult<P::State, P::Action> {
    graph_search(
        problem,
        |node| g(node) + weight * problem.h(node),
        "weighted_astar_search",
    )
    .result
}

/// Greedy best-first search: ignores the path cost entirely.
pub fn greedy_bfs<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    greedy_bfs_with(problem, |node| problem.h(node))
}

pub fn greedy_bfs_with<P, H>(problem: &P, h: H) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    H: Fn(&Node<P::State, P::Action>) -> f64,
{
    graph_search(problem, h, "greedy_bfs").result
}

/// Breadth-first order through the best-first machinery, with the goal test
/// on expansion. See [`breadth_first_search`](super::breadth_first_search)
/// for the cheaper dedicated version.
pub fn breadth_first_bfs<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    graph_search(problem, |node| node.depth() as f64, "breadth_first_bfs").result
}

/// Depth-first order through the best-first machinery.
pub fn depth_first_bfs<P: Problem>(problem: &P) -> SearchResult<P::State, P::Action> {
    graph_search(problem, |node| -(node.depth() as f64), "depth_first_bfs").result
}
