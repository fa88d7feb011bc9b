//! Bidirectional best-first search: one search forward from the initial state,
//! one backward from the goal on the inverse problem, meeting in the middle.

use crate::search::{
    expand, Frontier, Node, NodeRef, Problem, ReachedTable, SearchNode, SearchResult,
    SearchStatistics,
};
use std::rc::Rc;
use tracing::{debug, trace};

/// Which of the two searches a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Best meeting point found so far: a forward node and a backward node for
/// the same state. The full path is only built once the search ends.
struct Meeting<S, A> {
    forward: NodeRef<S, A>,
    backward: NodeRef<S, A>,
}

impl<S, A> Meeting<S, A> {
    fn cost(&self) -> f64 {
        self.forward.path_cost() + self.backward.path_cost()
    }
}

/// Generic bidirectional best-first search.
///
/// `problem_b` must be the inverse of `problem_f`: its initial state is the
/// goal of `problem_f` and it has the same transitions travelled the other
/// way. At every step the side whose frontier holds the smaller key is
/// expanded (ties go backward). Whenever a newly reached state is also
/// reached by the other side the two halves form a candidate solution, and
/// the cheapest candidate is kept. `terminated` is consulted before each step
/// with the current best solution and both frontiers. `observe` sees every
/// expanded node.
///
/// # Panics
///
/// Panics if a state reached backward cannot be left forward towards its
/// backward parent, i.e. the problems are not inverses of each other.
pub fn bidirectional_best_first_search<P, Q, FF, FB, T, O>(
    problem_f: &P,
    f_f: FF,
    problem_b: &Q,
    f_b: FB,
    terminated: T,
    mut observe: O,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    Q: Problem<State = P::State, Action = P::Action>,
    FF: Fn(&NodeRef<P::State, P::Action>) -> f64,
    FB: Fn(&NodeRef<P::State, P::Action>) -> f64,
    T: Fn(
        &SearchResult<P::State, P::Action>,
        &Frontier<NodeRef<P::State, P::Action>, FF>,
        &Frontier<NodeRef<P::State, P::Action>, FB>,
    ) -> bool,
    O: FnMut(Direction, &Node<P::State, P::Action>),
{
    let mut statistics = SearchStatistics::new("bidirectional_best_first_search");
    let node_f = Rc::new(SearchNode::root(problem_f.initial().clone()));
    let node_b = Rc::new(SearchNode::root(problem_b.initial().clone()));
    debug_assert!(
        problem_f.goal().map_or(true, |goal| goal == node_b.state()),
        "backward problem must start from the forward goal"
    );
    if problem_f.is_goal(node_f.state()) {
        statistics.finalise_search();
        return SearchResult::Found(node_f);
    }

    let mut reached_f = ReachedTable::new(&node_f);
    let mut reached_b = ReachedTable::new(&node_b);
    let mut frontier_f = Frontier::new([node_f], f_f);
    let mut frontier_b = Frontier::new([node_b], f_b);
    let mut meeting: Option<Meeting<P::State, P::Action>> = None;
    let mut solution = SearchResult::Failure;

    while !terminated(&solution, &frontier_f, &frontier_b) {
        let (Some(key_f), Some(key_b)) = (frontier_f.peek_key(), frontier_b.peek_key()) else {
            break;
        };
        let direction = if key_f < key_b {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let improved = match direction {
            Direction::Forward => proceed(
                direction,
                problem_f,
                &mut frontier_f,
                &mut reached_f,
                &reached_b,
                &mut meeting,
                &mut statistics,
                &mut observe,
            ),
            Direction::Backward => proceed(
                direction,
                problem_b,
                &mut frontier_b,
                &mut reached_b,
                &reached_f,
                &mut meeting,
                &mut statistics,
                &mut observe,
            ),
        };
        if improved {
            if let Some(meeting) = &meeting {
                debug!(cost = meeting.cost(), "found a cheaper bidirectional solution");
                solution =
                    SearchResult::Found(join_nodes(problem_f, &meeting.forward, &meeting.backward));
            }
        }
    }

    statistics.finalise_search();
    solution
}

/// Expand the best node of one side. Returns whether a cheaper meeting with
/// the other side was found.
#[allow(clippy::too_many_arguments)]
fn proceed<P, F, O>(
    direction: Direction,
    problem: &P,
    frontier: &mut Frontier<NodeRef<P::State, P::Action>, F>,
    reached: &mut ReachedTable<P::State, P::Action>,
    reached_other: &ReachedTable<P::State, P::Action>,
    meeting: &mut Option<Meeting<P::State, P::Action>>,
    statistics: &mut SearchStatistics,
    observe: &mut O,
) -> bool
where
    P: Problem,
    F: Fn(&NodeRef<P::State, P::Action>) -> f64,
    O: FnMut(Direction, &Node<P::State, P::Action>),
{
    let Some(node) = frontier.pop() else {
        return false;
    };
    statistics.increment_expanded_nodes();
    trace!(?direction, state = ?node.state(), g = node.path_cost(), "expanding");
    observe(direction, &node);

    let mut improved = false;
    for child in expand(problem, &node) {
        statistics.increment_generated_nodes();
        if !reached.offer(&child) {
            continue;
        }
        if let Some(other) = reached_other.get(child.state()) {
            let candidate = match direction {
                Direction::Forward => Meeting {
                    forward: Rc::clone(&child),
                    backward: Rc::clone(other),
                },
                Direction::Backward => Meeting {
                    forward: Rc::clone(other),
                    backward: Rc::clone(&child),
                },
            };
            if meeting
                .as_ref()
                .map_or(true, |best| candidate.cost() < best.cost())
            {
                *meeting = Some(candidate);
                improved = true;
            }
        }
        frontier.insert(child);
    }
    improved
}

/// Continue the path of `forward` along the reversed path of `backward`. Both
/// nodes must be for the same state.
///
/// The cost of each appended step is recovered from the backward path costs,
/// and its action is the forward action between the two states.
///
/// # Panics
///
/// Panics if `problem` has no action for one of the reversed steps.
pub fn join_nodes<P: Problem>(
    problem: &P,
    forward: &NodeRef<P::State, P::Action>,
    backward: &NodeRef<P::State, P::Action>,
) -> NodeRef<P::State, P::Action> {
    let mut joined = Rc::clone(forward);
    let mut backward = backward;
    while let Some(parent) = backward.parent() {
        let cost = joined.path_cost() + backward.path_cost() - parent.path_cost();
        let action = problem
            .action_to(backward.state(), parent.state())
            .unwrap_or_else(|| {
                panic!(
                    "no forward action from {:?} to {:?}, the problems are not inverses",
                    backward.state(),
                    parent.state()
                )
            });
        joined = Rc::new(SearchNode::child(
            joined,
            action,
            parent.state().clone(),
            cost,
        ));
        backward = parent;
    }
    joined
}

/// Stop once the cheapest frontier nodes of both sides together cost more
/// than the best solution, no cheaper meeting is possible after that.
pub fn frontiers_exceed_solution<S, A, FF, FB>(
    solution: &SearchResult<S, A>,
    frontier_f: &Frontier<NodeRef<S, A>, FF>,
    frontier_b: &Frontier<NodeRef<S, A>, FB>,
) -> bool
where
    FF: Fn(&NodeRef<S, A>) -> f64,
    FB: Fn(&NodeRef<S, A>) -> f64,
{
    match (frontier_f.peek_min(), frontier_b.peek_min()) {
        (Ok(node_f), Ok(node_b)) => node_f.path_cost() + node_b.path_cost() > solution.path_cost(),
        _ => true,
    }
}

/// Bidirectional uniform cost search, the search analogue of bidirectional
/// Dijkstra. `problem_b` is the inverse of `problem_f`.
pub fn bidirectional_uniform_cost_search<P, Q>(
    problem_f: &P,
    problem_b: &Q,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    Q: Problem<State = P::State, Action = P::Action>,
{
    bidirectional_best_first_search(
        problem_f,
        |node: &NodeRef<P::State, P::Action>| node.path_cost(),
        problem_b,
        |node: &NodeRef<P::State, P::Action>| node.path_cost(),
        frontiers_exceed_solution,
        |_, _| {},
    )
}

/// Bidirectional A*, each side guided by its own problem's heuristic.
pub fn bidirectional_astar_search<P, Q>(
    problem_f: &P,
    problem_b: &Q,
) -> SearchResult<P::State, P::Action>
where
    P: Problem,
    Q: Problem<State = P::State, Action = P::Action>,
{
    bidirectional_best_first_search(
        problem_f,
        |node: &NodeRef<P::State, P::Action>| node.path_cost() + problem_f.h(node),
        problem_b,
        |node: &NodeRef<P::State, P::Action>| node.path_cost() + problem_b.h(node),
        frontiers_exceed_solution,
        |_, _| {},
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::{EightPuzzle, Location};
    use crate::search::{uniform_cost_search, CountingProblem};
    use crate::test_utils::*;

    fn inverse<P: Problem>(problem: &P) -> P {
        problem.inverse().unwrap()
    }

    #[test]
    fn matches_unidirectional_cost() {
        for (from, to, cost) in [
            ("A", "B", 418.),
            ("N", "L", 910.),
            ("E", "T", 805.),
            ("O", "M", 445.),
            ("Z", "E", 762.),
        ] {
            let problem = romania_problem(from, to);
            let result = bidirectional_uniform_cost_search(&problem, &inverse(&problem));
            assert_eq!(result.path_cost(), cost, "{from} -> {to}");
            assert_eq!(result.path_cost(), uniform_cost_search(&problem).path_cost());
            assert_valid_solution(&problem, &result);
        }
    }

    #[test]
    fn joined_path_runs_from_initial_to_goal() {
        let problem = romania_problem("A", "B");
        let result = bidirectional_uniform_cost_search(&problem, &inverse(&problem));
        assert_eq!(route_names(&result), vec!["A", "S", "R", "P", "B"]);
        let actions: Vec<String> = result
            .path_actions()
            .iter()
            .map(|action| action.to_string())
            .collect();
        assert_eq!(actions, vec!["S", "R", "P", "B"]);
    }

    #[test]
    fn expands_fewer_nodes_than_unidirectional() {
        for (from, to) in [("A", "B"), ("N", "L"), ("E", "T"), ("O", "M"), ("Z", "E")] {
            let forward = CountingProblem::new(romania_problem(from, to));
            let backward = inverse(&forward);
            bidirectional_uniform_cost_search(&forward, &backward);

            let unidirectional = CountingProblem::new(romania_problem(from, to));
            uniform_cost_search(&unidirectional);

            // the backward problem shares its counters with the forward one
            assert!(
                forward.count("actions") < unidirectional.count("actions"),
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn astar_variant_finds_the_optimal_route() {
        let problem = romania_problem("A", "B");
        let result = bidirectional_astar_search(&problem, &inverse(&problem));
        assert_eq!(result.path_cost(), 418.);
        assert_valid_solution(&problem, &result);
    }

    #[test]
    fn solves_the_eight_puzzle_from_both_ends() {
        let problem = EightPuzzle::new([1, 4, 2, 0, 7, 5, 3, 6, 8]).unwrap();
        let result = bidirectional_uniform_cost_search(&problem, &inverse(&problem));
        assert_eq!(result.path_cost(), 5.);
        assert_valid_solution(&problem, &result);
    }

    #[test]
    fn initial_goal_and_unreachable_goal() {
        let problem = CountingProblem::new(romania_problem("A", "A"));
        let result = bidirectional_uniform_cost_search(&problem, &inverse(&problem));
        assert_eq!(result.path_cost(), 0.);
        assert_eq!(problem.count("actions"), 0);

        let problem = disconnected_problem();
        let result = bidirectional_uniform_cost_search(&problem, &inverse(&problem));
        assert!(result.is_failure());
    }

    #[test]
    fn observer_sees_both_directions() {
        let problem = romania_problem("A", "B");
        let backward = inverse(&problem);
        let mut seen = vec![];
        let result = bidirectional_best_first_search(
            &problem,
            |node: &NodeRef<Location, Location>| node.path_cost(),
            &backward,
            |node: &NodeRef<Location, Location>| node.path_cost(),
            frontiers_exceed_solution,
            |direction, node: &Node<Location, Location>| {
                seen.push((direction, node.state().to_string()))
            },
        );
        assert_eq!(result.path_cost(), 418.);
        assert_eq!(seen[0], (Direction::Backward, "B".to_string()));
        assert!(seen.iter().any(|(direction, _)| *direction == Direction::Forward));
    }
}
