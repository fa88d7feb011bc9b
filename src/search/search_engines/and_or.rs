//! AND-OR search for nondeterministic problems, where an action can end up
//! in any of several states and a solution has to handle all of them.

use crate::search::{NondeterministicProblem, SearchStatistics};
use tracing::trace;

/// A conditional plan. Either the goal is reached, or an action is taken and
/// the plan continues depending on which state it actually led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan<S, A> {
    Done,
    Conditional {
        action: A,
        /// One sub-plan for every possible outcome of `action`
        outcomes: Vec<(S, Plan<S, A>)>,
    },
}

impl<S: PartialEq, A> Plan<S, A> {
    pub fn is_done(&self) -> bool {
        matches!(self, Plan::Done)
    }

    /// The action to take now, [`None`] once the goal is reached.
    pub fn action(&self) -> Option<&A> {
        match self {
            Plan::Done => None,
            Plan::Conditional { action, .. } => Some(action),
        }
    }

    /// The rest of the plan after the current action led to `state`.
    pub fn next(&self, state: &S) -> Option<&Plan<S, A>> {
        match self {
            Plan::Done => None,
            Plan::Conditional { outcomes, .. } => outcomes
                .iter()
                .find(|(outcome, _)| outcome == state)
                .map(|(_, plan)| plan),
        }
    }

    /// Length of the longest branch, in actions.
    pub fn depth(&self) -> usize {
        match self {
            Plan::Done => 0,
            Plan::Conditional { outcomes, .. } => {
                1 + outcomes
                    .iter()
                    .map(|(_, plan)| plan.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

/// Find a conditional plan that reaches a goal whatever the outcomes of the
/// actions turn out to be, or [`None`] if there is none.
///
/// A state that repeats on the current branch fails that branch, so only
/// acyclic plans are found. Actions are tried in the order the problem lists
/// them.
pub fn and_or_search<P: NondeterministicProblem>(problem: &P) -> Option<Plan<P::State, P::Action>> {
    let mut statistics = SearchStatistics::new("and_or_search");
    let mut path = vec![];
    let plan = or_search(problem, problem.initial(), &mut path, &mut statistics);
    statistics.finalise_search();
    plan
}

fn or_search<P: NondeterministicProblem>(
    problem: &P,
    state: &P::State,
    path: &mut Vec<P::State>,
    statistics: &mut SearchStatistics,
) -> Option<Plan<P::State, P::Action>> {
    if problem.is_goal(state) {
        return Some(Plan::Done);
    }
    if path.contains(state) {
        statistics.increment_pruned_cycles();
        return None;
    }

    statistics.increment_expanded_nodes();
    path.push(state.clone());
    let mut plan = None;
    for action in problem.actions(state) {
        trace!(?state, ?action, "trying");
        let results = problem.results(state, &action);
        statistics.increment_generated_nodes();
        if let Some(outcomes) = and_search(problem, &results, path, statistics) {
            plan = Some(Plan::Conditional { action, outcomes });
            break;
        }
    }
    path.pop();
    plan
}

fn and_search<P: NondeterministicProblem>(
    problem: &P,
    states: &[P::State],
    path: &mut Vec<P::State>,
    statistics: &mut SearchStatistics,
) -> Option<Vec<(P::State, Plan<P::State, P::Action>)>> {
    states
        .iter()
        .map(|state| {
            or_search(problem, state, path, statistics).map(|plan| (state.clone(), plan))
        })
        .collect()
}
