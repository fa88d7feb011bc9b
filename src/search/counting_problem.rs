use crate::search::{Node, Problem};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::rc::Rc;

/// Wraps a [`Problem`] and counts how often each of its methods is called by
/// a search, a measure of search effort that does not depend on the engine's
/// own bookkeeping.
///
/// The counters are shared with the problem returned by
/// [`CountingProblem::inverse`], so both halves of a bidirectional search add
/// up in one place.
#[derive(Debug, Clone)]
pub struct CountingProblem<P> {
    problem: P,
    counts: Rc<RefCell<BTreeMap<&'static str, usize>>>,
}

impl<P> CountingProblem<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            counts: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    pub fn inner(&self) -> &P {
        &self.problem
    }

    /// Number of calls to `method` so far.
    pub fn count(&self, method: &str) -> usize {
        self.counts.borrow().get(method).copied().unwrap_or(0)
    }

    /// All counts, by method name.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        self.counts.borrow().clone()
    }

    fn tick(&self, method: &'static str) {
        *self.counts.borrow_mut().entry(method).or_insert(0) += 1;
    }
}

impl<P: Problem> Problem for CountingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial(&self) -> &Self::State {
        self.problem.initial()
    }

    fn goal(&self) -> Option<&Self::State> {
        self.problem.goal()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.tick("is_goal");
        self.problem.is_goal(state)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.tick("actions");
        self.problem.actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.tick("result");
        self.problem.result(state, action)
    }

    fn action_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        next_state: &Self::State,
    ) -> f64 {
        self.tick("action_cost");
        self.problem.action_cost(state, action, next_state)
    }

    fn h(&self, node: &Node<Self::State, Self::Action>) -> f64 {
        self.tick("h");
        self.problem.h(node)
    }

    // Path reconstruction, not search effort: the calls the inner problem
    // makes for it are not counted.
    fn action_to(&self, state: &Self::State, target: &Self::State) -> Option<Self::Action> {
        self.tick("action_to");
        self.problem.action_to(state, target)
    }

    fn inverse(&self) -> Option<Self> {
        self.problem.inverse().map(|problem| Self {
            problem,
            counts: Rc::clone(&self.counts),
        })
    }
}

impl<P: Display> Display for CountingProblem<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.problem, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::uniform_cost_search;
    use crate::test_utils::*;

    #[test]
    fn counts_calls_per_method() {
        let problem = CountingProblem::new(romania_problem("A", "B"));
        assert_eq!(problem.count("result"), 0);
        uniform_cost_search(&problem);
        assert_eq!(problem.count("result"), 30);
        assert_eq!(problem.count("is_goal"), 13);
        assert_eq!(problem.count("actions"), 12);
        assert_eq!(problem.count("action_cost"), 30);
        assert_eq!(problem.count("h"), 0);
        assert_eq!(problem.counts().len(), 4);
        assert_eq!(problem.to_string(), problem.inner().to_string());
    }

    #[test]
    fn inverse_shares_the_counters() {
        let problem = CountingProblem::new(romania_problem("A", "B"));
        let inverse = problem.inverse().unwrap();
        assert_eq!(inverse.initial(), problem.goal().unwrap());
        inverse.actions(inverse.initial());
        problem.actions(problem.initial());
        assert_eq!(problem.count("actions"), 2);
        assert_eq!(inverse.count("actions"), 2);
    }
}
