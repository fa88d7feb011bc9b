use crate::search::Node;
use std::fmt::Debug;
use std::hash::Hash;

/// A deterministic search problem. The search engines are generic over this
/// trait and never look inside states or actions, they only need states to be
/// usable as hash map keys.
///
/// Only [`Problem::initial`], [`Problem::actions`] and [`Problem::result`]
/// are required. A problem with a single goal state should override
/// [`Problem::goal`]; problems with more general goal conditions override
/// [`Problem::is_goal`] instead.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn initial(&self) -> &Self::State;

    /// The single goal state, if the problem has one.
    fn goal(&self) -> Option<&Self::State> {
        None
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goal().is_some_and(|goal| goal == state)
    }

    /// The actions applicable in `state`. May be empty.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of taking `action` in `state`, ending up in `next_state`. Must not
    /// be negative.
    fn action_cost(
        &self,
        _state: &Self::State,
        _action: &Self::Action,
        _next_state: &Self::State,
    ) -> f64 {
        1.
    }

    /// Heuristic estimate of the cost from `node` to the nearest goal. The
    /// zero default makes A* behave like uniform cost search.
    fn h(&self, _node: &Node<Self::State, Self::Action>) -> f64 {
        0.
    }

    /// The action leading from `state` directly to `target`, if there is one.
    fn action_to(&self, state: &Self::State, target: &Self::State) -> Option<Self::Action> {
        self.actions(state)
            .into_iter()
            .find(|action| self.result(state, action) == *target)
    }

    /// The same problem searched from the goal back to the initial state, i.e.
    /// with initial and goal swapped. Only meaningful for problems with a
    /// single goal whose transitions can be travelled in both directions.
    fn inverse(&self) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

/// A problem whose actions may have several outcomes. Searched with
/// [`and_or_search`](crate::search::and_or_search), which
/// produces a conditional plan rather than a path.
pub trait NondeterministicProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn initial(&self) -> &Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Every state that taking `action` in `state` might lead to, without
    /// duplicates.
    fn results(&self, state: &Self::State, action: &Self::Action) -> Vec<Self::State>;
}
