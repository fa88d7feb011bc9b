use crate::search::{Node, Problem};
use smallvec::SmallVec;
use std::fmt::{self, Display};

/// Pancake sizes from the top of the stack down.
pub type Stack = SmallVec<[u8; 16]>;

/// Sort a stack of pancakes by flipping over the top `i` of them, for any
/// `i` from 2 up to the whole stack. The action is `i`.
#[derive(Debug, Clone)]
pub struct PancakeProblem {
    initial: Stack,
    goal: Stack,
}

impl PancakeProblem {
    /// Sort `initial` so the smallest pancake ends up on top.
    pub fn new(initial: &[u8]) -> Self {
        let mut goal = Stack::from_slice(initial);
        goal.sort_unstable();
        Self {
            initial: Stack::from_slice(initial),
            goal,
        }
    }

    /// Whether `a` and `b` lie on top of each other in the goal stack.
    fn adjacent_in_goal(&self, a: u8, b: u8) -> bool {
        self.goal
            .windows(2)
            .any(|pair| (pair[0], pair[1]) == (a, b) || (pair[0], pair[1]) == (b, a))
    }
}

impl Problem for PancakeProblem {
    type State = Stack;
    type Action = usize;

    fn initial(&self) -> &Stack {
        &self.initial
    }

    fn goal(&self) -> Option<&Stack> {
        Some(&self.goal)
    }

    fn actions(&self, state: &Stack) -> Vec<usize> {
        (2..=state.len()).collect()
    }

    fn result(&self, state: &Stack, action: &usize) -> Stack {
        let mut stack = state.clone();
        stack[..*action].reverse();
        stack
    }

    /// The gap heuristic: the number of neighbouring pancakes that are not
    /// neighbours in the goal. Each flip closes at most one gap.
    fn h(&self, node: &Node<Stack, usize>) -> f64 {
        let gaps = node
            .state()
            .windows(2)
            .filter(|pair| !self.adjacent_in_goal(pair[0], pair[1]))
            .count();
        gaps as f64
    }

    fn inverse(&self) -> Option<Self> {
        Some(Self {
            initial: self.goal.clone(),
            goal: self.initial.clone(),
        })
    }
}

impl Display for PancakeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PancakeProblem({:?})", self.initial.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{bidirectional_astar_search, uniform_cost_search};

    #[test]
    fn flips_reverse_the_top_of_the_stack() {
        let problem = PancakeProblem::new(&[2, 1, 4, 6, 3, 5]);
        let stack = problem.initial().clone();
        assert_eq!(problem.actions(&stack), vec![2, 3, 4, 5, 6]);
        assert_eq!(problem.result(&stack, &2).as_slice(), &[1, 2, 4, 6, 3, 5]);
        assert_eq!(problem.result(&stack, &6).as_slice(), &[5, 3, 6, 4, 1, 2]);
        assert_eq!(problem.goal().unwrap().as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn gap_heuristic_counts_broken_neighbours() {
        let problem = PancakeProblem::new(&[2, 1, 4, 6, 3, 5]);
        // 2|1 fits, 1|4 4|6 6|3 3|5 do not
        assert_eq!(problem.h(&Node::root(problem.initial().clone())), 4.);
        assert_eq!(problem.h(&Node::root(problem.goal().unwrap().clone())), 0.);

        // the inverse measures gaps relative to its own goal
        let inverse = problem.inverse().unwrap();
        assert_eq!(inverse.h(&Node::root(inverse.goal().unwrap().clone())), 0.);
        assert_eq!(inverse.h(&Node::root(inverse.initial().clone())), 4.);
    }

    #[test]
    fn bidirectional_search_sorts_the_stack() {
        let problem = PancakeProblem::new(&[2, 1, 4, 6, 3, 5]);
        let result = bidirectional_astar_search(&problem, &problem.inverse().unwrap());
        assert_eq!(result.path_cost(), uniform_cost_search(&problem).path_cost());
        let stacks = result.path_states();
        assert_eq!(stacks.last().unwrap().as_slice(), &[1, 2, 3, 4, 5, 6]);
    }
}
