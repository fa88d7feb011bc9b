use crate::search::Problem;
use std::rc::Rc;

/// Shared handle to a [`SearchNode`]. Children hold their parent through one
/// of these, so a whole ancestor chain stays alive exactly as long as some
/// node below it is still referenced by a frontier, a reached table or a
/// returned result.
pub type NodeRef<S, A> = Rc<SearchNode<S, A>>;

/// A [`SearchNode`] is a point reached during the search: a state together
/// with the path that led to it.
///
/// Nodes are immutable once created. The depth is cached at construction so
/// that breadth- and depth-first keys are O(1).
#[derive(Debug)]
pub struct SearchNode<S, A> {
    /// Domain state of the node
    state: S,
    /// Node this one was generated from, [`None`] for the root
    parent: Option<NodeRef<S, A>>,
    /// Action that led from the parent to this node, [`None`] for the root
    action: Option<A>,
    /// Accumulated cost from the root, i.e. g(n)
    path_cost: f64,
    /// Number of edges from the root
    depth: usize,
}

/// Short alias, most of the crate just talks about nodes.
pub type Node<S, A> = SearchNode<S, A>;

impl<S, A> SearchNode<S, A> {
    /// Create a root node: no parent, no action and zero path cost.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.,
            depth: 0,
        }
    }

    /// Create a node reached from `parent` by `action`. `path_cost` is the
    /// full cost from the root, not the cost of the last step.
    pub fn child(parent: NodeRef<S, A>, action: A, state: S, path_cost: f64) -> Self {
        let depth = parent.depth + 1;
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            depth,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&NodeRef<S, A>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate over this node and then its ancestors, ending at the root.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { next: Some(self) }
    }
}

impl<S: Clone, A: Clone> SearchNode<S, A> {
    /// The actions leading from the root to this node, in order.
    pub fn path_actions(&self) -> Vec<A> {
        let mut actions: Vec<A> = self
            .ancestors()
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }

    /// The states from the root to this node, both included, in order.
    pub fn path_states(&self) -> Vec<S> {
        let mut states: Vec<S> = self.ancestors().map(|node| node.state.clone()).collect();
        states.reverse();
        states
    }
}

// Dropping a long chain recursively can overflow the stack (think depth-first
// search on a large grid), so unlink uniquely owned parents in a loop.
impl<S, A> Drop for SearchNode<S, A> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[derive(Debug)]
pub struct Ancestors<'a, S, A> {
    next: Option<&'a SearchNode<S, A>>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a SearchNode<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// Generate the children of `node`, one per action applicable in its state.
///
/// The actions are computed up front but successor states and costs are only
/// computed as the iterator is consumed. Nothing is cached, every call asks
/// the problem again.
///
/// # Panics
///
/// Panics if the problem reports a negative action cost.
pub fn expand<'a, P: Problem>(
    problem: &'a P,
    node: &NodeRef<P::State, P::Action>,
) -> impl Iterator<Item = NodeRef<P::State, P::Action>> + 'a {
    let parent = Rc::clone(node);
    problem
        .actions(node.state())
        .into_iter()
        .map(move |action| {
            let next_state = problem.result(parent.state(), &action);
            let step_cost = problem.action_cost(parent.state(), &action, &next_state);
            assert!(
                step_cost >= 0.,
                "negative action cost {step_cost} for {action:?} in {:?}",
                parent.state()
            );
            Rc::new(SearchNode::child(
                Rc::clone(&parent),
                action,
                next_state,
                parent.path_cost() + step_cost,
            ))
        })
}

/// Whether the state of `node` reappears among its nearest `lookback`
/// ancestors. Cycles longer than that window go unnoticed.
pub fn is_cycle<S: PartialEq, A>(node: &SearchNode<S, A>, lookback: usize) -> bool {
    node.ancestors()
        .skip(1)
        .take(lookback)
        .any(|ancestor| ancestor.state == node.state)
}

/// Default lookback window of [`is_cycle`].
pub const DEFAULT_CYCLE_LOOKBACK: usize = 30;
