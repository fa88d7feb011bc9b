use crate::search::NodeRef;

/// Outcome of a search.
///
/// Not finding a goal is an ordinary outcome, so it is reported here rather
/// than through an error. Callers have to match on the result before they can
/// get at a path.
#[derive(Debug, Clone)]
pub enum SearchResult<S, A> {
    /// A goal was reached, the node is the end of the solution path
    Found(NodeRef<S, A>),
    /// The search ran out of nodes without finding a goal
    Failure,
    /// A depth bound stopped the search before the space below it was
    /// exhausted, a larger bound might still succeed
    Cutoff,
}

impl<S, A> SearchResult<S, A> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SearchResult::Failure)
    }

    pub fn is_cutoff(&self) -> bool {
        matches!(self, SearchResult::Cutoff)
    }

    pub fn node(&self) -> Option<&NodeRef<S, A>> {
        match self {
            SearchResult::Found(node) => Some(node),
            SearchResult::Failure | SearchResult::Cutoff => None,
        }
    }

    /// Cost of the solution path, infinite when no goal was found.
    pub fn path_cost(&self) -> f64 {
        self.node().map_or(f64::INFINITY, |node| node.path_cost())
    }

    /// Number of actions in the solution, [`None`] when no goal was found.
    pub fn depth(&self) -> Option<usize> {
        self.node().map(|node| node.depth())
    }
}

impl<S: Clone, A: Clone> SearchResult<S, A> {
    /// Actions of the solution path, empty when no goal was found.
    pub fn path_actions(&self) -> Vec<A> {
        self.node().map_or_else(Vec::new, |node| node.path_actions())
    }

    /// States of the solution path, empty when no goal was found.
    pub fn path_states(&self) -> Vec<S> {
        self.node().map_or_else(Vec::new, |node| node.path_states())
    }
}
