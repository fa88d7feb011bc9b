use crate::search::NodeRef;
use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;
use std::rc::Rc;

/// Best node found so far for every state reached by a graph search.
///
/// An entry is only ever replaced by a strictly cheaper node, and entries are
/// never removed, so the recorded cost of a state can only go down.
#[derive(Debug)]
pub struct ReachedTable<S, A> {
    nodes: HashMap<S, NodeRef<S, A>>,
}

impl<S: Clone + Eq + Hash, A> ReachedTable<S, A> {
    pub fn new(root: &NodeRef<S, A>) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(root.state().clone(), Rc::clone(root));
        Self { nodes }
    }

    /// Record `node` if its state is new or it is strictly cheaper than the
    /// node recorded so far. Returns whether the table changed.
    pub fn offer(&mut self, node: &NodeRef<S, A>) -> bool {
        let improves = self
            .nodes
            .get(node.state())
            .map_or(true, |existing| node.path_cost() < existing.path_cost());
        if improves {
            self.nodes.insert(node.state().clone(), Rc::clone(node));
        }
        improves
    }

    pub fn get(&self, state: &S) -> Option<&NodeRef<S, A>> {
        self.nodes.get(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.nodes.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, S, NodeRef<S, A>> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchNode;

    #[test]
    fn only_strictly_cheaper_nodes_replace_entries() {
        let root = Rc::new(SearchNode::root("s"));
        let mut reached = ReachedTable::new(&root);
        assert!(reached.contains(&"s"));

        let expensive = Rc::new(SearchNode::child(Rc::clone(&root), 'a', "g", 5.));
        let same = Rc::new(SearchNode::child(Rc::clone(&root), 'b', "g", 5.));
        let cheap = Rc::new(SearchNode::child(Rc::clone(&root), 'c', "g", 2.));

        assert!(reached.offer(&expensive));
        assert!(!reached.offer(&same));
        assert_eq!(reached.get(&"g").unwrap().action(), Some(&'a'));
        assert!(reached.offer(&cheap));
        assert_eq!(reached.get(&"g").unwrap().path_cost(), 2.);
        assert!(!reached.offer(&expensive));
        assert_eq!(reached.len(), 2);
    }
}
