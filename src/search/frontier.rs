use crate::search::SearchError;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt::{self, Debug};

pub type HeuristicValue = OrderedFloat<f64>;

/// Priority queue of items awaiting expansion, ordered by ascending key.
///
/// Keys are computed once, on insertion, by the key function given to
/// [`Frontier::new`]. Items with equal keys come out in insertion order, which
/// keeps every search deterministic: each entry carries a sequence number that
/// breaks ties.
pub struct Frontier<T, F> {
    queue: PriorityQueue<u64, Reverse<(HeuristicValue, u64)>>,
    items: HashMap<u64, T>,
    key_fn: F,
    next_sequence: u64,
}

impl<T, F> Frontier<T, F>
where
    F: Fn(&T) -> f64,
{
    pub fn new(initial_items: impl IntoIterator<Item = T>, key_fn: F) -> Self {
        let mut frontier = Self {
            queue: PriorityQueue::new(),
            items: HashMap::new(),
            key_fn,
            next_sequence: 0,
        };
        for item in initial_items {
            frontier.insert(item);
        }
        frontier
    }

    pub fn insert(&mut self, item: T) {
        let key = OrderedFloat((self.key_fn)(&item));
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(sequence, Reverse((key, sequence)));
        self.items.insert(sequence, item);
    }

    /// Remove and return the item with the smallest key, if any.
    pub fn pop(&mut self) -> Option<T> {
        let (sequence, _) = self.queue.pop()?;
        self.items.remove(&sequence)
    }

    /// Like [`Frontier::pop`], but treats an empty frontier as an error.
    pub fn pop_min(&mut self) -> Result<T, SearchError> {
        self.pop().ok_or(SearchError::EmptyFrontier)
    }

    /// The item with the smallest key, without removing it.
    pub fn peek_min(&self) -> Result<&T, SearchError> {
        self.queue
            .peek()
            .and_then(|(sequence, _)| self.items.get(sequence))
            .ok_or(SearchError::EmptyFrontier)
    }

    /// The smallest key in the frontier, as computed when its item was
    /// inserted.
    pub fn peek_key(&self) -> Option<f64> {
        self.queue
            .peek()
            .map(|(_, Reverse((key, _)))| key.into_inner())
    }

    /// Evaluate the key function on an arbitrary item.
    pub fn key(&self, item: &T) -> f64 {
        (self.key_fn)(item)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T, F> Debug for Frontier<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.queue.len())
            .field("next_sequence", &self.next_sequence)
            .finish()
    }
}
