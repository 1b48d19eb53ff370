//! Frontier for the Dijkstra engine.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;

/// Heap entry ordered by tentative distance only.
///
/// Ties between equal distances are broken by whatever the heap does;
/// the node id takes no part in the ordering.
#[derive(Debug, Clone, Copy)]
struct Entry {
    distance: u64,
    node: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest distance
        other.distance.cmp(&self.distance)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of `(distance, node)` pairs with lazy deletion.
///
/// A node whose distance drops is pushed again instead of being updated in
/// place, so the queue may hold stale entries. Callers skip them on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: NodeId, distance: u64) {
        self.heap.push(Entry { distance, node });
    }

    /// Extract the entry with the least distance.
    pub fn pop(&mut self) -> Option<(NodeId, u64)> {
        self.heap.pop().map(|e| (e.node, e.distance))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut f = Frontier::default();
        assert_eq!(f.pop(), None);

        f.push(7, 1);
        assert_eq!(f.pop(), Some((7, 1)));
        assert_eq!(f.pop(), None);

        f.push(0, 1);
        f.push(1, 2);
        assert_eq!(f.pop(), Some((0, 1)));
        assert_eq!(f.pop(), Some((1, 2)));
        assert_eq!(f.len(), 0);

        f.push(4, 2);
        f.push(5, 1);
        assert_eq!(f.pop(), Some((5, 1)));
        assert_eq!(f.pop(), Some((4, 2)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_duplicate_node_entries_kept() {
        let mut f = Frontier::with_capacity(4);
        f.push(3, 10);
        f.push(3, 4);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some((3, 4)));
        assert_eq!(f.pop(), Some((3, 10)));
    }

    #[test]
    fn test_ties_pop_by_distance_only() {
        let mut f = Frontier::default();
        f.push(1, 5);
        f.push(2, 5);
        f.push(0, 9);
        let first = f.pop().unwrap();
        let second = f.pop().unwrap();
        assert_eq!(first.1, 5);
        assert_eq!(second.1, 5);
        assert_ne!(first.0, second.0);
        assert_eq!(f.pop(), Some((0, 9)));
    }
}
