use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-ordered priority queue over `(vertex, priority)` pairs
///
/// The same vertex may be pushed several times as relaxation improves its
/// tentative distance; consumers discard stale entries on pop by comparing
/// the popped priority against the vertex's current best distance. That lazy
/// deletion replaces a decrease-key operation.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (*vertex, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
