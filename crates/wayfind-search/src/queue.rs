//! A minimal min-priority queue with deterministic tie-breaking.

/// A container of `(item, priority)` pairs that pops the numerically
/// smallest priority first.
///
/// Insertion is O(1); [`pop`](Self::pop) scans the whole backing vector for
/// the minimum, O(n) per call. Among equal priorities the *earliest-inserted*
/// element wins, a guarantee [`std::collections::BinaryHeap`] does not make
/// and one the search engines rely on for reproducible paths among
/// equal-cost alternatives. The scan is the known scalability ceiling at
/// large grid sizes.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue<T> {
    elements: Vec<(T, i32)>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append `item` with the given priority. Lower priorities pop first.
    pub fn push(&mut self, item: T, priority: i32) {
        self.elements.push((item, priority));
    }

    /// Remove and return the item with the smallest priority, or `None` if
    /// the queue is empty.
    ///
    /// Ties go to the element inserted first. Removal preserves the
    /// insertion order of the remaining elements, which is what keeps the
    /// tie-break stable across successive pops.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let mut best = 0;
        for i in 1..self.elements.len() {
            if self.elements[i].1 < self.elements[best].1 {
                best = i;
            }
        }
        // Vec::remove keeps the order of the tail; swap_remove would not.
        Some(self.elements.remove(best).0)
    }

    /// Current number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
