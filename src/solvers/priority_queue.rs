use std::collections::VecDeque;

use crate::error::{MazeError, Result};

/// Bounded queue kept sorted in ascending order.
///
/// Insertion shifts elements to keep the order (O(n)), and a new element goes after
/// any existing elements that compare equal, so ties come out first-in first-out.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    elements: VecDeque<T>,
    capacity: usize,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut elements = VecDeque::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(MazeError::exhausted("priority queue"))?;
        Ok(Self { elements, capacity })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Insert `item` at its sorted position.
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(MazeError::QueueFull {
                capacity: self.capacity,
            });
        }
        let idx = self.elements.partition_point(|e| *e <= item);
        self.elements.insert(idx, item);
        Ok(())
    }

    /// The smallest element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Remove and return the smallest element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// The first element (in queue order) matching `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.elements.iter().find(|e| pred(*e))
    }

    /// Remove and return the first element (in queue order) matching `pred`.
    pub fn remove_first(&mut self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let idx = self.elements.iter().position(pred)?;
        self.elements.remove(idx)
    }
}
