//! Frontier containers for the iterative strategies.
//!
//! A frontier holds discovered-but-not-yet-expanded work. Its pop order is
//! the only thing that distinguishes breadth-first from iterative
//! depth-first exploration; everything else is shared by the search loop.

use std::collections::VecDeque;

/// Ordered container of pending items.
pub trait Frontier<T> {
    /// Adds an item to the frontier.
    fn push(&mut self, item: T);

    /// Removes the next item to expand.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// Returns `true` if no items are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out frontier (breadth-first order).
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Last-in, first-out frontier (depth-first order).
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<u8>>(mut frontier: F) -> Vec<u8> {
        for item in [1, 2, 3] {
            frontier.push(item);
        }
        assert_eq!(frontier.len(), 3);
        let mut out = Vec::new();
        while let Some(item) = frontier.pop() {
            out.push(item);
        }
        assert!(frontier.is_empty());
        out
    }

    #[test]
    fn queue_pops_oldest_first() {
        assert_eq!(drain(Queue::new()), vec![1, 2, 3]);
    }

    #[test]
    fn stack_pops_newest_first() {
        assert_eq!(drain(Stack::new()), vec![3, 2, 1]);
    }
}
