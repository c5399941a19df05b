/*!
 * Normal FIFO
 * First-in-first-out backlog of routine payloads
 */

use crate::core::{QueueError, QueueResult};
use std::collections::VecDeque;

/// Unbounded FIFO whose growth is fallible instead of aborting
#[derive(Debug)]
pub struct NormalFifo<T> {
    items: VecDeque<T>,
}

impl<T> NormalFifo<T> {
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create with `reserve` slots pre-allocated
    pub fn try_with_reserve(reserve: usize) -> QueueResult<Self> {
        let mut items = VecDeque::new();
        items
            .try_reserve(reserve)
            .map_err(|_| QueueError::AllocationFailed)?;
        Ok(Self { items })
    }

    /// Append to the tail
    ///
    /// Hands the payload back, leaving the FIFO unchanged, if it cannot grow.
    pub fn push(&mut self, payload: T) -> Result<(), T> {
        if self.items.try_reserve(1).is_err() {
            return Err(payload);
        }
        self.items.push_back(payload);
        Ok(())
    }

    /// Remove the head
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every pending payload, head first
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

impl<T> Default for NormalFifo<T> {
    fn default() -> Self {
        Self::new()
    }
}
