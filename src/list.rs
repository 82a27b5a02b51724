//! Result accumulator for the search operations.
use crate::Result;
use arrayvec::ArrayVec;
use std::collections::{vec_deque, VecDeque};

/// Ordered, duplicate tolerant sequence with O(1) insertion at either end.
///
/// Insertions reserve before writing, so running out of memory surfaces as
/// [`Error::Alloc`](crate::Error::Alloc) instead of aborting the process.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    items: VecDeque<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push_back(value);
        Ok(())
    }

    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push_front(value);
        Ok(())
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// The first `N` items, or all of them if there are fewer.
    pub fn head<const N: usize>(&self) -> ArrayVec<&T, N> {
        self.items.iter().take(N).collect()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
