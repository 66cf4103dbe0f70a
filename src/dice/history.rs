use std::collections::{vec_deque, VecDeque};

use super::types::RollResult;

/// Append-only log of rolls, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollHistory {
    entries: VecDeque<RollResult>,
}

impl RollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, roll: RollResult) {
        self.entries.push_front(roll);
    }

    pub fn latest(&self) -> Option<&RollResult> {
        self.entries.front()
    }

    /// `0` is the most recent roll.
    pub fn get(&self, index: usize) -> Option<&RollResult> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, RollResult> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RollHistory {
    type Item = &'a RollResult;
    type IntoIter = vec_deque::Iter<'a, RollResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
