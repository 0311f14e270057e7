//! Operation log
//!
//! Every balance change of a wallet appends one [`Operation`] to its
//! [`History`]. Entries are never modified or removed; the only way they leave
//! a history is by being transplanted whole into a merged wallet.
//!
//! # Invariants
//!
//! - Entries are non-decreasing in timestamp
//! - Entries with equal timestamps keep insertion order

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::Units;

/// Snapshot of a wallet balance right after one event
///
/// Identity and ordering come from the timestamp only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Operation {
    final_balance: Units,
    timestamp: DateTime<Utc>,
}

impl Operation {
    /// Create new operation record
    pub fn new(final_balance: Units, timestamp: DateTime<Utc>) -> Self {
        Self {
            final_balance,
            timestamp,
        }
    }

    /// Balance after the event
    pub fn units(&self) -> Units {
        self.final_balance
    }

    /// When the event happened
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
    }
}

impl Eq for Operation {}

impl PartialOrd for Operation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Operation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

/// Append-only, time-ordered sequence of operations
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Operation>,
}

impl History {
    /// History holding a single entry
    pub fn starting_with(first: Operation) -> Self {
        Self {
            entries: vec![first],
        }
    }

    /// Append an entry
    pub fn push(&mut self, operation: Operation) {
        debug_assert!(self.last().map_or(true, |last| *last <= operation));
        self.entries.push(operation);
    }

    /// Entry at `index` (insertion order)
    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.entries.get(index)
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&Operation> {
        self.entries.last()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry was ever recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.entries.iter()
    }

    /// Entries as a slice
    pub fn as_slice(&self) -> &[Operation] {
        &self.entries
    }

    /// Merge two ascending histories into one, then append `closing`.
    ///
    /// Linear, stable merge: on equal timestamps entries from `left` come
    /// first and each side keeps its own relative order. Both inputs are
    /// consumed, so entries are moved rather than duplicated.
    pub fn merge(left: History, right: History, closing: Operation) -> History {
        let mut entries = Vec::with_capacity(left.len() + right.len() + 1);
        let mut left = left.entries.into_iter().peekable();
        let mut right = right.entries.into_iter().peekable();

        loop {
            let from_left = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => r >= l,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if from_left { left.next() } else { right.next() };
            entries.extend(next);
        }

        entries.push(closing);
        History { entries }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
