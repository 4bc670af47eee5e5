//! Bounded log of recent computations

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One completed computation or scientific function application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Human-readable expression, e.g. `7 + 3` or `sin(30)`
    pub expression: String,
    /// Result text exactly as it was displayed
    pub result: String,
}

impl HistoryRecord {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

/// Most recent records, newest first.
///
/// Recording beyond [`History::CAPACITY`] evicts the oldest record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: VecDeque<HistoryRecord>,
}

impl History {
    /// Maximum number of records kept
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Prepend a record, evicting the oldest one past capacity
    pub fn record(&mut self, record: HistoryRecord) {
        self.records.push_front(record);
        self.records.truncate(Self::CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Record at `index`, where 0 is the newest
    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    /// Most recent record
    pub fn newest(&self) -> Option<&HistoryRecord> {
        self.records.front()
    }

    /// Records, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// Owned copy of the records, newest first
    pub fn to_vec(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }
}
