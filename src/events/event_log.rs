//! Append-only event log
//!
//! Every phase of a tick records what it did here. The log is the externally
//! visible record of a run; each append is mirrored to the diagnostic tracing
//! channel at debug level.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LogEntry, LogKind};

/// Ordered, append-only record of a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: LogEntry) {
        debug!(
            tick = entry.tick,
            kind = %entry.kind,
            elevator = entry.elevator_id.map(|id| id.0 as u64),
            passenger = entry.passenger_id.map(|id| id.sequence()),
            floor = entry.floor.map(|floor| floor.number()),
            "{}",
            entry.message
        );
        self.entries.push(entry);
    }

    /// All entries in append order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterate over all entries in append order
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries of one kind
    pub fn count_kind(&self, kind: LogKind) -> usize {
        self.iter_kind(kind).count()
    }

    /// Iterate over entries of one kind
    pub fn iter_kind(&self, kind: LogKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    /// Consume the log, returning its entries
    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
