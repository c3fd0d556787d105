//! State change history tracking.
//!
//! Keeps a bounded, ordered log of the state changes a machine has
//! realized, for diagnostics and tests.

use super::kind::StateKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// A realized change of the current state.
///
/// `from` is `None` for the very first activation of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateChange<K: StateKind> {
    pub from: Option<K>,
    pub to: K,
}

/// What caused a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeCause {
    /// Explicit `set_state` call by the host.
    Manual,
    /// Wildcard transition at this registration index.
    AnyTransition(usize),
    /// Ordinary transition at this registration index.
    Transition(usize),
}

/// Record of a single realized state change.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{ChangeCause, TransitionRecord};
/// use tickstate::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Task {
///         Pending,
///         Running,
///     }
/// }
///
/// let record = TransitionRecord {
///     from: Some(Task::Pending),
///     to: Task::Running,
///     cause: ChangeCause::Transition(0),
///     tick: 4,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.change().to, Task::Running);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<K: StateKind> {
    /// The state that was exited, if any
    pub from: Option<K>,
    /// The state that was entered
    pub to: K,
    /// Manual override or the transition that fired
    pub cause: ChangeCause,
    /// Tick counter value when the change happened
    pub tick: u64,
    /// Wall-clock time of the change
    pub timestamp: DateTime<Utc>,
}

impl<K: StateKind> TransitionRecord<K> {
    /// The `(from, to)` pair of this record.
    pub fn change(&self) -> StateChange<K> {
        StateChange {
            from: self.from,
            to: self.to,
        }
    }
}

/// Bounded history of state changes, oldest first.
///
/// Once `capacity` records are held, recording a new one drops the oldest.
/// A capacity of zero disables recording.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{ChangeCause, StateHistory, TransitionRecord};
/// use tickstate::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase {
///         One,
///         Two,
///         Three,
///     }
/// }
///
/// let mut history = StateHistory::with_capacity(8);
/// history.record(TransitionRecord {
///     from: None,
///     to: Phase::One,
///     cause: ChangeCause::Manual,
///     tick: 0,
///     timestamp: Utc::now(),
/// });
/// history.record(TransitionRecord {
///     from: Some(Phase::One),
///     to: Phase::Two,
///     cause: ChangeCause::Transition(0),
///     tick: 1,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![Phase::One, Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<K: StateKind> {
    capacity: usize,
    records: VecDeque<TransitionRecord<K>>,
}

impl<K: StateKind> StateHistory<K> {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// `capacity` is only a bound; storage grows as records arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::new(),
        }
    }

    /// Append a record, evicting the oldest when full.
    pub fn record(&mut self, record: TransitionRecord<K>) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// States traversed, in order.
    ///
    /// Starts with the `from` of the oldest record when it has one, then the
    /// `to` of every record.
    pub fn path(&self) -> Vec<K> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(from) = self.records.front().and_then(|r| r.from) {
            path.push(from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Wall-clock time between the oldest and newest record.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<K>> {
        self.records.back()
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<K>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
