//! Configuration errors raised by machines and builders.
//!
//! Every variant describes a host programming error. They are returned
//! synchronously from the call that caused them and are never retried.

use std::fmt;
use thiserror::Error;

/// Why a registration was rejected as a duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicate {
    /// States were already added to this machine.
    AlreadyPopulated,
    /// The named kind appears more than once in the batch.
    Kind(&'static str),
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPopulated => f.write_str("states have already been added"),
            Self::Kind(name) => write!(f, "state '{name}' was added twice"),
        }
    }
}

/// Errors that can occur while configuring or addressing a state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError {
    #[error("Duplicate registration: {0}")]
    DuplicateRegistration(Duplicate),

    #[error("State '{state}' was never registered")]
    UnknownState { state: &'static str },

    #[error("Tried to add an empty batch of states")]
    EmptyBatch,

    #[error("Transition condition not specified. Call .when(predicate)")]
    NullCondition,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingTarget,

    #[error("Transition source not specified. Call .from(state) or .from_any()")]
    MissingSource,

    #[error("State '{state}' reports index {index}, but the kind only has {count} slots")]
    KindOutOfRange {
        state: &'static str,
        index: usize,
        count: usize,
    },

    #[error("State '{state}' is not a {expected}")]
    StateTypeMismatch {
        state: &'static str,
        expected: &'static str,
    },
}
