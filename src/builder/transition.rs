//! Builder for constructing state transitions.

use crate::core::{Guard, StateKind};
use crate::error::FsmError;
use crate::machine::Transition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source<K> {
    State(K),
    Any,
}

/// Builder for constructing transitions with a fluent API.
///
/// Endpoints are not checked against a machine here; that happens when the
/// built transition is registered.
pub struct TransitionBuilder<K: StateKind, C = ()> {
    from: Option<Source<K>>,
    to: Option<K>,
    condition: Option<Guard<C>>,
}

impl<K: StateKind, C> TransitionBuilder<K, C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            condition: None,
        }
    }

    /// Set the source state.
    pub fn from(mut self, state: K) -> Self {
        self.from = Some(Source::State(state));
        self
    }

    /// Make this a wildcard transition that ignores the current state.
    pub fn from_any(mut self) -> Self {
        self.from = Some(Source::Any);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: K) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the condition from a prebuilt guard.
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.condition = Some(guard);
        self
    }

    /// Set the condition from a closure over the machine context.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.condition = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<K, C>, FsmError> {
        let from = match self.from.ok_or(FsmError::MissingSource)? {
            Source::State(state) => Some(state),
            Source::Any => None,
        };
        let to = self.to.ok_or(FsmError::MissingTarget)?;
        let condition = self.condition.ok_or(FsmError::NullCondition)?;

        Ok(Transition::new(from, to, condition))
    }
}

impl<K: StateKind, C> Default for TransitionBuilder<K, C> {
    fn default() -> Self {
        Self::new()
    }
}
