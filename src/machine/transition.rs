//! Guarded edges between states.

use crate::core::{ChangeCause, Guard, StateKind};

/// A guarded edge from one state (or from any state) to another.
///
/// Transitions are immutable once registered. `from == None` marks a
/// wildcard transition, which matches whatever the current state is.
pub struct Transition<K: StateKind, C = ()> {
    from: Option<K>,
    to: K,
    condition: Guard<C>,
}

impl<K: StateKind, C> Transition<K, C> {
    pub(crate) fn new(from: Option<K>, to: K, condition: Guard<C>) -> Self {
        Self {
            from,
            to,
            condition,
        }
    }

    /// Source state, or `None` for a wildcard transition.
    pub fn from(&self) -> Option<K> {
        self.from
    }

    pub fn to(&self) -> K {
        self.to
    }

    pub fn is_wildcard(&self) -> bool {
        self.from.is_none()
    }

    /// Whether this transition may fire while `current` is active.
    ///
    /// Wildcards ignore `current`; ordinary transitions require their
    /// source to be the current state. The guard is evaluated last.
    pub fn can_fire(&self, current: Option<K>, context: &C) -> bool {
        match self.from {
            None => self.condition.check(context),
            Some(from) => current == Some(from) && self.condition.check(context),
        }
    }
}

impl<K: StateKind, C> std::fmt::Debug for Transition<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

/// Position of a registered transition in one of the two evaluation lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionId {
    Any(usize),
    Ordinary(usize),
}

impl From<TransitionId> for ChangeCause {
    fn from(id: TransitionId) -> Self {
        match id {
            TransitionId::Any(index) => ChangeCause::AnyTransition(index),
            TransitionId::Ordinary(index) => ChangeCause::Transition(index),
        }
    }
}

/// Pick the transition to apply this tick.
///
/// Wildcards are scanned first, in registration order, and the first whose
/// guard passes wins. Otherwise ordinary transitions sourced from `current`
/// are scanned the same way. Every guard is evaluated at most once and
/// nothing is mutated, so a panicking guard leaves the machine untouched.
pub(crate) fn select<K: StateKind, C>(
    any: &[Transition<K, C>],
    ordinary: &[Transition<K, C>],
    current: Option<K>,
    context: &C,
) -> Option<TransitionId> {
    if let Some(index) = any.iter().position(|t| t.can_fire(current, context)) {
        return Some(TransitionId::Any(index));
    }
    ordinary
        .iter()
        .position(|t| t.can_fire(current, context))
        .map(TransitionId::Ordinary)
}
