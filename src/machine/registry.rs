//! Kind-indexed storage for registered states.

use crate::core::{State, StateKind};
use crate::error::{Duplicate, FsmError};
use std::any::type_name;

/// A registered state and its activity flag.
pub(crate) struct Slot<K: StateKind, C> {
    pub(crate) state: Box<dyn State<K, C>>,
    pub(crate) is_active: bool,
}

/// Registry of states, one slot per `StateKind` index.
pub(crate) struct Registry<K: StateKind, C> {
    slots: Vec<Option<Slot<K, C>>>,
    populated: bool,
}

impl<K: StateKind, C: 'static> Registry<K, C> {
    pub(crate) fn new() -> Self {
        Self {
            slots: (0..K::COUNT).map(|_| None).collect(),
            populated: false,
        }
    }

    pub(crate) fn is_populated(&self) -> bool {
        self.populated
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Register a whole batch at once.
    ///
    /// The batch is validated before anything is inserted, so on error the
    /// registry is exactly as it was.
    pub(crate) fn insert_batch(
        &mut self,
        states: Vec<Box<dyn State<K, C>>>,
    ) -> Result<(), FsmError> {
        if self.populated {
            return Err(FsmError::DuplicateRegistration(Duplicate::AlreadyPopulated));
        }

        let mut seen = vec![false; K::COUNT];
        for state in &states {
            let kind = state.kind();
            let index = kind.index();
            let taken = seen.get_mut(index).ok_or(FsmError::KindOutOfRange {
                state: kind.name(),
                index,
                count: K::COUNT,
            })?;
            if *taken {
                return Err(FsmError::DuplicateRegistration(Duplicate::Kind(kind.name())));
            }
            *taken = true;
        }

        for state in states {
            let index = state.kind().index();
            self.slots[index] = Some(Slot {
                state,
                is_active: false,
            });
        }
        self.populated = true;
        Ok(())
    }

    /// Fail with `UnknownState` unless `kind` is registered.
    pub(crate) fn require(&self, kind: K) -> Result<(), FsmError> {
        self.slot(kind).map(|_| ())
    }

    pub(crate) fn slot(&self, kind: K) -> Result<&Slot<K, C>, FsmError> {
        self.slots
            .get(kind.index())
            .and_then(Option::as_ref)
            .ok_or(FsmError::UnknownState { state: kind.name() })
    }

    pub(crate) fn slot_mut(&mut self, kind: K) -> Result<&mut Slot<K, C>, FsmError> {
        self.slots
            .get_mut(kind.index())
            .and_then(Option::as_mut)
            .ok_or(FsmError::UnknownState { state: kind.name() })
    }

    pub(crate) fn downcast<T: State<K, C>>(&self, kind: K) -> Result<&T, FsmError> {
        self.slot(kind)?
            .state
            .as_ref()
            .as_any()
            .downcast_ref::<T>()
            .ok_or(FsmError::StateTypeMismatch {
                state: kind.name(),
                expected: type_name::<T>(),
            })
    }

    pub(crate) fn downcast_mut<T: State<K, C>>(&mut self, kind: K) -> Result<&mut T, FsmError> {
        self.slot_mut(kind)?
            .state
            .as_mut()
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(FsmError::StateTypeMismatch {
                state: kind.name(),
                expected: type_name::<T>(),
            })
    }

    /// Number of slots currently flagged active.
    pub(crate) fn active_count(&self) -> usize {
        self.slots.iter().flatten().filter(|s| s.is_active).count()
    }
}
