//! Shortcuts for hosts that own a state machine.
//!
//! A host type (an entity, an agent) implements `StateMachineOwner` by
//! exposing its machine and gets forwarding methods for the common calls.

use crate::core::{StateChange, StateKind};
use crate::error::FsmError;
use crate::machine::{ListenerId, StateMachine};

/// A type that owns and drives a `StateMachine`.
///
/// # Example
///
/// ```
/// use tickstate::core::State;
/// use tickstate::host::StateMachineOwner;
/// use tickstate::machine::StateMachine;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Stance {
///         Patrol,
///         Chase,
///     }
/// }
///
/// struct Patrol;
/// impl State<Stance> for Patrol {
///     fn kind(&self) -> Stance {
///         Stance::Patrol
///     }
/// }
///
/// struct Chase;
/// impl State<Stance> for Chase {
///     fn kind(&self) -> Stance {
///         Stance::Chase
///     }
/// }
///
/// struct Sentinel {
///     brain: StateMachine<Stance>,
/// }
///
/// impl StateMachineOwner<Stance> for Sentinel {
///     fn state_machine(&self) -> &StateMachine<Stance> {
///         &self.brain
///     }
///
///     fn state_machine_mut(&mut self) -> &mut StateMachine<Stance> {
///         &mut self.brain
///     }
/// }
///
/// let brain =
///     StateMachine::<Stance>::with_states((), vec![Box::new(Patrol), Box::new(Chase)]).unwrap();
/// let mut sentinel = Sentinel { brain };
/// sentinel.set_state(Stance::Chase).unwrap();
/// assert_eq!(sentinel.current_state(), Some(Stance::Chase));
/// ```
pub trait StateMachineOwner<K: StateKind, C: 'static = ()> {
    fn state_machine(&self) -> &StateMachine<K, C>;

    fn state_machine_mut(&mut self) -> &mut StateMachine<K, C>;

    fn current_state(&self) -> Option<K> {
        self.state_machine().current_state()
    }

    fn set_state(&mut self, kind: K) -> Result<(), FsmError> {
        self.state_machine_mut().set_state(kind)
    }

    fn add_transition<F>(&mut self, from: K, to: K, condition: F) -> Result<(), FsmError>
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.state_machine_mut().add_transition(from, to, condition)
    }

    fn add_any_transition<F>(&mut self, to: K, condition: F) -> Result<(), FsmError>
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.state_machine_mut().add_any_transition(to, condition)
    }

    fn add_state_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StateChange<K>) + 'static,
    {
        self.state_machine_mut().add_listener(listener)
    }

    fn remove_state_listener(&mut self, id: ListenerId) -> bool {
        self.state_machine_mut().remove_listener(id)
    }
}
