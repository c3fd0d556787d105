//! Builder for constructing state machines.

use crate::builder::transition::TransitionBuilder;
use crate::core::{State, StateKind};
use crate::error::FsmError;
use crate::machine::{MachineConfig, StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```
/// use tickstate::builder::{transition, StateMachineBuilder};
/// use tickstate::core::State;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// struct Open;
/// impl State<Door, bool> for Open {
///     fn kind(&self) -> Door {
///         Door::Open
///     }
/// }
///
/// struct Closed;
/// impl State<Door, bool> for Closed {
///     fn kind(&self) -> Door {
///         Door::Closed
///     }
/// }
///
/// let machine = StateMachineBuilder::<Door, bool>::with_context(true)
///     .state(Open)
///     .state(Closed)
///     .transition(transition(Door::Open, Door::Closed, |wind: &bool| *wind))
///     .unwrap()
///     .initial(Door::Open)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), Some(Door::Open));
/// ```
pub struct StateMachineBuilder<K: StateKind, C = ()> {
    context: C,
    config: MachineConfig,
    states: Vec<Box<dyn State<K, C>>>,
    transitions: Vec<Transition<K, C>>,
    initial: Option<K>,
}

impl<K: StateKind> StateMachineBuilder<K, ()> {
    /// Create a builder for a machine without a context.
    pub fn new() -> Self {
        Self::with_context(())
    }
}

impl<K: StateKind> Default for StateMachineBuilder<K, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateKind, C: 'static> StateMachineBuilder<K, C> {
    /// Create a builder whose machine lends `context` to hooks and guards.
    pub fn with_context(context: C) -> Self {
        Self {
            context,
            config: MachineConfig::default(),
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a state to the registration batch.
    pub fn state<S: State<K, C>>(mut self, state: S) -> Self {
        self.states.push(Box::new(state));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<K, C>) -> Result<Self, FsmError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<K, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Enter this state once the machine is built (optional).
    pub fn initial(mut self, state: K) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the state machine.
    ///
    /// Registers the states as one batch, then the transitions in the order
    /// they were added, then enters the initial state if one was given.
    pub fn build(self) -> Result<StateMachine<K, C>, FsmError> {
        let mut machine = StateMachine::with_config(self.context, self.config);
        machine.add_states(self.states)?;

        for transition in self.transitions {
            machine.register_transition(transition)?;
        }

        if let Some(initial) = self.initial {
            machine.set_state(initial)?;
        }

        Ok(machine)
    }
}
