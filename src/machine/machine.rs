//! Tick-driven state machine.

use crate::core::{
    ChangeCause, Guard, State, StateChange, StateHistory, StateKind, TransitionRecord,
};
use crate::error::{Duplicate, FsmError};
use crate::machine::config::MachineConfig;
use crate::machine::listener::{ListenerId, Listeners};
use crate::machine::registry::Registry;
use crate::machine::transition::{self, Transition, TransitionId};
use chrono::Utc;
use std::fmt;

/// Lifecycle of the machine itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachinePhase {
    /// No states registered yet.
    Unconfigured,
    /// States registered, nothing active.
    Configured,
    /// A current state is set; the machine stays here for good.
    Running,
}

/// Finite state machine driven once per host tick.
///
/// Holds a registry of states keyed by `K`, two ordered transition lists
/// (wildcard and ordinary), the current state and a read-only context `C`
/// that is lent to every hook and guard.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::core::State;
/// use tickstate::machine::StateMachine;
/// use tickstate::state_enum;
///
/// state_enum! {
///     pub enum Mode {
///         Idle,
///         Busy,
///     }
/// }
///
/// struct Idle;
/// impl State<Mode> for Idle {
///     fn kind(&self) -> Mode {
///         Mode::Idle
///     }
/// }
///
/// struct Busy;
/// impl State<Mode> for Busy {
///     fn kind(&self) -> Mode {
///         Mode::Busy
///     }
/// }
///
/// let work = Rc::new(Cell::new(false));
/// let pending = Rc::clone(&work);
///
/// let mut machine: StateMachine<Mode> = StateMachine::new();
/// machine.add_states(vec![Box::new(Idle), Box::new(Busy)]).unwrap();
/// machine
///     .add_transition(Mode::Idle, Mode::Busy, move |_| pending.get())
///     .unwrap();
/// machine.set_state(Mode::Idle).unwrap();
///
/// machine.run();
/// assert_eq!(machine.current_state(), Some(Mode::Idle));
///
/// work.set(true);
/// machine.run();
/// assert_eq!(machine.current_state(), Some(Mode::Busy));
/// ```
pub struct StateMachine<K: StateKind, C = ()> {
    context: C,
    config: MachineConfig,
    registry: Registry<K, C>,
    any_transitions: Vec<Transition<K, C>>,
    transitions: Vec<Transition<K, C>>,
    current: Option<K>,
    transitions_enabled: bool,
    last_transition: Option<TransitionId>,
    history: StateHistory<K>,
    listeners: Listeners<K>,
    ticks: u64,
}

impl<K: StateKind> StateMachine<K, ()> {
    /// Create an empty machine without a context.
    pub fn new() -> Self {
        Self::with_context(())
    }
}

impl<K: StateKind> Default for StateMachine<K, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateKind, C: 'static> StateMachine<K, C> {
    /// Create an empty machine with a context and default configuration.
    pub fn with_context(context: C) -> Self {
        Self::with_config(context, MachineConfig::default())
    }

    /// Create an empty machine with a context and explicit configuration.
    pub fn with_config(context: C, config: MachineConfig) -> Self {
        Self {
            context,
            registry: Registry::new(),
            any_transitions: Vec::new(),
            transitions: Vec::new(),
            current: None,
            transitions_enabled: config.transitions_enabled,
            last_transition: None,
            history: StateHistory::with_capacity(config.history_capacity),
            listeners: Listeners::new(),
            ticks: 0,
            config,
        }
    }

    /// Create a machine and register its states in one go.
    pub fn with_states(context: C, states: Vec<Box<dyn State<K, C>>>) -> Result<Self, FsmError> {
        let mut machine = Self::with_context(context);
        machine.add_states(states)?;
        Ok(machine)
    }

    /// Register the machine's states.
    ///
    /// States can be added once. A second call, or a batch naming the same
    /// kind twice, fails with `DuplicateRegistration` and leaves the
    /// registry untouched. An empty batch fails with `EmptyBatch` in strict
    /// mode and is ignored otherwise.
    pub fn add_states(&mut self, states: Vec<Box<dyn State<K, C>>>) -> Result<(), FsmError> {
        if self.registry.is_populated() {
            let err = FsmError::DuplicateRegistration(Duplicate::AlreadyPopulated);
            tracing::warn!(%err, "state registration rejected");
            return Err(err);
        }
        if states.is_empty() {
            if self.config.strict {
                tracing::warn!("empty state batch rejected in strict mode");
                return Err(FsmError::EmptyBatch);
            }
            return Ok(());
        }

        let count = states.len();
        self.registry
            .insert_batch(states)
            .inspect_err(|err| tracing::warn!(%err, "state registration rejected"))?;
        tracing::debug!(states = count, "registered states");
        Ok(())
    }

    /// The registered state for `kind`.
    pub fn get_state(&self, kind: K) -> Result<&dyn State<K, C>, FsmError> {
        Ok(self.registry.slot(kind)?.state.as_ref())
    }

    pub fn get_state_mut(&mut self, kind: K) -> Result<&mut (dyn State<K, C> + 'static), FsmError> {
        Ok(self.registry.slot_mut(kind)?.state.as_mut())
    }

    /// The registered state for `kind`, downcast to its concrete type.
    ///
    /// Fails with `UnknownState` if `kind` is unregistered, or
    /// `StateTypeMismatch` if it was registered with a different type.
    pub fn state_as<T: State<K, C>>(&self, kind: K) -> Result<&T, FsmError> {
        self.registry.downcast(kind)
    }

    pub fn state_as_mut<T: State<K, C>>(&mut self, kind: K) -> Result<&mut T, FsmError> {
        self.registry.downcast_mut(kind)
    }

    /// Whether the state registered for `kind` is the active one.
    pub fn is_active(&self, kind: K) -> Result<bool, FsmError> {
        Ok(self.registry.slot(kind)?.is_active)
    }

    /// Make `kind` the current state, bypassing every guard.
    ///
    /// Does nothing if `kind` is already current. Otherwise the current state
    /// (if any) is exited, `kind` is entered, and listeners are notified.
    pub fn set_state(&mut self, kind: K) -> Result<(), FsmError> {
        self.change_state(kind, ChangeCause::Manual)
            .inspect_err(|err| tracing::warn!(%err, "set_state rejected"))?;
        Ok(())
    }

    /// Register an edge from `from` to `to`, taken when `condition` holds
    /// while `from` is current.
    ///
    /// Conditions receive the machine context and must not trigger
    /// transitions themselves.
    pub fn add_transition<F>(&mut self, from: K, to: K, condition: F) -> Result<(), FsmError>
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.register_transition(Transition::new(Some(from), to, Guard::new(condition)))
    }

    /// Register a wildcard edge to `to`, evaluated before every ordinary
    /// edge and regardless of the current state.
    pub fn add_any_transition<F>(&mut self, to: K, condition: F) -> Result<(), FsmError>
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.register_transition(Transition::new(None, to, Guard::new(condition)))
    }

    /// Register a prebuilt transition, typically from a `TransitionBuilder`.
    ///
    /// Fails with `UnknownState` if an endpoint is unregistered.
    pub fn register_transition(&mut self, transition: Transition<K, C>) -> Result<(), FsmError> {
        let endpoints = match transition.from() {
            Some(from) => self
                .registry
                .require(from)
                .and(self.registry.require(transition.to())),
            None => self.registry.require(transition.to()),
        };
        endpoints.inspect_err(|err| tracing::warn!(%err, "transition rejected"))?;

        tracing::debug!(?transition, "added transition");
        if transition.is_wildcard() {
            self.any_transitions.push(transition);
        } else {
            self.transitions.push(transition);
        }
        Ok(())
    }

    /// Advance the machine by one tick.
    ///
    /// When transitions are enabled, at most one is selected and applied
    /// first; its exit and enter hooks complete before the current state's
    /// `on_run` is called.
    pub fn run(&mut self) {
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "tick");

        if self.transitions_enabled {
            self.apply_transitions();
        }

        if let Some(current) = self.current {
            if let Ok(slot) = self.registry.slot_mut(current) {
                slot.state.on_run(&self.context);
            }
        }
    }

    /// Select and apply a transition without running the current state.
    ///
    /// Ignores the transitions-enabled flag. Returns the realized change, or
    /// `None` if nothing matched or the winner targets the current state.
    pub fn apply_transitions(&mut self) -> Option<StateChange<K>> {
        let selected = transition::select(
            &self.any_transitions,
            &self.transitions,
            self.current,
            &self.context,
        );
        self.last_transition = selected;

        let id = selected?;
        let to = self.transition(id).to();
        if self.current == Some(to) {
            tracing::trace!(state = to.name(), "self-transition suppressed");
            return None;
        }

        // Targets were validated when the transition was registered.
        self.change_state(to, id.into())
            .inspect_err(|err| tracing::warn!(%err, "transition target rejected"))
            .ok()
            .flatten()
    }

    fn change_state(&mut self, to: K, cause: ChangeCause) -> Result<Option<StateChange<K>>, FsmError> {
        self.registry.require(to)?;
        if self.current == Some(to) {
            return Ok(None);
        }

        let from = self.current;
        if let Some(from) = from {
            let slot = self.registry.slot_mut(from)?;
            slot.is_active = false;
            slot.state.on_exit(&self.context);
        }

        self.current = Some(to);
        let slot = self.registry.slot_mut(to)?;
        slot.is_active = true;
        slot.state.on_enter(&self.context);

        tracing::debug!(
            from = from.map_or("<none>", K::name),
            to = to.name(),
            ?cause,
            tick = self.ticks,
            "state changed"
        );

        let change = StateChange { from, to };
        self.history.record(TransitionRecord {
            from,
            to,
            cause,
            tick: self.ticks,
            timestamp: Utc::now(),
        });
        self.listeners.notify(&change);
        Ok(Some(change))
    }

    fn transition(&self, id: TransitionId) -> &Transition<K, C> {
        match id {
            TransitionId::Any(index) => &self.any_transitions[index],
            TransitionId::Ordinary(index) => &self.transitions[index],
        }
    }

    /// Subscribe to realized state changes.
    ///
    /// Listeners run synchronously after the new state's `on_enter`, once per
    /// change, whether it came from `set_state` or a transition.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StateChange<K>) + 'static,
    {
        self.listeners.add(listener)
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn current_state(&self) -> Option<K> {
        self.current
    }

    pub fn has_current_state(&self) -> bool {
        self.current.is_some()
    }

    pub fn states_added(&self) -> bool {
        self.registry.is_populated()
    }

    pub fn phase(&self) -> MachinePhase {
        match (self.registry.is_populated(), self.current) {
            (_, Some(_)) => MachinePhase::Running,
            (true, None) => MachinePhase::Configured,
            (false, None) => MachinePhase::Unconfigured,
        }
    }

    /// The transition matched by the most recent evaluation.
    ///
    /// Reset on every evaluation: `None` when nothing matched. A matched
    /// transition whose target was already current is still reported.
    pub fn last_transition(&self) -> Option<&Transition<K, C>> {
        self.last_transition.map(|id| self.transition(id))
    }

    pub fn last_transition_id(&self) -> Option<TransitionId> {
        self.last_transition
    }

    /// Wildcard transitions, in evaluation order.
    pub fn any_transitions(&self) -> &[Transition<K, C>] {
        &self.any_transitions
    }

    /// Ordinary transitions, in evaluation order.
    pub fn transitions(&self) -> &[Transition<K, C>] {
        &self.transitions
    }

    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    pub fn set_transitions_enabled(&mut self, enabled: bool) {
        self.transitions_enabled = enabled;
    }

    pub fn history(&self) -> &StateHistory<K> {
        &self.history
    }

    /// Number of `run()` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Number of states flagged active; never more than one.
    pub fn active_count(&self) -> usize {
        self.registry.active_count()
    }

    pub fn state_count(&self) -> usize {
        self.registry.len()
    }
}

impl<K: StateKind, C: 'static> fmt::Debug for StateMachine<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("states", &self.registry.len())
            .field("any_transitions", &self.any_transitions.len())
            .field("transitions", &self.transitions.len())
            .field("transitions_enabled", &self.transitions_enabled)
            .field("listeners", &self.listeners.len())
            .field("ticks", &self.ticks)
            .finish()
    }
}
