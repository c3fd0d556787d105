//! The tick-driven state machine engine.
//!
//! # Key Concepts
//!
//! - **Registry**: one slot per state kind, populated once
//! - **Transitions**: ordered wildcard and ordinary edges with guards
//! - **Tick**: `run()` applies at most one transition, then runs the
//!   current state
//! - **Listeners**: synchronous notification of every realized change
//!
//! Machines are single-threaded: hooks, guards and listeners are plain
//! boxed closures and the machine is neither `Send` nor `Sync`.

mod config;
mod listener;
#[allow(clippy::module_inception)]
mod machine;
mod registry;
mod transition;

pub use config::{MachineConfig, DEFAULT_HISTORY_CAPACITY};
pub use listener::ListenerId;
pub use machine::{MachinePhase, StateMachine};
pub use transition::{Transition, TransitionId};
