//! Tickstate: a tick-driven finite state machine runtime
//!
//! A `StateMachine` holds a set of mutually exclusive states, evaluates
//! guarded transitions between them and drives the active state's per-tick
//! behavior. It is meant to live inside a host (a game entity, an agent, a
//! workflow step) that calls `run()` once per update.
//!
//! # Core Concepts
//!
//! - **StateKind**: a `Copy` enum tag identifying each state
//! - **State**: behavior with `on_enter` / `on_run` / `on_exit` hooks
//! - **Transitions**: guarded edges, evaluated wildcard-first in
//!   registration order
//! - **Context**: a read-only value lent to every hook and guard
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickstate::core::State;
//! use tickstate::machine::StateMachine;
//! use tickstate::state_enum;
//!
//! state_enum! {
//!     pub enum Player {
//!         Idle,
//!         Running,
//!         Dead,
//!     }
//! }
//!
//! struct Idle;
//! impl State<Player> for Idle {
//!     fn kind(&self) -> Player {
//!         Player::Idle
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Running {
//!     steps: u32,
//! }
//! impl State<Player> for Running {
//!     fn kind(&self) -> Player {
//!         Player::Running
//!     }
//!
//!     fn on_run(&mut self, _context: &()) {
//!         self.steps += 1;
//!     }
//! }
//!
//! struct Dead;
//! impl State<Player> for Dead {
//!     fn kind(&self) -> Player {
//!         Player::Dead
//!     }
//! }
//!
//! let input = Rc::new(Cell::new(false));
//! let health = Rc::new(Cell::new(100));
//!
//! let mut machine: StateMachine<Player> = StateMachine::new();
//! machine
//!     .add_states(vec![Box::new(Idle), Box::new(Running::default()), Box::new(Dead)])
//!     .unwrap();
//!
//! let pressed = Rc::clone(&input);
//! machine
//!     .add_transition(Player::Idle, Player::Running, move |_| pressed.get())
//!     .unwrap();
//! let hp = Rc::clone(&health);
//! machine
//!     .add_any_transition(Player::Dead, move |_| hp.get() <= 0)
//!     .unwrap();
//!
//! machine.set_state(Player::Idle).unwrap();
//!
//! input.set(true);
//! machine.run();
//! machine.run();
//! assert_eq!(machine.current_state(), Some(Player::Running));
//! assert_eq!(machine.state_as::<Running>(Player::Running).unwrap().steps, 2);
//!
//! health.set(0);
//! machine.run();
//! assert_eq!(machine.current_state(), Some(Player::Dead));
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod host;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Guard, State, StateChange, StateKind};
pub use crate::error::FsmError;
pub use crate::host::StateMachineOwner;
pub use crate::machine::{MachineConfig, StateMachine};
