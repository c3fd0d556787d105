//! Core state machine vocabulary.
//!
//! This module contains the building blocks the engine is made of:
//! - State identity via the `StateKind` trait
//! - State behavior via the `State` lifecycle trait
//! - Guard predicates for transition control
//! - Bounded history of realized state changes

mod guard;
mod history;
mod kind;
mod state;

pub use guard::Guard;
pub use history::{ChangeCause, StateChange, StateHistory, TransitionRecord};
pub use kind::StateKind;
pub use state::{AsAny, State};
