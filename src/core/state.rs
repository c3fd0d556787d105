//! Lifecycle trait for state behavior.
//!
//! A state is a unit of behavior the machine drives while it is active.
//! The three hooks default to no-ops, so implementors override only what
//! they need.

use super::kind::StateKind;
use std::any::Any;

/// Object-safe access to `Any` for registered states.
///
/// Blanket-implemented for every `'static` type, which lets the machine
/// downcast a `dyn State` back to its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behavior of a single state.
///
/// `K` is the kind tag the state registers under and `C` is the read-only
/// context the owning machine lends to every hook.
///
/// For a given activation `on_enter` runs exactly once before any
/// `on_run`, and `on_exit` runs exactly once after the last `on_run`.
/// A state may be activated any number of times over a machine's life.
///
/// # Example
///
/// ```rust
/// use tickstate::core::State;
/// use tickstate::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// struct Red {
///     ticks: u32,
/// }
///
/// impl State<Light> for Red {
///     fn kind(&self) -> Light {
///         Light::Red
///     }
///
///     fn on_enter(&mut self, _context: &()) {
///         self.ticks = 0;
///     }
///
///     fn on_run(&mut self, _context: &()) {
///         self.ticks += 1;
///     }
/// }
/// ```
pub trait State<K: StateKind, C = ()>: AsAny {
    /// The kind this state registers under.
    fn kind(&self) -> K;

    /// Called once when the state becomes active.
    fn on_enter(&mut self, _context: &C) {}

    /// Called once per tick while the state is active.
    fn on_run(&mut self, _context: &C) {}

    /// Called once when the state stops being active.
    fn on_exit(&mut self, _context: &C) {}
}
