//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions that determine whether a transition may
//! fire on the current tick. They receive the machine's read-only context
//! and nothing else, so a guard can never trigger a transition itself.

use std::fmt;

/// Predicate that determines if a transition can fire.
///
/// Guards are evaluated on demand and never cached. They must be cheap and
/// must not mutate anything the machine observes; hosts that want a guard
/// to follow changing host data capture a shared cell or put interior
/// mutability in the context.
///
/// # Example
///
/// ```rust
/// use tickstate::core::Guard;
///
/// struct Sensors {
///     speed: f32,
/// }
///
/// let moving = Guard::new(|s: &Sensors| s.speed > 0.1);
///
/// assert!(moving.check(&Sensors { speed: 2.0 }));
/// assert!(!moving.check(&Sensors { speed: 0.0 }));
/// ```
pub struct Guard<C = ()> {
    predicate: Box<dyn Fn(&C) -> bool>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate over the machine context.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Create a guard that ignores the context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use tickstate::core::Guard;
    ///
    /// let grounded = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&grounded);
    /// let guard: Guard = Guard::from_fn(move || flag.get());
    ///
    /// assert!(!guard.check(&()));
    /// grounded.set(true);
    /// assert!(guard.check(&()));
    /// ```
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
        C: 'static,
    {
        Self::new(move |_: &C| predicate())
    }

    /// A guard that always passes.
    pub fn always() -> Self
    where
        C: 'static,
    {
        Self::new(|_: &C| true)
    }

    /// Evaluate the guard against the context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
