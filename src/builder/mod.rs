//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! kinds and wiring up machines with minimal boilerplate.

pub mod machine;
pub mod macros;
pub mod transition;

pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::StateKind;

/// Start an ordinary transition from `from` to `to`, guarded by `condition`.
///
/// # Example
///
/// ```
/// use tickstate::builder::transition;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Step {
///         Start,
///         End,
///     }
/// }
///
/// let edge = transition::<Step, (), _>(Step::Start, Step::End, |_| true)
///     .build()
///     .unwrap();
/// assert_eq!(edge.from(), Some(Step::Start));
/// ```
pub fn transition<K, C, F>(from: K, to: K, condition: F) -> TransitionBuilder<K, C>
where
    K: StateKind,
    F: Fn(&C) -> bool + 'static,
{
    TransitionBuilder::new().from(from).to(to).when(condition)
}

/// Start a wildcard transition to `to`, guarded by `condition`.
///
/// # Example
///
/// ```
/// use tickstate::builder::any_transition;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Health {
///         Alive,
///         Dead,
///     }
/// }
///
/// let edge = any_transition::<Health, i32, _>(Health::Dead, |hp| *hp <= 0)
///     .build()
///     .unwrap();
/// assert!(edge.is_wildcard());
/// assert!(edge.can_fire(Some(Health::Alive), &0));
/// ```
pub fn any_transition<K, C, F>(to: K, condition: F) -> TransitionBuilder<K, C>
where
    K: StateKind,
    F: Fn(&C) -> bool + 'static,
{
    TransitionBuilder::new().from_any().to(to).when(condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestKind {
            Start,
            Middle,
            End,
        }
    }

    #[test]
    fn transition_helper_builds() {
        let edge = transition::<TestKind, (), _>(TestKind::Start, TestKind::Middle, |_| true)
            .build()
            .unwrap();

        assert_eq!(edge.from(), Some(TestKind::Start));
        assert_eq!(edge.to(), TestKind::Middle);
        assert!(edge.can_fire(Some(TestKind::Start), &()));
    }

    #[test]
    fn guarded_transition_respects_condition() {
        let edge = transition(TestKind::Start, TestKind::End, |ready: &bool| *ready)
            .build()
            .unwrap();

        assert!(edge.can_fire(Some(TestKind::Start), &true));
        assert!(!edge.can_fire(Some(TestKind::Start), &false));
        assert!(!edge.can_fire(Some(TestKind::Middle), &true));
    }

    #[test]
    fn any_transition_helper_builds_wildcard() {
        let edge = any_transition::<TestKind, (), _>(TestKind::End, |_| true)
            .build()
            .unwrap();

        assert!(edge.is_wildcard());
        assert_eq!(edge.to(), TestKind::End);
    }
}
