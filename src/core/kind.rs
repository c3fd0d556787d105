//! Identity tags for state machine states.
//!
//! Every state registered with a machine is identified by a `StateKind`:
//! a small `Copy` enum whose variants map onto a dense index. The machine
//! uses that index to address its registry, so lookups are array accesses
//! rather than runtime type queries.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for the identity tag of a state.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: kinds are compared and passed around by value
/// - `Debug`: kinds show up in diagnostics and logs
/// - `Serialize` + `DeserializeOwned`: kinds appear in serializable history
///
/// # Contract
///
/// `index()` must return a value in `0..COUNT`, distinct for every variant.
/// The `state_enum!` macro generates a conforming implementation.
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateKind;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl StateKind for Door {
///     const COUNT: usize = 2;
///
///     fn index(self) -> usize {
///         self as usize
///     }
///
///     fn name(self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.index(), 1);
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait StateKind:
    Copy + Eq + Debug + Serialize + DeserializeOwned + 'static
{
    /// Number of distinct kinds; the registry is sized to this.
    const COUNT: usize;

    /// Dense index of this kind, in `0..COUNT`.
    fn index(self) -> usize;

    /// Human-readable name for logs and error messages.
    fn name(self) -> &'static str;
}
