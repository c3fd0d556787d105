//! Macros for ergonomic state machine construction.

/// Generate a state kind enum and its `StateKind` implementation.
///
/// Variants must not carry explicit discriminants; their declaration order
/// becomes their registry index.
///
/// # Example
///
/// ```
/// use tickstate::core::StateKind;
/// use tickstate::state_enum;
///
/// state_enum! {
///     pub enum Locomotion {
///         Idle,
///         Walking,
///         Airborne,
///     }
/// }
///
/// assert_eq!(Locomotion::COUNT, 3);
/// assert_eq!(Locomotion::Airborne.index(), 2);
/// assert_eq!(Locomotion::Walking.name(), "Walking");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {}
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {}

        impl $crate::core::StateKind for $name {
            const COUNT: usize = 0;

            fn index(self) -> usize {
                match self {}
            }

            fn name(self) -> &'static str {
                match self {}
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateKind for $name {
            const COUNT: usize = <[&str]>::len(&[$(stringify!($variant)),*]);

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
