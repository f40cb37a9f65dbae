//! # Closed State Vocabularies
//!
//! A registry's states are a closed enumeration fixed at compile time. The
//! [`PathState`] trait exposes what the registry needs from such an enum:
//! the declared states in order, a stable label per state, and a dense
//! ordinal used as the bucket index.
//!
//! Implementations are normally generated with [`path_states!`](crate::path_states),
//! which keeps labels, `Display`, and `FromStr` in one declaration.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::error::PathStateError;

/// A closed set of mutually exclusive states a path can occupy.
///
/// ## Contract
///
/// - `all()` is non-empty and lists every variant exactly once, in
///   declaration order.
/// - `ordinal()` is the variant's index in `all()`.
/// - `as_str()` labels are distinct; `from_str(s.as_str()) == Ok(s)`.
pub trait PathState:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + FromStr<Err = PathStateError>
    + Send
    + Sync
    + 'static
{
    /// Every declared state, in declaration order.
    fn all() -> &'static [Self];

    /// The state's label, as used in snapshots and error messages.
    fn as_str(&self) -> &'static str;

    /// Index of this state in [`PathState::all()`].
    fn ordinal(&self) -> usize;

    /// The state at `ordinal`, if declared.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::all().get(ordinal).copied()
    }

    /// Labels of every declared state, in declaration order.
    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(Self::as_str).collect()
    }
}

/// Declare a closed state enum and implement [`PathState`] for it.
///
/// Each variant is paired with its label. The macro derives the usual value
/// traits and implements `Display` (the label) and `FromStr` (label lookup,
/// failing with [`PathStateError::InvalidState`]).
///
/// ```
/// use pathstate_core::{path_states, PathState};
///
/// path_states! {
///     /// Review status of a form field.
///     pub enum FieldStatus {
///         /// Field must be filled in.
///         Required => "required",
///         /// Field was filled in by the user.
///         Touched => "touched",
///     }
/// }
///
/// assert_eq!(FieldStatus::all(), &[FieldStatus::Required, FieldStatus::Touched]);
/// assert_eq!(FieldStatus::Touched.ordinal(), 1);
/// assert_eq!("required".parse::<FieldStatus>().unwrap(), FieldStatus::Required);
/// assert!("dirty".parse::<FieldStatus>().is_err());
/// ```
#[macro_export]
macro_rules! path_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::PathState for $name {
            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn ordinal(&self) -> usize {
                *self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::PathState::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::PathStateError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err($crate::PathStateError::invalid_state(
                        other,
                        <Self as $crate::PathState>::labels(),
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::path_states! {
        /// Test vocabulary.
        enum Phase {
            Draft => "draft",
            Review => "review",
            Live => "live",
        }
    }

    #[test]
    fn all_is_declaration_order() {
        assert_eq!(Phase::all(), &[Phase::Draft, Phase::Review, Phase::Live]);
    }

    #[test]
    fn ordinal_matches_position() {
        for (i, phase) in Phase::all().iter().enumerate() {
            assert_eq!(phase.ordinal(), i);
            assert_eq!(Phase::from_ordinal(i), Some(*phase));
        }
        assert_eq!(Phase::from_ordinal(3), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Phase::Review.to_string(), "review");
        assert_eq!(Phase::labels(), vec!["draft", "review", "live"]);
    }

    #[test]
    fn parse_unknown_label_is_invalid_state() {
        let err = "archived".parse::<Phase>().unwrap_err();
        assert_eq!(
            err,
            PathStateError::InvalidState {
                name: "archived".to_string(),
                vocabulary: "draft, review, live".to_string(),
            }
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Draft".parse::<Phase>().is_err());
        assert_eq!("draft".parse::<Phase>().unwrap(), Phase::Draft);
    }
}
