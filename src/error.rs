//! Error types for container reconstruction and builder lookup.
//!
//! Classification, flat maps and lifting never fail. The only failure a
//! transform can surface is a [`ConstructionError`]: an element produced by
//! the handler violates the constraints of the reconstruction strategy.
//! Unknown registry ids surface as [`RegistryError::NotFound`].

use std::fmt;

use thiserror::Error;

use crate::shape::Reconstruction;
use crate::value::Value;

/// The constraint an element broke while a container was being rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A unique collection received a list, set, mapping or byte sequence.
    Unhashable,
    /// A byte sequence received something other than an integer in `0..=255`.
    NotAByte,
}

impl fmt::Display for Violation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhashable => formatter.write_str("is not hashable"),
            Self::NotAByte => formatter.write_str("is not an integer in 0..=255"),
        }
    }
}

/// Raised when transformed elements cannot be rebuilt into the original kind.
///
/// # Examples
///
/// ```rust
/// use phunctor::error::Violation;
/// use phunctor::shape::Reconstruction;
/// use phunctor::value::Value;
///
/// let error = Reconstruction::Bytes
///     .rebuild(vec![Value::from(65), Value::from(300)])
///     .unwrap_err();
/// assert_eq!(error.index, 1);
/// assert_eq!(error.violation, Violation::NotAByte);
/// assert_eq!(
///     error.to_string(),
///     "cannot rebuild bytearray: element 1 (300) is not an integer in 0..=255"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot rebuild {strategy}: element {index} ({element}) {violation}")]
pub struct ConstructionError {
    /// The strategy that rejected the element.
    pub strategy: Reconstruction,
    /// Position of the element in the transformed sequence.
    pub index: usize,
    /// The rejected element.
    pub element: Value,
    /// Which constraint was broken.
    pub violation: Violation,
}

/// Errors raised by the builder registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No builder is registered under the requested id.
    #[error("no builder registered under {key:?}")]
    NotFound {
        /// The id that was looked up.
        key: String,
    },
}

/// Result alias for fallible transforms.
pub type Result<T> = std::result::Result<T, ConstructionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_display_unhashable() {
        let error = ConstructionError {
            strategy: Reconstruction::FrozenSet,
            index: 0,
            element: Value::list([1, 2]),
            violation: Violation::Unhashable,
        };
        assert_eq!(
            error.to_string(),
            "cannot rebuild frozenset: element 0 ([1, 2]) is not hashable"
        );
    }

    #[test]
    fn test_registry_error_display_names_key() {
        let error = RegistryError::NotFound {
            key: "g{".to_string(),
        };
        assert_eq!(error.to_string(), "no builder registered under \"g{\"");
    }
}
