//! Shape classification and container reconstruction.
//!
//! Every value falls into exactly one [`ShapeCategory`]. Classification looks
//! at the concrete kind of the value only, never at its elements, so it is
//! constant time and total.
//!
//! Sequence-shaped values carry a [`Reconstruction`]: the rule that turns a
//! list of (possibly transformed) elements back into a container of the same
//! concrete kind. Rebuilding is where element constraints are enforced, so it
//! is the only fallible step of a transform.
//!
//! # Examples
//!
//! ```rust
//! use phunctor::shape::{classify, Reconstruction, ShapeCategory};
//! use phunctor::value::Value;
//!
//! assert_eq!(
//!     classify(&Value::tuple([1, 2])),
//!     ShapeCategory::Sequence(Reconstruction::Tuple)
//! );
//! assert_eq!(classify(&Value::from("text")), ShapeCategory::Scalar);
//! assert_eq!(classify(&Value::map([("a", 1)])), ShapeCategory::Mapping);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{ConstructionError, Result, Violation};
use crate::value::{Value, ValueKind};

/// How a sequence of elements is rebuilt into a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reconstruction {
    /// Rebuild as [`Value::List`].
    List,
    /// Rebuild as [`Value::Tuple`].
    Tuple,
    /// Rebuild as [`Value::Set`]. Elements must be hashable.
    Set,
    /// Rebuild as [`Value::FrozenSet`]. Elements must be hashable.
    FrozenSet,
    /// Rebuild as [`Value::Bytes`]. Elements must be integers in `0..=255`.
    Bytes,
    /// Rebuild the characters of a forced string as a [`Value::List`].
    ///
    /// Only reachable by forcing iteration of a string. The result is a list
    /// whatever the handler returns, and deep traversal never descends into
    /// its elements.
    Chars,
}

impl Reconstruction {
    /// The kind of container this strategy produces for well-formed input.
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::List => ValueKind::List,
            Self::Tuple => ValueKind::Tuple,
            Self::Set => ValueKind::Set,
            Self::FrozenSet => ValueKind::FrozenSet,
            Self::Bytes => ValueKind::Bytes,
            Self::Chars => ValueKind::List,
        }
    }

    /// Whether `element` is a nested container of this strategy's own kind.
    ///
    /// Deep traversal recurses into matching elements and hands everything
    /// else to the handler. Nothing matches [`Reconstruction::Chars`], so a
    /// forced string is always one level deep.
    pub fn matches(self, element: &Value) -> bool {
        self != Self::Chars && element.kind() == self.kind()
    }

    /// Rebuilds a container from `elements`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when a set strategy receives an
    /// unhashable element or the byte strategy receives anything other than
    /// an integer in `0..=255`. The first offending element is reported.
    pub fn rebuild(self, elements: Vec<Value>) -> Result<Value> {
        match self {
            Self::List | Self::Chars => Ok(Value::List(elements)),
            Self::Tuple => Ok(Value::Tuple(elements)),
            Self::Set => self.collect_unique(elements).map(Value::Set),
            Self::FrozenSet => self.collect_unique(elements).map(Value::FrozenSet),
            Self::Bytes => elements
                .into_iter()
                .enumerate()
                .map(|(index, element)| {
                    element
                        .as_int()
                        .and_then(|number| u8::try_from(number).ok())
                        .ok_or_else(|| self.reject(index, element, Violation::NotAByte))
                })
                .collect::<Result<Vec<u8>>>()
                .map(Value::Bytes),
        }
    }

    fn collect_unique(self, elements: Vec<Value>) -> Result<BTreeSet<Value>> {
        let mut unique = BTreeSet::new();
        for (index, element) in elements.into_iter().enumerate() {
            if !element.is_hashable() {
                return Err(self.reject(index, element, Violation::Unhashable));
            }
            unique.insert(element);
        }
        Ok(unique)
    }

    fn reject(self, index: usize, element: Value, violation: Violation) -> ConstructionError {
        tracing::debug!(strategy = %self, index, element = %element, %violation, "element rejected");
        ConstructionError {
            strategy: self,
            index,
            element,
            violation,
        }
    }
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chars => formatter.write_str("chars"),
            other => formatter.write_str(other.kind().name()),
        }
    }
}

/// The structural category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    /// Opaque value, transformed as a whole.
    Scalar,
    /// Iterable value rebuilt with the given strategy.
    Sequence(Reconstruction),
    /// Key-value mapping; values are transformed, keys are kept.
    Mapping,
}

impl ShapeCategory {
    /// The reconstruction strategy of a sequence shape.
    pub const fn reconstruction(self) -> Option<Reconstruction> {
        match self {
            Self::Sequence(strategy) => Some(strategy),
            Self::Scalar | Self::Mapping => None,
        }
    }

    /// Whether this is [`ShapeCategory::Scalar`].
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }
}

/// Classifies a value by its concrete kind.
///
/// Strings are scalars here; see [`classify_forced`] for character-wise
/// iteration.
pub const fn classify(value: &Value) -> ShapeCategory {
    match value {
        Value::List(_) => ShapeCategory::Sequence(Reconstruction::List),
        Value::Tuple(_) => ShapeCategory::Sequence(Reconstruction::Tuple),
        Value::Set(_) => ShapeCategory::Sequence(Reconstruction::Set),
        Value::FrozenSet(_) => ShapeCategory::Sequence(Reconstruction::FrozenSet),
        Value::Bytes(_) => ShapeCategory::Sequence(Reconstruction::Bytes),
        Value::Map(_) => ShapeCategory::Mapping,
        Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
            ShapeCategory::Scalar
        }
    }
}

/// Picks a reconstruction strategy for a value whose iteration is forced.
///
/// Natural sequences keep their own strategy. A string iterates its
/// characters with [`Reconstruction::Chars`]; a mapping iterates its keys and
/// any other scalar iterates as a single element. All three rebuild as lists.
pub const fn classify_forced(value: &Value) -> Reconstruction {
    match classify(value) {
        ShapeCategory::Sequence(strategy) => strategy,
        ShapeCategory::Mapping => Reconstruction::List,
        ShapeCategory::Scalar => match value {
            Value::Str(_) => Reconstruction::Chars,
            _ => Reconstruction::List,
        },
    }
}

/// Splits a value into the elements iteration yields, in order.
///
/// Bytes yield integers, strings yield one-character strings, mappings yield
/// their keys and any other scalar yields itself.
pub fn into_elements(value: Value) -> Vec<Value> {
    match value {
        Value::List(items) | Value::Tuple(items) => items,
        Value::Set(items) | Value::FrozenSet(items) => items.into_iter().collect(),
        Value::Bytes(bytes) => bytes.into_iter().map(Value::from).collect(),
        Value::Str(text) => text.chars().map(|character| Value::Str(character.to_string())).collect(),
        Value::Map(entries) => entries.into_keys().collect(),
        scalar @ (Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_)) => vec![scalar],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("ab"), Reconstruction::Chars)]
    #[case(Value::from(7), Reconstruction::List)]
    #[case(Value::map([("k", 1)]), Reconstruction::List)]
    #[case(Value::bytes(vec![1]), Reconstruction::Bytes)]
    fn forced_classification(#[case] value: Value, #[case] expected: Reconstruction) {
        assert_eq!(classify_forced(&value), expected);
    }

    #[rstest]
    #[case(vec![Value::from("ab"), Value::from("c")])]
    #[case(vec![Value::from("a"), Value::from(1)])]
    #[case(vec![Value::from(1), Value::from(2)])]
    fn chars_always_rebuild_a_list(#[case] elements: Vec<Value>) {
        let rebuilt = Reconstruction::Chars.rebuild(elements.clone()).unwrap();
        assert_eq!(rebuilt, Value::List(elements));
    }

    #[rstest]
    fn chars_never_match() {
        assert!(!Reconstruction::Chars.matches(&Value::from("a")));
        assert!(!Reconstruction::Chars.matches(&Value::list(["a"])));
        assert!(Reconstruction::Tuple.matches(&Value::tuple([1])));
        assert!(!Reconstruction::Tuple.matches(&Value::list([1])));
    }

    #[rstest]
    fn elements_of_mapping_are_keys() {
        let elements = into_elements(Value::map([("a", 1), ("b", 2)]));
        assert_eq!(elements, vec![Value::from("a"), Value::from("b")]);
    }
}
