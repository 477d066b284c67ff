//! Pointed functor variants: transforms return a new wrapper.
//!
//! The new wrapper starts with default options. Construction options only
//! steer transforms on the wrapper they were given to.

use super::{Pointed, Transform};
use crate::error::Result;
use crate::options::FunctorOptions;
use crate::shape::{Reconstruction, classify_forced};
use crate::traverse::{map_entries, map_flat, traverse_deep, traverse_entries};
use crate::value::{Mapping, Value};

/// Pointed wrapper around a value treated as an opaque scalar.
///
/// ```rust
/// use phunctor::functor::{Pointed, PointedFunctor, Transform};
/// use phunctor::options::FunctorOptions;
/// use phunctor::value::Value;
///
/// let wrapper = PointedFunctor::of(Value::from(1), FunctorOptions::new());
/// let next = wrapper.transform(|value| Value::from(value.as_int().unwrap_or(0) + 1)).unwrap();
/// assert_eq!(next.value(), &Value::from(2));
/// assert_eq!(wrapper.value(), &Value::from(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointedFunctor {
    value: Value,
    options: FunctorOptions,
}

impl PointedFunctor {
    /// The wrapped value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// The construction options.
    pub const fn options(&self) -> FunctorOptions {
        self.options
    }

    /// Unwraps the value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl Pointed for PointedFunctor {
    type Input = Value;

    fn of(input: Value, options: FunctorOptions) -> Self {
        Self {
            value: input,
            options,
        }
    }
}

impl Transform for PointedFunctor {
    type Output = Self;

    fn as_tree(&self) -> bool {
        self.options.as_tree
    }

    fn transform_with<F>(&self, mut handler: F, _deep: bool) -> Result<Self>
    where
        F: FnMut(Value) -> Value,
    {
        Ok(Self::of(handler(self.value.clone()), FunctorOptions::new()))
    }
}

/// Pointed wrapper around an iterable value.
///
/// A flat transform lifts its result with [`Pointed::of`], so the strategy of
/// the new wrapper is reclassified from the result. A deep transform keeps
/// the strategy of the wrapper it was called on, because every level of the
/// traversal was rebuilt with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointedFunctorSequence {
    value: Value,
    reconstruction: Reconstruction,
    options: FunctorOptions,
}

impl PointedFunctorSequence {
    /// Wraps `value` with an explicitly pinned strategy.
    pub const fn with_reconstruction(
        value: Value,
        reconstruction: Reconstruction,
        options: FunctorOptions,
    ) -> Self {
        Self {
            value,
            reconstruction,
            options,
        }
    }

    /// The wrapped value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// The strategy used to rebuild transformed containers.
    pub const fn reconstruction(&self) -> Reconstruction {
        self.reconstruction
    }

    /// The construction options.
    pub const fn options(&self) -> FunctorOptions {
        self.options
    }

    /// Unwraps the value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl Pointed for PointedFunctorSequence {
    type Input = Value;

    fn of(input: Value, options: FunctorOptions) -> Self {
        let reconstruction = classify_forced(&input);
        Self::with_reconstruction(input, reconstruction, options)
    }
}

impl Transform for PointedFunctorSequence {
    type Output = Self;

    fn as_tree(&self) -> bool {
        self.options.as_tree
    }

    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Self>
    where
        F: FnMut(Value) -> Value,
    {
        if deep {
            let traversed = traverse_deep(handler, self.value.clone(), self.reconstruction)?;
            Ok(Self::with_reconstruction(
                traversed,
                self.reconstruction,
                FunctorOptions::new(),
            ))
        } else {
            let mapped = map_flat(handler, self.value.clone(), self.reconstruction)?;
            Ok(Self::of(mapped, FunctorOptions::new()))
        }
    }
}

/// Pointed wrapper around a key-value mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointedFunctorMapping {
    value: Mapping,
    options: FunctorOptions,
}

impl PointedFunctorMapping {
    /// The wrapped mapping.
    pub const fn value(&self) -> &Mapping {
        &self.value
    }

    /// The construction options.
    pub const fn options(&self) -> FunctorOptions {
        self.options
    }

    /// Unwraps the mapping.
    pub fn into_value(self) -> Mapping {
        self.value
    }
}

impl Pointed for PointedFunctorMapping {
    type Input = Mapping;

    fn of(input: Mapping, options: FunctorOptions) -> Self {
        Self {
            value: input,
            options,
        }
    }
}

impl Transform for PointedFunctorMapping {
    type Output = Self;

    fn as_tree(&self) -> bool {
        self.options.as_tree
    }

    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Self>
    where
        F: FnMut(Value) -> Value,
    {
        let entries = if deep {
            traverse_entries(handler, self.value.clone())
        } else {
            map_entries(handler, self.value.clone())
        };
        Ok(Self::of(entries, FunctorOptions::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wrapper_has_default_options_on_both_paths() {
        let options = FunctorOptions::new().tree();
        let wrapper = PointedFunctorSequence::of(Value::list([1]), options);
        let flat = wrapper.transform_with(|value| value, false).unwrap();
        let deep = wrapper.transform_with(|value| value, true).unwrap();
        assert_eq!(flat.options(), FunctorOptions::new());
        assert_eq!(deep.options(), FunctorOptions::new());
        assert_eq!(wrapper.options(), options);
    }

    #[test]
    fn test_mapping_chain() {
        let entries = Value::map([("a", 1)]).as_mapping().cloned().unwrap();
        let wrapper = PointedFunctorMapping::of(entries, FunctorOptions::new());
        let result = wrapper
            .transform(|value| Value::from(value.as_int().unwrap_or(0) + 1))
            .and_then(|next| next.transform(|value| Value::from(value.as_int().unwrap_or(0) * 10)))
            .unwrap();
        assert_eq!(Value::Map(result.into_value()), Value::map([("a", 20)]));
    }
}
