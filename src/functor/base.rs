//! Base functor variants: transforms return the raw new value.

use super::Transform;
use crate::error::Result;
use crate::options::FunctorOptions;
use crate::shape::{Reconstruction, classify_forced};
use crate::traverse::{map_entries, map_flat, traverse_deep, traverse_entries};
use crate::value::{Mapping, Value};

/// Wraps a value treated as an opaque scalar.
///
/// The handler receives the whole value, whatever its shape.
///
/// ```rust
/// use phunctor::functor::{Functor, Transform};
/// use phunctor::value::Value;
///
/// let functor = Functor::new(Value::from(1));
/// let result = functor.transform(|value| Value::list([value.clone(), value.clone(), value])).unwrap();
/// assert_eq!(result, Value::list([1, 1, 1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Functor {
    value: Value,
    options: FunctorOptions,
}

impl Functor {
    /// Wraps `value` with default options.
    pub const fn new(value: Value) -> Self {
        Self::with_options(value, FunctorOptions::new())
    }

    /// Wraps `value` with `options`.
    pub const fn with_options(value: Value, options: FunctorOptions) -> Self {
        Self { value, options }
    }

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

impl Transform for Functor {
    type Output = Value;

    fn as_tree(&self) -> bool {
        self.options.as_tree
    }

    fn transform_with<F>(&self, mut handler: F, _deep: bool) -> Result<Value>
    where
        F: FnMut(Value) -> Value,
    {
        Ok(handler(self.value.clone()))
    }
}

/// Wraps an iterable value together with its reconstruction strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctorSequence {
    value: Value,
    reconstruction: Reconstruction,
    options: FunctorOptions,
}

impl FunctorSequence {
    /// Wraps `value` with default options.
    pub const fn new(value: Value) -> Self {
        Self::with_options(value, FunctorOptions::new())
    }

    /// Wraps `value`, deriving the strategy from its kind.
    ///
    /// Values that are not naturally sequences are iterated as described in
    /// [`classify_forced`].
    pub const fn with_options(value: Value, options: FunctorOptions) -> Self {
        let reconstruction = classify_forced(&value);
        Self::with_reconstruction(value, reconstruction, options)
    }

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

impl Transform for FunctorSequence {
    type Output = Value;

    fn as_tree(&self) -> bool {
        self.options.as_tree
    }

    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Value>
    where
        F: FnMut(Value) -> Value,
    {
        if deep {
            traverse_deep(handler, self.value.clone(), self.reconstruction)
        } else {
            map_flat(handler, self.value.clone(), self.reconstruction)
        }
    }
}

/// Wraps a key-value mapping. Transforms touch values and keep keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctorMapping {
    value: Mapping,
    options: FunctorOptions,
}

impl FunctorMapping {
    /// Wraps `value` with default options.
    pub const fn new(value: Mapping) -> Self {
        Self::with_options(value, FunctorOptions::new())
    }

    /// Wraps `value` with `options`.
    pub const fn with_options(value: Mapping, options: FunctorOptions) -> Self {
        Self { value, options }
    }

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

impl Transform for FunctorMapping {
    type Output = Value;

    fn as_tree(&self) -> bool {
        self.options.as_tree
    }

    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Value>
    where
        F: FnMut(Value) -> Value,
    {
        let entries = if deep {
            traverse_entries(handler, self.value.clone())
        } else {
            map_entries(handler, self.value.clone())
        };
        Ok(Value::Map(entries))
    }
}
