//! Variant selection from a raw value and construction options.
//!
//! Selection is total: every value maps to exactly one variant.
//!
//! Decision order, first match wins:
//!
//! 1. `as_base`: scalar variant, whatever the shape.
//! 2. `as_mapping` on a mapping: mapping variant.
//! 3. `as_iterable`: sequence variant, strategy from
//!    [`classify_forced`](crate::shape::classify_forced).
//! 4. Otherwise the natural [`classify`](crate::shape::classify) result.
//!
//! `as_tree` is passed through to whichever variant is built.
//!
//! # Examples
//!
//! ```rust
//! use phunctor::options::FunctorOptions;
//! use phunctor::selector::{select, Variant};
//! use phunctor::value::Value;
//!
//! assert_eq!(select(Value::list([1]), FunctorOptions::new()).variant(), Variant::Sequence);
//! assert_eq!(select(Value::list([1]), FunctorOptions::new().base()).variant(), Variant::Scalar);
//! assert_eq!(select(Value::from("ab"), FunctorOptions::new().iterable()).variant(), Variant::Sequence);
//! ```

use std::fmt;

use crate::error::Result;
use crate::functor::{
    Functor, FunctorMapping, FunctorSequence, Pointed, PointedFunctor, PointedFunctorMapping,
    PointedFunctorSequence, Transform,
};
use crate::options::FunctorOptions;
use crate::shape::{ShapeCategory, classify, classify_forced};
use crate::value::Value;

/// Which of the three variants a wrapper is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Opaque scalar variant.
    Scalar,
    /// Iterable variant.
    Sequence,
    /// Mapping variant.
    Mapping,
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        formatter.write_str(name)
    }
}

/// A selected base functor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyFunctor {
    /// See [`Functor`].
    Scalar(Functor),
    /// See [`FunctorSequence`].
    Sequence(FunctorSequence),
    /// See [`FunctorMapping`].
    Mapping(FunctorMapping),
}

impl AnyFunctor {
    /// The selected variant.
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Scalar(_) => Variant::Scalar,
            Self::Sequence(_) => Variant::Sequence,
            Self::Mapping(_) => Variant::Mapping,
        }
    }

    /// The construction options.
    pub const fn options(&self) -> FunctorOptions {
        match self {
            Self::Scalar(functor) => functor.options(),
            Self::Sequence(functor) => functor.options(),
            Self::Mapping(functor) => functor.options(),
        }
    }

    /// A copy of the wrapped value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Scalar(functor) => functor.value().clone(),
            Self::Sequence(functor) => functor.value().clone(),
            Self::Mapping(functor) => Value::Map(functor.value().clone()),
        }
    }

    /// Unwraps the value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Scalar(functor) => functor.into_value(),
            Self::Sequence(functor) => functor.into_value(),
            Self::Mapping(functor) => Value::Map(functor.into_value()),
        }
    }
}

impl Transform for AnyFunctor {
    type Output = Value;

    fn as_tree(&self) -> bool {
        self.options().as_tree
    }

    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Value>
    where
        F: FnMut(Value) -> Value,
    {
        match self {
            Self::Scalar(functor) => functor.transform_with(handler, deep),
            Self::Sequence(functor) => functor.transform_with(handler, deep),
            Self::Mapping(functor) => functor.transform_with(handler, deep),
        }
    }
}

/// A selected pointed functor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyPointedFunctor {
    /// See [`PointedFunctor`].
    Scalar(PointedFunctor),
    /// See [`PointedFunctorSequence`].
    Sequence(PointedFunctorSequence),
    /// See [`PointedFunctorMapping`].
    Mapping(PointedFunctorMapping),
}

impl AnyPointedFunctor {
    /// The selected variant.
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Scalar(_) => Variant::Scalar,
            Self::Sequence(_) => Variant::Sequence,
            Self::Mapping(_) => Variant::Mapping,
        }
    }

    /// The construction options.
    pub const fn options(&self) -> FunctorOptions {
        match self {
            Self::Scalar(functor) => functor.options(),
            Self::Sequence(functor) => functor.options(),
            Self::Mapping(functor) => functor.options(),
        }
    }

    /// A copy of the wrapped value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Scalar(functor) => functor.value().clone(),
            Self::Sequence(functor) => functor.value().clone(),
            Self::Mapping(functor) => Value::Map(functor.value().clone()),
        }
    }

    /// Unwraps the value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Scalar(functor) => functor.into_value(),
            Self::Sequence(functor) => functor.into_value(),
            Self::Mapping(functor) => Value::Map(functor.into_value()),
        }
    }
}

impl Transform for AnyPointedFunctor {
    type Output = Self;

    fn as_tree(&self) -> bool {
        self.options().as_tree
    }

    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Self>
    where
        F: FnMut(Value) -> Value,
    {
        match self {
            Self::Scalar(functor) => functor.transform_with(handler, deep).map(Self::Scalar),
            Self::Sequence(functor) => functor.transform_with(handler, deep).map(Self::Sequence),
            Self::Mapping(functor) => functor.transform_with(handler, deep).map(Self::Mapping),
        }
    }
}

fn route(value: &Value, options: FunctorOptions) -> ShapeCategory {
    if options.as_base {
        ShapeCategory::Scalar
    } else if options.as_mapping && matches!(value, Value::Map(_)) {
        ShapeCategory::Mapping
    } else if options.as_iterable {
        ShapeCategory::Sequence(classify_forced(value))
    } else {
        classify(value)
    }
}

/// Selects and builds the base variant for `value`.
pub fn select(value: Value, options: FunctorOptions) -> AnyFunctor {
    let shape = route(&value, options);
    let kind = value.kind();
    let selected = match (shape, value) {
        (ShapeCategory::Sequence(strategy), value) => AnyFunctor::Sequence(
            FunctorSequence::with_reconstruction(value, strategy, options),
        ),
        (ShapeCategory::Mapping, Value::Map(entries)) => {
            AnyFunctor::Mapping(FunctorMapping::with_options(entries, options))
        }
        (_, value) => AnyFunctor::Scalar(Functor::with_options(value, options)),
    };
    tracing::debug!(%kind, variant = %selected.variant(), ?options, "selected base functor");
    selected
}

/// Selects and lifts the pointed variant for `value`.
pub fn select_pointed(value: Value, options: FunctorOptions) -> AnyPointedFunctor {
    let shape = route(&value, options);
    let kind = value.kind();
    let selected = match (shape, value) {
        (ShapeCategory::Sequence(strategy), value) => AnyPointedFunctor::Sequence(
            PointedFunctorSequence::with_reconstruction(value, strategy, options),
        ),
        (ShapeCategory::Mapping, Value::Map(entries)) => {
            AnyPointedFunctor::Mapping(PointedFunctorMapping::of(entries, options))
        }
        (_, value) => AnyPointedFunctor::Scalar(PointedFunctor::of(value, options)),
    };
    tracing::debug!(%kind, variant = %selected.variant(), ?options, "selected pointed functor");
    selected
}
