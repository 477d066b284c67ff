//! String-keyed registry of functor builders.
//!
//! Each entry pairs a [`Builder`] with fixed [`FunctorOptions`]. Building
//! through the registry passes the value and the entry's options to the
//! builder. [`Registry::standard`] holds the short ids of both families:
//!
//! | Id | Family | Options |
//! |---|---|---|
//! | `f.` / `pf.` | base / pointed | `as_base` |
//! | `f:` / `pf:` | base / pointed | none |
//! | `f:.` / `pf:.` | base / pointed | `as_iterable` |
//! | `f:{` / `pf:{` | base / pointed | `as_tree` |
//! | `f` / `pf` | base / pointed | none |
//! | `f{` / `pf{` | base / pointed | `as_tree` |
//!
//! # Examples
//!
//! ```rust
//! use phunctor::functor::Transform;
//! use phunctor::registry::Registry;
//! use phunctor::value::Value;
//!
//! let registry = Registry::standard();
//! let built = registry.build("f{", Value::list([Value::from(1), Value::list([2])])).unwrap();
//! let functor = built.into_base().unwrap();
//! let result = functor.transform(|value| Value::from(value.as_int().unwrap_or(0) + 1)).unwrap();
//! assert_eq!(result, Value::list([Value::from(2), Value::list([3])]));
//!
//! assert!(registry.build("g", Value::None).is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::options::FunctorOptions;
use crate::selector::{AnyFunctor, AnyPointedFunctor, Variant, select, select_pointed};
use crate::value::Value;

/// What a builder produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Built {
    /// A base functor.
    Base(AnyFunctor),
    /// A pointed functor.
    Pointed(AnyPointedFunctor),
}

impl Built {
    /// The variant of the built wrapper.
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Base(functor) => functor.variant(),
            Self::Pointed(functor) => functor.variant(),
        }
    }

    /// Whether the built wrapper belongs to the pointed family.
    pub const fn is_pointed(&self) -> bool {
        matches!(self, Self::Pointed(_))
    }

    /// The base functor, if one was built.
    pub fn into_base(self) -> Option<AnyFunctor> {
        match self {
            Self::Base(functor) => Some(functor),
            Self::Pointed(_) => None,
        }
    }

    /// The pointed functor, if one was built.
    pub fn into_pointed(self) -> Option<AnyPointedFunctor> {
        match self {
            Self::Pointed(functor) => Some(functor),
            Self::Base(_) => None,
        }
    }
}

/// A shared builder: value and options in, wrapper out.
pub type Builder = Arc<dyn Fn(Value, FunctorOptions) -> Built + Send + Sync>;

/// Builds a base functor through [`select`].
pub fn build_base(value: Value, options: FunctorOptions) -> Built {
    Built::Base(select(value, options))
}

/// Builds a pointed functor through [`select_pointed`].
pub fn build_pointed(value: Value, options: FunctorOptions) -> Built {
    Built::Pointed(select_pointed(value, options))
}

struct Entry {
    builder: Builder,
    options: FunctorOptions,
}

/// Registry of builders keyed by short string ids.
#[derive(Default)]
pub struct Registry {
    entries: FxHashMap<String, Entry>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard ids of both families.
    pub fn standard() -> Self {
        let plain = FunctorOptions::new();
        let families: [(&str, fn(Value, FunctorOptions) -> Built); 2] =
            [("f", build_base), ("pf", build_pointed)];
        let mut registry = Self::new();
        for (prefix, builder) in families {
            registry.register(format!("{prefix}."), builder, plain.base());
            registry.register(format!("{prefix}:"), builder, plain);
            registry.register(format!("{prefix}:."), builder, plain.iterable());
            registry.register(format!("{prefix}:{{"), builder, plain.tree());
            registry.register(prefix, builder, plain);
            registry.register(format!("{prefix}{{"), builder, plain.tree());
        }
        registry
    }

    /// Registers `builder` under `id`, replacing any previous entry.
    pub fn register<B>(&mut self, id: impl Into<String>, builder: B, options: FunctorOptions)
    where
        B: Fn(Value, FunctorOptions) -> Built + Send + Sync + 'static,
    {
        let id = id.into();
        tracing::debug!(%id, ?options, "registering builder");
        self.entries.insert(
            id,
            Entry {
                builder: Arc::new(builder),
                options,
            },
        );
    }

    /// Whether a builder is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// The fixed options registered under `id`.
    pub fn options(&self, id: &str) -> Option<FunctorOptions> {
        self.entries.get(id).map(|entry| entry.options)
    }

    /// The registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ids are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds `value` with the builder registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] carrying `id` when nothing is
    /// registered under it.
    pub fn build(&self, id: &str, value: Value) -> Result<Built, RegistryError> {
        let Some(entry) = self.entries.get(id) else {
            tracing::debug!(%id, "no builder registered");
            return Err(RegistryError::NotFound { key: id.to_owned() });
        };
        tracing::debug!(%id, kind = %value.kind(), "building through registry");
        Ok((entry.builder)(value, entry.options))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("ids", &self.ids())
            .finish()
    }
}
