//! # phunctor
//!
//! Functor wrappers that dispatch on the runtime shape of a value, with flat
//! and deep (tree) transforms that rebuild containers of the same kind.
//!
//! ## Overview
//!
//! - **Values**: a closed [`Value`](value::Value) enum of scalars, sequences,
//!   unique collections, byte sequences and mappings
//! - **Shapes**: [`classify`](shape::classify) sorts a value into scalar,
//!   sequence or mapping and picks a [`Reconstruction`](shape::Reconstruction)
//! - **Traversal**: [`map_flat`](traverse::map_flat) and
//!   [`traverse_deep`](traverse::traverse_deep), plus their mapping forms
//! - **Functors**: base variants return raw values, pointed variants return
//!   new wrappers for chaining
//! - **Selection**: [`select`](selector::select) and
//!   [`select_pointed`](selector::select_pointed) build the right variant
//! - **Registry**: short string ids mapped to builders
//! - **Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`, and dynamic
//!   handler combinators
//!
//! ## Feature Flags
//!
//! - `compose`: currying, composition and piping (default)
//! - `registry`: string-keyed builder registry (default)
//! - `serde`: `Serialize`/`Deserialize` for values, options and strategies
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use phunctor::prelude::*;
//!
//! let nested = Value::list([Value::from(1), Value::list([2, 3])]);
//! let triple = |value: Value| Value::list([value.clone(), value.clone(), value]);
//!
//! let flat = select(nested.clone(), FunctorOptions::new()).transform(triple).unwrap();
//! assert_eq!(flat.to_string(), "[[1, 1, 1], [[2, 3], [2, 3], [2, 3]]]");
//!
//! let deep = select(nested, FunctorOptions::new().tree()).transform(triple).unwrap();
//! assert_eq!(deep.to_string(), "[[1, 1, 1], [[2, 2, 2], [3, 3, 3]]]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use phunctor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConstructionError, RegistryError};
    pub use crate::functor::*;
    pub use crate::options::FunctorOptions;
    pub use crate::selector::*;
    pub use crate::shape::{Reconstruction, ShapeCategory, classify, classify_forced};
    pub use crate::traverse::*;
    pub use crate::value::{Mapping, Value, ValueKind};

    #[cfg(feature = "registry")]
    pub use crate::registry::{Built, Registry};

    #[cfg(feature = "compose")]
    pub use crate::compose::{Applied, Curried, Handler, constant, curry_n, handler, identity};
}

pub mod error;
pub mod functor;
pub mod options;
pub mod selector;
pub mod shape;
pub mod traverse;
pub mod value;

#[cfg(feature = "registry")]
pub mod registry;

#[cfg(feature = "compose")]
pub mod compose;
