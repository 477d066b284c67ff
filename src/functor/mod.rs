//! Functor wrappers over dynamic values.
//!
//! Two families of three variants each, one variant per [`ShapeCategory`]:
//!
//! | Shape | Base | Pointed |
//! |---|---|---|
//! | Scalar | [`Functor`] | [`PointedFunctor`] |
//! | Sequence | [`FunctorSequence`] | [`PointedFunctorSequence`] |
//! | Mapping | [`FunctorMapping`] | [`PointedFunctorMapping`] |
//!
//! Base variants return the raw transformed value. Pointed variants return a
//! new wrapper holding it, so transforms chain; the old wrapper stays valid.
//!
//! All variants implement [`Transform`]. A flat transform applies the handler
//! to each direct element; a deep transform applies it to every leaf of a
//! nested structure (see [`traverse`](crate::traverse)). Scalars ignore the
//! distinction.
//!
//! # Laws
//!
//! The flat path of every variant satisfies the functor laws:
//!
//! ```text
//! fa.transform_with(|x| x, false) == fa.value
//! fa.transform_with(f, false).transform_with(g, false) == fa.transform_with(|x| g(f(x)), false)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use phunctor::functor::{Pointed, PointedFunctorSequence, Transform};
//! use phunctor::options::FunctorOptions;
//! use phunctor::value::Value;
//!
//! let doubled = PointedFunctorSequence::of(Value::list([1, 2, 3]), FunctorOptions::new())
//!     .transform(|value| Value::from(value.as_int().unwrap_or(0) * 2))
//!     .and_then(|wrapper| wrapper.transform(|value| Value::from(value.as_int().unwrap_or(0) + 1)))
//!     .unwrap();
//!
//! assert_eq!(doubled.value(), &Value::list([3, 5, 7]));
//! ```
//!
//! [`ShapeCategory`]: crate::shape::ShapeCategory

mod base;
mod pointed;

pub use base::{Functor, FunctorMapping, FunctorSequence};
pub use pointed::{PointedFunctor, PointedFunctorMapping, PointedFunctorSequence};

use crate::error::Result;
use crate::options::FunctorOptions;
use crate::value::Value;

/// The single capability shared by every functor variant.
pub trait Transform {
    /// What a transform produces: a raw value or a new wrapper.
    type Output;

    /// The construction-time default for `deep`.
    fn as_tree(&self) -> bool;

    /// Applies `handler`, flat or deep as requested.
    ///
    /// The explicit `deep` argument always wins over the construction-time
    /// default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`](crate::error::ConstructionError) when
    /// a transformed container cannot be rebuilt.
    fn transform_with<F>(&self, handler: F, deep: bool) -> Result<Self::Output>
    where
        F: FnMut(Value) -> Value;

    /// Applies `handler` using the construction-time `as_tree` default.
    ///
    /// # Errors
    ///
    /// Same as [`Transform::transform_with`].
    #[inline]
    fn transform<F>(&self, handler: F) -> Result<Self::Output>
    where
        F: FnMut(Value) -> Value,
    {
        self.transform_with(handler, self.as_tree())
    }
}

/// Wrappers that can be built from a raw value ("lift").
pub trait Pointed: Sized {
    /// The raw payload a wrapper is lifted from.
    type Input;

    /// Wraps `input`, classifying it afresh.
    fn of(input: Self::Input, options: FunctorOptions) -> Self;
}

/// Lifts `input` into the pointed variant `P`.
///
/// ```rust
/// use phunctor::functor::{PointedFunctor, lift};
/// use phunctor::options::FunctorOptions;
/// use phunctor::value::Value;
///
/// let wrapper: PointedFunctor = lift(Value::from(1), FunctorOptions::new());
/// assert_eq!(wrapper.value(), &Value::from(1));
/// ```
#[inline]
pub fn lift<P: Pointed>(input: P::Input, options: FunctorOptions) -> P {
    P::of(input, options)
}
