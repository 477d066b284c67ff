//! Currying, composition and piping.
//!
//! Two layers are provided:
//!
//! - Typed macros for ordinary Rust functions and closures:
//!   [`compose!`] (right-to-left), [`pipe!`] (left-to-right) and
//!   [`curry2!`] through [`curry4!`].
//! - Dynamic combinators over [`Value`](crate::value::Value) handlers, which
//!   can be built from a runtime list: [`compose`], [`pipe`] and
//!   [`curry_n`] for functions taking a variable number of arguments.
//!
//! Every handler built here can be passed straight to
//! [`Transform::transform`](crate::functor::Transform::transform).
//!
//! # Examples
//!
//! ```
//! use phunctor::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! ```
//!
//! ```
//! use phunctor::compose::{handler, pipe};
//! use phunctor::value::Value;
//!
//! let increment = handler(|value: Value| Value::from(value.as_int().unwrap_or(0) + 1));
//! let square = handler(|value: Value| {
//!     let number = value.as_int().unwrap_or(0);
//!     Value::from(number * number)
//! });
//!
//! let pipeline = pipe([increment, square]);
//! assert_eq!(pipeline(Value::from(2)), Value::from(9));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Duality**: `pipe!(f, g, h) == compose!(h, g, f)`

mod compose_macro;
mod curry;
mod curry_macro;
mod handler;
mod pipe_macro;
mod utils;

pub use curry::{Applied, Curried, Variadic, curry_n};
pub use handler::{Handler, compose, handler, pipe};
pub use utils::{constant, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::pipe;
