//! Runtime composition of [`Value`] handlers.
//!
//! The macros in this module's parent need every function at compile time.
//! These combinators take any number of shared handlers, e.g. a pipeline
//! assembled from configuration.

use std::sync::Arc;

use crate::value::Value;

/// A shared single-argument transformation over values.
pub type Handler = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Wraps a closure as a [`Handler`].
pub fn handler<F>(function: F) -> Handler
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    Arc::new(function)
}

/// Composes `handlers` right to left. An empty list yields the identity.
///
/// ```
/// use phunctor::compose::{compose, handler};
/// use phunctor::value::Value;
///
/// let wrap = handler(|value: Value| Value::list([value]));
/// let describe = handler(|value: Value| Value::from(value.kind().name()));
///
/// let composed = compose([wrap, describe]);
/// assert_eq!(composed(Value::from(1)), Value::list(["int"]));
/// ```
pub fn compose<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    let handlers: Vec<Handler> = handlers.into_iter().collect();
    Arc::new(move |value: Value| {
        handlers
            .iter()
            .rev()
            .fold(value, |accumulated, next| next(accumulated))
    })
}

/// Composes `handlers` left to right. An empty list yields the identity.
pub fn pipe<I>(handlers: I) -> Handler
where
    I: IntoIterator<Item = Handler>,
{
    let handlers: Vec<Handler> = handlers.into_iter().collect();
    Arc::new(move |value: Value| {
        handlers
            .iter()
            .fold(value, |accumulated, next| next(accumulated))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(amount: i64) -> Handler {
        handler(move |value| Value::from(value.as_int().unwrap_or(0) + amount))
    }

    fn times(factor: i64) -> Handler {
        handler(move |value| Value::from(value.as_int().unwrap_or(0) * factor))
    }

    #[test]
    fn test_empty_is_identity() {
        assert_eq!(compose(Vec::new())(Value::from("x")), Value::from("x"));
        assert_eq!(pipe(Vec::new())(Value::from("x")), Value::from("x"));
    }

    #[test]
    fn test_pipe_is_reversed_compose() {
        let piped = pipe([add(1), times(3)]);
        let composed = compose([times(3), add(1)]);
        assert_eq!(piped(Value::from(2)), Value::from(9));
        assert_eq!(composed(Value::from(2)), Value::from(9));
    }
}
