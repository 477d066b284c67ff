//! Currying of variadic functions over [`Value`] arguments.
//!
//! [`curry_n`] fixes the number of arguments a function waits for. Arguments
//! may arrive in any grouping; the function runs once enough have been
//! collected.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A shared function over a list of arguments.
pub type Variadic = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// A function waiting for more arguments.
#[derive(Clone)]
pub struct Curried {
    function: Variadic,
    arity: usize,
    collected: Vec<Value>,
}

/// The outcome of [`Curried::apply`].
#[derive(Clone, Debug)]
pub enum Applied {
    /// Not enough arguments yet.
    Pending(Curried),
    /// The function ran and produced this value.
    Done(Value),
}

impl Applied {
    /// The produced value, if the function ran.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Done(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// The pending application, if the function has not run.
    pub fn into_pending(self) -> Option<Curried> {
        match self {
            Self::Pending(curried) => Some(curried),
            Self::Done(_) => None,
        }
    }
}

/// Curries `function` so that it runs once `arity` arguments are collected.
///
/// Every argument collected so far is passed, so an application that
/// overshoots the arity hands the extra arguments to the function as well.
///
/// # Examples
///
/// ```
/// use phunctor::compose::curry_n;
/// use phunctor::value::Value;
///
/// let sum = curry_n(
///     |arguments: Vec<Value>| Value::from(arguments.iter().filter_map(Value::as_int).sum::<i64>()),
///     3,
/// );
///
/// let one = sum.apply([Value::from(1)]).into_pending().unwrap();
/// assert_eq!(one.remaining(), 2);
/// assert_eq!(one.apply([Value::from(2), Value::from(3)]).into_value(), Some(Value::from(6)));
/// assert_eq!(one.apply([Value::from(5), Value::from(5)]).into_value(), Some(Value::from(11)));
/// ```
pub fn curry_n<F>(function: F, arity: usize) -> Curried
where
    F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
{
    Curried {
        function: Arc::new(function),
        arity,
        collected: Vec::new(),
    }
}

impl Curried {
    /// Adds `arguments` to those already collected.
    ///
    /// Runs the function when at least `arity` arguments are present and
    /// returns [`Applied::Done`]; otherwise returns a new pending
    /// application. `self` is left untouched and can be applied again.
    pub fn apply<I>(&self, arguments: I) -> Applied
    where
        I: IntoIterator<Item = Value>,
    {
        let mut collected = self.collected.clone();
        collected.extend(arguments);
        if collected.len() >= self.arity {
            tracing::trace!(arity = self.arity, received = collected.len(), "invoking curried function");
            Applied::Done((self.function)(collected))
        } else {
            Applied::Pending(Self {
                function: Arc::clone(&self.function),
                arity: self.arity,
                collected,
            })
        }
    }

    /// The number of arguments the function waits for.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The arguments collected so far.
    pub fn collected(&self) -> &[Value] {
        &self.collected
    }

    /// How many more arguments are needed.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.collected.len())
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("collected", &self.collected)
            .finish_non_exhaustive()
    }
}
