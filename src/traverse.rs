//! Flat and deep traversal of sequences and mappings.
//!
//! The flat forms apply a handler to every direct element. The deep forms
//! descend into nested containers and apply the handler to leaves only.
//!
//! For sequences, the kind used to recognise a nested container is fixed to
//! the root's strategy at every depth: a list inside a tuple is a leaf when
//! traversing the tuple. For mappings, any nested mapping is descended into.
//!
//! Recursion depth equals the nesting depth of the input. Values are owned
//! trees, so a cycle cannot be expressed and traversal always terminates.
//!
//! # Examples
//!
//! ```rust
//! use phunctor::shape::Reconstruction;
//! use phunctor::traverse::{map_flat, traverse_deep};
//! use phunctor::value::Value;
//!
//! let nested = Value::list([Value::from(1), Value::list([2, 3])]);
//! let triple = |value: Value| Value::list([value.clone(), value.clone(), value]);
//!
//! let deep = traverse_deep(triple, nested.clone(), Reconstruction::List).unwrap();
//! assert_eq!(deep.to_string(), "[[1, 1, 1], [[2, 2, 2], [3, 3, 3]]]");
//!
//! let flat = map_flat(triple, nested, Reconstruction::List).unwrap();
//! assert_eq!(flat.to_string(), "[[1, 1, 1], [[2, 3], [2, 3], [2, 3]]]");
//! ```

use crate::error::Result;
use crate::shape::{Reconstruction, into_elements};
use crate::value::{Mapping, Value};

/// Applies `handler` to each direct element of `root` and rebuilds with `strategy`.
///
/// # Errors
///
/// Returns a [`ConstructionError`](crate::error::ConstructionError) when the
/// handler's results violate the strategy's element constraints.
pub fn map_flat<F>(mut handler: F, root: Value, strategy: Reconstruction) -> Result<Value>
where
    F: FnMut(Value) -> Value,
{
    let mapped = into_elements(root).into_iter().map(&mut handler).collect();
    strategy.rebuild(mapped)
}

/// Applies `handler` to every leaf of `root`, descending into elements that
/// `strategy` matches, and rebuilds every level with `strategy`.
///
/// # Errors
///
/// Returns the first [`ConstructionError`](crate::error::ConstructionError)
/// raised while rebuilding any level.
pub fn traverse_deep<F>(mut handler: F, root: Value, strategy: Reconstruction) -> Result<Value>
where
    F: FnMut(Value) -> Value,
{
    descend(&mut handler, root, strategy, 0)
}

fn descend<F>(handler: &mut F, node: Value, strategy: Reconstruction, depth: usize) -> Result<Value>
where
    F: FnMut(Value) -> Value,
{
    let mut transformed = Vec::new();
    for element in into_elements(node) {
        if strategy.matches(&element) {
            tracing::trace!(depth = depth + 1, %strategy, "descending into nested container");
            transformed.push(descend(handler, element, strategy, depth + 1)?);
        } else {
            transformed.push(handler(element));
        }
    }
    strategy.rebuild(transformed)
}

/// Applies `handler` to every value of `root`, keeping keys unchanged.
pub fn map_entries<F>(mut handler: F, root: Mapping) -> Mapping
where
    F: FnMut(Value) -> Value,
{
    root.into_iter()
        .map(|(key, value)| (key, handler(value)))
        .collect()
}

/// Applies `handler` to every non-mapping value of `root`, descending into
/// nested mappings.
pub fn traverse_entries<F>(mut handler: F, root: Mapping) -> Mapping
where
    F: FnMut(Value) -> Value,
{
    descend_entries(&mut handler, root, 0)
}

fn descend_entries<F>(handler: &mut F, node: Mapping, depth: usize) -> Mapping
where
    F: FnMut(Value) -> Value,
{
    node.into_iter()
        .map(|(key, value)| match value {
            Value::Map(nested) => {
                tracing::trace!(depth = depth + 1, key = %key, "descending into nested mapping");
                let descended = descend_entries(handler, nested, depth + 1);
                (key, Value::Map(descended))
            }
            leaf => (key, handler(leaf)),
        })
        .collect()
}
