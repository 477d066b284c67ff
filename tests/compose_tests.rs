//! Tests for composition utilities.
//!
//! Tests cover:
//! - `identity` and `constant`
//! - The `compose!` macro over typed functions and value handlers
//! - Dynamic `compose` over shared handlers
//! - Composed handlers driving functor transforms

#![cfg(feature = "compose")]
#![forbid(unsafe_code)]

use phunctor::compose;
use phunctor::compose::{Handler, constant, handler, identity};
use phunctor::functor::{FunctorSequence, Transform};
use phunctor::value::Value;
use proptest::prelude::*;
use rstest::rstest;

fn add_one(x: i64) -> i64 {
    x + 1
}

fn double(x: i64) -> i64 {
    x * 2
}

fn square(x: i64) -> i64 {
    x * x
}

fn increment() -> Handler {
    handler(|value: Value| Value::from(value.as_int().unwrap_or(0) + 1))
}

fn wrap() -> Handler {
    handler(|value: Value| Value::list([value]))
}

// =============================================================================
// identity / constant
// =============================================================================

#[rstest]
fn identity_returns_value_unchanged() {
    let nested = Value::list([Value::from(1), Value::map([("a", 2)])]);
    assert_eq!(identity(nested.clone()), nested);
}

#[rstest]
fn constant_ignores_every_input() {
    let always = constant::<_, Value>(Value::from("x"));
    assert_eq!(always(Value::None), Value::from("x"));
    assert_eq!(always(Value::list([1])), Value::from("x"));
}

// =============================================================================
// compose! macro
// =============================================================================

#[rstest]
fn compose_macro_runs_right_to_left() {
    assert_eq!(compose!(add_one, double)(5), 11);
    assert_eq!(compose!(double, add_one)(5), 12);
    assert_eq!(compose!(add_one, double, square)(3), 19);
}

#[rstest]
fn compose_macro_accepts_trailing_comma() {
    assert_eq!(compose!(add_one, double,)(1), 3);
}

#[rstest]
fn compose_macro_changes_types_along_the_chain() {
    let describe = compose!(|length: usize| length * 2, |text: String| text.len());
    assert_eq!(describe("abc".to_owned()), 6);
}

// =============================================================================
// Dynamic compose
// =============================================================================

#[rstest]
fn dynamic_compose_runs_right_to_left() {
    let composed = phunctor::compose::compose([wrap(), increment()]);
    assert_eq!(composed(Value::from(1)), Value::list([2]));
}

#[rstest]
fn dynamic_compose_of_nothing_is_identity() {
    let composed = phunctor::compose::compose(Vec::new());
    assert_eq!(composed(Value::from("same")), Value::from("same"));
}

#[rstest]
fn composed_handler_drives_transform() {
    let functor = FunctorSequence::new(Value::list([1, 2]));
    let composed = phunctor::compose::compose([wrap(), increment()]);
    let result = functor.transform(|value| composed(value)).unwrap();
    assert_eq!(result, Value::list([Value::list([2]), Value::list([3])]));
}

#[rstest]
fn handlers_are_shareable_across_threads() {
    let composed = phunctor::compose::compose([increment(), increment()]);
    let worker = std::thread::spawn({
        let composed = composed.clone();
        move || composed(Value::from(1))
    });
    assert_eq!(worker.join().unwrap(), Value::from(3));
    assert_eq!(composed(Value::from(0)), Value::from(2));
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_associative(x in -1000i64..1000) {
        let left = compose!(add_one, compose!(double, square));
        let right = compose!(compose!(add_one, double), square);
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_compose_identity(x in -1000i64..1000) {
        prop_assert_eq!(compose!(identity, double)(x), double(x));
        prop_assert_eq!(compose!(double, identity)(x), double(x));
    }

    #[test]
    fn prop_dynamic_matches_macro(x in -1000i64..1000) {
        let dynamic = phunctor::compose::compose([wrap(), increment()]);
        let typed = compose!(|value: Value| Value::list([value]), |value: Value| Value::from(value.as_int().unwrap_or(0) + 1));
        prop_assert_eq!(dynamic(Value::from(x)), typed(Value::from(x)));
    }
}
