//! Tests for currying.
//!
//! Tests cover:
//! - The `curry2!` through `curry4!` macros
//! - Reuse of partial applications
//! - Variadic currying with `curry_n`

#![cfg(feature = "compose")]
#![forbid(unsafe_code)]

use phunctor::compose::{Applied, curry_n};
use phunctor::value::Value;
use phunctor::{curry2, curry3, curry4};
use rstest::rstest;

fn sum_all(arguments: Vec<Value>) -> Value {
    Value::from(arguments.iter().filter_map(Value::as_int).sum::<i64>())
}

// =============================================================================
// Macros
// =============================================================================

#[rstest]
fn curry2_applies_in_order() {
    let subtract = |a: i64, b: i64| a - b;
    assert_eq!(curry2!(subtract)(10)(3), 7);
}

#[rstest]
fn curry2_partial_is_reusable() {
    let concat = |a: String, b: String| format!("{a}{b}");
    let greet = curry2!(concat)("hello ".to_owned());
    assert_eq!(greet("world".to_owned()), "hello world");
    assert_eq!(greet("there".to_owned()), "hello there");
}

#[rstest]
fn curry3_over_values() {
    let build = |a: Value, b: Value, c: Value| Value::tuple([a, b, c]);
    let first = curry3!(build)(Value::from(1));
    let second = first(Value::from("two"));
    assert_eq!(
        second(Value::None),
        Value::tuple([Value::from(1), Value::from("two"), Value::None])
    );
    assert_eq!(
        second(Value::from(3)),
        Value::tuple([Value::from(1), Value::from("two"), Value::from(3)])
    );
}

#[rstest]
fn curry4_applies_in_order() {
    let digits = |a: i64, b: i64, c: i64, d: i64| a * 1000 + b * 100 + c * 10 + d;
    assert_eq!(curry4!(digits)(1)(2)(3)(4), 1234);
}

// =============================================================================
// Variadic
// =============================================================================

#[rstest]
fn curry_n_waits_for_arity() {
    let sum = curry_n(sum_all, 3);
    let pending = sum.apply([Value::from(1)]).into_pending().unwrap();
    assert_eq!(pending.collected(), &[Value::from(1)]);
    assert_eq!(pending.remaining(), 2);
    let pending = pending.apply([Value::from(2)]).into_pending().unwrap();
    assert_eq!(pending.apply([Value::from(3)]).into_value(), Some(Value::from(6)));
}

#[rstest]
fn curry_n_accepts_all_at_once() {
    let sum = curry_n(sum_all, 2);
    assert_eq!(
        sum.apply([Value::from(4), Value::from(5)]).into_value(),
        Some(Value::from(9))
    );
}

#[rstest]
fn curry_n_overshoot_passes_every_argument() {
    let count = curry_n(|arguments: Vec<Value>| Value::from(i64::try_from(arguments.len()).unwrap()), 2);
    let pending = count.apply([Value::from(1)]).into_pending().unwrap();
    assert_eq!(
        pending
            .apply([Value::from(2), Value::from(3), Value::from(4)])
            .into_value(),
        Some(Value::from(4))
    );
}

#[rstest]
fn curry_n_zero_arity_runs_immediately() {
    let always = curry_n(|_| Value::from("ran"), 0);
    assert!(matches!(always.apply(Vec::new()), Applied::Done(_)));
}

#[rstest]
fn curry_n_empty_application_stays_pending() {
    let sum = curry_n(sum_all, 1);
    let still = sum.apply(Vec::new()).into_pending().unwrap();
    assert_eq!(still.arity(), 1);
    assert_eq!(still.remaining(), 1);
}

#[rstest]
fn curry_n_branches_independently() {
    let sum = curry_n(sum_all, 2);
    let ten = sum.apply([Value::from(10)]).into_pending().unwrap();
    assert_eq!(ten.apply([Value::from(1)]).into_value(), Some(Value::from(11)));
    assert_eq!(ten.apply([Value::from(2)]).into_value(), Some(Value::from(12)));
}
