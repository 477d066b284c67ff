//! Tests for the pointed functor family.
//!
//! Tests cover:
//! - Lifting values with `of` and `lift`
//! - Chaining transforms through returned wrappers
//! - Strategy handling after flat and deep transforms
//! - Construction options scoped to the wrapper they were given to

#![forbid(unsafe_code)]

use phunctor::functor::{
    Pointed, PointedFunctor, PointedFunctorMapping, PointedFunctorSequence, Transform, lift,
};
use phunctor::options::FunctorOptions;
use phunctor::shape::Reconstruction;
use phunctor::traverse::map_flat;
use phunctor::value::{Mapping, Value};
use rstest::rstest;

fn add_one(value: Value) -> Value {
    Value::from(value.as_int().unwrap_or(0) + 1)
}

fn double(value: Value) -> Value {
    Value::from(value.as_int().unwrap_or(0) * 2)
}

fn repeat_twice(value: Value) -> Value {
    Value::list([value.clone(), value])
}

fn kind_name(value: Value) -> Value {
    Value::from(value.kind().name())
}

// =============================================================================
// Lifting
// =============================================================================

#[rstest]
fn lift_matches_of() {
    let options = FunctorOptions::new().tree();
    let lifted: PointedFunctorSequence = lift(Value::tuple([1]), options);
    assert_eq!(lifted, PointedFunctorSequence::of(Value::tuple([1]), options));
    assert_eq!(lifted.reconstruction(), Reconstruction::Tuple);
}

#[rstest]
fn of_reclassifies_scalar_payloads() {
    let wrapper = PointedFunctorSequence::of(Value::from(5), FunctorOptions::new());
    assert_eq!(wrapper.reconstruction(), Reconstruction::List);
    let result = wrapper.transform(add_one).unwrap();
    assert_eq!(result.value(), &Value::list([6]));
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn scalar_chain() {
    let result = PointedFunctor::of(Value::from(3), FunctorOptions::new())
        .transform(add_one)
        .and_then(|wrapper| wrapper.transform(double))
        .unwrap();
    assert_eq!(result.into_value(), Value::from(8));
}

#[rstest]
fn sequence_chain_matches_sequential_flat_maps() {
    let input = Value::list([1, 2, 3]);
    let chained = PointedFunctorSequence::of(input.clone(), FunctorOptions::new())
        .transform(add_one)
        .and_then(|wrapper| wrapper.transform(double))
        .unwrap();

    let once = map_flat(add_one, input, Reconstruction::List).unwrap();
    let twice = map_flat(double, once, Reconstruction::List).unwrap();
    assert_eq!(chained.into_value(), twice);
}

#[rstest]
fn earlier_wrappers_stay_valid() {
    let first = PointedFunctorSequence::of(Value::list([1]), FunctorOptions::new());
    let second = first.transform(add_one).unwrap();
    let third = first.transform(double).unwrap();
    assert_eq!(first.value(), &Value::list([1]));
    assert_eq!(second.value(), &Value::list([2]));
    assert_eq!(third.value(), &Value::list([2]));
}

#[rstest]
fn mapping_chain_tree_default_covers_first_link_only() {
    let entries: Mapping = Value::map([("a", Value::from(1)), ("b", Value::map([("c", 2)]))])
        .as_mapping()
        .cloned()
        .unwrap();
    let first = PointedFunctorMapping::of(entries, FunctorOptions::new().tree())
        .transform(add_one)
        .unwrap();
    assert_eq!(
        Value::Map(first.value().clone()),
        Value::map([("a", Value::from(2)), ("b", Value::map([("c", 3)]))])
    );

    let second = first.transform(kind_name).unwrap();
    assert_eq!(
        Value::Map(second.into_value()),
        Value::map([("a", "int"), ("b", "dict")])
    );
}

#[rstest]
fn chain_stops_at_first_rebuild_failure() {
    let wrapper = PointedFunctorSequence::of(Value::bytes(vec![200]), FunctorOptions::new());
    let result = wrapper
        .transform(double)
        .and_then(|next| next.transform(add_one));
    assert!(result.is_err());
}

// =============================================================================
// Strategy After Transform
// =============================================================================

#[rstest]
fn flat_result_is_reclassified() {
    let wrapper = PointedFunctorSequence::of(Value::from("ab"), FunctorOptions::new());
    let flat = wrapper.transform_with(repeat_twice, false).unwrap();
    assert_eq!(flat.value(), &Value::list([Value::list(["a", "a"]), Value::list(["b", "b"])]));
    assert_eq!(flat.reconstruction(), Reconstruction::List);

    let next = flat.transform_with(kind_name, true).unwrap();
    assert_eq!(
        next.value(),
        &Value::list([Value::list(["str", "str"]), Value::list(["str", "str"])])
    );
}

#[rstest]
fn deep_result_keeps_original_strategy() {
    let wrapper = PointedFunctorSequence::of(Value::from("ab"), FunctorOptions::new());
    let deep = wrapper.transform_with(repeat_twice, true).unwrap();
    assert_eq!(deep.value(), &Value::list([Value::list(["a", "a"]), Value::list(["b", "b"])]));
    assert_eq!(deep.reconstruction(), Reconstruction::Chars);

    let next = deep.transform_with(kind_name, true).unwrap();
    assert_eq!(next.value(), &Value::list(["list", "list"]));
}

// =============================================================================
// Options
// =============================================================================

#[rstest]
#[case(false)]
#[case(true)]
fn next_wrapper_starts_with_default_options(#[case] deep: bool) {
    let options = FunctorOptions::new().iterable().tree();
    let wrapper = PointedFunctorSequence::of(Value::list([1]), options);
    let next = wrapper.transform_with(add_one, deep).unwrap();
    assert_eq!(next.options(), FunctorOptions::new());
    assert!(!next.as_tree());
    assert_eq!(wrapper.options(), options);
}

#[rstest]
fn scalar_next_wrapper_starts_with_default_options() {
    let wrapper = PointedFunctor::of(Value::from(1), FunctorOptions::new().tree());
    let next = wrapper.transform(add_one).unwrap();
    assert_eq!(next.options(), FunctorOptions::new());
}

#[rstest]
fn tree_default_covers_first_link_only() {
    let nested = Value::list([Value::from(1), Value::list([2])]);
    let first = PointedFunctorSequence::of(nested, FunctorOptions::new().tree())
        .transform(add_one)
        .unwrap();
    assert_eq!(first.value(), &Value::list([Value::from(2), Value::list([3])]));

    let second = first.transform(kind_name).unwrap();
    assert_eq!(second.into_value(), Value::list(["int", "list"]));
}
