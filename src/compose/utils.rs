//! Small combinators used alongside composition.

/// Returns its argument unchanged; the unit of composition.
///
/// ```
/// use phunctor::compose::identity;
/// use phunctor::value::Value;
///
/// assert_eq!(identity(Value::list([1, 2])), Value::list([1, 2]));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields a clone of `value`.
///
/// ```
/// use phunctor::compose::constant;
/// use phunctor::value::Value;
///
/// let thirty_two = constant::<_, Value>(Value::from(32));
/// assert_eq!(thirty_two(Value::from(7)), Value::from(32));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
