//! The [`compose!`] macro.

/// Composes functions right to left into a single closure.
///
/// `compose!(f, g, h)` returns `|x| f(g(h(x)))`; the rightmost function runs
/// first. A single function is returned unchanged.
///
/// Each function must implement [`Fn`], and each output type must match the
/// input type of the function to its left.
///
/// # Examples
///
/// ```
/// use phunctor::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Composing handlers over dynamic values:
///
/// ```
/// use phunctor::compose;
/// use phunctor::value::Value;
///
/// let wrap = |value: Value| Value::list([value]);
/// let describe = |value: Value| Value::from(value.kind().name());
///
/// assert_eq!(compose!(wrap, describe)(Value::from(1)), Value::list(["int"]));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}
