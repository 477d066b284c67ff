//! The [`pipe!`] macro.

/// Composes functions left to right into a single closure.
///
/// `pipe!(f, g, h)` returns `|x| h(g(f(x)))`, the mirror image of
/// [`compose!`](crate::compose!): functions run in the order written.
///
/// # Examples
///
/// ```
/// use phunctor::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let pipeline = pipe!(square, double, add_one);
/// assert_eq!(pipeline(3), 19);
/// ```
///
/// ```
/// use phunctor::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |input| rest(first(input))
    }};
}
