//! The `curryN!` macros for fixed-arity functions.
//!
//! The function is shared through [`Arc`](std::sync::Arc), and every argument
//! except the last is cloned on each call. Partial applications can therefore
//! be reused, and stay `Send + Sync` whenever the function and arguments are.

/// Curries a two-argument function.
///
/// `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use phunctor::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = curry2!(add)(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Examples
///
/// ```
/// use phunctor::curry3;
///
/// let sum = |a: i32, b: i32, c: i32| a + b + c;
/// let curried = curry3!(sum);
/// let one_two = curried(1)(2);
/// assert_eq!(one_two(3), 6);
/// assert_eq!(one_two(4), 7);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| {
                let function = ::std::sync::Arc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
///
/// `curry4!(f)(a)(b)(c)(d) == f(a, b, c, d)`.
///
/// # Examples
///
/// ```
/// use phunctor::curry4;
///
/// fn join(a: &str, b: &str, c: &str, d: &str) -> String {
///     [a, b, c, d].concat()
/// }
///
/// assert_eq!(curry4!(join)("f")(":")(".")("{"), "f:.{");
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| {
                let function = ::std::sync::Arc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::sync::Arc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
