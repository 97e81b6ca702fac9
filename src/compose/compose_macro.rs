//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// The rightmost function is applied first, to the original arguments. Every
/// function to its left receives the single value returned by its right
/// neighbour.
///
/// # Laws
///
/// - **Identity**: `compose!()(x) == x`
/// - **Pass-through**: `compose!(f)` is `f` itself
/// - **Definition**: `compose!(f, g)(x) == f(g(x))`
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h) == compose!(f, g, h)`
///
/// # Syntax
///
/// - `compose!()` - The [`identity`](crate::compose::identity) function
/// - `compose!(f)` - Returns `f` unchanged, not a wrapper around it
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
/// - `compose!(f, g, h; a, b)` - Returns `|a, b| f(g(h(a, b)))`
///
/// The parameter list after `;` names the arguments of the rightmost
/// function, which then fixes the arity of the composite. Without it the
/// composite takes a single argument.
///
/// # Type Requirements
///
/// The output type of each function must match the input type of the
/// function to its left. Each function expression is evaluated once, when
/// the composite is built, and moved into it.
///
/// ```compile_fail
/// use composer::compose;
///
/// fn length(text: String) -> usize { text.len() }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // `double` returns i32 but `length` expects a String
/// let composed = compose!(length, double);
/// composed(1);
/// ```
///
/// Only the rightmost function may take more than one argument:
///
/// ```compile_fail
/// use composer::compose;
///
/// let add = |x: i32, y: i32| x + y;
/// let double = |x: i32| x * 2;
///
/// let composed = compose!(add, double);
/// composed(1);
/// ```
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use composer::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = add_one(10) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Three-function composition
///
/// ```
/// use composer::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let subtract_three = |x: i32| x - 3;
///
/// // 10 - 3 = 7, 7 * 2 = 14, 14 + 1 = 15
/// assert_eq!(compose!(add_one, double, subtract_three)(10), 15);
/// ```
///
/// ## No functions
///
/// ```
/// use composer::compose;
///
/// assert_eq!(compose!()(42), 42);
/// assert_eq!(compose!()("unchanged"), "unchanged");
/// ```
///
/// ## A single function keeps its own arity
///
/// ```
/// use composer::compose;
///
/// let add = |x: i32, y: i32| x + y;
/// assert_eq!(compose!(add)(2, 3), 5);
/// ```
///
/// ## Multi-argument rightmost function
///
/// ```
/// use composer::compose;
///
/// fn sum(x: i32, y: i32, z: i32) -> i32 { x + y + z }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn describe(x: i32) -> String { format!("total: {x}") }
///
/// let composed = compose!(describe, double, sum; x, y, z);
/// assert_eq!(composed(1, 2, 3), "total: 12");
/// ```
///
/// ## Type conversion
///
/// ```
/// use composer::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use composer::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
/// let flat = compose!(f, g, h);
///
/// assert_eq!(left(10), right(10));
/// assert_eq!(right(10), flat(10));
/// ```
#[macro_export]
macro_rules! compose {
    // No functions: identity, instantiated at the first call
    () => {
        $crate::compose::identity
    };

    // Named parameters for the rightmost function.
    // A lone function already has its own arity.
    ($function:expr; $($parameter:ident),+ $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr; $($parameter:ident),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |$($parameter),+| outer(inner($($parameter),+))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+; $($parameter:ident),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+; $($parameter),+);
        move |$($parameter),+| outer(inner_composed($($parameter),+))
    }};

    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
