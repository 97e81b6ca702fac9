//! The `try_compose!` macro for composing fallible functions.
//!
//! [`try_compose!`] is the short-circuiting counterpart of
//! [`compose!`](crate::compose!): every function returns a `Result` (or an
//! `Option`), and the first failure ends the chain.

/// Composes fallible functions from right to left.
///
/// `try_compose!(f, g, h)(x)` is equivalent to
/// `h(x).and_then(g).and_then(f)`.
///
/// The rightmost function runs first. If it returns `Err(e)`, the composite
/// returns that same `Err(e)` and no function to its left is called.
/// Otherwise the `Ok` value is passed on to the next function.
///
/// The error is never converted: all functions must return the same error
/// type. The same expansion works for functions returning `Option`, where
/// `None` stops the chain.
///
/// # Syntax
///
/// - `try_compose!(f)` - Returns `f` unchanged
/// - `try_compose!(f, g)` - Returns `|x| g(x).and_then(f)`
/// - `try_compose!(f, g, h, ...)` - Composes any number of functions
/// - `try_compose!(f, g, h; a, b)` - The rightmost function takes `a, b`
///
/// # Examples
///
/// ```
/// use composer::try_compose;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("not a number: {text}"))
/// }
///
/// fn positive(value: i32) -> Result<i32, String> {
///     if value > 0 { Ok(value) } else { Err(format!("not positive: {value}")) }
/// }
///
/// fn halve(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("odd: {value}")) }
/// }
///
/// let parse_half = try_compose!(halve, positive, parse);
///
/// assert_eq!(parse_half("42"), Ok(21));
/// assert_eq!(parse_half("abc"), Err("not a number: abc".to_string()));
/// assert_eq!(parse_half("-4"), Err("not positive: -4".to_string()));
/// assert_eq!(parse_half("7"), Err("odd: 7".to_string()));
/// ```
///
/// ## With `Option`
///
/// ```
/// use composer::try_compose;
///
/// let first_char = |text: &'static str| text.chars().next();
/// let to_digit = |character: char| character.to_digit(10);
///
/// let leading_digit = try_compose!(to_digit, first_char);
///
/// assert_eq!(leading_digit("7 days"), Some(7));
/// assert_eq!(leading_digit("seven"), None);
/// assert_eq!(leading_digit(""), None);
/// ```
///
/// ## Multi-argument rightmost function
///
/// ```
/// use composer::try_compose;
///
/// fn divide(numerator: i32, denominator: i32) -> Result<i32, &'static str> {
///     numerator.checked_div(denominator).ok_or("division by zero")
/// }
///
/// fn non_negative(value: i32) -> Result<u32, &'static str> {
///     u32::try_from(value).map_err(|_| "negative")
/// }
///
/// let checked_ratio = try_compose!(non_negative, divide; numerator, denominator);
///
/// assert_eq!(checked_ratio(10, 2), Ok(5));
/// assert_eq!(checked_ratio(10, 0), Err("division by zero"));
/// assert_eq!(checked_ratio(-10, 2), Err("negative"));
/// ```
#[macro_export]
macro_rules! try_compose {
    ($function:expr; $($parameter:ident),+ $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr; $($parameter:ident),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |$($parameter),+| inner($($parameter),+).and_then(&outer)
    }};

    ($outer_function:expr, $($remaining_functions:expr),+; $($parameter:ident),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::try_compose!($($remaining_functions),+; $($parameter),+);
        move |$($parameter),+| inner_composed($($parameter),+).and_then(&outer)
    }};

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| inner(input).and_then(&outer)
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::try_compose!($($remaining_functions),+);
        move |input| inner_composed(input).and_then(&outer)
    }};
}
