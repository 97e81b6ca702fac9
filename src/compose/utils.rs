//! The identity combinator.
//!
//! [`identity`] is the unit element of composition and is what
//! [`compose!`](crate::compose!) expands to when given no functions.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
/// - `compose!()` is `identity`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```
/// use composer::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use composer::compose::identity;
/// use composer::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
