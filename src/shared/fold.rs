//! Folding a sequence of shared functions into a single composite.

use super::{ReferenceCounter, SharedFunction};
use crate::compose::identity;

/// Composes a sequence of functions from right to left.
///
/// The first function of the sequence is applied last, matching
/// [`compose!`](crate::compose!): `compose_all([f, g, h])(x)` is
/// `f(g(h(x)))`.
///
/// - An empty sequence yields the identity function.
/// - A single function is returned as the very same handle, so
///   `Rc::ptr_eq` (or `Arc::ptr_eq`) holds between input and output.
/// - Otherwise the handles are collected into one flat sequence that the
///   composite walks from the last function to the first. Calling or
///   dropping the composite never recurses once per function, so long
///   sequences are fine. The composite keeps its own handles, and building
///   further composites from the same functions does not affect it.
///
/// # Examples
///
/// ```
/// use composer::shared::{SharedFunction, compose_all, share};
///
/// let add_one = share(|x: i32| x + 1);
/// let double = share(|x: i32| x * 2);
///
/// let composed = compose_all(vec![add_one, double]);
/// assert_eq!(composed(5), 11);
///
/// let nothing = compose_all(Vec::<SharedFunction<i32, i32>>::new());
/// assert_eq!(nothing(42), 42);
/// ```
pub fn compose_all<Value, Functions>(functions: Functions) -> SharedFunction<Value, Value>
where
    Value: 'static,
    Functions: IntoIterator<Item = SharedFunction<Value, Value>>,
{
    let mut remaining = functions.into_iter();

    let Some(first) = remaining.next() else {
        return ReferenceCounter::new(identity::<Value>);
    };
    let Some(second) = remaining.next() else {
        return first;
    };

    let sequence: Vec<SharedFunction<Value, Value>> =
        [first, second].into_iter().chain(remaining).collect();

    ReferenceCounter::new(move |input: Value| {
        sequence
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    })
}

/// Composes a sequence of fallible functions from right to left.
///
/// The sequence counterpart of [`try_compose!`](crate::try_compose!): the
/// last function runs first, every `Ok` value is passed to the function on
/// its left, and the first `Err` is returned unchanged without calling the
/// remaining functions.
///
/// An empty sequence yields `Ok`; a single function is returned as the same
/// handle.
///
/// # Examples
///
/// ```
/// use composer::shared::{SharedFunction, share, try_compose_all};
///
/// let steps: Vec<SharedFunction<u32, Result<u32, String>>> = vec![
///     share(|x: u32| x.checked_mul(10).ok_or_else(|| "overflow".to_string())),
///     share(|x: u32| x.checked_sub(5).ok_or_else(|| format!("{x} is below 5"))),
/// ];
///
/// let composed = try_compose_all(steps);
/// assert_eq!(composed(7), Ok(20));
/// assert_eq!(composed(3), Err("3 is below 5".to_string()));
/// ```
pub fn try_compose_all<Value, Error, Functions>(
    functions: Functions,
) -> SharedFunction<Value, Result<Value, Error>>
where
    Value: 'static,
    Error: 'static,
    Functions: IntoIterator<Item = SharedFunction<Value, Result<Value, Error>>>,
{
    let mut remaining = functions.into_iter();

    let Some(first) = remaining.next() else {
        return ReferenceCounter::new(Result::<Value, Error>::Ok);
    };
    let Some(second) = remaining.next() else {
        return first;
    };

    let sequence: Vec<SharedFunction<Value, Result<Value, Error>>> =
        [first, second].into_iter().chain(remaining).collect();

    ReferenceCounter::new(move |input: Value| {
        sequence
            .iter()
            .rev()
            .try_fold(input, |value, function| function(value))
    })
}
