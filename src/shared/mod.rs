//! Composition of a sequence of functions known only at run time.
//!
//! The macros and [`Composite`](crate::callable::Composite) fix the number
//! of functions at compile time. When the functions come from a `Vec`, a
//! configuration table or any other iterator, they are stored as
//! [`SharedFunction`] trait objects and folded with [`compose_all`] or
//! [`try_compose_all`].
//!
//! # Examples
//!
//! ```
//! use composer::shared::{SharedFunction, compose_all, share};
//!
//! let steps: Vec<SharedFunction<i32, i32>> = vec![
//!     share(|x: i32| x + 1),
//!     share(|x: i32| x * 2),
//!     share(|x: i32| x - 3),
//! ];
//!
//! let composed = compose_all(steps);
//! assert_eq!(composed(10), 15);
//! ```
//!
//! # Thread Safety
//!
//! By default [`SharedFunction`] is an `Rc`. With the `arc` feature it is
//! an `Arc` and the wrapped functions must be `Send + Sync`, which makes
//! every composite shareable across threads.

mod fold;

pub use fold::{compose_all, try_compose_all};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// A reference-counted function from `Input` to `Output`.
///
/// Cloning a `SharedFunction` clones the handle, not the function, so the
/// same function can appear in several compositions.
#[cfg(feature = "arc")]
pub type SharedFunction<Input, Output> = std::sync::Arc<dyn Fn(Input) -> Output + Send + Sync>;

/// A reference-counted function from `Input` to `Output`.
///
/// Cloning a `SharedFunction` clones the handle, not the function, so the
/// same function can appear in several compositions.
#[cfg(not(feature = "arc"))]
pub type SharedFunction<Input, Output> = std::rc::Rc<dyn Fn(Input) -> Output>;

/// Wraps a function as a [`SharedFunction`].
///
/// # Examples
///
/// ```
/// use composer::shared::share;
///
/// let double = share(|x: i32| x * 2);
/// assert_eq!(double(21), 42);
/// ```
#[cfg(feature = "arc")]
pub fn share<Input, Output, Function>(function: Function) -> SharedFunction<Input, Output>
where
    Function: Fn(Input) -> Output + Send + Sync + 'static,
{
    ReferenceCounter::new(function)
}

/// Wraps a function as a [`SharedFunction`].
///
/// # Examples
///
/// ```
/// use composer::shared::share;
///
/// let double = share(|x: i32| x * 2);
/// assert_eq!(double(21), 42);
/// ```
#[cfg(not(feature = "arc"))]
pub fn share<Input, Output, Function>(function: Function) -> SharedFunction<Input, Output>
where
    Function: Fn(Input) -> Output + 'static,
{
    ReferenceCounter::new(function)
}
