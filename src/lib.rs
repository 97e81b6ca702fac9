//! # composer
//!
//! Right-to-left function composition for Rust.
//!
//! ## Overview
//!
//! Given functions `f1, f2, ..., fn`, the composer builds one function that
//! runs `fn` on the original arguments and passes each result leftwards:
//! `f1(f2(...fn(args)))`. The rightmost function may take any number of
//! arguments; every other function takes the single value produced by its
//! right neighbour.
//!
//! - **Macros**: [`compose!`] and [`try_compose!`] build closures
//! - **Typed composition**: [`Callable`](callable::Callable) and
//!   [`Composite`](callable::Composite) keep the rightmost arity in the type
//! - **Runtime sequences**: [`compose_all`](shared::compose_all) folds a
//!   `Vec` of shared functions
//!
//! Composing with no functions gives the identity function, and composing a
//! single function gives that function back unchanged.
//!
//! ## Feature Flags
//!
//! - `compose`: The `compose!`/`try_compose!` macros and `identity`
//! - `callable`: The `Callable` trait and `Composite`
//! - `shared`: Composition of reference-counted functions
//! - `arc`: Use `Arc` instead of `Rc` for shared functions
//! - `full`: Enable all composition surfaces with thread-safe shared functions
//!
//! ## Example
//!
//! ```rust
//! use composer::prelude::*;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! let subtract_three = |x: i32| x - 3;
//!
//! // 10 - 3 = 7, 7 * 2 = 14, 14 + 1 = 15
//! assert_eq!(compose!(add_one, double, subtract_three)(10), 15);
//! assert_eq!(compose!()(42), 42);
//! assert_eq!(compose!(|x: i32, y: i32| x + y)(2, 3), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use composer::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "callable")]
    pub use crate::callable::*;

    #[cfg(feature = "shared")]
    pub use crate::shared::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "callable")]
pub mod callable;

#[cfg(feature = "shared")]
pub mod shared;
